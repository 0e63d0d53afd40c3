//! The recap query facade.
//!
//! Takes a record snapshot and a marker snapshot as plain parameters, never
//! from ambient state, and produces one [`RecapResult`]. Empty results are
//! valid results; nothing here fails.

use tracing::debug;

use crate::calculation::{
    annotate, filter_unpaid, summarize_by_project, summarize_by_project_team, summarize_by_team,
    summarize_by_worker,
};
use crate::config::TeamLabels;
use crate::models::{AttendanceRecord, PayrollResetMarker, RecapResult, RecapRow, RecapTotals};

use super::filters::RecapFilters;

/// Selects and annotates the records a recap covers.
///
/// Applies, in order: the date range, the dimension filters, the payroll
/// cutoff (unless `include_already_paid`), then sorts newest date first.
/// Records sharing a date keep their snapshot order. The limit is NOT
/// applied here.
pub fn select_records(
    records: &[AttendanceRecord],
    markers: &[PayrollResetMarker],
    filters: &RecapFilters,
) -> Vec<RecapRow> {
    let matcher = filters.matcher();
    let candidates = records
        .iter()
        .filter(|record| filters.in_range(record))
        .filter(|record| matcher.matches(record));

    let selected: Vec<&AttendanceRecord> = if filters.include_already_paid {
        candidates.collect()
    } else {
        filter_unpaid(candidates, markers)
    };

    let mut rows: Vec<RecapRow> = selected.into_iter().map(annotate).collect();
    rows.sort_by(|a, b| b.record.attendance_date.cmp(&a.record.attendance_date));
    rows
}

/// Sums wages, cash advances and net pay over a row set.
pub fn grand_totals(rows: &[RecapRow]) -> RecapTotals {
    rows.iter().fold(RecapTotals::default(), |mut totals, row| {
        totals.total_wage = totals.total_wage.saturating_add(row.record.daily_wage);
        totals.total_kasbon = totals.total_kasbon.saturating_add(row.record.kasbon_amount);
        totals.total_net_pay = totals.total_net_pay.saturating_add(row.net_pay);
        totals
    })
}

/// Computes a recap with the built-in display labels.
///
/// # Examples
///
/// ```
/// use recap_engine::recap::{RecapFilters, compute_recap};
/// use chrono::NaiveDate;
///
/// let filters = RecapFilters::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
/// );
/// let result = compute_recap(&[], &[], &filters);
/// assert!(result.rows.is_empty());
/// assert_eq!(result.totals.total_net_pay, 0);
/// ```
pub fn compute_recap(
    records: &[AttendanceRecord],
    markers: &[PayrollResetMarker],
    filters: &RecapFilters,
) -> RecapResult {
    compute_recap_with_labels(records, markers, filters, &TeamLabels::default())
}

/// Computes a recap, rendering crew labels with `labels`.
///
/// The grouped views and totals cover every selected record; only the
/// returned `rows` are truncated to `filters.limit`.
pub fn compute_recap_with_labels(
    records: &[AttendanceRecord],
    markers: &[PayrollResetMarker],
    filters: &RecapFilters,
    labels: &TeamLabels,
) -> RecapResult {
    let mut rows = select_records(records, markers, filters);

    let by_project = summarize_by_project(&rows);
    let by_team = summarize_by_team(&rows, labels);
    let by_project_team = summarize_by_project_team(&rows, labels);
    let by_worker = summarize_by_worker(&rows, filters.recap_mode);
    let totals = grand_totals(&rows);
    let total_records = rows.len();

    if let Some(limit) = filters.limit {
        rows.truncate(limit);
    }

    debug!(
        snapshot = records.len(),
        selected = total_records,
        returned = rows.len(),
        projects = by_project.len(),
        teams = by_team.len(),
        workers = by_worker.len(),
        "Computed recap"
    );

    RecapResult {
        from: filters.from,
        to: filters.to,
        recap_mode: filters.recap_mode,
        total_records,
        rows,
        by_project,
        by_team,
        by_project_team,
        by_worker,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecapMode, TeamType};
    use crate::test_support::{RecordBuilder, make_date, team_marker, worker_marker};

    fn range(from: &str, to: &str) -> RecapFilters {
        RecapFilters::new(make_date(from), make_date(to))
    }

    #[test]
    fn test_cutoff_excludes_paid_record() {
        let records = vec![RecordBuilder::new("a", "Dedi", "2026-02-01").build()];
        let markers = vec![team_marker("P1", TeamType::RegularLabor, "2026-02-01")];

        let result = compute_recap(&records, &markers, &range("2026-01-01", "2026-02-28"));

        assert!(result.rows.is_empty());
        assert_eq!(result.totals, RecapTotals::default());
        assert!(result.by_project.is_empty());
        assert!(result.by_worker.is_empty());
    }

    #[test]
    fn test_include_already_paid_bypasses_cutoff() {
        let records = vec![RecordBuilder::new("a", "Dedi", "2026-02-01").build()];
        let markers = vec![team_marker("P1", TeamType::RegularLabor, "2026-02-01")];
        let mut filters = range("2026-01-01", "2026-02-28");
        filters.include_already_paid = true;

        let result = compute_recap(&records, &markers, &filters);
        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.totals.total_net_pay, 200_000);
    }

    #[test]
    fn test_worker_specific_marker_keeps_teammates() {
        let records = vec![
            RecordBuilder::new("a", "Dedi", "2026-02-05").build(),
            RecordBuilder::new("b", "Joko", "2026-02-05").build(),
        ];
        let markers = vec![worker_marker("P1", TeamType::RegularLabor, "Dedi", "2026-02-05")];

        let result = compute_recap(&records, &markers, &range("2026-02-01", "2026-02-28"));

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].record.worker_name, "Joko");
    }

    #[test]
    fn test_rows_sorted_newest_first_with_stable_ties() {
        let records = vec![
            RecordBuilder::new("a", "Dedi", "2026-02-01").build(),
            RecordBuilder::new("b", "Joko", "2026-02-03").build(),
            RecordBuilder::new("c", "Sari", "2026-02-01").build(),
            RecordBuilder::new("d", "Agus", "2026-02-03").build(),
        ];

        let result = compute_recap(&records, &[], &range("2026-02-01", "2026-02-28"));
        let ids: Vec<&str> = result.rows.iter().map(|r| r.record.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_limit_caps_rows_but_not_views() {
        let records = vec![
            RecordBuilder::new("a", "Dedi", "2026-02-01").build(),
            RecordBuilder::new("b", "Joko", "2026-02-02").build(),
            RecordBuilder::new("c", "Sari", "2026-02-03").build(),
        ];
        let mut filters = range("2026-02-01", "2026-02-28");
        filters.limit = Some(1);

        let result = compute_recap(&records, &[], &filters);

        assert_eq!(result.rows.len(), 1);
        assert_eq!(result.rows[0].record.id, "c");
        assert_eq!(result.total_records, 3);
        assert_eq!(result.by_worker.len(), 3);
        assert_eq!(result.totals.total_net_pay, 600_000);
    }

    #[test]
    fn test_out_of_range_records_never_reach_views() {
        let records = vec![
            RecordBuilder::new("a", "Dedi", "2026-01-31").build(),
            RecordBuilder::new("b", "Dedi", "2026-02-01").build(),
        ];
        let result = compute_recap(&records, &[], &range("2026-02-01", "2026-02-28"));
        assert_eq!(result.total_records, 1);
        assert_eq!(result.by_project[0].record_count, 1);
    }

    #[test]
    fn test_inverted_range_is_empty_not_error() {
        let records = vec![RecordBuilder::new("a", "Dedi", "2026-02-10").build()];
        let result = compute_recap(&records, &[], &range("2026-02-28", "2026-02-01"));
        assert!(result.rows.is_empty());
        assert_eq!(result.from, make_date("2026-02-28"));
    }

    #[test]
    fn test_combined_and_per_project_totals_agree() {
        let records = vec![
            RecordBuilder::new("a", "Rian", "2026-02-01")
                .project("P1", Some("Warehouse"))
                .wage(100_000)
                .build(),
            RecordBuilder::new("b", "Rian", "2026-02-02")
                .project("P2", Some("Clinic"))
                .wage(50_000)
                .build(),
        ];
        let mut filters = range("2026-02-01", "2026-02-28");

        filters.recap_mode = RecapMode::Combined;
        let combined = compute_recap(&records, &[], &filters);
        filters.recap_mode = RecapMode::PerProject;
        let per_project = compute_recap(&records, &[], &filters);

        assert_eq!(combined.by_worker.len(), 1);
        assert_eq!(combined.by_worker[0].total_net_pay, 150_000);
        assert_eq!(per_project.by_worker.len(), 2);
        let per_project_total: i64 = per_project.by_worker.iter().map(|w| w.total_net_pay).sum();
        assert_eq!(per_project_total, 150_000);
        assert_eq!(per_project.recap_mode, RecapMode::PerProject);
    }

    #[test]
    fn test_grand_totals_use_net_pay_floor() {
        let records = vec![
            RecordBuilder::new("a", "Dedi", "2026-02-01")
                .wage(100_000)
                .kasbon(150_000)
                .build(),
            RecordBuilder::new("b", "Joko", "2026-02-01")
                .wage(100_000)
                .kasbon(20_000)
                .build(),
        ];
        let result = compute_recap(&records, &[], &range("2026-02-01", "2026-02-28"));
        assert_eq!(result.totals.total_wage, 200_000);
        assert_eq!(result.totals.total_kasbon, 170_000);
        assert_eq!(result.totals.total_net_pay, 80_000);
    }

    #[test]
    fn test_custom_labels_flow_into_views() {
        let labels = TeamLabels {
            regular_labor: "Tukang".to_string(),
            ..TeamLabels::default()
        };
        let records = vec![RecordBuilder::new("a", "Dedi", "2026-02-01").build()];
        let result = compute_recap_with_labels(
            &records,
            &[],
            &range("2026-02-01", "2026-02-28"),
            &labels,
        );
        assert_eq!(result.by_team[0].label, "Tukang");
        assert_eq!(result.by_project_team[0].label, "Tukang");
    }

    #[test]
    fn test_grand_totals_saturate_on_huge_wages() {
        let records = vec![
            RecordBuilder::new("a", "Dedi", "2026-02-01")
                .wage(i64::MAX)
                .build(),
            RecordBuilder::new("b", "Joko", "2026-02-01")
                .wage(i64::MAX)
                .build(),
        ];
        let result = compute_recap(&records, &[], &range("2026-02-01", "2026-02-28"));

        assert_eq!(result.totals.total_wage, i64::MAX);
        assert_eq!(result.totals.total_net_pay, i64::MAX);
        assert_eq!(result.by_project[0].total_net_pay, i64::MAX);
        assert_eq!(result.by_team[0].total_net_pay, i64::MAX);
        assert_eq!(result.by_project_team[0].total_net_pay, i64::MAX);
    }
}
