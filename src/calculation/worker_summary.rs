//! Per-worker recap view.
//!
//! Worker identity is the case-insensitive name only. In combined mode two
//! different people who share a name on unrelated projects end up in one
//! row.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::models::{RecapMode, RecapRow, WorkerSummary};

#[derive(Debug)]
struct WorkerAccumulator {
    worker_name: String,
    project_id: Option<String>,
    project_name: Option<String>,
    work_days: u32,
    total_wage: i64,
    total_kasbon: i64,
    total_net_pay: i64,
}

/// Groups rows by worker according to `mode`.
///
/// - [`RecapMode::Combined`]: keyed by worker name; rows carry no project.
/// - [`RecapMode::PerProject`]: keyed by `(project, worker name)`.
///
/// `work_days` counts present records only. Sorted by descending total net
/// pay, then worker name, then (per-project) project name.
pub fn summarize_by_worker(rows: &[RecapRow], mode: RecapMode) -> Vec<WorkerSummary> {
    let mut groups: BTreeMap<(Option<&str>, String), WorkerAccumulator> = BTreeMap::new();

    for row in rows {
        let record = &row.record;
        let project_key = match mode {
            RecapMode::Combined => None,
            RecapMode::PerProject => Some(record.project_id.as_str()),
        };

        let acc = groups
            .entry((project_key, record.worker_key()))
            .or_insert_with(|| WorkerAccumulator {
                worker_name: record.worker_name.trim().to_string(),
                project_id: project_key.map(str::to_string),
                project_name: None,
                work_days: 0,
                total_wage: 0,
                total_kasbon: 0,
                total_net_pay: 0,
            });

        if project_key.is_some() && acc.project_name.is_none() {
            acc.project_name = record
                .project_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
        }
        if record.status.is_present() {
            acc.work_days += 1;
        }
        acc.total_wage = acc.total_wage.saturating_add(record.daily_wage);
        acc.total_kasbon = acc.total_kasbon.saturating_add(record.kasbon_amount);
        acc.total_net_pay = acc.total_net_pay.saturating_add(row.net_pay);
    }

    let mut summaries: Vec<WorkerSummary> = groups
        .into_values()
        .map(|acc| WorkerSummary {
            worker_name: acc.worker_name,
            project_id: acc.project_id,
            project_name: acc.project_name,
            work_days: acc.work_days,
            total_wage: acc.total_wage,
            total_kasbon: acc.total_kasbon,
            total_net_pay: acc.total_net_pay,
        })
        .collect();

    summaries.sort_by(compare_workers);
    summaries
}

fn compare_workers(a: &WorkerSummary, b: &WorkerSummary) -> Ordering {
    b.total_net_pay
        .cmp(&a.total_net_pay)
        .then_with(|| {
            a.worker_name
                .to_lowercase()
                .cmp(&b.worker_name.to_lowercase())
        })
        .then_with(|| {
            let a_project = a.project_name.as_deref().unwrap_or_default().to_lowercase();
            let b_project = b.project_name.as_deref().unwrap_or_default().to_lowercase();
            a_project.cmp(&b_project)
        })
        .then_with(|| a.project_id.cmp(&b.project_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use crate::test_support::RecordBuilder;

    fn rian_on_two_projects() -> Vec<RecapRow> {
        vec![
            RecordBuilder::new("a", "Rian", "2026-02-01")
                .project("P1", Some("Warehouse"))
                .wage(100_000)
                .row(),
            RecordBuilder::new("b", "rian", "2026-02-02")
                .project("P2", Some("Clinic"))
                .wage(50_000)
                .row(),
        ]
    }

    #[test]
    fn test_combined_mode_pools_projects() {
        let summaries = summarize_by_worker(&rian_on_two_projects(), RecapMode::Combined);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].worker_name, "Rian");
        assert_eq!(summaries[0].total_net_pay, 150_000);
        assert_eq!(summaries[0].work_days, 2);
        assert_eq!(summaries[0].project_id, None);
        assert_eq!(summaries[0].project_name, None);
    }

    #[test]
    fn test_per_project_mode_splits_rows() {
        let summaries = summarize_by_worker(&rian_on_two_projects(), RecapMode::PerProject);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].project_id.as_deref(), Some("P1"));
        assert_eq!(summaries[0].total_net_pay, 100_000);
        assert_eq!(summaries[1].project_name.as_deref(), Some("Clinic"));
        assert_eq!(summaries[1].total_net_pay, 50_000);

        let total: i64 = summaries.iter().map(|s| s.total_net_pay).sum();
        assert_eq!(total, 150_000);
    }

    #[test]
    fn test_work_days_count_only_present() {
        let rows = vec![
            RecordBuilder::new("a", "Joko", "2026-02-01").row(),
            RecordBuilder::new("b", "Joko", "2026-02-02")
                .status(AttendanceStatus::Sick)
                .wage(0)
                .row(),
            RecordBuilder::new("c", "Joko", "2026-02-03")
                .status(AttendanceStatus::Absent)
                .wage(0)
                .row(),
        ];

        let summaries = summarize_by_worker(&rows, RecapMode::Combined);
        assert_eq!(summaries[0].work_days, 1);
        assert_eq!(summaries[0].total_wage, 200_000);
    }

    #[test]
    fn test_ties_break_by_worker_then_project_name() {
        let rows = vec![
            RecordBuilder::new("a", "Sari", "2026-02-01")
                .project("P1", Some("Warehouse"))
                .row(),
            RecordBuilder::new("b", "Agus", "2026-02-01")
                .project("P1", Some("Warehouse"))
                .row(),
            RecordBuilder::new("c", "Agus", "2026-02-01")
                .project("P2", Some("Clinic"))
                .row(),
        ];

        let summaries = summarize_by_worker(&rows, RecapMode::PerProject);
        let order: Vec<(&str, Option<&str>)> = summaries
            .iter()
            .map(|s| (s.worker_name.as_str(), s.project_name.as_deref()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Agus", Some("Clinic")),
                ("Agus", Some("Warehouse")),
                ("Sari", Some("Warehouse")),
            ]
        );
    }
}
