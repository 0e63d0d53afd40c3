//! Per-project, per-crew recap view.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::config::TeamLabels;
use crate::models::{ProjectTeamSummary, RecapRow, TeamType};

#[derive(Debug)]
struct ProjectTeamAccumulator {
    project_name: Option<String>,
    specialist_team_name: Option<String>,
    total_wage: i64,
    total_kasbon: i64,
    total_net_pay: i64,
    workers: HashSet<String>,
    record_count: usize,
    latest_attendance_date: NaiveDate,
}

/// Groups rows by `(project, crew)`.
///
/// Sorted by project display name ascending, then by descending total net
/// pay within a project. Projects without a name sort under the
/// unknown-project label.
pub fn summarize_by_project_team(
    rows: &[RecapRow],
    labels: &TeamLabels,
) -> Vec<ProjectTeamSummary> {
    let mut groups: BTreeMap<(&str, TeamType, String), ProjectTeamAccumulator> = BTreeMap::new();

    for row in rows {
        let record = &row.record;
        let key = (
            record.project_id.as_str(),
            record.team_type,
            record.specialist_key(),
        );
        let acc = groups
            .entry(key)
            .or_insert_with(|| ProjectTeamAccumulator {
                project_name: None,
                specialist_team_name: None,
                total_wage: 0,
                total_kasbon: 0,
                total_net_pay: 0,
                workers: HashSet::new(),
                record_count: 0,
                latest_attendance_date: record.attendance_date,
            });

        if acc.project_name.is_none() {
            acc.project_name = record
                .project_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
        }
        if acc.specialist_team_name.is_none() {
            acc.specialist_team_name = record.specialist_display_name().map(str::to_string);
        }
        acc.total_wage = acc.total_wage.saturating_add(record.daily_wage);
        acc.total_kasbon = acc.total_kasbon.saturating_add(record.kasbon_amount);
        acc.total_net_pay = acc.total_net_pay.saturating_add(row.net_pay);
        acc.workers.insert(record.worker_key());
        acc.record_count += 1;
        acc.latest_attendance_date = acc.latest_attendance_date.max(record.attendance_date);
    }

    let mut summaries: Vec<ProjectTeamSummary> = groups
        .into_iter()
        .map(|((project_id, team_type, _), acc)| ProjectTeamSummary {
            project_id: project_id.to_string(),
            project_name: acc.project_name,
            team_type,
            label: labels.team_label(team_type, acc.specialist_team_name.as_deref()),
            specialist_team_name: acc.specialist_team_name,
            total_wage: acc.total_wage,
            total_kasbon: acc.total_kasbon,
            total_net_pay: acc.total_net_pay,
            worker_count: acc.workers.len(),
            record_count: acc.record_count,
            latest_attendance_date: acc.latest_attendance_date,
        })
        .collect();

    summaries.sort_by(|a, b| {
        let a_name = labels.project_label(a.project_name.as_deref()).to_lowercase();
        let b_name = labels.project_label(b.project_name.as_deref()).to_lowercase();
        a_name
            .cmp(&b_name)
            .then_with(|| a.project_id.cmp(&b.project_id))
            .then_with(|| b.total_net_pay.cmp(&a.total_net_pay))
    });
    summaries
}
