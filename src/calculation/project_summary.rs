//! Per-project recap view.

use std::collections::{BTreeMap, HashSet};

use crate::models::{ProjectSummary, RecapRow};

#[derive(Debug, Default)]
struct ProjectAccumulator {
    project_name: Option<String>,
    total_wage: i64,
    total_kasbon: i64,
    total_net_pay: i64,
    workers: HashSet<String>,
    record_count: usize,
}

/// Groups rows by project, sorted by descending total net pay.
///
/// The project name is the first non-blank name seen in the group, so a
/// project deleted after some entries were made still gets a label.
pub fn summarize_by_project(rows: &[RecapRow]) -> Vec<ProjectSummary> {
    let mut groups: BTreeMap<&str, ProjectAccumulator> = BTreeMap::new();

    for row in rows {
        let record = &row.record;
        let acc = groups.entry(record.project_id.as_str()).or_default();
        if acc.project_name.is_none() {
            acc.project_name = record
                .project_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
        }
        acc.total_wage = acc.total_wage.saturating_add(record.daily_wage);
        acc.total_kasbon = acc.total_kasbon.saturating_add(record.kasbon_amount);
        acc.total_net_pay = acc.total_net_pay.saturating_add(row.net_pay);
        acc.workers.insert(record.worker_key());
        acc.record_count += 1;
    }

    let mut summaries: Vec<ProjectSummary> = groups
        .into_iter()
        .map(|(project_id, acc)| ProjectSummary {
            project_id: project_id.to_string(),
            project_name: acc.project_name,
            total_wage: acc.total_wage,
            total_kasbon: acc.total_kasbon,
            total_net_pay: acc.total_net_pay,
            worker_count: acc.workers.len(),
            record_count: acc.record_count,
        })
        .collect();

    summaries.sort_by(|a, b| b.total_net_pay.cmp(&a.total_net_pay));
    summaries
}
