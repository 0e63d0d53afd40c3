//! Per-crew recap view.

use std::collections::{BTreeMap, HashSet};

use crate::config::TeamLabels;
use crate::models::{RecapRow, TeamSummary, TeamType};

#[derive(Debug, Default)]
struct TeamAccumulator {
    specialist_team_name: Option<String>,
    total_wage: i64,
    total_kasbon: i64,
    total_net_pay: i64,
    workers: HashSet<String>,
    record_count: usize,
}

/// Groups rows by crew, sorted by descending total net pay.
///
/// Standing crews form one group each. Specialist crews are split by
/// lowercased team name; specialist rows without a name share one group.
pub fn summarize_by_team(rows: &[RecapRow], labels: &TeamLabels) -> Vec<TeamSummary> {
    let mut groups: BTreeMap<(TeamType, String), TeamAccumulator> = BTreeMap::new();

    for row in rows {
        let record = &row.record;
        let acc = groups
            .entry((record.team_type, record.specialist_key()))
            .or_default();
        if acc.specialist_team_name.is_none() {
            acc.specialist_team_name = record.specialist_display_name().map(str::to_string);
        }
        acc.total_wage = acc.total_wage.saturating_add(record.daily_wage);
        acc.total_kasbon = acc.total_kasbon.saturating_add(record.kasbon_amount);
        acc.total_net_pay = acc.total_net_pay.saturating_add(row.net_pay);
        acc.workers.insert(record.worker_key());
        acc.record_count += 1;
    }

    let mut summaries: Vec<TeamSummary> = groups
        .into_iter()
        .map(|((team_type, _), acc)| TeamSummary {
            team_type,
            label: labels.team_label(team_type, acc.specialist_team_name.as_deref()),
            specialist_team_name: acc.specialist_team_name,
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
