//! Per-worker export rollups and report totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::calculation::{net_pay, overtime_pay, per_unit_rate};
use crate::models::{AttendanceRecord, ExportTotals, ReimbursementLine, TeamType, WorkerRollup};

#[derive(Debug)]
struct RollupAccumulator {
    worker_name: String,
    team_type: TeamType,
    specialist_team_name: Option<String>,
    days_worked: u32,
    total_wage: i64,
    overtime_hours: Decimal,
    total_overtime_pay: i64,
    total_kasbon: i64,
    total_paid: i64,
}

/// Rolls records up per `(worker, crew)`, sorted by worker name.
///
/// Worked days and wages count present records only, scaled by
/// `work_days`. Overtime, cash advances and paid amounts accumulate
/// regardless of status.
pub fn rollup_workers(records: &[&AttendanceRecord]) -> Vec<WorkerRollup> {
    let mut groups: BTreeMap<(String, TeamType, String), RollupAccumulator> = BTreeMap::new();

    for record in records {
        let acc = groups
            .entry((record.worker_key(), record.team_type, record.specialist_key()))
            .or_insert_with(|| RollupAccumulator {
                worker_name: record.worker_name.trim().to_string(),
                team_type: record.team_type,
                specialist_team_name: None,
                days_worked: 0,
                total_wage: 0,
                overtime_hours: Decimal::ZERO,
                total_overtime_pay: 0,
                total_kasbon: 0,
                total_paid: 0,
            });

        if acc.specialist_team_name.is_none() {
            acc.specialist_team_name = record.specialist_display_name().map(str::to_string);
        }
        if record.status.is_present() {
            acc.days_worked = acc.days_worked.saturating_add(record.work_days);
            acc.total_wage = acc
                .total_wage
                .saturating_add(record.daily_wage.saturating_mul(i64::from(record.work_days)));
        }
        acc.overtime_hours = acc.overtime_hours.saturating_add(record.overtime_hours);
        acc.total_overtime_pay = acc.total_overtime_pay.saturating_add(overtime_pay(record));
        acc.total_kasbon = acc.total_kasbon.saturating_add(record.kasbon_amount);
        acc.total_paid = acc.total_paid.saturating_add(net_pay(record));
    }

    let mut rollups: Vec<WorkerRollup> = groups
        .into_values()
        .map(|acc| WorkerRollup {
            daily_rate: per_unit_rate(acc.total_wage, Decimal::from(acc.days_worked)),
            overtime_rate: per_unit_rate(acc.total_overtime_pay, acc.overtime_hours),
            worker_name: acc.worker_name,
            team_type: acc.team_type,
            specialist_team_name: acc.specialist_team_name,
            days_worked: acc.days_worked,
            total_wage: acc.total_wage,
            overtime_hours: acc.overtime_hours,
            total_overtime_pay: acc.total_overtime_pay,
            total_kasbon: acc.total_kasbon,
            total_paid: acc.total_paid,
        })
        .collect();

    rollups.sort_by(|a, b| {
        a.worker_name
            .to_lowercase()
            .cmp(&b.worker_name.to_lowercase())
            .then_with(|| a.team_type.cmp(&b.team_type))
            .then_with(|| a.specialist_team_name.cmp(&b.specialist_team_name))
    });
    rollups
}

/// Computes report totals from worker rollups and manual reimbursement lines.
pub fn export_totals(workers: &[WorkerRollup], reimbursements: &[ReimbursementLine]) -> ExportTotals {
    let total_upah = saturating_sum(workers.iter().map(|w| w.total_wage));
    let total_lembur = saturating_sum(workers.iter().map(|w| w.total_overtime_pay));
    let total_kasbon = saturating_sum(workers.iter().map(|w| w.total_kasbon));
    let total_reimburse = saturating_sum(reimbursements.iter().map(|line| line.amount));
    let subtotal = total_upah
        .saturating_add(total_lembur)
        .saturating_add(total_reimburse);

    ExportTotals {
        total_upah,
        total_lembur,
        total_kasbon,
        total_reimburse,
        subtotal,
        grand_total: subtotal.saturating_sub(total_kasbon),
    }
}

fn saturating_sum(amounts: impl Iterator<Item = i64>) -> i64 {
    amounts.fold(0, i64::saturating_add)
}
