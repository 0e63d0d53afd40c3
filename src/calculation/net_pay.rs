//! Net pay and overtime pay derivation.
//!
//! Net pay is computed on demand from wage, cash advance and reimbursement,
//! and is never allowed to go negative: a worker cannot end up owing money
//! through a single entry.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{AttendanceRecord, RecapRow};

/// Derives the net pay of a record.
///
/// `max(daily_wage - kasbon_amount + reimburse_amount, 0)`. Status is not
/// inspected; a non-present day is expected to carry a zero wage already.
///
/// # Examples
///
/// ```
/// use recap_engine::calculation::net_pay;
/// use recap_engine::models::{AttendanceRecord, AttendanceStatus, TeamType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut record = AttendanceRecord {
///     id: "att_001".to_string(),
///     project_id: "P1".to_string(),
///     project_name: None,
///     worker_name: "Joko".to_string(),
///     team_type: TeamType::RegularLabor,
///     specialist_team_name: None,
///     status: AttendanceStatus::Present,
///     daily_wage: 200_000,
///     kasbon_amount: 50_000,
///     reimburse_amount: 10_000,
///     attendance_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
///     notes: None,
///     work_days: 1,
///     overtime_hours: Decimal::ZERO,
///     overtime_rate: 0,
/// };
/// assert_eq!(net_pay(&record), 160_000);
///
/// record.kasbon_amount = 500_000;
/// assert_eq!(net_pay(&record), 0);
/// ```
pub fn net_pay(record: &AttendanceRecord) -> i64 {
    record
        .daily_wage
        .saturating_sub(record.kasbon_amount)
        .saturating_add(record.reimburse_amount)
        .max(0)
}

/// Pairs a record with its net pay.
pub fn annotate(record: &AttendanceRecord) -> RecapRow {
    RecapRow {
        net_pay: net_pay(record),
        record: record.clone(),
    }
}

/// Overtime pay of a single record: `round(overtime_hours × overtime_rate)`.
pub fn overtime_pay(record: &AttendanceRecord) -> i64 {
    round_to_units(
        record
            .overtime_hours
            .saturating_mul(Decimal::from(record.overtime_rate)),
    )
}

/// Rounds to whole currency units, halves away from zero.
///
/// Amounts outside the `i64` range clamp to its bounds.
pub fn round_to_units(amount: Decimal) -> i64 {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(if amount.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
}

/// `round(total / count)`, or zero when `count` is zero.
pub fn per_unit_rate(total: i64, count: Decimal) -> i64 {
    if count <= Decimal::ZERO {
        return 0;
    }
    match Decimal::from(total).checked_div(count) {
        Some(rate) => round_to_units(rate),
        None if total < 0 => i64::MIN,
        None => i64::MAX,
    }
}
