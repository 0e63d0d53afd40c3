//! Export view models.
//!
//! Export views scope a recap down to a reporting subset and roll it up per
//! worker, including overtime, for downstream report renderers.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::TeamType;
use super::{amount, date_only};
use super::recap_result::RecapRow;

/// How the export subset is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportMode {
    /// Exactly the records whose ids were selected.
    Selected,
    /// Every non-specialist record of the projects touched by the selection.
    Project,
    /// Every record of one specialist crew.
    Specialist,
}

impl fmt::Display for ExportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportMode::Selected => "selected",
            ExportMode::Project => "project",
            ExportMode::Specialist => "specialist",
        })
    }
}

/// A manual reimbursement line added to a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReimbursementLine {
    /// What was reimbursed.
    pub description: String,
    /// Amount in whole currency units.
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: i64,
    /// Date of the expense, if known.
    #[serde(default, deserialize_with = "date_only::deserialize_opt")]
    pub date: Option<NaiveDate>,
}

/// Caller-supplied export parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportParams {
    /// Selection mode.
    pub mode: ExportMode,
    /// Ids of the records ticked by the user.
    #[serde(default)]
    pub selected_ids: Vec<String>,
    /// Explicit specialist crew name for [`ExportMode::Specialist`].
    #[serde(default)]
    pub specialist_team_name: Option<String>,
    /// Manual reimbursement lines for the report.
    #[serde(default)]
    pub reimbursements: Vec<ReimbursementLine>,
}

/// Pay rollup of one worker within one crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRollup {
    /// Worker name as first seen.
    pub worker_name: String,
    /// Crew category.
    pub team_type: TeamType,
    /// Specialist crew name as first seen; `None` for standing crews.
    pub specialist_team_name: Option<String>,
    /// Present days, scaled by each record's `work_days`.
    pub days_worked: u32,
    /// `round(total_wage / days_worked)`, or 0 without worked days.
    pub daily_rate: i64,
    /// Wages of present days, scaled by `work_days`.
    pub total_wage: i64,
    /// Sum of overtime hours.
    pub overtime_hours: Decimal,
    /// `round(total_overtime_pay / overtime_hours)`, or 0 without overtime.
    pub overtime_rate: i64,
    /// Sum of per-record overtime pay.
    pub total_overtime_pay: i64,
    /// Sum of cash advances.
    pub total_kasbon: i64,
    /// Sum of per-record net pay.
    pub total_paid: i64,
}

/// Report-level totals.
///
/// `upah` is wages and `lembur` is overtime pay, following the report
/// vocabulary used on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportTotals {
    /// Sum of worker wages.
    pub total_upah: i64,
    /// Sum of worker overtime pay.
    pub total_lembur: i64,
    /// Sum of worker cash advances.
    pub total_kasbon: i64,
    /// Sum of the manual reimbursement lines.
    pub total_reimburse: i64,
    /// `total_upah + total_lembur + total_reimburse`.
    pub subtotal: i64,
    /// `subtotal - total_kasbon`.
    pub grand_total: i64,
}

/// The scoped, rolled-up export view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportViewResult {
    /// Mode that produced the subset.
    pub mode: ExportMode,
    /// Projects included, in project mode.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_ids: Vec<String>,
    /// Specialist crew included, in specialist mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_team_name: Option<String>,
    /// Records in the subset, in the order they were supplied.
    pub rows: Vec<RecapRow>,
    /// Per-worker rollups, sorted by worker name.
    pub workers: Vec<WorkerRollup>,
    /// Manual reimbursement lines echoed from the params.
    pub reimbursements: Vec<ReimbursementLine>,
    /// Report totals.
    pub totals: ExportTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_params_defaults() {
        let params: ExportParams = serde_json::from_str(r#"{"mode": "project"}"#).unwrap();
        assert_eq!(params.mode, ExportMode::Project);
        assert!(params.selected_ids.is_empty());
        assert!(params.specialist_team_name.is_none());
        assert!(params.reimbursements.is_empty());
    }

    #[test]
    fn test_reimbursement_date_keeps_calendar_day_of_timestamp() {
        let params: ExportParams = serde_json::from_str(
            r#"{
                "mode": "selected",
                "reimbursements": [
                    {"description": "Sand", "amount": 10000, "date": "2026-02-03T10:00:00Z"},
                    {"description": "Nails", "amount": 5000}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            params.reimbursements[0].date,
            NaiveDate::from_ymd_opt(2026, 2, 3)
        );
        assert_eq!(params.reimbursements[1].date, None);
    }

    #[test]
    fn test_negative_reimbursement_is_rejected() {
        let result: Result<ExportParams, _> = serde_json::from_str(
            r#"{"mode": "selected", "reimbursements": [{"description": "Refund", "amount": -1}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_export_mode_display_matches_wire_name() {
        for mode in [ExportMode::Selected, ExportMode::Project, ExportMode::Specialist] {
            let wire = serde_json::to_string(&mode).unwrap();
            assert_eq!(wire, format!("\"{}\"", mode));
        }
    }
}
