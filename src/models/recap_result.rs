//! Recap output models.
//!
//! This module contains the [`RecapResult`] bundle and the summary rows of
//! its four grouped views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attendance::{AttendanceRecord, TeamType};

/// How worker totals are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecapMode {
    /// One row per worker, pooled across every project in the window.
    Combined,
    /// One row per worker per project.
    #[default]
    PerProject,
}

/// An attendance record annotated with its derived net pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecapRow {
    /// The underlying record.
    #[serde(flatten)]
    pub record: AttendanceRecord,
    /// `max(daily_wage - kasbon_amount + reimburse_amount, 0)`.
    pub net_pay: i64,
}

/// Totals for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub project_id: String,
    /// Project display name, if any record carried one.
    pub project_name: Option<String>,
    /// Sum of daily wages.
    pub total_wage: i64,
    /// Sum of cash advances.
    pub total_kasbon: i64,
    /// Sum of net pay.
    pub total_net_pay: i64,
    /// Number of distinct workers (case-insensitive).
    pub worker_count: usize,
    /// Number of records folded into the group.
    pub record_count: usize,
}

/// Totals for one crew category (specialist crews split by name).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// Crew category.
    pub team_type: TeamType,
    /// Specialist crew name as first seen; `None` for standing crews.
    pub specialist_team_name: Option<String>,
    /// Rendered display label.
    pub label: String,
    /// Sum of daily wages.
    pub total_wage: i64,
    /// Sum of cash advances.
    pub total_kasbon: i64,
    /// Sum of net pay.
    pub total_net_pay: i64,
    /// Number of distinct workers (case-insensitive).
    pub worker_count: usize,
    /// Number of records folded into the group.
    pub record_count: usize,
}

/// Totals for one crew within one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectTeamSummary {
    /// Project identifier.
    pub project_id: String,
    /// Project display name, if any record carried one.
    pub project_name: Option<String>,
    /// Crew category.
    pub team_type: TeamType,
    /// Specialist crew name as first seen; `None` for standing crews.
    pub specialist_team_name: Option<String>,
    /// Rendered display label of the crew.
    pub label: String,
    /// Sum of daily wages.
    pub total_wage: i64,
    /// Sum of cash advances.
    pub total_kasbon: i64,
    /// Sum of net pay.
    pub total_net_pay: i64,
    /// Number of distinct workers (case-insensitive).
    pub worker_count: usize,
    /// Number of records folded into the group.
    pub record_count: usize,
    /// Most recent attendance date in the group.
    pub latest_attendance_date: NaiveDate,
}

/// Totals for one worker, either pooled or per project depending on [`RecapMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSummary {
    /// Worker name as first seen.
    pub worker_name: String,
    /// Project of the row; `None` in combined mode.
    pub project_id: Option<String>,
    /// Project display name; `None` in combined mode.
    pub project_name: Option<String>,
    /// Number of records with status present.
    pub work_days: u32,
    /// Sum of daily wages.
    pub total_wage: i64,
    /// Sum of cash advances.
    pub total_kasbon: i64,
    /// Sum of net pay.
    pub total_net_pay: i64,
}

/// Grand totals over the whole filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecapTotals {
    /// Sum of daily wages.
    pub total_wage: i64,
    /// Sum of cash advances.
    pub total_kasbon: i64,
    /// Sum of net pay.
    pub total_net_pay: i64,
}

/// Everything a recap query produces.
///
/// The four views and the totals always cover the unlimited filtered set;
/// only `rows` is subject to the caller's limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecapResult {
    /// Start of the queried range (inclusive).
    pub from: NaiveDate,
    /// End of the queried range (inclusive).
    pub to: NaiveDate,
    /// Grouping mode used for the worker view.
    pub recap_mode: RecapMode,
    /// Size of the filtered set before the limit was applied.
    pub total_records: usize,
    /// Filtered records, newest date first.
    pub rows: Vec<RecapRow>,
    /// Per-project totals.
    pub by_project: Vec<ProjectSummary>,
    /// Per-crew totals.
    pub by_team: Vec<TeamSummary>,
    /// Per-project, per-crew totals.
    pub by_project_team: Vec<ProjectTeamSummary>,
    /// Per-worker totals.
    pub by_worker: Vec<WorkerSummary>,
    /// Grand totals.
    pub totals: RecapTotals,
}
