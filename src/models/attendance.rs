//! Attendance record model and its category enums.
//!
//! An [`AttendanceRecord`] is one worker's pay-relevant entry for one calendar
//! date on one project. The engine only ever reads a snapshot of these.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{amount, date_only};

/// The crew category a worker was booked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamType {
    /// Standing skilled labor crew.
    RegularLabor,
    /// Standing helper crew assisting the regular labor.
    HelperLabor,
    /// An ad hoc named crew, identified further by its team name.
    Specialist,
}

impl TeamType {
    /// Returns the wire name of the team type.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::RegularLabor => "regular_labor",
            TeamType::HelperLabor => "helper_labor",
            TeamType::Specialist => "specialist",
        }
    }
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance outcome for the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Worker was on site.
    Present,
    /// Absence with permission.
    Excused,
    /// Absence due to illness.
    Sick,
    /// Unexcused absence.
    Absent,
}

impl AttendanceStatus {
    /// Returns true if the status counts as a worked day.
    pub fn is_present(&self) -> bool {
        match self {
            AttendanceStatus::Present => true,
            AttendanceStatus::Excused | AttendanceStatus::Sick | AttendanceStatus::Absent => false,
        }
    }
}

fn default_work_days() -> u32 {
    1
}

/// One worker's attendance and pay entry for a single date on a single project.
///
/// Net pay is never stored here; it is derived by
/// [`crate::calculation::net_pay`] whenever it is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Opaque unique identifier.
    pub id: String,
    /// Project the entry was booked against.
    pub project_id: String,
    /// Display label of the project; absent if the project was deleted.
    #[serde(default)]
    pub project_name: Option<String>,
    /// Free-text worker name, compared case-insensitively.
    pub worker_name: String,
    /// Crew category.
    pub team_type: TeamType,
    /// Name of the specialist crew; only meaningful for [`TeamType::Specialist`].
    #[serde(default)]
    pub specialist_team_name: Option<String>,
    /// Attendance outcome.
    pub status: AttendanceStatus,
    /// Wage for the day, in whole currency units.
    #[serde(deserialize_with = "amount::deserialize")]
    pub daily_wage: i64,
    /// Cash advance deducted from the day's pay.
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub kasbon_amount: i64,
    /// Additional payout added to the day's pay.
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub reimburse_amount: i64,
    /// Calendar date of the entry.
    #[serde(deserialize_with = "date_only::deserialize")]
    pub attendance_date: NaiveDate,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Number of consecutive days this entry stands for.
    #[serde(default = "default_work_days")]
    pub work_days: u32,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Pay per overtime hour.
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub overtime_rate: i64,
}

impl AttendanceRecord {
    /// Returns true if the record belongs to a specialist crew.
    pub fn is_specialist(&self) -> bool {
        self.team_type == TeamType::Specialist
    }

    /// Case-insensitive identity key of the worker.
    pub fn worker_key(&self) -> String {
        name_key(&self.worker_name)
    }

    /// Case-insensitive key of the specialist crew.
    ///
    /// Empty for non-specialist records, and for specialist records whose
    /// team name is missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use recap_engine::models::{AttendanceRecord, AttendanceStatus, TeamType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let record = AttendanceRecord {
    ///     id: "att_001".to_string(),
    ///     project_id: "P1".to_string(),
    ///     project_name: Some("Warehouse".to_string()),
    ///     worker_name: "Dedi".to_string(),
    ///     team_type: TeamType::Specialist,
    ///     specialist_team_name: Some(" Electrical Crew ".to_string()),
    ///     status: AttendanceStatus::Present,
    ///     daily_wage: 200_000,
    ///     kasbon_amount: 0,
    ///     reimburse_amount: 0,
    ///     attendance_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
    ///     notes: None,
    ///     work_days: 1,
    ///     overtime_hours: Decimal::ZERO,
    ///     overtime_rate: 0,
    /// };
    /// assert_eq!(record.specialist_key(), "electrical crew");
    /// ```
    pub fn specialist_key(&self) -> String {
        match self.team_type {
            TeamType::Specialist => self
                .specialist_team_name
                .as_deref()
                .map(name_key)
                .unwrap_or_default(),
            TeamType::RegularLabor | TeamType::HelperLabor => String::new(),
        }
    }

    /// Trimmed specialist team name, if the record is a specialist entry
    /// with a non-blank name.
    pub fn specialist_display_name(&self) -> Option<&str> {
        match self.team_type {
            TeamType::Specialist => self
                .specialist_team_name
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty()),
            TeamType::RegularLabor | TeamType::HelperLabor => None,
        }
    }
}

/// Normalizes a free-text name into its case-insensitive identity key.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
