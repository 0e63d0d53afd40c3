//! Payroll reset markers.
//!
//! A marker records that pay has been settled up to a date for a scope of
//! workers. Markers are append-only; the engine never edits them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::attendance::{AttendanceRecord, TeamType, name_key};
use super::date_only;

/// "Paid until" marker for a project/team scope, optionally narrowed to one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResetMarker {
    /// Project the settlement applies to.
    pub project_id: String,
    /// Crew category the settlement applies to.
    pub team_type: TeamType,
    /// Specialist crew name; ignored unless `team_type` is specialist.
    #[serde(default)]
    pub specialist_team_name: Option<String>,
    /// Single worker the settlement applies to; the whole team when absent.
    #[serde(default)]
    pub worker_name: Option<String>,
    /// Last settled date (inclusive).
    #[serde(deserialize_with = "date_only::deserialize")]
    pub paid_until_date: NaiveDate,
}

impl PayrollResetMarker {
    /// Returns true if the marker settles the whole team scope rather than a
    /// single worker.
    pub fn is_team_wide(&self) -> bool {
        self.worker_key().is_none()
    }

    fn worker_key(&self) -> Option<String> {
        self.worker_name
            .as_deref()
            .map(name_key)
            .filter(|key| !key.is_empty())
    }

    /// Checks whether a record falls inside this marker's scope.
    ///
    /// Project and team type must be equal. Specialist records additionally
    /// compare team names case-insensitively after trimming, and a
    /// worker-specific marker only covers that worker.
    pub fn covers(&self, record: &AttendanceRecord) -> bool {
        if self.project_id != record.project_id || self.team_type != record.team_type {
            return false;
        }

        let team_matches = match self.team_type {
            TeamType::Specialist => {
                let marker_team = self
                    .specialist_team_name
                    .as_deref()
                    .map(name_key)
                    .unwrap_or_default();
                marker_team == record.specialist_key()
            }
            TeamType::RegularLabor | TeamType::HelperLabor => true,
        };
        if !team_matches {
            return false;
        }

        match self.worker_key() {
            Some(worker) => worker == record.worker_key(),
            None => true,
        }
    }
}
