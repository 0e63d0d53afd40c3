//! Recap query filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, RecapMode, TeamType, date_only, name_key};

/// Filters of a recap query.
///
/// Only the date range is required. Blank or empty optional filters are
/// treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecapFilters {
    /// Start of the range (inclusive).
    #[serde(deserialize_with = "date_only::deserialize")]
    pub from: NaiveDate,
    /// End of the range (inclusive).
    #[serde(deserialize_with = "date_only::deserialize")]
    pub to: NaiveDate,
    /// Exact project match.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Exact crew category match.
    #[serde(default)]
    pub team_type: Option<TeamType>,
    /// Case-insensitive substring of the specialist crew name.
    #[serde(default)]
    pub specialist_team_name: Option<String>,
    /// Case-insensitive allow-list of worker names.
    #[serde(default)]
    pub worker_names: Vec<String>,
    /// Skip the payroll cutoff and include settled records.
    #[serde(default)]
    pub include_already_paid: bool,
    /// Grouping of the worker view.
    #[serde(default)]
    pub recap_mode: RecapMode,
    /// Cap on the returned row list; never affects the grouped views.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RecapFilters {
    /// Creates filters for a date range with every other filter unset.
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            project_id: None,
            team_type: None,
            specialist_team_name: None,
            worker_names: Vec::new(),
            include_already_paid: false,
            recap_mode: RecapMode::default(),
            limit: None,
        }
    }

    /// Returns true if the record's date lies in `[from, to]`.
    pub fn in_range(&self, record: &AttendanceRecord) -> bool {
        record.attendance_date >= self.from && record.attendance_date <= self.to
    }

    /// Compiles the dimension filters once for repeated matching.
    pub fn matcher(&self) -> DimensionMatcher<'_> {
        DimensionMatcher {
            project_id: self.project_id.as_deref().filter(|id| !id.is_empty()),
            team_type: self.team_type,
            specialist_needle: self
                .specialist_team_name
                .as_deref()
                .map(name_key)
                .filter(|needle| !needle.is_empty()),
            worker_keys: self
                .worker_names
                .iter()
                .map(|name| name_key(name))
                .filter(|key| !key.is_empty())
                .collect(),
        }
    }
}

/// Project, crew, specialist and worker filters prepared for matching.
#[derive(Debug)]
pub struct DimensionMatcher<'a> {
    project_id: Option<&'a str>,
    team_type: Option<TeamType>,
    specialist_needle: Option<String>,
    worker_keys: Vec<String>,
}

impl DimensionMatcher<'_> {
    /// Returns true if the record passes every dimension filter.
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        if let Some(project_id) = self.project_id {
            if record.project_id != project_id {
                return false;
            }
        }
        if let Some(team_type) = self.team_type {
            if record.team_type != team_type {
                return false;
            }
        }
        if let Some(needle) = &self.specialist_needle {
            if !record.specialist_key().contains(needle.as_str()) {
                return false;
            }
        }
        if !self.worker_keys.is_empty() && !self.worker_keys.contains(&record.worker_key()) {
            return false;
        }
        true
    }
}
