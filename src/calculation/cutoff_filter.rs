//! Payroll cutoff filtering.
//!
//! Removes records that payroll reset markers have already settled. A
//! record's effective cutoff is the latest `paid_until_date` among every
//! marker whose scope covers it; team-wide and worker-specific markers both
//! count.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::models::{AttendanceRecord, PayrollResetMarker, TeamType};

/// Markers grouped by `(project_id, team_type)` so each record only checks
/// the markers that can possibly cover it.
#[derive(Debug, Default)]
pub struct CutoffIndex<'a> {
    by_scope: HashMap<(&'a str, TeamType), Vec<&'a PayrollResetMarker>>,
}

impl<'a> CutoffIndex<'a> {
    /// Indexes a marker snapshot.
    pub fn new(markers: &'a [PayrollResetMarker]) -> Self {
        let mut by_scope: HashMap<(&str, TeamType), Vec<&PayrollResetMarker>> = HashMap::new();
        for marker in markers {
            by_scope
                .entry((marker.project_id.as_str(), marker.team_type))
                .or_default()
                .push(marker);
        }
        Self { by_scope }
    }

    /// Returns true if no marker was indexed.
    pub fn is_empty(&self) -> bool {
        self.by_scope.is_empty()
    }

    /// The latest `paid_until_date` of all markers covering the record, or
    /// `None` if nothing covers it.
    pub fn effective_cutoff(&self, record: &AttendanceRecord) -> Option<NaiveDate> {
        self.by_scope
            .get(&(record.project_id.as_str(), record.team_type))?
            .iter()
            .filter(|marker| marker.covers(record))
            .map(|marker| marker.paid_until_date)
            .max()
    }

    /// Returns true if the record is dated strictly after its effective cutoff
    /// (or has none).
    pub fn is_unpaid(&self, record: &AttendanceRecord) -> bool {
        match self.effective_cutoff(record) {
            Some(cutoff) => record.attendance_date > cutoff,
            None => true,
        }
    }
}

/// One-off form of [`CutoffIndex::effective_cutoff`] for a single record.
///
/// Builds the index on every call; index once when checking many records.
pub fn effective_cutoff(
    record: &AttendanceRecord,
    markers: &[PayrollResetMarker],
) -> Option<NaiveDate> {
    CutoffIndex::new(markers).effective_cutoff(record)
}

/// Keeps only the records that have not been paid yet.
///
/// Pure and order-preserving; applying it again with the same markers
/// changes nothing.
pub fn filter_unpaid<'r, I>(records: I, markers: &[PayrollResetMarker]) -> Vec<&'r AttendanceRecord>
where
    I: IntoIterator<Item = &'r AttendanceRecord>,
{
    let index = CutoffIndex::new(markers);
    let candidates = records.into_iter();
    if index.is_empty() {
        return candidates.collect();
    }

    let mut excluded = 0usize;
    let kept: Vec<&AttendanceRecord> = candidates
        .filter(|record| {
            let unpaid = index.is_unpaid(record);
            if !unpaid {
                excluded += 1;
            }
            unpaid
        })
        .collect();

    debug!(
        markers = markers.len(),
        kept = kept.len(),
        excluded,
        "Applied payroll cutoff"
    );
    kept
}
