//! Request types for the recap API.
//!
//! Both endpoints carry the snapshot they operate on; the engine never
//! fetches records itself.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, ExportParams, PayrollResetMarker};
use crate::recap::RecapFilters;

/// Request body for the `/recap` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecapRequest {
    /// Attendance record snapshot.
    pub records: Vec<AttendanceRecord>,
    /// Payroll reset marker snapshot.
    #[serde(default)]
    pub markers: Vec<PayrollResetMarker>,
    /// Query filters.
    pub filters: RecapFilters,
}

/// Request body for the `/export` endpoint.
///
/// Settled records are always part of an export, so no markers are taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Attendance record snapshot.
    pub records: Vec<AttendanceRecord>,
    /// Date range and dimension filters scoping the export.
    pub filters: RecapFilters,
    /// Selection mode and reimbursement lines.
    pub params: ExportParams,
}
