//! Core data models for the recap engine.
//!
//! This module contains the input snapshot shapes (attendance records and
//! payroll reset markers) and the structured outputs of recap and export.

pub mod amount;
mod attendance;
pub mod date_only;
mod export_view;
mod payroll_reset;
mod recap_result;

pub use attendance::{AttendanceRecord, AttendanceStatus, TeamType, name_key};
pub use export_view::{
    ExportMode, ExportParams, ExportTotals, ExportViewResult, ReimbursementLine, WorkerRollup,
};
pub use payroll_reset::PayrollResetMarker;
pub use recap_result::{
    ProjectSummary, ProjectTeamSummary, RecapMode, RecapResult, RecapRow, RecapTotals,
    TeamSummary, WorkerSummary,
};
