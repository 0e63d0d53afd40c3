//! Attendance-to-payroll recap engine.
//!
//! This crate turns a snapshot of daily attendance records and payroll reset
//! markers into net pay figures and grouped recap views (by worker, crew,
//! project, and project and crew), and scopes recaps down to export views
//! with per-worker rollups for payroll reports.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod recap;

#[cfg(test)]
mod test_support;
