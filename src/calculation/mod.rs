//! Calculation logic for the recap engine.
//!
//! This module contains the pure building blocks of a recap: net pay
//! derivation, the payroll cutoff filter, and the four independent grouped
//! views (by project, by crew, by project and crew, by worker). Each view is
//! a fold into its own keyed accumulator map, sorted only when finalized.

mod cutoff_filter;
mod net_pay;
mod project_summary;
mod project_team_summary;
mod team_summary;
mod worker_summary;

pub use cutoff_filter::{CutoffIndex, effective_cutoff, filter_unpaid};
pub use net_pay::{annotate, net_pay, overtime_pay, per_unit_rate, round_to_units};
pub use project_summary::summarize_by_project;
pub use project_team_summary::summarize_by_project_team;
pub use team_summary::summarize_by_team;
pub use worker_summary::summarize_by_worker;
