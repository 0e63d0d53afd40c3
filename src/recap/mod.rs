//! Recap query facade.
//!
//! Orchestrates filtering, the payroll cutoff, net pay annotation and the
//! four grouped views into a single [`crate::models::RecapResult`].

mod filters;
mod query;

pub use filters::{DimensionMatcher, RecapFilters};
pub use query::{compute_recap, compute_recap_with_labels, grand_totals, select_records};
