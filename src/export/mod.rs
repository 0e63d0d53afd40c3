//! Export view builder.
//!
//! Scopes recap records down to a reporting subset and rolls it up per
//! worker, including overtime and manual reimbursements.
//!
//! # Example
//!
//! ```
//! use recap_engine::export::build_export_view;
//! use recap_engine::models::{ExportMode, ExportParams};
//!
//! let params = ExportParams {
//!     mode: ExportMode::Selected,
//!     selected_ids: vec![],
//!     specialist_team_name: None,
//!     reimbursements: vec![],
//! };
//! let result = build_export_view(&[], &params);
//! assert!(result.unwrap_err().is_empty_selection());
//! ```

mod rollup;
mod selection;

pub use rollup::{export_totals, rollup_workers};
pub use selection::{ExportSelection, select_for_export};

use tracing::debug;

use crate::calculation::annotate;
use crate::error::EngineResult;
use crate::models::{AttendanceRecord, ExportParams, ExportViewResult, RecapMode};
use crate::recap::{RecapFilters, select_records};

/// Builds an export view over `records`.
///
/// `records` is expected to be a recap's filtered set fetched with settled
/// records included; see [`export_from_snapshot`].
pub fn build_export_view(
    records: &[AttendanceRecord],
    params: &ExportParams,
) -> EngineResult<ExportViewResult> {
    let selection = select_for_export(records, params)?;
    let workers = rollup_workers(&selection.records);
    let totals = export_totals(&workers, &params.reimbursements);

    debug!(
        mode = %params.mode,
        records = selection.records.len(),
        workers = workers.len(),
        grand_total = totals.grand_total,
        "Built export view"
    );

    Ok(ExportViewResult {
        mode: params.mode,
        project_ids: selection.project_ids,
        specialist_team_name: selection.specialist_team_name,
        rows: selection.records.into_iter().map(annotate).collect(),
        workers,
        reimbursements: params.reimbursements.clone(),
        totals,
    })
}

/// Runs the recap selection the way exports need it, then builds the view.
///
/// Settled records are always included, worker grouping is combined, and
/// no row limit applies, whatever `filters` says.
pub fn export_from_snapshot(
    records: &[AttendanceRecord],
    filters: &RecapFilters,
    params: &ExportParams,
) -> EngineResult<ExportViewResult> {
    let scoped = RecapFilters {
        include_already_paid: true,
        recap_mode: RecapMode::Combined,
        limit: None,
        ..filters.clone()
    };

    let in_scope: Vec<AttendanceRecord> = select_records(records, &[], &scoped)
        .into_iter()
        .map(|row| row.record)
        .collect();

    build_export_view(&in_scope, params)
}
