//! HTTP API module for the recap engine.
//!
//! This module exposes the recap and export call shapes as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ExportRequest, RecapRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
