//! Error types for the recap engine.
//!
//! The recap facade itself never fails; errors come from configuration
//! loading and from the export builder when a selection resolves to nothing.

use thiserror::Error;

use crate::models::ExportMode;

/// The main error type for the recap engine.
///
/// # Example
///
/// ```
/// use recap_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/labels.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/labels.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The export request did not select any record.
    #[error("No records selected for {mode} export")]
    NothingSelected {
        /// The export mode that required a selection.
        mode: ExportMode,
    },

    /// Project export could not derive a single project from the selection.
    #[error("No project could be derived from the selected records")]
    NoProjectSelected,

    /// Specialist export could not settle on exactly one team name.
    #[error("Specialist team could not be resolved: {reason}")]
    SpecialistTeamUnresolved {
        /// Why the team name could not be resolved.
        reason: String,
    },

    /// The selection resolved, but matched no record.
    #[error("Selection for {mode} export matched no records")]
    EmptySelection {
        /// The export mode that produced the empty selection.
        mode: ExportMode,
    },
}

impl EngineError {
    /// Returns true for the export selection failures that callers should
    /// surface as a user-facing message rather than an internal fault.
    pub fn is_empty_selection(&self) -> bool {
        match self {
            EngineError::NothingSelected { .. }
            | EngineError::NoProjectSelected
            | EngineError::SpecialistTeamUnresolved { .. }
            | EngineError::EmptySelection { .. } => true,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => false,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
