//! Configuration loading and management for the recap engine.
//!
//! This module loads display labels and request defaults from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use recap_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Default row limit: {:?}", config.config().defaults().row_limit);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RecapConfig, RecapDefaults, TeamLabels};
