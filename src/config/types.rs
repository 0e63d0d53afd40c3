//! Configuration types for the recap engine.
//!
//! These structures are deserialized from the YAML files in a configuration
//! directory, and have built-in defaults so the library works without files.

use serde::Deserialize;

use crate::models::TeamType;

/// Display labels used when rendering crew and project names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamLabels {
    /// Label of the regular labor crew.
    pub regular_labor: String,
    /// Label of the helper labor crew.
    pub helper_labor: String,
    /// Prefix placed before a specialist crew's name.
    pub specialist_prefix: String,
    /// Label of a specialist crew that has no name.
    pub unnamed_specialist: String,
    /// Sort label of a project that has no display name.
    pub unknown_project: String,
}

impl Default for TeamLabels {
    fn default() -> Self {
        Self {
            regular_labor: "Regular Labor".to_string(),
            helper_labor: "Helper Labor".to_string(),
            specialist_prefix: "Specialist".to_string(),
            unnamed_specialist: "Specialist – Unnamed".to_string(),
            unknown_project: "Unknown Project".to_string(),
        }
    }
}

impl TeamLabels {
    /// Renders the display label of a crew.
    ///
    /// # Examples
    ///
    /// ```
    /// use recap_engine::config::TeamLabels;
    /// use recap_engine::models::TeamType;
    ///
    /// let labels = TeamLabels::default();
    /// assert_eq!(labels.team_label(TeamType::RegularLabor, None), "Regular Labor");
    /// assert_eq!(
    ///     labels.team_label(TeamType::Specialist, Some("Electrical Crew")),
    ///     "Specialist – Electrical Crew"
    /// );
    /// assert_eq!(labels.team_label(TeamType::Specialist, None), "Specialist – Unnamed");
    /// ```
    pub fn team_label(&self, team_type: TeamType, specialist_team_name: Option<&str>) -> String {
        match team_type {
            TeamType::RegularLabor => self.regular_labor.clone(),
            TeamType::HelperLabor => self.helper_labor.clone(),
            TeamType::Specialist => match specialist_team_name.map(str::trim) {
                Some(name) if !name.is_empty() => {
                    format!("{} – {}", self.specialist_prefix, name)
                }
                _ => self.unnamed_specialist.clone(),
            },
        }
    }

    /// Returns the project's display name, or the unknown-project label.
    pub fn project_label<'a>(&'a self, project_name: Option<&'a str>) -> &'a str {
        project_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.unknown_project)
    }
}

/// Defaults applied by the HTTP layer to requests that leave them out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecapDefaults {
    /// Cap on the raw row list of a recap when the request sets none.
    #[serde(default)]
    pub row_limit: Option<usize>,
}

/// The complete recap configuration.
#[derive(Debug, Clone, Default)]
pub struct RecapConfig {
    labels: TeamLabels,
    defaults: RecapDefaults,
}

impl RecapConfig {
    /// Creates a new RecapConfig from its component parts.
    pub fn new(labels: TeamLabels, defaults: RecapDefaults) -> Self {
        Self { labels, defaults }
    }

    /// Returns the display labels.
    pub fn labels(&self) -> &TeamLabels {
        &self.labels
    }

    /// Returns the request defaults.
    pub fn defaults(&self) -> &RecapDefaults {
        &self.defaults
    }
}
