//! Export subset selection.
//!
//! Three mutually exclusive modes pick the records a report covers. Every
//! mode fails with a typed error rather than guessing when the selection is
//! missing, ambiguous, or resolves to nothing.

use std::collections::HashSet;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, ExportMode, ExportParams, name_key};

/// The records chosen for an export, with what the selection resolved to.
#[derive(Debug, Clone)]
pub struct ExportSelection<'a> {
    /// Chosen records, in snapshot order.
    pub records: Vec<&'a AttendanceRecord>,
    /// Projects derived from the selection, in project mode.
    pub project_ids: Vec<String>,
    /// Specialist crew name resolved, in specialist mode.
    pub specialist_team_name: Option<String>,
}

/// Picks the export subset described by `params` out of `records`.
pub fn select_for_export<'a>(
    records: &'a [AttendanceRecord],
    params: &ExportParams,
) -> EngineResult<ExportSelection<'a>> {
    let selected_ids: HashSet<&str> = params.selected_ids.iter().map(String::as_str).collect();

    let selection = match params.mode {
        ExportMode::Selected => select_explicit(records, &selected_ids)?,
        ExportMode::Project => select_projects(records, &selected_ids)?,
        ExportMode::Specialist => select_specialist(
            records,
            &selected_ids,
            params.specialist_team_name.as_deref(),
        )?,
    };

    if selection.records.is_empty() {
        return Err(EngineError::EmptySelection { mode: params.mode });
    }
    Ok(selection)
}

fn select_explicit<'a>(
    records: &'a [AttendanceRecord],
    selected_ids: &HashSet<&str>,
) -> EngineResult<ExportSelection<'a>> {
    if selected_ids.is_empty() {
        return Err(EngineError::NothingSelected {
            mode: ExportMode::Selected,
        });
    }

    Ok(ExportSelection {
        records: records
            .iter()
            .filter(|record| selected_ids.contains(record.id.as_str()))
            .collect(),
        project_ids: Vec::new(),
        specialist_team_name: None,
    })
}

fn select_projects<'a>(
    records: &'a [AttendanceRecord],
    selected_ids: &HashSet<&str>,
) -> EngineResult<ExportSelection<'a>> {
    let mut project_ids: Vec<String> = Vec::new();
    for record in records
        .iter()
        .filter(|record| selected_ids.contains(record.id.as_str()) && !record.is_specialist())
    {
        if !project_ids.contains(&record.project_id) {
            project_ids.push(record.project_id.clone());
        }
    }

    if project_ids.is_empty() {
        return Err(EngineError::NoProjectSelected);
    }

    Ok(ExportSelection {
        records: records
            .iter()
            .filter(|record| !record.is_specialist() && project_ids.contains(&record.project_id))
            .collect(),
        project_ids,
        specialist_team_name: None,
    })
}

fn select_specialist<'a>(
    records: &'a [AttendanceRecord],
    selected_ids: &HashSet<&str>,
    explicit_name: Option<&str>,
) -> EngineResult<ExportSelection<'a>> {
    let (team_key, team_name) = match explicit_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => (name_key(name), name.to_string()),
        None => resolve_from_selection(records, selected_ids)?,
    };

    Ok(ExportSelection {
        records: records
            .iter()
            .filter(|record| record.is_specialist() && record.specialist_key() == team_key)
            .collect(),
        project_ids: Vec::new(),
        specialist_team_name: Some(team_name),
    })
}

/// Requires every selected specialist record to name the same crew.
fn resolve_from_selection(
    records: &[AttendanceRecord],
    selected_ids: &HashSet<&str>,
) -> EngineResult<(String, String)> {
    let mut teams: Vec<(String, String)> = Vec::new();
    for record in records
        .iter()
        .filter(|record| selected_ids.contains(record.id.as_str()) && record.is_specialist())
    {
        let key = record.specialist_key();
        if !teams.iter().any(|(existing, _)| *existing == key) {
            let display = record.specialist_display_name().unwrap_or_default().to_string();
            teams.push((key, display));
        }
    }

    match teams.len() {
        0 => Err(EngineError::SpecialistTeamUnresolved {
            reason: "no specialist record is selected and no team name was given".to_string(),
        }),
        1 => {
            let (key, display) = teams.remove(0);
            if key.is_empty() {
                return Err(EngineError::SpecialistTeamUnresolved {
                    reason: "the selected specialist records have no team name".to_string(),
                });
            }
            Ok((key, display))
        }
        count => Err(EngineError::SpecialistTeamUnresolved {
            reason: format!("selection spans {} specialist teams", count),
        }),
    }
}
