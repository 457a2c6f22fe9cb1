//! Plain-text and JSON output for the headless commands
//!
//! `list` prints catalog tables and `recommend` runs the wizard and browser
//! without a terminal UI. Everything here returns strings so the binary only
//! has to print them.

use crate::browser::{guardrails_for_project_type, security_focus, view_guardrail, FocusNote};
use crate::catalog::Catalog;
use crate::cli::CatalogTable;
use crate::error::{GuardrailError, Result};
use crate::types::{Priority, RiskLevel};
use crate::wizard::{ProjectConfig, Wizard};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::Write;

/// Build a finalized configuration from command-line ids
///
/// With `defaults`, the project type's seeded selection is the starting
/// point and every distinct given id is toggled once. Without it, the given ids are the
/// selection, unless none are given at all, in which case the seeded
/// defaults are used as-is. Unknown ids are rejected.
pub fn build_config(
    catalog: &Catalog,
    project_type: &str,
    technologies: &[String],
    data_types: &[String],
    defaults: bool,
) -> Result<ProjectConfig> {
    if let Some(id) = technologies.iter().find(|id| catalog.technology(id).is_none()) {
        return Err(GuardrailError::UnknownTechnology(id.clone()));
    }
    if let Some(id) = data_types.iter().find(|id| catalog.data_type(id).is_none()) {
        return Err(GuardrailError::UnknownDataType(id.clone()));
    }

    let mut wizard = Wizard::new(catalog);
    wizard.select_project_type_id(project_type)?;

    let wanted_tech: BTreeSet<&str> = technologies.iter().map(String::as_str).collect();
    let wanted_data: BTreeSet<&str> = data_types.iter().map(String::as_str).collect();

    if defaults {
        // Each distinct id flips once, however often it was given
        wanted_tech.iter().for_each(|id| wizard.toggle_technology(id));
        wanted_data.iter().for_each(|id| wizard.toggle_data_type(id));
    } else if !wanted_tech.is_empty() || !wanted_data.is_empty() {
        let seeded = wizard.selection().clone();

        // Toggle the symmetric difference between seeded and wanted
        for id in seeded.selected_technologies.iter().map(String::as_str) {
            if !wanted_tech.contains(id) {
                wizard.toggle_technology(id);
            }
        }
        for id in wanted_tech.iter().filter(|id| !seeded.has_technology(id)) {
            wizard.toggle_technology(id);
        }
        for id in seeded.selected_data_types.iter().map(String::as_str) {
            if !wanted_data.contains(id) {
                wizard.toggle_data_type(id);
            }
        }
        for id in wanted_data.iter().filter(|id| !seeded.has_data_type(id)) {
            wizard.toggle_data_type(id);
        }
    }

    wizard
        .complete()
        .ok_or_else(|| GuardrailError::UnknownProjectType(project_type.to_string()))
}

/// One recommendation in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub title: String,
    pub priority: Priority,
    pub relevant: bool,
}

/// One guardrail in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardrailEntry {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub relevant_count: usize,
    pub recommendations: Vec<RecommendationEntry>,
}

/// A focus note with its rendered message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FocusEntry {
    pub note: FocusNote,
    pub severity: RiskLevel,
    pub message: &'static str,
}

/// Everything `recommend` prints
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub project_type: String,
    pub technologies: Vec<String>,
    pub data_types: Vec<String>,
    pub focus: Vec<FocusEntry>,
    pub guardrails: Vec<GuardrailEntry>,
}

impl RecommendationReport {
    pub fn new(catalog: &Catalog, config: &ProjectConfig) -> Self {
        let guardrails = guardrails_for_project_type(catalog, &config.project_type().id)
            .into_iter()
            .map(|guardrail| {
                let view = view_guardrail(guardrail, config);
                GuardrailEntry {
                    id: guardrail.id.clone(),
                    title: guardrail.title.clone(),
                    icon: guardrail.icon.clone(),
                    relevant_count: view.relevant_count(),
                    recommendations: view
                        .recommendations
                        .iter()
                        .map(|r| RecommendationEntry {
                            title: r.recommendation.title.clone(),
                            priority: r.recommendation.priority,
                            relevant: r.relevant,
                        })
                        .collect(),
                }
            })
            .collect();

        let focus = security_focus(config)
            .into_iter()
            .map(|note| FocusEntry {
                note,
                severity: note.severity(),
                message: note.message(),
            })
            .collect();

        Self {
            project_type: config.project_type().id.clone(),
            technologies: config.technologies().iter().map(|t| t.id.clone()).collect(),
            data_types: config.data_types().iter().map(|d| d.id.clone()).collect(),
            focus,
            guardrails,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable report
    pub fn to_text(&self, catalog: &Catalog) -> String {
        let project = catalog
            .project_type(&self.project_type)
            .map_or(self.project_type.as_str(), |p| p.name.as_str());

        let mut out = String::new();
        writeln!(out, "Security guardrails for: {}", project).ok();
        let stack = join_or_none(
            self.technologies
                .iter()
                .map(|id| catalog.technology(id).map_or(id.as_str(), |t| t.name.as_str())),
        );
        let data = join_or_none(
            self.data_types
                .iter()
                .map(|id| catalog.data_type(id).map_or(id.as_str(), |d| d.name.as_str())),
        );
        writeln!(out, "Stack: {}", stack).ok();
        writeln!(out, "Data:  {}", data).ok();

        if !self.focus.is_empty() {
            writeln!(out, "\nSecurity focus:").ok();
            for entry in &self.focus {
                let marker = if entry.severity.is_high() { "!" } else { "-" };
                writeln!(out, "  {} {}", marker, entry.message).ok();
            }
        }

        for guardrail in &self.guardrails {
            writeln!(
                out,
                "\n{} {} ({}/{} relevant)",
                guardrail.icon,
                guardrail.title,
                guardrail.relevant_count,
                guardrail.recommendations.len()
            )
            .ok();
            for rec in &guardrail.recommendations {
                let suffix = if rec.relevant { "" } else { "  (less relevant)" };
                writeln!(out, "  [{:<6}] {}{}", rec.priority.to_string(), rec.title, suffix).ok();
            }
        }

        out
    }
}

fn join_or_none<'n>(names: impl Iterator<Item = &'n str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

/// Text table of a catalog table, one row per entry
pub fn list_table(catalog: &Catalog, table: CatalogTable) -> String {
    let mut out = String::new();
    match table {
        CatalogTable::Projects => {
            for pt in catalog.project_types() {
                writeln!(out, "{:<12} {} {:<22} {}", pt.id, pt.icon, pt.name, pt.description).ok();
            }
        }
        CatalogTable::Technologies => {
            for tech in catalog.technologies() {
                writeln!(out, "{:<12} {:<14} {}", tech.id, tech.name, tech.category.label()).ok();
            }
        }
        CatalogTable::Data => {
            for data in catalog.data_types() {
                let default = if data.default_selected { " (default)" } else { "" };
                writeln!(
                    out,
                    "{:<18} {:<22} {:<6} {}{}",
                    data.id,
                    data.name,
                    data.risk_level.to_string(),
                    data.description,
                    default
                )
                .ok();
            }
        }
        CatalogTable::Guardrails => {
            for guardrail in catalog.guardrails() {
                writeln!(
                    out,
                    "{:<18} {} {:<32} {}",
                    guardrail.id,
                    guardrail.icon,
                    guardrail.title,
                    guardrail.project_types.join(",")
                )
                .ok();
            }
        }
    }
    out
}

/// JSON array of a catalog table
pub fn list_json(catalog: &Catalog, table: CatalogTable) -> Result<String> {
    let json = match table {
        CatalogTable::Projects => serde_json::to_string_pretty(catalog.project_types())?,
        CatalogTable::Technologies => serde_json::to_string_pretty(catalog.technologies())?,
        CatalogTable::Data => serde_json::to_string_pretty(catalog.data_types())?,
        CatalogTable::Guardrails => serde_json::to_string_pretty(catalog.guardrails())?,
    };
    Ok(json)
}
