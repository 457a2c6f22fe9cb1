//! Catalog data: project types, technologies, data categories and guardrails
//!
//! The catalog is built once at startup (either the built-in tables or a JSON
//! file) and is never mutated afterwards. Everything else in the crate reads
//! it through the accessors below.
//!
//! # Invariants
//!
//! - Ids are unique within each table
//! - Every id reference (project type -> technology/data category,
//!   guardrail -> project type, recommendation -> technology/data category)
//!   resolves in the corresponding table
//!
//! Both are checked by [`Catalog::validate`].

mod builtin;

use crate::error::{GuardrailError, Result};
use crate::types::{Priority, RiskLevel, TechCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A technology the user may pick for their stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub id: String,
    pub name: String,
    pub category: TechCategory,
}

/// A category of data the project handles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub risk_level: RiskLevel,
    /// Always part of a freshly seeded selection, whatever the project type
    #[serde(default)]
    pub default_selected: bool,
}

/// High-level kind of application being built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectType {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    /// Technology ids pre-selected when this type is chosen
    pub recommended_technologies: Vec<String>,
    /// Data category ids pre-selected when this type is chosen
    pub common_data_types: Vec<String>,
}

/// A single actionable security practice
///
/// The relevance fields are optional; an absent field means the
/// recommendation is not scoped along that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_technologies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_data_types: Option<Vec<String>>,
}

/// An illustrative before/after code pair
///
/// The snippets are static text. They are displayed, never parsed or run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub language: String,
    pub bad: String,
    pub good: String,
    pub explanation: String,
}

/// A named security topic bundling recommendations and code examples
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guardrail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    /// Project type ids this guardrail applies to
    pub project_types: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
}

impl Guardrail {
    /// Check if this guardrail applies to the given project type
    pub fn applies_to(&self, project_type_id: &str) -> bool {
        self.project_types.iter().any(|id| id == project_type_id)
    }
}

/// The complete, read-only catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    project_types: Vec<ProjectType>,
    technologies: Vec<Technology>,
    data_types: Vec<DataCategory>,
    guardrails: Vec<Guardrail>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Build a catalog from its four tables
    ///
    /// No validation is performed; call [`Catalog::validate`] for data that
    /// did not come from this crate.
    pub fn new(
        project_types: Vec<ProjectType>,
        technologies: Vec<Technology>,
        data_types: Vec<DataCategory>,
        guardrails: Vec<Guardrail>,
    ) -> Self {
        Self {
            project_types,
            technologies,
            data_types,
            guardrails,
        }
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self::new(
            builtin::project_types(),
            builtin::technologies(),
            builtin::data_types(),
            builtin::guardrails(),
        )
    }

    /// Load a catalog from a JSON file and validate it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let catalog: Self = serde_json::from_str(&content)?;
        catalog.validate()?;
        debug!(
            "Loaded catalog from {:?}: {} project types, {} guardrails",
            path.as_ref(),
            catalog.project_types.len(),
            catalog.guardrails.len()
        );
        Ok(catalog)
    }

    /// Serialize the catalog as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn project_types(&self) -> &[ProjectType] {
        &self.project_types
    }

    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    pub fn data_types(&self) -> &[DataCategory] {
        &self.data_types
    }

    pub fn guardrails(&self) -> &[Guardrail] {
        &self.guardrails
    }

    /// Look up a project type by id
    pub fn project_type(&self, id: &str) -> Option<&ProjectType> {
        self.project_types.iter().find(|p| p.id == id)
    }

    /// Look up a technology by id
    pub fn technology(&self, id: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.id == id)
    }

    /// Look up a data category by id
    pub fn data_type(&self, id: &str) -> Option<&DataCategory> {
        self.data_types.iter().find(|d| d.id == id)
    }

    /// Look up a guardrail by id
    pub fn guardrail(&self, id: &str) -> Option<&Guardrail> {
        self.guardrails.iter().find(|g| g.id == id)
    }

    /// Check id uniqueness and that every reference resolves
    pub fn validate(&self) -> Result<()> {
        let project_ids = unique_ids("project type", self.project_types.iter().map(|p| &p.id))?;
        let tech_ids = unique_ids("technology", self.technologies.iter().map(|t| &t.id))?;
        let data_ids = unique_ids("data type", self.data_types.iter().map(|d| &d.id))?;
        unique_ids("guardrail", self.guardrails.iter().map(|g| &g.id))?;

        for project in &self.project_types {
            let owner = format!("project type '{}'", project.id);
            check_refs(&owner, "technology", &project.recommended_technologies, &tech_ids)?;
            check_refs(&owner, "data type", &project.common_data_types, &data_ids)?;
        }

        for guardrail in &self.guardrails {
            let owner = format!("guardrail '{}'", guardrail.id);
            check_refs(&owner, "project type", &guardrail.project_types, &project_ids)?;

            for rec in &guardrail.recommendations {
                let owner = format!("recommendation '{}' in guardrail '{}'", rec.title, guardrail.id);
                if let Some(techs) = &rec.relevant_technologies {
                    check_refs(&owner, "technology", techs, &tech_ids)?;
                }
                if let Some(data) = &rec.relevant_data_types {
                    check_refs(&owner, "data type", data, &data_ids)?;
                }
            }
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a String>,
) -> Result<HashSet<&'a str>> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(GuardrailError::catalog(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(seen)
}

fn check_refs(owner: &str, kind: &str, refs: &[String], known: &HashSet<&str>) -> Result<()> {
    match refs.iter().find(|id| !known.contains(id.as_str())) {
        Some(missing) => Err(GuardrailError::catalog(format!(
            "{} references unknown {} '{}'",
            owner, kind, missing
        ))),
        None => Ok(()),
    }
}
