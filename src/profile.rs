//! Project profile files for saving and loading a finalized configuration.
//!
//! A profile stores ids only. Loading one resolves those ids against the
//! catalog in use, so a profile written against one catalog is checked
//! before it is trusted against another.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::GuardrailError;
use crate::wizard::{ProjectConfig, Selection, WizardStep};

/// Saved project configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub project_type: String,
    #[serde(default)]
    pub technologies: BTreeSet<String>,
    #[serde(default)]
    pub data_types: BTreeSet<String>,
}

impl ProjectProfile {
    /// Capture a finalized configuration
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            project_type: config.project_type().id.clone(),
            technologies: config.tech_ids(),
            data_types: config.data_ids(),
        }
    }

    /// Save profile to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize profile to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write profile to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load profile from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read profile from {:?}", path.as_ref()))?;

        let profile: Self =
            serde_json::from_str(&content).context("Failed to parse profile JSON")?;

        Ok(profile)
    }

    /// Check that every id in the profile exists in the catalog
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        if self.project_type.trim().is_empty() {
            anyhow::bail!("Project type must be specified");
        }
        if catalog.project_type(&self.project_type).is_none() {
            return Err(GuardrailError::UnknownProjectType(self.project_type.clone()).into());
        }
        if let Some(id) = self.technologies.iter().find(|id| catalog.technology(id).is_none()) {
            return Err(GuardrailError::UnknownTechnology(id.clone()).into());
        }
        if let Some(id) = self.data_types.iter().find(|id| catalog.data_type(id).is_none()) {
            return Err(GuardrailError::UnknownDataType(id.clone()).into());
        }
        Ok(())
    }

    /// Validate and resolve into a finalized configuration
    pub fn to_config(&self, catalog: &Catalog) -> Result<ProjectConfig> {
        self.validate(catalog)?;

        let selection = Selection {
            project_type: Some(self.project_type.clone()),
            selected_technologies: self.technologies.clone(),
            selected_data_types: self.data_types.clone(),
            step: WizardStep::ConfiguringStack,
        };

        ProjectConfig::resolve(catalog, &selection)
            .ok_or_else(|| GuardrailError::UnknownProjectType(self.project_type.clone()).into())
    }
}
