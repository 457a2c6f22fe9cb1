//! Wizard controller and selection state
//!
//! The wizard walks the user from picking a project type, through
//! configuring the technology stack and handled data, to browsing the
//! guardrails for that configuration.
//!
//! # State Transitions
//!
//! ```text
//! SelectingType --select_project_type--> ConfiguringStack
//! ConfiguringStack --go_back_to_step1--> SelectingType
//! ConfiguringStack --complete--> Browsing
//! Browsing --reset--> SelectingType
//! ```
//!
//! There is no terminal state; a user can cycle through the wizard any
//! number of times. An operation requested from a state where it is not
//! defined is ignored and leaves the wizard unchanged.
//!
//! # Invariants
//!
//! - Every controller operation replaces the [`Selection`] value rather than
//!   editing it in place
//! - A [`ProjectConfig`] produced by `complete` is an immutable snapshot;
//!   nothing done to the wizard afterwards changes it
//! - `reset` leaves no trace of the previous configuration, so a following
//!   `select_project_type` seeds exactly as it would on a fresh wizard

use crate::catalog::{Catalog, DataCategory, ProjectType, Technology};
use crate::error::{GuardrailError, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Position in the wizard state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WizardStep {
    /// Choosing the kind of project
    #[default]
    SelectingType,
    /// Adjusting the seeded technology and data selections
    ConfiguringStack,
    /// Browsing guardrails for a completed configuration
    Browsing,
}

impl WizardStep {
    /// Get the step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::SelectingType => 1,
            Self::ConfiguringStack => 2,
            Self::Browsing => 3,
        }
    }

    /// Get the display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::SelectingType => "Project Type",
            Self::ConfiguringStack => "Stack & Data",
            Self::Browsing => "Guardrails",
        }
    }

    /// All steps in order, for step indicators.
    pub const ALL: [WizardStep; 3] = [Self::SelectingType, Self::ConfiguringStack, Self::Browsing];

    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 3;
}

/// The user's in-progress choices
///
/// Owned by the session. Controller operations produce a new value; the
/// query helpers here never mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Chosen project type id, unset until the first step completes
    pub project_type: Option<String>,
    /// Chosen technology ids
    pub selected_technologies: BTreeSet<String>,
    /// Chosen data category ids
    pub selected_data_types: BTreeSet<String>,
    /// Current wizard step
    pub step: WizardStep,
}

impl Selection {
    /// Selection seeded from a project type's defaults
    ///
    /// Technologies are the type's recommended ones. Data categories are
    /// the type's common ones plus every category marked default-selected.
    pub fn seeded(catalog: &Catalog, project_type: &ProjectType) -> Self {
        let selected_technologies = project_type.recommended_technologies.iter().cloned().collect();

        let selected_data_types = catalog
            .data_types()
            .iter()
            .filter(|dt| dt.default_selected || project_type.common_data_types.contains(&dt.id))
            .map(|dt| dt.id.clone())
            .collect();

        Self {
            project_type: Some(project_type.id.clone()),
            selected_technologies,
            selected_data_types,
            step: WizardStep::ConfiguringStack,
        }
    }

    /// Copy of this selection with `id` added to or removed from the technologies
    pub fn with_technology_toggled(&self, id: &str) -> Self {
        Self {
            selected_technologies: toggled(&self.selected_technologies, id),
            ..self.clone()
        }
    }

    /// Copy of this selection with `id` added to or removed from the data types
    pub fn with_data_type_toggled(&self, id: &str) -> Self {
        Self {
            selected_data_types: toggled(&self.selected_data_types, id),
            ..self.clone()
        }
    }

    /// Copy of this selection at a different step
    pub fn at_step(&self, step: WizardStep) -> Self {
        Self {
            step,
            ..self.clone()
        }
    }

    pub fn has_technology(&self, id: &str) -> bool {
        self.selected_technologies.contains(id)
    }

    pub fn has_data_type(&self, id: &str) -> bool {
        self.selected_data_types.contains(id)
    }
}

fn toggled(set: &BTreeSet<String>, id: &str) -> BTreeSet<String> {
    let mut next = set.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// A finalized project configuration
///
/// Ids have been resolved to full catalog entries, in catalog declaration
/// order. Fields are private so the snapshot cannot change after it is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    project_type: ProjectType,
    technologies: Vec<Technology>,
    data_types: Vec<DataCategory>,
}

impl ProjectConfig {
    /// Resolve a selection against the catalog
    ///
    /// Returns `None` when no project type has been chosen or the chosen
    /// one is not in the catalog. Ids that do not resolve are dropped.
    pub fn resolve(catalog: &Catalog, selection: &Selection) -> Option<Self> {
        let project_type = catalog.project_type(selection.project_type.as_deref()?)?.clone();

        let technologies = catalog
            .technologies()
            .iter()
            .filter(|t| selection.selected_technologies.contains(&t.id))
            .cloned()
            .collect();

        let data_types = catalog
            .data_types()
            .iter()
            .filter(|d| selection.selected_data_types.contains(&d.id))
            .cloned()
            .collect();

        Some(Self {
            project_type,
            technologies,
            data_types,
        })
    }

    pub fn project_type(&self) -> &ProjectType {
        &self.project_type
    }

    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    pub fn data_types(&self) -> &[DataCategory] {
        &self.data_types
    }

    /// Ids of the selected technologies
    pub fn tech_ids(&self) -> BTreeSet<String> {
        self.technologies.iter().map(|t| t.id.clone()).collect()
    }

    /// Ids of the selected data categories
    pub fn data_ids(&self) -> BTreeSet<String> {
        self.data_types.iter().map(|d| d.id.clone()).collect()
    }

    /// Check if a technology is part of this configuration
    pub fn has_technology(&self, id: &str) -> bool {
        self.technologies.iter().any(|t| t.id == id)
    }
}

/// Drives the wizard state machine over a catalog
#[derive(Debug, Clone)]
pub struct Wizard<'a> {
    catalog: &'a Catalog,
    selection: Selection,
    config: Option<ProjectConfig>,
}

impl<'a> Wizard<'a> {
    /// Create a wizard at the first step with an empty selection
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            config: None,
        }
    }

    /// Create a wizard that is already browsing a finalized configuration
    pub fn resume(catalog: &'a Catalog, config: ProjectConfig) -> Self {
        let selection = Selection {
            project_type: Some(config.project_type().id.clone()),
            selected_technologies: config.tech_ids(),
            selected_data_types: config.data_ids(),
            step: WizardStep::Browsing,
        };
        Self {
            catalog,
            selection,
            config: Some(config),
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn step(&self) -> WizardStep {
        self.selection.step
    }

    /// The completed configuration, present only while browsing
    pub fn config(&self) -> Option<&ProjectConfig> {
        self.config.as_ref()
    }

    /// The chosen project type, if any
    pub fn project_type(&self) -> Option<&'a ProjectType> {
        let catalog = self.catalog;
        self.selection
            .project_type
            .as_deref()
            .and_then(|id| catalog.project_type(id))
    }

    /// Choose a project type and seed the selection from its defaults
    ///
    /// Accepted while selecting or configuring. Choosing again, even the
    /// same type, discards any toggles made since the last seeding. The type
    /// is matched by id against the catalog and seeded from the catalog's
    /// entry; a type the catalog does not hold is ignored.
    pub fn select_project_type(&mut self, project_type: &ProjectType) {
        if self.step() == WizardStep::Browsing {
            debug!("Ignoring project type selection while browsing");
            return;
        }
        let catalog = self.catalog;
        let Some(project_type) = catalog.project_type(&project_type.id) else {
            debug!("Ignoring unknown project type: {}", project_type.id);
            return;
        };
        self.selection = Selection::seeded(catalog, project_type);
        info!(
            "Project type selected: {} ({} technologies, {} data types seeded)",
            project_type.id,
            self.selection.selected_technologies.len(),
            self.selection.selected_data_types.len()
        );
    }

    /// Choose a project type by id
    pub fn select_project_type_id(&mut self, id: &str) -> Result<()> {
        let catalog = self.catalog;
        let project_type = catalog
            .project_type(id)
            .ok_or_else(|| GuardrailError::UnknownProjectType(id.to_string()))?;
        self.select_project_type(project_type);
        Ok(())
    }

    /// Add or remove a technology
    ///
    /// Only applies while configuring, and only for ids in the catalog.
    pub fn toggle_technology(&mut self, id: &str) {
        if self.step() != WizardStep::ConfiguringStack {
            debug!("Ignoring technology toggle outside configuration: {}", id);
            return;
        }
        if self.catalog.technology(id).is_none() {
            debug!("Ignoring toggle of unknown technology: {}", id);
            return;
        }
        self.selection = self.selection.with_technology_toggled(id);
    }

    /// Add or remove a data category
    ///
    /// Only applies while configuring, and only for ids in the catalog.
    pub fn toggle_data_type(&mut self, id: &str) {
        if self.step() != WizardStep::ConfiguringStack {
            debug!("Ignoring data type toggle outside configuration: {}", id);
            return;
        }
        if self.catalog.data_type(id).is_none() {
            debug!("Ignoring toggle of unknown data type: {}", id);
            return;
        }
        self.selection = self.selection.with_data_type_toggled(id);
    }

    /// Return to project type selection, keeping the chosen type
    pub fn go_back_to_step1(&mut self) {
        if self.step() != WizardStep::ConfiguringStack {
            debug!("Ignoring go-back outside configuration");
            return;
        }
        self.selection = self.selection.at_step(WizardStep::SelectingType);
    }

    /// Finalize the configuration and move to browsing
    ///
    /// Returns the snapshot, or `None` (leaving the wizard unchanged) when
    /// not configuring or no project type has been chosen.
    pub fn complete(&mut self) -> Option<ProjectConfig> {
        if self.step() != WizardStep::ConfiguringStack {
            debug!("Ignoring completion outside configuration");
            return None;
        }
        let config = ProjectConfig::resolve(self.catalog, &self.selection)?;

        info!(
            "Configuration completed: {} with {} technologies and {} data types",
            config.project_type().id,
            config.technologies().len(),
            config.data_types().len()
        );
        self.selection = self.selection.at_step(WizardStep::Browsing);
        self.config = Some(config.clone());
        Some(config)
    }

    /// Discard everything and start over at the first step
    pub fn reset(&mut self) {
        info!("Wizard reset");
        self.selection = Selection::default();
        self.config = None;
    }
}
