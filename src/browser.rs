//! Guardrail browser
//!
//! Filters the guardrail catalog down to a project type, annotates
//! recommendations with their relevance to a finalized configuration, and
//! tracks which guardrail (if any) is open in the detail view.
//!
//! Nothing in here can fail. Unknown ids produce empty results or are
//! ignored.

use crate::catalog::{Catalog, CodeExample, Guardrail, Recommendation};
use crate::relevance::is_relevant;
use crate::types::RiskLevel;
use crate::wizard::ProjectConfig;
use serde::Serialize;
use tracing::debug;

/// Guardrails that apply to a project type, in catalog declaration order
pub fn guardrails_for_project_type<'a>(catalog: &'a Catalog, project_type_id: &str) -> Vec<&'a Guardrail> {
    catalog
        .guardrails()
        .iter()
        .filter(|g| g.applies_to(project_type_id))
        .collect()
}

/// A recommendation paired with its relevance to the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRecommendation<'a> {
    pub recommendation: &'a Recommendation,
    pub relevant: bool,
}

/// Detail view of a single guardrail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardrailView<'a> {
    pub guardrail: &'a Guardrail,
    pub recommendations: Vec<AnnotatedRecommendation<'a>>,
    pub code_examples: &'a [CodeExample],
}

impl GuardrailView<'_> {
    /// Number of recommendations flagged relevant
    pub fn relevant_count(&self) -> usize {
        self.recommendations.iter().filter(|r| r.relevant).count()
    }
}

/// Annotate every recommendation of a guardrail; code examples pass through
pub fn view_guardrail<'a>(guardrail: &'a Guardrail, config: &ProjectConfig) -> GuardrailView<'a> {
    let tech_ids = config.tech_ids();
    let data_ids = config.data_ids();

    let recommendations = guardrail
        .recommendations
        .iter()
        .map(|recommendation| AnnotatedRecommendation {
            recommendation,
            relevant: is_relevant(recommendation, &tech_ids, &data_ids),
        })
        .collect();

    GuardrailView {
        guardrail,
        recommendations,
        code_examples: &guardrail.code_examples,
    }
}

/// Key areas to focus on for a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusNote {
    /// At least one selected data category is high risk
    HighRiskData,
    /// Node.js is part of the stack
    NodeApi,
    /// A SQL database is part of the stack
    SqlInjection,
    /// The project is an online store
    PaymentProtection,
}

impl FocusNote {
    pub fn message(&self) -> &'static str {
        match self {
            Self::HighRiskData => "High-risk data detected - prioritize all security recommendations",
            Self::NodeApi => "Node.js apps should focus on API security and input validation",
            Self::SqlInjection => "SQL databases require parameterized queries to prevent injection",
            Self::PaymentProtection => "E-commerce sites need strong payment information protection",
        }
    }

    /// How urgent the note is, used for colouring
    pub fn severity(&self) -> RiskLevel {
        match self {
            Self::HighRiskData => RiskLevel::High,
            Self::PaymentProtection => RiskLevel::Medium,
            Self::NodeApi | Self::SqlInjection => RiskLevel::Low,
        }
    }
}

/// Focus notes that apply to a configuration, in display order
pub fn security_focus(config: &ProjectConfig) -> Vec<FocusNote> {
    let mut notes = Vec::new();

    if config.data_types().iter().any(|d| d.risk_level.is_high()) {
        notes.push(FocusNote::HighRiskData);
    }
    if config.has_technology("nodejs") {
        notes.push(FocusNote::NodeApi);
    }
    if config.has_technology("mysql") || config.has_technology("postgresql") {
        notes.push(FocusNote::SqlInjection);
    }
    if config.project_type().id == "ecommerce" {
        notes.push(FocusNote::PaymentProtection);
    }

    notes
}

/// Browsing state for a completed configuration
///
/// Holds the filtered guardrail list and the currently opened guardrail.
/// Selecting and clearing only change what is shown.
#[derive(Debug, Clone)]
pub struct GuardrailBrowser<'a> {
    config: ProjectConfig,
    guardrails: Vec<&'a Guardrail>,
    selected: Option<&'a Guardrail>,
}

impl<'a> GuardrailBrowser<'a> {
    pub fn new(catalog: &'a Catalog, config: ProjectConfig) -> Self {
        let guardrails = guardrails_for_project_type(catalog, &config.project_type().id);
        debug!(
            "Browsing {} guardrails for project type {}",
            guardrails.len(),
            config.project_type().id
        );
        Self {
            config,
            guardrails,
            selected: None,
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Guardrails applicable to the configured project type
    pub fn guardrails(&self) -> &[&'a Guardrail] {
        &self.guardrails
    }

    /// The guardrail open in the detail view
    pub fn selected(&self) -> Option<&'a Guardrail> {
        self.selected
    }

    /// Open a guardrail by id
    ///
    /// Returns false (and changes nothing) if the id is not among the
    /// guardrails for this project type.
    pub fn select_guardrail(&mut self, id: &str) -> bool {
        match self.guardrails.iter().find(|g| g.id == id) {
            Some(guardrail) => {
                debug!("Opened guardrail {}", id);
                self.selected = Some(*guardrail);
                true
            }
            None => {
                debug!("Ignoring selection of unavailable guardrail {}", id);
                false
            }
        }
    }

    /// Return to the guardrail list
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Annotated view of the opened guardrail
    pub fn selected_view(&self) -> Option<GuardrailView<'a>> {
        self.selected.map(|g| view_guardrail(g, &self.config))
    }

    /// Focus notes for the configuration being browsed
    pub fn focus_notes(&self) -> Vec<FocusNote> {
        security_focus(&self.config)
    }
}
