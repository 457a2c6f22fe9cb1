//! Security Guardrails Library
//!
//! This library provides the core functionality for the security guardrails
//! wizard: the catalog, the wizard state machine, relevance evaluation and
//! the guardrail browser, plus the terminal UI built on top of them.

pub mod app;
pub mod browser;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod error;
pub mod feedback;
pub mod profile;
pub mod relevance;
pub mod report;
pub mod scrolling;
pub mod theme;
pub mod types;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState};
pub use browser::{
    guardrails_for_project_type, security_focus, view_guardrail, AnnotatedRecommendation,
    FocusNote, GuardrailBrowser, GuardrailView,
};
pub use catalog::{
    Catalog, CodeExample, DataCategory, Guardrail, ProjectType, Recommendation, Technology,
};
pub use error::{GuardrailError, Result};
pub use feedback::{Feedback, FeedbackError, FeedbackSink, LogFeedbackSink};
pub use profile::ProjectProfile;
pub use relevance::is_relevant;
pub use types::{Priority, RiskLevel, TechCategory};
pub use wizard::{ProjectConfig, Selection, Wizard, WizardStep};
