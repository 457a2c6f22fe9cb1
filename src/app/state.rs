//! Application state definitions
//!
//! Contains the presentation state for the TUI: which screen is showing,
//! list cursors, tabs and the feedback dialog. Domain state (selection,
//! finalized configuration, opened guardrail) lives in the wizard and
//! browser, and the mode is derived from them.

use crate::feedback::{MAX_RATING, MIN_RATING};
use crate::scrolling::ScrollState;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Step 1 - choose a project type
    SelectProjectType,
    /// Step 2 - toggle technologies and data categories
    ConfigureStack,
    /// Step 3 - list of guardrails for the configuration
    BrowseGuardrails,
    /// Step 3 - one guardrail opened
    GuardrailDetail,
    /// Feedback dialog over the previous screen
    Feedback,
}

impl AppMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::SelectProjectType => "Select Project Type",
            Self::ConfigureStack => "Configure Stack & Data",
            Self::BrowseGuardrails => "Security Guardrails",
            Self::GuardrailDetail => "Guardrail Details",
            Self::Feedback => "Feedback",
        }
    }
}

/// Tabs of the configuration screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigTab {
    #[default]
    Technologies,
    DataTypes,
}

impl ConfigTab {
    pub fn next(self) -> Self {
        match self {
            Self::Technologies => Self::DataTypes,
            Self::DataTypes => Self::Technologies,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Technologies => "Technologies",
            Self::DataTypes => "Data Handled",
        }
    }
}

/// Tabs of the guardrail detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Recommendations,
    CodeExamples,
}

impl DetailTab {
    pub fn next(self) -> Self {
        match self {
            Self::Recommendations => Self::CodeExamples,
            Self::CodeExamples => Self::Recommendations,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Recommendations => "Recommendations",
            Self::CodeExamples => "Code Examples",
        }
    }
}

/// Which half of a code example is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeView {
    #[default]
    Vulnerable,
    Secure,
}

impl CodeView {
    pub fn toggle(self) -> Self {
        match self {
            Self::Vulnerable => Self::Secure,
            Self::Secure => Self::Vulnerable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Vulnerable => "Vulnerable code",
            Self::Secure => "Secure code",
        }
    }
}

/// Field focused in the feedback dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackField {
    #[default]
    Rating,
    Message,
}

/// Feedback dialog input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDialogState {
    /// Chosen rating, unset until the user picks one
    pub rating: Option<u8>,
    pub message: String,
    pub focus: FeedbackField,
    /// Validation or delivery error from the last submit attempt
    pub error: Option<String>,
}

impl FeedbackDialogState {
    /// Set the rating from a digit key; other characters are ignored
    pub fn set_rating_digit(&mut self, c: char) {
        if let Some(rating) = c.to_digit(10).map(|d| d as u8) {
            if (MIN_RATING..=MAX_RATING).contains(&rating) {
                self.rating = Some(rating);
                self.error = None;
            }
        }
    }

    pub fn increase_rating(&mut self) {
        self.rating = Some(self.rating.map_or(MIN_RATING, |r| (r + 1).min(MAX_RATING)));
    }

    pub fn decrease_rating(&mut self) {
        self.rating = Some(self.rating.map_or(MIN_RATING, |r| r.saturating_sub(1).max(MIN_RATING)));
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            FeedbackField::Rating => FeedbackField::Message,
            FeedbackField::Message => FeedbackField::Rating,
        };
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Cursor in the project type list
    pub project_scroll: ScrollState,
    /// Active tab of the configuration screen
    pub config_tab: ConfigTab,
    /// Cursor in the technology list
    pub tech_scroll: ScrollState,
    /// Cursor in the data category list
    pub data_scroll: ScrollState,
    /// Cursor in the guardrail list
    pub guardrail_scroll: ScrollState,
    /// Active tab of the detail screen
    pub detail_tab: DetailTab,
    /// Line offset of the detail text
    pub detail_offset: u16,
    /// Vulnerable or secure half of the code examples
    pub code_view: CodeView,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Feedback dialog, present while it is open
    pub feedback: Option<FeedbackDialogState>,
    /// Mode to return to when the feedback dialog closes
    pub pre_dialog_mode: Option<AppMode>,
}

impl AppState {
    /// Fresh state for catalog tables of the given sizes
    pub fn new(project_types: usize, technologies: usize, data_types: usize) -> Self {
        Self {
            mode: AppMode::SelectProjectType,
            project_scroll: ScrollState::new(project_types, 10),
            config_tab: ConfigTab::default(),
            tech_scroll: ScrollState::new(technologies, 10),
            data_scroll: ScrollState::new(data_types, 10),
            guardrail_scroll: ScrollState::new(0, 10),
            detail_tab: DetailTab::default(),
            detail_offset: 0,
            code_view: CodeView::default(),
            help_visible: false,
            status_message: "Choose the kind of project you are building".to_string(),
            feedback: None,
            pre_dialog_mode: None,
        }
    }

    /// Reset the detail screen to its first tab, top of page
    pub fn reset_detail_view(&mut self) {
        self.detail_tab = DetailTab::default();
        self.detail_offset = 0;
        self.code_view = CodeView::default();
    }
}
