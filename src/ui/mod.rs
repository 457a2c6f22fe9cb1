//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title, step indicator, status line and nav bar
//! - `screens` - Wizard steps 1 and 2 (project type, stack and data)
//! - `guardrails` - Guardrail list and detail screens
//! - `dialogs` - Feedback dialog

mod dialogs;
mod guardrails;
mod header;
mod screens;

use crate::app::{AppMode, AppState};
use crate::browser::GuardrailBrowser;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use crate::wizard::Wizard;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use guardrails::{detail_lines, focus_lines};
pub use header::{step_indicator_line, HeaderRenderer};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI with keybinding context
    pub fn render_with_context(
        &self,
        f: &mut Frame,
        state: &AppState,
        wizard: &Wizard<'_>,
        browser: Option<&GuardrailBrowser<'_>>,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(UiConstants::HEADER_HEIGHT),
                Constraint::Min(1), // Main content area
                Constraint::Length(UiConstants::STATUS_BAR_HEIGHT),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(f.area());

        self.header.render_header(f, chunks[0], wizard.step());

        // The dialog floats over the screen it was opened from
        let screen = match state.mode {
            AppMode::Feedback => state.pre_dialog_mode.unwrap_or(AppMode::SelectProjectType),
            mode => mode,
        };

        match (screen, browser) {
            (AppMode::SelectProjectType, _) => {
                screens::render_project_type_screen(f, chunks[1], state, wizard);
            }
            (AppMode::ConfigureStack, _) => {
                screens::render_configure_screen(f, chunks[1], state, wizard);
            }
            (AppMode::BrowseGuardrails, Some(browser)) => {
                guardrails::render_browse_screen(f, chunks[1], state, browser);
            }
            (AppMode::GuardrailDetail, Some(browser)) => {
                guardrails::render_detail_screen(f, chunks[1], state, browser);
            }
            _ => {}
        }

        header::render_status_bar(f, chunks[2], &state.status_message);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[3]);

        if let Some(dialog) = &state.feedback {
            dialogs::render_feedback_dialog(f, dialog);
        }

        // Render help overlay if visible (on top of everything)
        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}
