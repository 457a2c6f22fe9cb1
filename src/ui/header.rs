//! Header and common widget rendering
//!
//! This module contains the title bar with the wizard step indicator, the
//! status line and the bottom navigation bar.

use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Styles, Theme, UiText};
use crate::wizard::WizardStep;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Header renderer for the title and step indicator
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            title: Line::from(vec![
                Span::styled(format!("🛡  {}", UiText::APP_TITLE), Styles::title()),
                Span::styled("  |  ", Styles::text_muted()),
                Span::styled(UiText::WELCOME, Styles::text_secondary()),
            ]),
        }
    }

    /// Render the title and step indicator
    pub fn render_header(&self, f: &mut Frame, area: Rect, step: WizardStep) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Paragraph::new(vec![self.title.clone(), step_indicator_line(step)])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::border_inactive()),
            )
            .alignment(Alignment::Center);
        f.render_widget(header, area);
    }
}

/// "Step N of 3" followed by every step, marked done, current or pending
pub fn step_indicator_line(current: WizardStep) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(
            "Step {} of {}   ",
            current.step_number(),
            WizardStep::TOTAL_STEPS
        ),
        Styles::text(),
    )];

    for (i, step) in WizardStep::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ─ ", Styles::text_muted()));
        }
        let completed = step.step_number() < current.step_number();
        let active = *step == current;
        let marker = if completed {
            "✓"
        } else if active {
            "●"
        } else {
            "○"
        };
        spans.push(Span::styled(
            format!("{} {}", marker, step.title()),
            Theme::step_style(completed, active),
        ));
    }

    Line::from(spans)
}

/// Render the one-line status message
pub fn render_status_bar(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(message.to_string(), Styles::text_secondary()),
    ]));
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode);
    let nav_bar = NavBar::new(nav_items);
    nav_bar.render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode, keybinding_ctx);
    help_overlay.render(f, f.area());
}
