//! Application module
//!
//! Contains the interactive TUI: the event loop, key dispatch and the glue
//! between the wizard, the guardrail browser and the screens.
//!
//! # Module Structure
//! - `state` - Presentation state types (AppState, AppMode, tabs, dialogs)
//! - Main module - App struct and event loop

mod state;

pub use state::{
    AppMode, AppState, CodeView, ConfigTab, DetailTab, FeedbackDialogState, FeedbackField,
};

use crate::browser::GuardrailBrowser;
use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::Result;
use crate::feedback::{Feedback, FeedbackSink, LogFeedbackSink, MAX_MESSAGE_CHARS};
use crate::profile::ProjectProfile;
use crate::scrolling::ScrollState;
use crate::theme::UiConstants;
use crate::ui::{self, UiRenderer};
use crate::wizard::{ProjectConfig, Wizard, WizardStep};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lines scrolled by PageUp/PageDown on the detail screen
const DETAIL_PAGE: u16 = 10;

/// Main application struct
pub struct App<'a> {
    catalog: &'a Catalog,
    wizard: Wizard<'a>,
    browser: Option<GuardrailBrowser<'a>>,
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
    feedback_sink: Box<dyn FeedbackSink>,
    save_profile_path: Option<PathBuf>,
}

impl<'a> App<'a> {
    /// Create a new application instance at the first wizard step
    pub fn new(catalog: &'a Catalog, save_profile_path: Option<PathBuf>) -> Self {
        info!("Creating new App instance");
        Self {
            catalog,
            wizard: Wizard::new(catalog),
            browser: None,
            state: Self::fresh_state(catalog),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            feedback_sink: Box::new(LogFeedbackSink),
            save_profile_path,
        }
    }

    /// Create an application that starts browsing a finalized configuration
    pub fn with_config(
        catalog: &'a Catalog,
        config: ProjectConfig,
        save_profile_path: Option<PathBuf>,
    ) -> Self {
        info!("Resuming with project type {}", config.project_type().id);
        let mut app = Self::new(catalog, save_profile_path);
        app.wizard = Wizard::resume(catalog, config.clone());
        app.start_browsing(config);
        app
    }

    /// Replace the destination for submitted feedback
    pub fn with_feedback_sink(mut self, sink: Box<dyn FeedbackSink>) -> Self {
        self.feedback_sink = sink;
        self
    }

    fn fresh_state(catalog: &Catalog) -> AppState {
        AppState::new(
            catalog.project_types().len(),
            catalog.technologies().len(),
            catalog.data_types().len(),
        )
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mode(&self) -> AppMode {
        self.state.mode
    }

    pub fn wizard(&self) -> &Wizard<'a> {
        &self.wizard
    }

    pub fn browser(&self) -> Option<&GuardrailBrowser<'a>> {
        self.browser.as_ref()
    }

    pub fn keybinding_context(&self) -> &KeybindingContext {
        &self.keybinding_context
    }

    /// Toggle help overlay visibility
    pub fn toggle_help(&mut self) {
        self.state.help_visible = !self.state.help_visible;
    }

    /// Screen implied by the wizard and browser, ignoring dialogs
    fn screen_mode(&self) -> AppMode {
        match self.wizard.step() {
            WizardStep::SelectingType => AppMode::SelectProjectType,
            WizardStep::ConfiguringStack => AppMode::ConfigureStack,
            WizardStep::Browsing => {
                if self.browser.as_ref().and_then(|b| b.selected()).is_some() {
                    AppMode::GuardrailDetail
                } else {
                    AppMode::BrowseGuardrails
                }
            }
        }
    }

    fn sync_mode(&mut self) {
        let mode = if self.state.feedback.is_some() {
            AppMode::Feedback
        } else {
            self.screen_mode()
        };
        if mode != self.state.mode {
            debug!("Mode changed: {:?} -> {:?}", self.state.mode, mode);
            self.state.mode = mode;
        }
    }

    /// Run the main event loop until the user quits
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if crossterm::event::poll(Duration::from_millis(UiConstants::POLL_INTERVAL_MS))? {
                match crossterm::event::read()? {
                    Event::Key(key_event) => {
                        if self.handle_key_event(key_event)? {
                            break;
                        }
                    }
                    Event::Resize(_, height) => {
                        self.update_viewport(height);
                    }
                    _ => {}
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Draw the current screen
    pub fn render(&mut self, f: &mut Frame) {
        self.update_viewport(f.area().height);
        self.ui_renderer.render_with_context(
            f,
            &self.state,
            &self.wizard,
            self.browser.as_ref(),
            &self.keybinding_context,
        );
    }

    /// Fit list cursors to the terminal height
    fn update_viewport(&mut self, height: u16) {
        let reserved = UiConstants::HEADER_HEIGHT
            + UiConstants::STATUS_BAR_HEIGHT
            + UiConstants::NAV_BAR_HEIGHT
            + 2;
        let visible = usize::from(height.saturating_sub(reserved)).max(1);
        self.state.project_scroll.update_visible_items(visible);
        self.state.tech_scroll.update_visible_items(visible);
        self.state.data_scroll.update_visible_items(visible);
        self.state.guardrail_scroll.update_visible_items(visible);
    }

    /// Handle keyboard input events
    ///
    /// Returns `Ok(true)` when the application should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            info!("Interrupted with Ctrl+C");
            return Ok(true);
        }

        // Help overlay - ? or Esc dismisses it
        if self.state.help_visible {
            if matches!(key_event.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.toggle_help();
            }
            return Ok(false);
        }

        if self.state.mode == AppMode::Feedback {
            self.handle_feedback_input(key_event);
            return Ok(false);
        }

        let Some(action) = self.keybinding_context.action_for(&self.state.mode, &key_event) else {
            return Ok(false);
        };

        match action {
            KeyAction::Quit => {
                info!("Quit requested");
                return Ok(true);
            }
            KeyAction::Help => self.toggle_help(),
            KeyAction::NavigateUp => self.navigate_up(),
            KeyAction::NavigateDown => self.navigate_down(),
            KeyAction::PageUp => self.page_up(),
            KeyAction::PageDown => self.page_down(),
            KeyAction::Home => self.move_to_first(),
            KeyAction::End => self.move_to_last(),
            KeyAction::Select => self.handle_select(),
            KeyAction::Toggle => self.toggle_current_item(),
            KeyAction::SwitchTab => self.switch_tab(),
            KeyAction::Complete => self.complete_configuration(),
            KeyAction::Back => self.handle_back(),
            KeyAction::Reset => self.reset(),
            KeyAction::ToggleCode => {
                self.state.code_view = self.state.code_view.toggle();
                self.state.detail_offset = 0;
            }
            KeyAction::Feedback => self.open_feedback(),
            // Only meaningful inside the feedback dialog
            KeyAction::Submit | KeyAction::Cancel => {}
        }

        self.sync_mode();
        Ok(false)
    }

    /// List cursor of the current screen, if it has one
    fn active_scroll(&mut self) -> Option<&mut ScrollState> {
        match self.state.mode {
            AppMode::SelectProjectType => Some(&mut self.state.project_scroll),
            AppMode::ConfigureStack => match self.state.config_tab {
                ConfigTab::Technologies => Some(&mut self.state.tech_scroll),
                ConfigTab::DataTypes => Some(&mut self.state.data_scroll),
            },
            AppMode::BrowseGuardrails => Some(&mut self.state.guardrail_scroll),
            AppMode::GuardrailDetail | AppMode::Feedback => None,
        }
    }

    /// Largest useful line offset on the detail screen
    fn detail_max_offset(&self) -> u16 {
        let lines = self
            .browser
            .as_ref()
            .and_then(|b| b.selected_view())
            .map_or(0, |view| ui::detail_lines(&view, &self.state).len());
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    fn scroll_detail(&mut self, delta: i32) {
        let max = i32::from(self.detail_max_offset());
        let next = (i32::from(self.state.detail_offset) + delta).clamp(0, max);
        self.state.detail_offset = u16::try_from(next).unwrap_or(0);
    }

    fn navigate_up(&mut self) {
        if self.state.mode == AppMode::GuardrailDetail {
            self.scroll_detail(-1);
        } else if let Some(scroll) = self.active_scroll() {
            scroll.move_up();
        }
    }

    fn navigate_down(&mut self) {
        if self.state.mode == AppMode::GuardrailDetail {
            self.scroll_detail(1);
        } else if let Some(scroll) = self.active_scroll() {
            scroll.move_down();
        }
    }

    fn page_up(&mut self) {
        if self.state.mode == AppMode::GuardrailDetail {
            self.scroll_detail(-i32::from(DETAIL_PAGE));
        } else if let Some(scroll) = self.active_scroll() {
            scroll.page_up();
        }
    }

    fn page_down(&mut self) {
        if self.state.mode == AppMode::GuardrailDetail {
            self.scroll_detail(i32::from(DETAIL_PAGE));
        } else if let Some(scroll) = self.active_scroll() {
            scroll.page_down();
        }
    }

    fn move_to_first(&mut self) {
        if self.state.mode == AppMode::GuardrailDetail {
            self.state.detail_offset = 0;
        } else if let Some(scroll) = self.active_scroll() {
            scroll.move_to_first();
        }
    }

    fn move_to_last(&mut self) {
        if self.state.mode == AppMode::GuardrailDetail {
            self.state.detail_offset = self.detail_max_offset();
        } else if let Some(scroll) = self.active_scroll() {
            scroll.move_to_last();
        }
    }

    /// Handle Enter on list screens
    fn handle_select(&mut self) {
        match self.state.mode {
            AppMode::SelectProjectType => self.select_highlighted_project_type(),
            AppMode::BrowseGuardrails => self.open_highlighted_guardrail(),
            _ => {}
        }
    }

    fn select_highlighted_project_type(&mut self) {
        let catalog = self.catalog;
        let Some(project_type) = catalog.project_types().get(self.state.project_scroll.selected_index)
        else {
            return;
        };

        self.wizard.select_project_type(project_type);
        self.state.config_tab = ConfigTab::default();
        self.state.tech_scroll.move_to_first();
        self.state.data_scroll.move_to_first();
        self.state.status_message = format!(
            "{} {}: adjust your stack and the data you handle",
            project_type.icon, project_type.name
        );
    }

    fn toggle_current_item(&mut self) {
        let catalog = self.catalog;
        match self.state.config_tab {
            ConfigTab::Technologies => {
                if let Some(tech) = catalog.technologies().get(self.state.tech_scroll.selected_index) {
                    self.wizard.toggle_technology(&tech.id);
                }
            }
            ConfigTab::DataTypes => {
                if let Some(data) = catalog.data_types().get(self.state.data_scroll.selected_index) {
                    self.wizard.toggle_data_type(&data.id);
                }
            }
        }
    }

    fn switch_tab(&mut self) {
        match self.state.mode {
            AppMode::ConfigureStack => self.state.config_tab = self.state.config_tab.next(),
            AppMode::GuardrailDetail => {
                self.state.detail_tab = self.state.detail_tab.next();
                self.state.detail_offset = 0;
            }
            _ => {}
        }
    }

    fn complete_configuration(&mut self) {
        let Some(config) = self.wizard.complete() else {
            return;
        };

        if let Some(path) = &self.save_profile_path {
            match ProjectProfile::from_config(&config).save_to_file(path) {
                Ok(()) => info!("Profile saved to {}", path.display()),
                Err(e) => warn!("Failed to save profile to {}: {:#}", path.display(), e),
            }
        }

        self.start_browsing(config);
    }

    fn start_browsing(&mut self, config: ProjectConfig) {
        let browser = GuardrailBrowser::new(self.catalog, config);
        let count = browser.guardrails().len();
        self.state.guardrail_scroll.set_total_items(count);
        self.state.guardrail_scroll.move_to_first();
        self.state.status_message = format!(
            "{} security guardrails for your {}",
            count,
            browser.config().project_type().name
        );
        self.browser = Some(browser);
        self.sync_mode();
    }

    fn open_highlighted_guardrail(&mut self) {
        let index = self.state.guardrail_scroll.selected_index;
        let Some(browser) = self.browser.as_mut() else {
            return;
        };
        let Some(id) = browser.guardrails().get(index).map(|g| g.id.clone()) else {
            return;
        };
        if browser.select_guardrail(&id) {
            self.state.reset_detail_view();
        }
    }

    fn handle_back(&mut self) {
        match self.state.mode {
            AppMode::ConfigureStack => {
                self.wizard.go_back_to_step1();
                // Keep the cursor on the type that was chosen
                let chosen = self.wizard.selection().project_type.as_deref();
                if let Some(index) = self
                    .catalog
                    .project_types()
                    .iter()
                    .position(|pt| Some(pt.id.as_str()) == chosen)
                {
                    self.state.project_scroll.move_to_first();
                    for _ in 0..index {
                        self.state.project_scroll.move_down();
                    }
                }
            }
            AppMode::GuardrailDetail => {
                if let Some(browser) = self.browser.as_mut() {
                    browser.clear_selection();
                }
            }
            _ => {}
        }
    }

    /// Discard the configuration and start a new project
    fn reset(&mut self) {
        self.wizard.reset();
        self.browser = None;
        self.state = Self::fresh_state(self.catalog);
        self.state.status_message = "Starting a new project".to_string();
    }

    fn open_feedback(&mut self) {
        self.state.pre_dialog_mode = Some(self.state.mode);
        self.state.feedback = Some(FeedbackDialogState::default());
    }

    fn close_feedback(&mut self, status: &str) {
        self.state.feedback = None;
        self.state.pre_dialog_mode = None;
        self.state.status_message = status.to_string();
        self.sync_mode();
    }

    /// Feed a key to the feedback dialog
    fn handle_feedback_input(&mut self, key_event: KeyEvent) {
        match self.keybinding_context.action_for(&AppMode::Feedback, &key_event) {
            Some(KeyAction::Submit) => return self.submit_feedback(),
            Some(KeyAction::Cancel) => return self.close_feedback("Feedback cancelled"),
            _ => {}
        }

        let Some(dialog) = self.state.feedback.as_mut() else {
            return;
        };
        if key_event.code == KeyCode::Tab {
            dialog.switch_focus();
            return;
        }

        match dialog.focus {
            FeedbackField::Rating => match key_event.code {
                KeyCode::Char(c) => dialog.set_rating_digit(c),
                KeyCode::Left | KeyCode::Down => dialog.decrease_rating(),
                KeyCode::Right | KeyCode::Up => dialog.increase_rating(),
                _ => {}
            },
            FeedbackField::Message => match key_event.code {
                KeyCode::Char(c) if dialog.message.chars().count() < MAX_MESSAGE_CHARS => {
                    dialog.message.push(c);
                }
                KeyCode::Backspace => {
                    dialog.message.pop();
                }
                _ => {}
            },
        }
    }

    fn submit_feedback(&mut self) {
        let Some(dialog) = self.state.feedback.as_mut() else {
            return;
        };
        let Some(rating) = dialog.rating else {
            dialog.error = Some("Choose a rating from 1 to 5".to_string());
            return;
        };

        let result = Feedback::new(rating, dialog.message.clone())
            .and_then(|feedback| self.feedback_sink.submit(&feedback));

        match result {
            Ok(()) => self.close_feedback("Thank you for your feedback!"),
            Err(e) => {
                warn!("Feedback not sent: {}", e);
                dialog.error = Some(e.to_string());
            }
        }
    }
}
