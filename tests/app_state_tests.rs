//! Tests for the interactive application
//!
//! Drives `App` with key events the way the event loop does, and renders it
//! into a test backend.
//!
//! These tests verify:
//! - Mode follows the wizard step, browser selection and dialogs
//! - Key dispatch per screen
//! - The feedback dialog and help overlay
//! - Profile saving on completion

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use guardrails::app::FeedbackField;
use guardrails::{
    App, AppMode, Catalog, Feedback, FeedbackError, FeedbackSink, ProjectProfile, Selection,
    WizardStep,
};
use ratatui::{backend::TestBackend, Terminal};
use std::cell::RefCell;
use std::rc::Rc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App<'_>, code: KeyCode) -> bool {
    app.handle_key_event(key(code)).unwrap()
}

fn press_all(app: &mut App<'_>, codes: &[KeyCode]) {
    for code in codes {
        assert!(!press(app, *code));
    }
}

fn type_str(app: &mut App<'_>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Render the app and flatten the screen into one string
fn screen(app: &mut App<'_>) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Walk to the mobile project type and select it
fn select_mobile(app: &mut App<'_>) {
    press_all(app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
}

#[derive(Clone, Default)]
struct RecordingSink {
    received: Rc<RefCell<Vec<Feedback>>>,
}

impl FeedbackSink for RecordingSink {
    fn submit(&self, feedback: &Feedback) -> Result<(), FeedbackError> {
        self.received.borrow_mut().push(feedback.clone());
        Ok(())
    }
}

struct FailingSink;

impl FeedbackSink for FailingSink {
    fn submit(&self, _feedback: &Feedback) -> Result<(), FeedbackError> {
        Err(FeedbackError::Delivery("service unavailable".to_string()))
    }
}

// =============================================================================
// Wizard Flow Tests
// =============================================================================

#[test]
fn test_app_starts_at_project_type_selection() {
    let catalog = Catalog::builtin();
    let app = App::new(&catalog, None);
    assert_eq!(app.mode(), AppMode::SelectProjectType);
    assert_eq!(app.wizard().step(), WizardStep::SelectingType);
    assert!(app.browser().is_none());
    assert!(!app.state().help_visible);
}

#[test]
fn test_enter_selects_highlighted_project_type() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);

    assert_eq!(app.mode(), AppMode::ConfigureStack);
    let selection = app.wizard().selection();
    assert_eq!(selection.project_type.as_deref(), Some("mobile"));
    assert!(selection.has_technology("flutter"));
    assert!(selection.has_data_type("content"));
}

#[test]
fn test_space_toggles_item_on_active_tab() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);

    // First technology in the catalog is React, not seeded for mobile
    press(&mut app, KeyCode::Char(' '));
    assert!(app.wizard().selection().has_technology("react"));
    press(&mut app, KeyCode::Char(' '));
    assert!(!app.wizard().selection().has_technology("react"));

    // First data category is user accounts, seeded for mobile
    press_all(&mut app, &[KeyCode::Tab, KeyCode::Char(' ')]);
    assert!(!app.wizard().selection().has_data_type("user_accounts"));
}

#[test]
fn test_back_returns_to_type_list_with_cursor_on_choice() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode(), AppMode::SelectProjectType);
    assert_eq!(app.state().project_scroll.selected_index, 3);
    assert_eq!(app.wizard().selection().project_type.as_deref(), Some("mobile"));
}

#[test]
fn test_complete_opens_guardrail_list() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode(), AppMode::BrowseGuardrails);
    assert_eq!(app.wizard().step(), WizardStep::Browsing);
    let browser = app.browser().unwrap();
    let ids: Vec<&str> = browser.guardrails().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["authentication", "api_security", "input_validation", "general_security"]
    );
    assert!(app.state().status_message.starts_with("4 security guardrails"));
}

#[test]
fn test_detail_open_and_back() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);

    assert_eq!(app.mode(), AppMode::GuardrailDetail);
    assert_eq!(
        app.browser().and_then(|b| b.selected()).map(|g| g.id.as_str()),
        Some("api_security")
    );

    press(&mut app, KeyCode::Char('b'));
    assert_eq!(app.mode(), AppMode::BrowseGuardrails);
    assert!(app.browser().unwrap().selected().is_none());
}

#[test]
fn test_back_in_guardrail_list_does_nothing() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Esc]);
    assert_eq!(app.mode(), AppMode::BrowseGuardrails);
}

#[test]
fn test_reset_starts_over() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    select_mobile(&mut app);
    press_all(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Char('r')]);

    assert_eq!(app.mode(), AppMode::SelectProjectType);
    assert_eq!(app.wizard().selection(), &Selection::default());
    assert!(app.browser().is_none());
    assert_eq!(app.state().project_scroll.selected_index, 0);
}

#[test]
fn test_with_config_starts_browsing() {
    let catalog = Catalog::builtin();
    let mut wizard = guardrails::Wizard::new(&catalog);
    wizard.select_project_type_id("api").unwrap();
    let config = wizard.complete().unwrap();

    let app = App::with_config(&catalog, config.clone(), None);
    assert_eq!(app.mode(), AppMode::BrowseGuardrails);
    assert_eq!(app.browser().map(|b| b.config()), Some(&config));
}

#[test]
fn test_completion_saves_profile() {
    let catalog = Catalog::builtin();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");

    let mut app = App::new(&catalog, Some(path.clone()));
    select_mobile(&mut app);
    press(&mut app, KeyCode::Enter);

    let profile = ProjectProfile::load_from_file(&path).unwrap();
    assert_eq!(profile.project_type, "mobile");
    assert_eq!(
        profile.to_config(&catalog).unwrap(),
        *app.browser().unwrap().config()
    );
}

#[test]
fn test_unwritable_profile_path_does_not_block_browsing() {
    let catalog = Catalog::builtin();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("profile.json");

    let mut app = App::new(&catalog, Some(path.clone()));
    select_mobile(&mut app);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode(), AppMode::BrowseGuardrails);
    assert!(!path.exists());
}

// =============================================================================
// Global Key Tests
// =============================================================================

#[test]
fn test_quit_keys() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    assert!(press(&mut app, KeyCode::Char('q')));

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key_event(ctrl_c).unwrap());
}

#[test]
fn test_key_release_is_ignored() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    assert!(!app.handle_key_event(release).unwrap());
    assert_eq!(app.mode(), AppMode::SelectProjectType);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.state().help_visible);

    // Neither Enter nor q act while help is open
    assert!(!press(&mut app, KeyCode::Enter));
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(app.mode(), AppMode::SelectProjectType);

    press(&mut app, KeyCode::Esc);
    assert!(!app.state().help_visible);
}

// =============================================================================
// Feedback Dialog Tests
// =============================================================================

#[test]
fn test_feedback_submit_and_return() {
    let catalog = Catalog::builtin();
    let sink = RecordingSink::default();
    let mut app = App::new(&catalog, None).with_feedback_sink(Box::new(sink.clone()));
    select_mobile(&mut app);

    press(&mut app, KeyCode::Char('f'));
    assert_eq!(app.mode(), AppMode::Feedback);
    assert_eq!(app.state().pre_dialog_mode, Some(AppMode::ConfigureStack));

    press(&mut app, KeyCode::Char('4'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(
        app.state().feedback.as_ref().map(|d| d.focus),
        Some(FeedbackField::Message)
    );
    // Global keys are plain text inside the dialog
    type_str(&mut app, "quite helpful");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode(), AppMode::ConfigureStack);
    assert!(app.state().feedback.is_none());
    assert_eq!(app.state().status_message, "Thank you for your feedback!");

    let received = sink.received.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].rating(), 4);
    assert_eq!(received[0].message(), "quite helpful");
}

#[test]
fn test_feedback_requires_rating() {
    let catalog = Catalog::builtin();
    let sink = RecordingSink::default();
    let mut app = App::new(&catalog, None).with_feedback_sink(Box::new(sink.clone()));

    press_all(&mut app, &[KeyCode::Char('f'), KeyCode::Enter]);
    assert_eq!(app.mode(), AppMode::Feedback);
    assert!(app.state().feedback.as_ref().unwrap().error.is_some());
    assert!(sink.received.borrow().is_empty());
}

#[test]
fn test_feedback_cancel() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    press_all(&mut app, &[KeyCode::Char('f'), KeyCode::Char('5'), KeyCode::Esc]);

    assert_eq!(app.mode(), AppMode::SelectProjectType);
    assert_eq!(app.state().status_message, "Feedback cancelled");
}

#[test]
fn test_feedback_delivery_failure_keeps_dialog_open() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None).with_feedback_sink(Box::new(FailingSink));
    press_all(&mut app, &[KeyCode::Char('f'), KeyCode::Char('3'), KeyCode::Enter]);

    assert_eq!(app.mode(), AppMode::Feedback);
    let error = app.state().feedback.as_ref().unwrap().error.clone().unwrap();
    assert!(error.contains("service unavailable"));
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_render_each_step() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);

    let text = screen(&mut app);
    assert!(text.contains("Step 1 of 3"));
    assert!(text.contains("Website"));

    select_mobile(&mut app);
    let text = screen(&mut app);
    assert!(text.contains("Step 2 of 3"));
    assert!(text.contains("Flutter"));

    press(&mut app, KeyCode::Enter);
    let text = screen(&mut app);
    assert!(text.contains("Step 3 of 3"));
    assert!(text.contains("Authentication Security"));

    press(&mut app, KeyCode::Enter);
    let text = screen(&mut app);
    assert!(text.contains("Use password hashing"));
}

#[test]
fn test_render_feedback_dialog_over_screen() {
    let catalog = Catalog::builtin();
    let mut app = App::new(&catalog, None);
    press(&mut app, KeyCode::Char('f'));

    let text = screen(&mut app);
    assert!(text.contains("Send Feedback"));
    assert!(text.contains("Step 1 of 3"));
}
