//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current application mode.
//! The same registry drives key dispatch, the nav bar and the help overlay, so
//! what is shown to the user is always what the keys do.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    PageUp,
    PageDown,
    Home,
    End,
    Select,
    Back,
    Quit,
    Help,
    Toggle,
    SwitchTab,
    Complete,
    Reset,
    ToggleCode,
    Feedback,
    Submit,
    Cancel,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Check if a key event triggers this binding
    ///
    /// Letter keys match either case; Shift is ignored for them.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
        if modifiers != self.modifiers {
            return false;
        }
        match (self.key, event.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes except the feedback dialog)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('f'), KeyAction::Feedback, "F", "Feedback"),
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        let list_navigation = || {
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Navigate up"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Navigate down"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Navigate up"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Navigate down"),
                Keybinding::new(KeyCode::PageUp, KeyAction::PageUp, "PgUp", "Page up"),
                Keybinding::new(KeyCode::PageDown, KeyAction::PageDown, "PgDn", "Page down"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "Go to first"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Go to last"),
            ]
        };

        // Step 1: project type
        let mut bindings = list_navigation();
        bindings.push(Keybinding::new(
            KeyCode::Enter,
            KeyAction::Select,
            "Enter",
            "Choose project type",
        ));
        self.mode_bindings.insert(AppMode::SelectProjectType, bindings);

        // Step 2: stack and data
        let mut bindings = list_navigation();
        bindings.extend([
            Keybinding::new(KeyCode::Char(' '), KeyAction::Toggle, "Space", "Toggle item"),
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchTab, "Tab", "Switch tab"),
            Keybinding::new(KeyCode::Enter, KeyAction::Complete, "Enter", "Get recommendations"),
            Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back"),
        ]);
        self.mode_bindings.insert(AppMode::ConfigureStack, bindings);

        // Step 3: guardrail list
        let mut bindings = list_navigation();
        bindings.extend([
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Open guardrail"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "New project"),
        ]);
        self.mode_bindings.insert(AppMode::BrowseGuardrails, bindings);

        // Step 3: guardrail detail
        let mut bindings = list_navigation();
        bindings.extend([
            Keybinding::new(KeyCode::Tab, KeyAction::SwitchTab, "Tab", "Switch tab"),
            Keybinding::new(KeyCode::Char('v'), KeyAction::ToggleCode, "V", "Vulnerable/secure"),
            Keybinding::new(KeyCode::Char('b'), KeyAction::Back, "B", "Back to list"),
            Keybinding::new(KeyCode::Esc, KeyAction::Back, "Esc", "Back to list"),
            Keybinding::new(KeyCode::Char('r'), KeyAction::Reset, "R", "New project"),
        ]);
        self.mode_bindings.insert(AppMode::GuardrailDetail, bindings);

        // Feedback dialog; text keys are handled by the dialog itself
        self.mode_bindings.insert(
            AppMode::Feedback,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::SwitchTab, "Tab", "Rating/message"),
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Send"),
                Keybinding::new(KeyCode::Esc, KeyAction::Cancel, "Esc", "Cancel"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }

        // Letters belong to the message text while the dialog is open
        if *mode != AppMode::Feedback {
            bindings.extend(self.global_bindings.iter());
        }

        bindings
    }

    /// Resolve a key event to an action in the given mode
    ///
    /// Mode bindings win over global ones.
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = match mode {
            AppMode::SelectProjectType => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::ConfigureStack => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Toggle,
                KeyAction::SwitchTab,
                KeyAction::Complete,
                KeyAction::Back,
                KeyAction::Help,
            ],
            AppMode::BrowseGuardrails => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::Select,
                KeyAction::Reset,
                KeyAction::Feedback,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::GuardrailDetail => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::SwitchTab,
                KeyAction::ToggleCode,
                KeyAction::Back,
                KeyAction::Help,
            ],
            AppMode::Feedback => vec![KeyAction::SwitchTab, KeyAction::Submit, KeyAction::Cancel],
        };

        // Combine Up/Down into single item for cleaner display
        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            if (action == KeyAction::NavigateUp || action == KeyAction::NavigateDown) && has_nav {
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                if action == KeyAction::NavigateUp || action == KeyAction::NavigateDown {
                    let label = if *mode == AppMode::GuardrailDetail {
                        "Scroll"
                    } else {
                        "Navigate"
                    };
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: label.to_string(),
                    });
                    has_nav = true;
                } else {
                    items.push(NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    });
                }
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let section = |title: &str, filter: fn(KeyAction) -> bool| {
            let items: Vec<(String, String)> = self
                .get_bindings(mode)
                .into_iter()
                .filter(|b| filter(b.action))
                .map(|b| (b.display.clone(), b.description.clone()))
                .collect();
            (!items.is_empty()).then(|| HelpSection {
                title: title.to_string(),
                items,
            })
        };

        [
            section("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::PageUp
                        | KeyAction::PageDown
                        | KeyAction::Home
                        | KeyAction::End
                )
            }),
            section("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Select
                        | KeyAction::Toggle
                        | KeyAction::SwitchTab
                        | KeyAction::Complete
                        | KeyAction::ToggleCode
                        | KeyAction::Reset
                        | KeyAction::Submit
                        | KeyAction::Cancel
                )
            }),
            section("General", |a| {
                matches!(
                    a,
                    KeyAction::Back | KeyAction::Feedback | KeyAction::Help | KeyAction::Quit
                )
            }),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
