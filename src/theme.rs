//! Centralized theme and styling for the TUI
//!
//! Single source of truth for the colors and styles used by the screens.
//!
//! # Usage
//! ```rust
//! use guardrails::theme::{Colors, Styles, Theme};
//! use guardrails::types::RiskLevel;
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let risk_style = Theme::risk_style(RiskLevel::High);
//! ```

use crate::types::{Priority, RiskLevel};
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Background of code blocks
    pub const BG_CODE: Color = Color::Rgb(30, 30, 40);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Color::Cyan;

    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Step Indicator Colors
    // -------------------------------------------------------------------------

    pub const STEP_ACTIVE: Color = Color::Yellow;

    pub const STEP_COMPLETE: Color = Color::Green;

    pub const STEP_PENDING: Color = Color::Gray;

    // -------------------------------------------------------------------------
    // Code Example Colors
    // -------------------------------------------------------------------------

    /// Vulnerable snippet accent
    pub const CODE_BAD: Color = Color::LightRed;

    /// Secure snippet accent
    pub const CODE_GOOD: Color = Color::LightGreen;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Italic muted note, e.g. "less relevant" hints
    pub fn note() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab label
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn tab_inactive() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }

    /// Code block body
    pub fn code() -> Style {
        Style::default().fg(Colors::FG_PRIMARY).bg(Colors::BG_CODE)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups for domain values
pub struct Theme;

impl Theme {
    /// Color for a risk level
    pub fn risk_color(level: RiskLevel) -> Color {
        match level {
            RiskLevel::High => Colors::ERROR,
            RiskLevel::Medium => Colors::WARNING,
            RiskLevel::Low => Colors::PRIMARY,
        }
    }

    /// Text style for a risk level
    pub fn risk_style(level: RiskLevel) -> Style {
        match level {
            RiskLevel::High => Style::default()
                .fg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Self::risk_color(level)),
        }
    }

    /// Badge style for a recommendation priority
    pub fn priority_style(priority: Priority) -> Style {
        match priority {
            Priority::High => Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
            Priority::Medium => Style::default()
                .fg(Colors::SELECTED_FG)
                .bg(Colors::WARNING),
            Priority::Low => Style::default()
                .fg(Colors::FG_PRIMARY)
                .bg(Colors::INFO),
        }
    }

    /// Style for a wizard step in the step indicator
    pub fn step_style(completed: bool, active: bool) -> Style {
        if completed {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}

// =============================================================================
// UI CONSTANTS
// =============================================================================

/// UI dimension and layout constants
pub struct UiConstants;

impl UiConstants {
    /// Default dialog width percentage
    pub const DIALOG_WIDTH_PCT: u16 = 60;

    /// Minimum dialog width
    pub const DIALOG_MIN_WIDTH: u16 = 40;

    /// Nav bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Title + step indicator height
    pub const HEADER_HEIGHT: u16 = 4;

    /// Status bar height
    pub const STATUS_BAR_HEIGHT: u16 = 1;

    /// Event poll interval in milliseconds
    pub const POLL_INTERVAL_MS: u64 = 100;
}

/// Common UI text strings
pub struct UiText;

impl UiText {
    pub const APP_TITLE: &'static str = "Security Guardrails";
    pub const LESS_RELEVANT: &'static str =
        "This recommendation is less relevant for your selected project configuration.";
    pub const WELCOME: &'static str =
        "Tell us about your project to receive tailored security recommendations.";
    pub const DISCLAIMER: &'static str =
        "This is a static demonstration tool and not a replacement for professional security auditing.";
}
