//! Reusable TUI components
//!
//! - `keybindings` - context-aware key registry used for dispatch and hints
//! - `nav_bar` - single-line key hint bar
//! - `floating_window` - centered popup frame
//! - `help_overlay` - `?` help popup built from the key registry

pub mod floating_window;
pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;
