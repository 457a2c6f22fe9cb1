//! Floating window component
//!
//! A bordered popup centered over a parent area, sized as a percentage of
//! the parent and clamped to min/max dimensions.

use crate::theme::{Colors, Styles, UiConstants};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Sizing and decoration for a floating window
#[derive(Debug, Clone)]
pub struct FloatingWindowConfig {
    pub title: String,
    pub width_percent: u16,
    pub height_percent: u16,
    pub min_width: u16,
    pub min_height: u16,
    pub max_width: u16,
    pub max_height: u16,
}

impl Default for FloatingWindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            width_percent: UiConstants::DIALOG_WIDTH_PCT,
            height_percent: 50,
            min_width: UiConstants::DIALOG_MIN_WIDTH,
            min_height: 8,
            max_width: 100,
            max_height: 40,
        }
    }
}

fn percent_of(value: u16, percent: u16) -> u16 {
    (u32::from(value) * u32::from(percent) / 100) as u16
}

pub struct FloatingWindow {
    config: FloatingWindowConfig,
}

impl FloatingWindow {
    pub fn new(config: FloatingWindowConfig) -> Self {
        Self { config }
    }

    /// Area the window occupies inside `parent`
    pub fn area(&self, parent: Rect) -> Rect {
        let c = &self.config;
        let width = percent_of(parent.width, c.width_percent)
            .clamp(c.min_width, c.max_width)
            .min(parent.width);
        let height = percent_of(parent.height, c.height_percent)
            .clamp(c.min_height, c.max_height)
            .min(parent.height);

        Rect {
            x: parent.x + (parent.width - width) / 2,
            y: parent.y + (parent.height - height) / 2,
            width,
            height,
        }
    }

    /// Clear the window area and draw its frame, returning the inner area
    pub fn render_frame(&self, f: &mut Frame, parent: Rect, footer: Option<&str>) -> Rect {
        let area = self.area(parent);
        f.render_widget(Clear, area);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
            .title(format!(" {} ", self.config.title))
            .title_style(Styles::title())
            .style(Styles::panel_bg());
        if let Some(footer) = footer {
            block = block.title_bottom(Line::styled(format!(" {} ", footer), Styles::text_muted()));
        }

        let inner = block.inner(area);
        f.render_widget(block, area);
        inner
    }

    /// Render lines inside the window
    pub fn render_lines(&self, f: &mut Frame, parent: Rect, lines: &[Line<'static>], footer: Option<&str>) {
        let inner = self.render_frame(f, parent, footer);
        let paragraph = Paragraph::new(lines.to_vec()).wrap(Wrap { trim: false });
        f.render_widget(paragraph, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_centered_and_clamped() {
        let window = FloatingWindow::new(FloatingWindowConfig {
            width_percent: 50,
            height_percent: 50,
            min_width: 10,
            min_height: 4,
            max_width: 30,
            max_height: 10,
            ..Default::default()
        });
        let area = window.area(Rect::new(0, 0, 100, 40));
        assert_eq!(area.width, 30);
        assert_eq!(area.height, 10);
        assert_eq!(area.x, 35);
        assert_eq!(area.y, 15);
    }

    #[test]
    fn test_area_never_exceeds_parent() {
        let window = FloatingWindow::new(FloatingWindowConfig::default());
        let parent = Rect::new(0, 0, 20, 5);
        let area = window.area(parent);
        assert!(area.width <= parent.width);
        assert!(area.height <= parent.height);
    }
}
