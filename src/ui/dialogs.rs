//! Dialog rendering module
//!
//! Renders the feedback dialog as a floating window over the current screen.

use crate::app::{FeedbackDialogState, FeedbackField};
use crate::components::floating_window::{FloatingWindow, FloatingWindowConfig};
use crate::feedback::MAX_RATING;
use crate::theme::{Colors, Styles};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Stars for a rating, filled up to the rating and hollow after
fn stars(rating: Option<u8>) -> String {
    let filled = usize::from(rating.unwrap_or(0));
    (0..usize::from(MAX_RATING))
        .map(|i| if i < filled { '★' } else { '☆' })
        .collect()
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::text_secondary()
    };
    Span::styled(format!("{}{}", if focused { "> " } else { "  " }, label), style)
}

/// Render the feedback dialog
pub fn render_feedback_dialog(f: &mut Frame, dialog: &FeedbackDialogState) {
    let window = FloatingWindow::new(FloatingWindowConfig {
        title: "Send Feedback".to_string(),
        height_percent: 40,
        min_height: 10,
        max_width: 80,
        max_height: 16,
        ..Default::default()
    });

    let rating_focused = dialog.focus == FeedbackField::Rating;
    let mut lines = vec![
        Line::from(Span::styled("How useful were these recommendations?", Styles::text())),
        Line::from(""),
        Line::from(vec![
            field_label("Rating:  ", rating_focused),
            Span::styled(stars(dialog.rating), Style::default().fg(Colors::SECONDARY)),
            Span::styled("  (1-5)", Styles::text_muted()),
        ]),
        Line::from(""),
        Line::from(field_label("Message:", !rating_focused)),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(dialog.message.clone(), Styles::text()),
            Span::styled(if rating_focused { "" } else { "_" }, Styles::text_muted()),
        ]),
    ];

    if let Some(error) = &dialog.error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(error.clone(), Styles::error())));
    }

    window.render_lines(f, f.area(), &lines, Some("Tab switch field | Enter send | Esc cancel"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(None), "☆☆☆☆☆");
        assert_eq!(stars(Some(3)), "★★★☆☆");
        assert_eq!(stars(Some(5)), "★★★★★");
    }
}
