//! Guardrail list and detail screens (wizard step 3)

use crate::app::{AppState, CodeView, DetailTab};
use crate::browser::{FocusNote, GuardrailBrowser, GuardrailView};
use crate::theme::{Colors, Styles, Theme, UiText};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Lines of the security focus panel
pub fn focus_lines(notes: &[FocusNote]) -> Vec<Line<'static>> {
    if notes.is_empty() {
        return vec![Line::from(Span::styled(
            "No specific focus areas for this configuration.",
            Styles::note(),
        ))];
    }

    notes
        .iter()
        .map(|note| {
            Line::from(vec![
                Span::styled("● ", Theme::risk_style(note.severity())),
                Span::styled(note.message(), Styles::text()),
            ])
        })
        .collect()
}

/// Step 3: guardrails for the configuration and the focus panel
pub fn render_browse_screen(f: &mut Frame, area: Rect, state: &AppState, browser: &GuardrailBrowser<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let scroll = &state.guardrail_scroll;
    let range = scroll.visible_range();
    let items: Vec<ListItem> = browser
        .guardrails()
        .iter()
        .enumerate()
        .skip(range.start)
        .take(range.len())
        .map(|(index, guardrail)| {
            let lines = vec![
                Line::from(format!(" {} {}", guardrail.icon, guardrail.title)),
                Line::from(Span::styled(
                    format!("    {}", guardrail.description),
                    Styles::text_muted(),
                )),
            ];
            let item = ListItem::new(lines);
            if index == scroll.selected_index {
                item.style(Styles::selected())
            } else {
                item
            }
        })
        .collect();

    let title = format!(
        " Guardrails for {} ({}) ",
        browser.config().project_type().name,
        browser.guardrails().len()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(title)
            .title_style(Styles::title()),
    );
    f.render_widget(list, chunks[0]);

    let config = browser.config();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Project: ", Styles::text_muted()),
            Span::styled(
                format!("{} {}", config.project_type().icon, config.project_type().name),
                Styles::text(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Stack: ", Styles::text_muted()),
            Span::raw(join_names(config.technologies().iter().map(|t| t.name.as_str()))),
        ]),
        Line::from(vec![
            Span::styled("Data: ", Styles::text_muted()),
            Span::raw(join_names(config.data_types().iter().map(|d| d.name.as_str()))),
        ]),
        Line::from(""),
        Line::from(Span::styled("Security focus", Styles::title())),
    ];
    lines.extend(focus_lines(&browser.focus_notes()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(UiText::DISCLAIMER, Styles::note())));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Your Configuration "),
        );
    f.render_widget(panel, chunks[1]);
}

fn join_names<'n>(names: impl Iterator<Item = &'n str>) -> String {
    let names: Vec<&str> = names.collect();
    if names.is_empty() {
        "none selected".to_string()
    } else {
        names.join(", ")
    }
}

fn recommendation_lines(view: &GuardrailView<'_>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!(
                "{} of {} recommendations apply to your configuration",
                view.relevant_count(),
                view.recommendations.len()
            ),
            Styles::text_secondary(),
        )),
        Line::from(""),
    ];

    for annotated in &view.recommendations {
        let rec = annotated.recommendation;
        let title_style = if annotated.relevant {
            Styles::text().add_modifier(Modifier::BOLD)
        } else {
            Styles::text_muted()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", rec.priority.badge()), Theme::priority_style(rec.priority)),
            Span::raw(" "),
            Span::styled(rec.title.clone(), title_style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {}", rec.description),
            if annotated.relevant {
                Styles::text_secondary()
            } else {
                Styles::text_muted()
            },
        )));
        if !annotated.relevant {
            lines.push(Line::from(Span::styled(
                format!("   {}", UiText::LESS_RELEVANT),
                Styles::note(),
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}

fn code_example_lines(view: &GuardrailView<'_>, code_view: CodeView) -> Vec<Line<'static>> {
    if view.code_examples.is_empty() {
        return vec![Line::from(Span::styled(
            "No code examples for this guardrail.",
            Styles::note(),
        ))];
    }

    let accent = match code_view {
        CodeView::Vulnerable => Colors::CODE_BAD,
        CodeView::Secure => Colors::CODE_GOOD,
    };

    let mut lines = Vec::new();
    for example in view.code_examples {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", code_view.label()),
                Style::default()
                    .fg(Colors::SELECTED_FG)
                    .bg(accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", example.language), Styles::text_muted()),
        ]));

        let code = match code_view {
            CodeView::Vulnerable => &example.bad,
            CodeView::Secure => &example.good,
        };
        for code_line in code.lines() {
            lines.push(Line::from(Span::styled(format!("  {}", code_line), Styles::code())));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(example.explanation.clone(), Styles::text_secondary())));
        lines.push(Line::from(""));
    }

    lines
}

/// Body text of the detail screen for the active tab
pub fn detail_lines(view: &GuardrailView<'_>, state: &AppState) -> Vec<Line<'static>> {
    match state.detail_tab {
        DetailTab::Recommendations => recommendation_lines(view),
        DetailTab::CodeExamples => code_example_lines(view, state.code_view),
    }
}

fn detail_tab_title(active: DetailTab) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for tab in [DetailTab::Recommendations, DetailTab::CodeExamples] {
        let style = if tab == active {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(tab.title(), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Step 3: one guardrail with recommendations and code examples
pub fn render_detail_screen(f: &mut Frame, area: Rect, state: &AppState, browser: &GuardrailBrowser<'_>) {
    let Some(view) = browser.selected_view() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} {}", view.guardrail.icon, view.guardrail.title),
            Styles::title(),
        )),
        Line::from(Span::styled(view.guardrail.description.clone(), Styles::text_secondary())),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_inactive()),
    );
    f.render_widget(heading, chunks[0]);

    let body = Paragraph::new(detail_lines(&view, state))
        .scroll((state.detail_offset, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_active())
                .title(detail_tab_title(state.detail_tab)),
        );
    f.render_widget(body, chunks[1]);
}
