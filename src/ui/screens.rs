//! Wizard screens for steps 1 and 2.
//!
//! - Project type list with a description panel
//! - Stack and data configuration with Technologies / Data Handled tabs

use crate::app::{AppState, ConfigTab};
use crate::catalog::{Catalog, ProjectType};
use crate::scrolling::ScrollState;
use crate::theme::{Colors, Styles, Theme};
use crate::wizard::Wizard;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Split an area into a list column and a detail column
fn two_columns(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render the visible window of a list, highlighting the cursor row
fn render_scrolled_list(
    f: &mut Frame,
    area: Rect,
    title: Line<'static>,
    scroll: &ScrollState,
    rows: Vec<Line<'static>>,
) {
    let range = scroll.visible_range();
    let items: Vec<ListItem> = rows
        .into_iter()
        .enumerate()
        .skip(range.start)
        .take(range.len())
        .map(|(index, row)| {
            let item = ListItem::new(row);
            if index == scroll.selected_index {
                item.style(Styles::selected())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border_active())
            .title(title)
            .title_style(Styles::title()),
    );
    f.render_widget(list, area);
}

fn names_for<'c>(ids: &[String], lookup: impl Fn(&str) -> Option<&'c str>) -> String {
    let names: Vec<&str> = ids.iter().filter_map(|id| lookup(id)).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

fn project_type_details(catalog: &Catalog, project_type: &ProjectType) -> Vec<Line<'static>> {
    let technologies = names_for(&project_type.recommended_technologies, |id| {
        catalog.technology(id).map(|t| t.name.as_str())
    });
    let data_types = names_for(&project_type.common_data_types, |id| {
        catalog.data_type(id).map(|d| d.name.as_str())
    });

    vec![
        Line::from(Span::styled(
            format!("{} {}", project_type.icon, project_type.name),
            Styles::title(),
        )),
        Line::from(""),
        Line::from(Span::styled(project_type.description.clone(), Styles::text())),
        Line::from(""),
        Line::from(Span::styled("Suggested stack", Styles::text_secondary())),
        Line::from(format!("  {}", technologies)),
        Line::from(""),
        Line::from(Span::styled("Data you probably handle", Styles::text_secondary())),
        Line::from(format!("  {}", data_types)),
    ]
}

/// Step 1: pick a project type
pub fn render_project_type_screen(f: &mut Frame, area: Rect, state: &AppState, wizard: &Wizard<'_>) {
    let catalog = wizard.catalog();
    let chosen = wizard.selection().project_type.as_deref();
    let (list_area, detail_area) = two_columns(area);

    let rows = catalog
        .project_types()
        .iter()
        .map(|pt| {
            let marker = if Some(pt.id.as_str()) == chosen { "✓" } else { " " };
            Line::from(format!(" {} {} {}", marker, pt.icon, pt.name))
        })
        .collect();
    render_scrolled_list(
        f,
        list_area,
        Line::from(" What are you building? "),
        &state.project_scroll,
        rows,
    );

    let details = catalog
        .project_types()
        .get(state.project_scroll.selected_index)
        .map(|pt| project_type_details(catalog, pt))
        .unwrap_or_default();
    let panel = Paragraph::new(details)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Details "),
        );
    f.render_widget(panel, detail_area);
}

fn checkbox(checked: bool) -> Span<'static> {
    if checked {
        Span::styled("[x] ", Styles::success())
    } else {
        Span::styled("[ ] ", Styles::text_muted())
    }
}

fn tab_title(active: ConfigTab) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for tab in [ConfigTab::Technologies, ConfigTab::DataTypes] {
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

/// Step 2: toggle technologies and data categories
pub fn render_configure_screen(f: &mut Frame, area: Rect, state: &AppState, wizard: &Wizard<'_>) {
    let catalog = wizard.catalog();
    let selection = wizard.selection();
    let (list_area, summary_area) = two_columns(area);

    let (rows, scroll): (Vec<Line<'static>>, &ScrollState) = match state.config_tab {
        ConfigTab::Technologies => (
            catalog
                .technologies()
                .iter()
                .map(|tech| {
                    Line::from(vec![
                        checkbox(selection.has_technology(&tech.id)),
                        Span::raw(tech.name.clone()),
                        Span::styled(format!("  ({})", tech.category.label()), Styles::text_muted()),
                    ])
                })
                .collect(),
            &state.tech_scroll,
        ),
        ConfigTab::DataTypes => (
            catalog
                .data_types()
                .iter()
                .map(|data| {
                    let mut spans = vec![checkbox(selection.has_data_type(&data.id)), Span::raw(data.name.clone())];
                    if data.risk_level.is_high() {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(
                            " HIGH RISK ",
                            Style::default()
                                .fg(Colors::SELECTED_FG)
                                .bg(Theme::risk_color(data.risk_level))
                                .add_modifier(Modifier::BOLD),
                        ));
                    }
                    Line::from(spans)
                })
                .collect(),
            &state.data_scroll,
        ),
    };

    // Tabs live in the list title
    render_scrolled_list(f, list_area, tab_title(state.config_tab), scroll, rows);

    let mut summary = Vec::new();
    if let Some(project_type) = wizard.project_type() {
        summary.push(Line::from(Span::styled(
            format!("{} {}", project_type.icon, project_type.name),
            Styles::title(),
        )));
        summary.push(Line::from(""));
    }
    summary.push(Line::from(format!(
        "{} technologies, {} data categories selected",
        selection.selected_technologies.len(),
        selection.selected_data_types.len()
    )));
    summary.push(Line::from(""));

    if state.config_tab == ConfigTab::DataTypes {
        if let Some(data) = catalog.data_types().get(state.data_scroll.selected_index) {
            summary.push(Line::from(Span::styled(data.name.clone(), Styles::text())));
            summary.push(Line::from(Span::styled(
                data.description.clone(),
                Styles::text_secondary(),
            )));
            summary.push(Line::from(vec![
                Span::styled("Risk: ", Styles::text_muted()),
                Span::styled(data.risk_level.to_string(), Theme::risk_style(data.risk_level)),
            ]));
        }
    } else {
        summary.push(Line::from(Span::styled(
            "Press Tab to review the data your project handles.",
            Styles::note(),
        )));
    }

    let panel = Paragraph::new(summary)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive())
                .title(" Your Project "),
        );
    f.render_widget(panel, summary_area);
}
