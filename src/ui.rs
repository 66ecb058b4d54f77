//! The UI renders the application state into something visible and browsable.
//!
//! The draw function dispatches on the load status first (error and empty screens), then
//! lays out a sidebar of categories and sections next to the tag bar, the point list and
//! the detail pane for the selected point.

use crate::app_state::{AppState, Row, Status, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Renders the screen matching the current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    match &app.status {
        Status::Failed(message) => draw_notice(
            f,
            &format!("Error: {message}"),
            Style::default().fg(Color::Red),
        ),
        Status::Empty => draw_notice(f, "No grammar data found.", Style::default()),
        Status::Ready => draw_browser(f, app),
    }
}

fn draw_notice(f: &mut Frame, text: &str, style: Style) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let notice = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Grammar Appendix"));
    f.render_widget(notice, chunks[0]);

    let help = Paragraph::new("q: Quit").block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn draw_browser(f: &mut Frame, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(f.area());

    draw_sidebar(f, app, columns[0]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Tag bar
            Constraint::Min(0),         // Points
            Constraint::Percentage(40), // Detail
            Constraint::Length(3),      // Help
        ])
        .split(columns[1]);

    draw_tag_bar(f, app, chunks[0]);
    draw_points(f, app, chunks[1]);
    draw_detail(f, app, chunks[2]);
    draw_help(f, app, chunks[3]);
}

fn draw_sidebar(f: &mut Frame, app: &AppState, area: Rect) {
    let current = app.selected_point().map(|(section, _)| section.title.as_str());

    let mut items = Vec::new();
    for (category, sections) in app.sidebar() {
        items.push(ListItem::new(Line::from(Span::styled(
            category.to_string(),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))));
        for section in sections {
            let style = if Some(section.title.as_str()) == current {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            items.push(ListItem::new(format!("  {}", section.title)).style(style));
        }
    }

    let title = if app.current_view == View::Search || !app.search.is_empty() {
        format!("Search: {}", app.search)
    } else {
        "Navigation".to_string()
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_tag_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = vec![Span::styled(
        "All ",
        if app.selection.is_empty() {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        },
    )];

    for (i, tag) in app.tags.iter().enumerate() {
        let mut style = if app.categories.iter().any(|c| *c == tag) {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if app.selection.contains(tag) {
            style = style.fg(Color::White).bg(Color::Blue);
        }
        if app.current_view == View::Tags && i == app.tag_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("[{tag}]"), style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filter by tags"));
    f.render_widget(bar, area);
}

fn draw_points(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.rows();
    let selected = app.visible_points().get(app.current_point).copied();

    let mut highlighted = None;
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| match row {
            Row::Category(name) => ListItem::new(Line::from(Span::styled(
                name.clone(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ))),
            Row::Section(index) => ListItem::new(Line::from(Span::styled(
                format!("  {}", app.sections[*index].title),
                Style::default().add_modifier(Modifier::BOLD),
            ))),
            Row::Point { section, point } => {
                let p = &app.sections[*section].points[*point];
                if selected == Some((*section, *point)) {
                    highlighted = Some(i);
                }
                ListItem::new(format!("    {}. {}", p.number, p.title))
            }
        })
        .collect();

    let title = if app.selection.is_empty() {
        "Grammar Points".to_string()
    } else {
        format!("Tags: {}", app.selection.active().join(", "))
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(highlighted);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_detail(f: &mut Frame, app: &AppState, area: Rect) {
    let max_width = u16::try_from(app.wrap_width).unwrap_or(u16::MAX);
    let area = Rect {
        width: area.width.min(max_width),
        ..area
    };

    let Some((section, point)) = app.selected_point() else {
        let empty = Paragraph::new("No grammar points match the current filters.")
            .block(Block::default().borders(Borders::ALL).title("Detail"));
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();
    if !point.description.is_empty() {
        lines.extend(point.description.lines().map(|l| Line::from(l.to_string())));
    }
    if !point.examples.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Examples:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            point
                .examples
                .iter()
                .map(|e| Line::from(Span::styled(e.clone(), Style::default().fg(Color::Yellow)))),
        );
    }
    lines.push(Line::from(""));
    lines.push(Line::from(
        point
            .tags
            .iter()
            .map(|t| {
                let style = if app.selection.contains(t) {
                    Style::default().fg(Color::White).bg(Color::Blue)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Span::styled(format!("[{t}] "), style)
            })
            .collect::<Vec<_>>(),
    ));

    let title = format!("{} > {}. {}", section.title, point.number, point.title);
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(detail, area);
}

fn draw_help(f: &mut Frame, app: &AppState, area: Rect) {
    let help_text = match app.current_view {
        View::Search => format!("/{} | Enter: Done | Esc: Clear search", app.search),
        View::Tags => "←/→: Move | Space/Enter: Toggle | c: Clear All | Esc: Back".to_string(),
        View::Browse => app.message.clone().unwrap_or_else(|| {
            "↑/↓: Navigate | Home/End: First/Last | /: Search | t: Tags | c: Clear | q: Quit"
                .to_string()
        }),
    };

    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
