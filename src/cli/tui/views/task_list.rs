//! Task list: priority filter select and one row per visible task

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::focus_style;
use crate::cli::tui::app::{App, Focus};
use crate::domain::{Priority, PriorityFilter, Task};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.store().visible_tasks();
    let title = format!("Tasks ({} of {})", visible.len(), app.store().len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::List));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Rows
        ])
        .split(inner);

    draw_filter(frame, app, rows[0]);

    if visible.is_empty() {
        let message = if app.store().is_empty() {
            "No tasks yet"
        } else {
            "No tasks match this filter"
        };
        let paragraph = Paragraph::new(message).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, rows[2]);
        return;
    }

    let items: Vec<ListItem> = visible.iter().map(|row| task_item(row.task)).collect();

    let highlight = if app.focus() == Focus::List {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected()));
    frame.render_stateful_widget(list, rows[2], &mut state);
}

/// The filter select, with every option shown and the active one marked
fn draw_filter(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.store().filter();
    let focused = app.focus() == Focus::Filter;

    let mut spans = vec![Span::styled(
        "Filter by Priority: ",
        Style::default().add_modifier(Modifier::BOLD),
    )];

    for option in PriorityFilter::OPTIONS {
        let style = match (option == active, focused) {
            (true, true) => Style::default().fg(Color::Black).bg(Color::Cyan),
            (true, false) => Style::default().add_modifier(Modifier::REVERSED),
            _ => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Checkbox + title, then description and priority lines
fn task_item(task: &Task) -> ListItem<'_> {
    let (checkbox, title_style) = if task.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().add_modifier(Modifier::BOLD))
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(checkbox),
        Span::styled(task.title.as_str(), title_style),
    ])];

    if task.has_description() {
        lines.extend(
            task.description
                .lines()
                .map(|line| Line::from(format!("    {}", line))),
        );
    }

    lines.push(Line::from(Span::styled(
        format!("    Priority: {}", task.priority.label()),
        Style::default().fg(priority_color(task)),
    )));

    ListItem::new(Text::from(lines))
}

fn priority_color(task: &Task) -> Color {
    match task.priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
        Priority::None => Color::Gray,
    }
}
