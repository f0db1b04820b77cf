//! Task creation form: title, priority select, create button and the
//! collapsible description

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::focus_style;
use crate::cli::tui::app::{App, Focus};
use crate::cli::tui::utils::{text_cursor, text_scroll};

const TITLE_PLACEHOLDER: &str = "Enter task here";
const DESCRIPTION_PLACEHOLDER: &str = "Add task description here";
const DESCRIPTION_HEIGHT: u16 = 5;

/// Rows the form needs, including its border
pub fn height(app: &App) -> u16 {
    let base = 2 + 3 + 1;
    if app.store().form().is_description_open() {
        base + DESCRIPTION_HEIGHT
    } else {
        base
    }
}

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("New task").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let open = app.store().form().is_description_open();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Inputs
            Constraint::Length(1), // Description toggle
            Constraint::Length(if open { DESCRIPTION_HEIGHT } else { 0 }),
        ])
        .split(inner);

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Title
            Constraint::Length(12), // Priority
            Constraint::Length(12), // Create
        ])
        .split(rows[0]);

    draw_title(frame, app, inputs[0]);
    draw_priority(frame, app, inputs[1]);
    draw_create(frame, app, inputs[2]);
    draw_description_toggle(frame, app, rows[1]);
    if open {
        draw_description(frame, app, rows[2]);
    }
}

/// Text input showing a dim placeholder while empty, scrolled so the
/// end of the value stays in view
fn text_input<'a>(
    value: &'a str,
    placeholder: &'a str,
    block: Block<'a>,
    area: Rect,
) -> Paragraph<'a> {
    if value.is_empty() {
        Paragraph::new(Span::styled(placeholder, Style::default().fg(Color::DarkGray)))
            .block(block)
    } else {
        Paragraph::new(value)
            .block(block)
            .scroll(text_scroll(value, area))
    }
}

fn draw_title(frame: &mut Frame, app: &App, area: Rect) {
    let title = app.store().form().title();
    let block = Block::default()
        .title("Title")
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::Title));

    frame.render_widget(text_input(title, TITLE_PLACEHOLDER, block, area), area);

    if app.focus() == Focus::Title {
        frame.set_cursor_position(text_cursor(title, area));
    }
}

fn draw_priority(frame: &mut Frame, app: &App, area: Rect) {
    let priority = app.store().form().priority();
    let paragraph = Paragraph::new(format!("< {} >", priority.label()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Priority")
                .borders(Borders::ALL)
                .border_style(focus_style(app, Focus::Priority)),
        );

    frame.render_widget(paragraph, area);
}

fn draw_create(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.focus() == Focus::Create {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(Span::styled("Create", style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app, Focus::Create)),
        );

    frame.render_widget(paragraph, area);
}

fn draw_description_toggle(frame: &mut Frame, app: &App, area: Rect) {
    let label = app.store().form().description_toggle_label();
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            label,
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(" (Ctrl+D)", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_description(frame: &mut Frame, app: &App, area: Rect) {
    let description = app.store().form().description();
    let block = Block::default()
        .title("Description")
        .borders(Borders::ALL)
        .border_style(focus_style(app, Focus::Description));

    frame.render_widget(
        text_input(description, DESCRIPTION_PLACEHOLDER, block, area),
        area,
    );

    if app.focus() == Focus::Description {
        frame.set_cursor_position(text_cursor(description, area));
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{buffer_text, render};
    use super::*;
    use crate::cli::tui::app::tests::{app, ctrl, focus_on, press, type_str};
    use crossterm::event::KeyCode;

    #[test]
    fn collapsed_form_height() {
        assert_eq!(height(&app()), 6);
    }

    #[test]
    fn title_placeholder_replaced_by_text() {
        let mut app = app();
        let text = buffer_text(&render(&app));
        assert!(text.contains(TITLE_PLACEHOLDER));

        type_str(&mut app, "Buy milk");
        let text = buffer_text(&render(&app));
        assert!(text.contains("Buy milk"));
        assert!(!text.contains(TITLE_PLACEHOLDER));
    }

    #[test]
    fn expanded_description_shows_area_and_hide_label() {
        let mut app = app();
        ctrl(&mut app, 'd');
        assert_eq!(height(&app), 11);

        let text = buffer_text(&render(&app));
        assert!(text.contains("Hide task description"));
        assert!(text.contains(DESCRIPTION_PLACEHOLDER));
    }

    #[test]
    fn priority_select_shows_label() {
        let text = buffer_text(&render(&app()));
        assert!(text.contains("< None >"));
    }

    #[test]
    fn description_scrolls_to_the_line_being_typed() {
        let mut app = app();
        ctrl(&mut app, 'd');
        focus_on(&mut app, Focus::Description);
        for line in ["one", "two", "three"] {
            type_str(&mut app, line);
            press(&mut app, KeyCode::Enter);
        }
        type_str(&mut app, "FOURTH");

        let text = buffer_text(&render(&app));
        assert!(text.contains("FOURTH"));
        assert!(text.contains("two"));
        assert!(text.contains("three"));
    }

    #[test]
    fn long_title_keeps_its_tail_visible() {
        let mut app = app();
        type_str(&mut app, &"x".repeat(70));
        type_str(&mut app, "END");

        let text = buffer_text(&render(&app));
        assert!(text.contains("END"));
    }
}
