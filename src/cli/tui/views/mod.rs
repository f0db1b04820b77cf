//! Page layout: form on top, task list below, status bar at the bottom

mod form;
mod task_list;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::cli::tui::app::{App, Focus};

/// Draw the whole page
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(form::height(app)),
            Constraint::Min(5),    // Task list
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    form::draw(frame, app, chunks[0]);
    task_list::draw(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

/// Border style of a control, highlighted when focused
fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus() == focus {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hint = match app.focus() {
        focus if focus.is_text_input() => "Type to edit  [Tab]next  [Esc]leave  [Ctrl+D]description",
        Focus::Priority => "[\u{2190}/\u{2192}]priority  [Enter]create  [Tab]next  [q]uit  [?]help",
        Focus::Create => "[Enter]create  [Tab]next  [q]uit  [?]help",
        Focus::Filter => "[\u{2190}/\u{2192}]filter  [Tab]next  [q]uit  [?]help",
        _ => "[j/k]move  [Space]done  [Tab]next  [q]uit  [?]help",
    };

    let (content, style) = match app.status_message() {
        Some(msg) => (msg, Style::default().fg(Color::Green)),
        None if app.show_hints() => (hint, Style::default()),
        None => ("", Style::default()),
    };

    let status_text = format!(
        "Tasks {}/{} done  {}",
        app.store().completed_count(),
        app.store().len(),
        content
    );

    let paragraph = Paragraph::new(status_text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tui::app::tests::{app, create, focus_on};
    use crate::domain::Priority;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    pub(super) fn render(app: &App) -> Buffer {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    pub(super) fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn empty_page_shows_form_and_filter() {
        let text = buffer_text(&render(&app()));
        assert!(text.contains("Enter task here"));
        assert!(text.contains("None"));
        assert!(text.contains("Create"));
        assert!(text.contains("Add task description"));
        assert!(text.contains("Filter by Priority:"));
        assert!(text.contains("Tasks 0/0 done"));
        assert!(!text.contains("Add task description here"));
    }

    #[test]
    fn status_bar_shows_counts_and_message() {
        let mut app = app();
        create(&mut app, "Buy milk", Priority::Medium);
        let text = buffer_text(&render(&app));
        assert!(text.contains("Tasks 0/1 done"));
        assert!(text.contains("Created: Buy milk"));
    }

    #[test]
    fn hints_can_be_disabled() {
        let config = crate::config::TuiConfig {
            show_hints: false,
            ..Default::default()
        };
        let app = App::new(&config, crate::domain::PriorityFilter::All);
        let text = buffer_text(&render(&app));
        assert!(!text.contains("[Tab]next"));
    }

    #[test]
    fn hint_follows_focus() {
        let mut app = app();
        assert!(buffer_text(&render(&app)).contains("Type to edit"));

        focus_on(&mut app, Focus::Description);
        assert!(buffer_text(&render(&app)).contains("Type to edit"));

        focus_on(&mut app, Focus::List);
        let text = buffer_text(&render(&app));
        assert!(text.contains("[j/k]move"));
        assert!(!text.contains("Type to edit"));
    }
}
