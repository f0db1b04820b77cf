//! TUI application state and key handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::utils::truncate_str;
use super::views;
use super::Terminal;
use crate::config::TuiConfig;
use crate::domain::{PriorityFilter, TaskStore, VisibleTask};

/// Longest title echoed back in the status bar
const STATUS_TITLE_LEN: usize = 40;

/// Help text shown on `?`
const HELP: &str = "Tab:next field  Enter:create  Ctrl+D:description  \u{2190}/\u{2192}:options  j/k:move  Space:done  q:quit";

/// Which control has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Title,
    Priority,
    Description,
    Create,
    Filter,
    List,
}

impl Focus {
    /// Next control in tab order; the description field is skipped while collapsed
    fn next(self, description_open: bool) -> Self {
        match self {
            Focus::Title => Focus::Priority,
            Focus::Priority if description_open => Focus::Description,
            Focus::Priority => Focus::Create,
            Focus::Description => Focus::Create,
            Focus::Create => Focus::Filter,
            Focus::Filter => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    fn prev(self, description_open: bool) -> Self {
        match self {
            Focus::Title => Focus::List,
            Focus::Priority => Focus::Title,
            Focus::Description => Focus::Priority,
            Focus::Create if description_open => Focus::Description,
            Focus::Create => Focus::Priority,
            Focus::Filter => Focus::Create,
            Focus::List => Focus::Filter,
        }
    }

    /// Returns true if typed characters go into a text field
    pub fn is_text_input(self) -> bool {
        matches!(self, Focus::Title | Focus::Description)
    }
}

/// Application state
pub struct App {
    /// Tasks, form and filter
    store: TaskStore,

    /// Current focus
    focus: Focus,

    /// Selected row of the filtered list
    selected: usize,

    /// Status message to display
    status_message: Option<String>,

    /// Show key hints in the status bar
    show_hints: bool,

    /// Whether to quit
    should_quit: bool,
}

impl App {
    /// Create a new application with an empty task list
    pub fn new(config: &TuiConfig, filter: PriorityFilter) -> Self {
        Self {
            store: TaskStore::with_filter(filter),
            focus: Focus::default(),
            selected: 0,
            status_message: None,
            show_hints: config.show_hints,
            should_quit: false,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    /// Draw the UI
    fn draw(&self, frame: &mut Frame) {
        views::draw(frame, self);
    }

    /// Handle key events
    fn handle_key(&mut self, key: KeyEvent) {
        // AltGr arrives as Ctrl+Alt and produces ordinary characters
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && !key.modifiers.contains(KeyModifiers::ALT)
        {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('d') => self.toggle_description(),
                _ => {}
            }
            return;
        }

        let description_open = self.store.form().is_description_open();
        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next(description_open);
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev(description_open);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Title => self.handle_title_key(key),
            Focus::Description => self.handle_description_key(key),
            Focus::Priority => self.handle_priority_key(key),
            Focus::Create => self.handle_create_key(key),
            Focus::Filter => self.handle_filter_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    /// Keys shared by every control that is not a text field
    fn handle_common_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('d') => self.toggle_description(),
            KeyCode::Char('?') => self.status_message = Some(HELP.to_string()),
            _ => {}
        }
    }

    fn handle_title_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.store.form_mut().pop_title(),
            KeyCode::Char(c) => self.store.form_mut().push_title(c),
            _ => {}
        }
    }

    fn handle_description_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::List,
            KeyCode::Enter => self.store.form_mut().push_description('\n'),
            KeyCode::Backspace => self.store.form_mut().pop_description(),
            KeyCode::Char(c) => self.store.form_mut().push_description(c),
            _ => {}
        }
    }

    fn handle_priority_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.store.form_mut().prev_priority();
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.store.form_mut().next_priority();
            }
            KeyCode::Enter => self.submit(),
            _ => self.handle_common_key(key),
        }
    }

    fn handle_create_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            _ => self.handle_common_key(key),
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let filter = self.store.filter();
        match key.code {
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.set_filter(filter.prev());
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.set_filter(filter.next());
            }
            _ => self.handle_common_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => self.toggle_selected(),
            _ => self.handle_common_key(key),
        }
    }

    /// Expand or collapse the description field
    fn toggle_description(&mut self) {
        let open = self.store.form_mut().toggle_description();
        if !open && self.focus == Focus::Description {
            self.focus = Focus::Title;
        }
    }

    /// Create a task from the form
    fn submit(&mut self) {
        let task = self.store.submit_form();
        self.status_message = Some(task_message("Created", &task.title));
        self.focus = Focus::Title;
        self.clamp_selection();
    }

    fn set_filter(&mut self, filter: PriorityFilter) {
        self.store.set_filter(filter);
        self.clamp_selection();
    }

    /// Toggle completion of the selected row
    fn toggle_selected(&mut self) {
        let Some(index) = self.selected_row().map(|row| row.index) else {
            return;
        };

        if let Some(done) = self.store.toggle_completion(index) {
            let action = if done { "Completed" } else { "Reopened" };
            let title = self.store.task(index).map_or("", |t| t.title.as_str());
            self.status_message = Some(task_message(action, title));
        }
    }

    fn move_selection_down(&mut self) {
        let len = self.store.visible_tasks().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.store.visible_tasks().len();
        if len > 0 {
            self.selected = if self.selected == 0 {
                len - 1
            } else {
                self.selected - 1
            };
        }
    }

    /// Reset selection if it fell off the filtered list
    fn clamp_selection(&mut self) {
        if self.selected >= self.store.visible_tasks().len() {
            self.selected = 0;
        }
    }

    fn selected_row(&self) -> Option<VisibleTask<'_>> {
        self.store.visible_tasks().get(self.selected).copied()
    }

    // Public accessors for views

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn show_hints(&self) -> bool {
        self.show_hints
    }
}

/// Status line for an action on a task, naming blank tasks "untitled task"
fn task_message(action: &str, title: &str) -> String {
    if title.is_empty() {
        format!("{} untitled task", action)
    } else {
        format!("{}: {}", action, truncate_str(title, STATUS_TITLE_LEN))
    }
}
