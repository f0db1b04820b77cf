//! Task creation form
//!
//! Holds the fields being edited before a task is created. The description
//! field starts collapsed and is shown only after an explicit toggle.
//! Submitting always produces a task and always resets every field.

use super::priority::Priority;
use super::task::Task;

/// Label of the description toggle while collapsed
pub const SHOW_DESCRIPTION_LABEL: &str = "Add task description";
/// Label of the description toggle while expanded
pub const HIDE_DESCRIPTION_LABEL: &str = "Hide task description";

/// Form fields for a new task
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    title: String,
    description: String,
    priority: Priority,
    description_open: bool,
}

impl TaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns true if the description field is expanded
    pub fn is_description_open(&self) -> bool {
        self.description_open
    }

    /// Label for the expand/collapse control
    pub fn description_toggle_label(&self) -> &'static str {
        if self.description_open {
            HIDE_DESCRIPTION_LABEL
        } else {
            SHOW_DESCRIPTION_LABEL
        }
    }

    /// Expands or collapses the description field.
    ///
    /// Collapsing keeps whatever was typed; it is still submitted.
    pub fn toggle_description(&mut self) -> bool {
        self.description_open = !self.description_open;
        self.description_open
    }

    pub fn push_title(&mut self, c: char) {
        self.title.push(c);
    }

    pub fn pop_title(&mut self) {
        self.title.pop();
    }

    pub fn push_description(&mut self, c: char) {
        self.description.push(c);
    }

    pub fn pop_description(&mut self) {
        self.description.pop();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn next_priority(&mut self) {
        self.priority = self.priority.next();
    }

    pub fn prev_priority(&mut self) {
        self.priority = self.priority.prev();
    }

    /// Builds a task from the current fields and resets the form.
    ///
    /// No validation: a blank title yields a blank task.
    pub fn submit(&mut self) -> Task {
        let submitted = std::mem::take(self);
        Task::new(submitted.title, submitted.description, submitted.priority)
    }
}
