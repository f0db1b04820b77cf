//! Task domain model
//!
//! A task is a to-do item with a title, a description (possibly empty),
//! a priority and a completion flag. Tasks have no id; they are addressed
//! by their position in the list.

use serde::{Deserialize, Serialize};

use super::priority::Priority;

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable title (may be empty)
    pub title: String,

    /// Free-form description, empty when none was given
    #[serde(default)]
    pub description: String,

    pub priority: Priority,

    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates an open task
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
            completed: false,
        }
    }

    /// Flips the completion flag and returns the new value
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }

    /// Returns true if a description was given
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_open() {
        let task = Task::new("Buy milk", "", Priority::Medium);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
        assert!(!task.has_description());
    }

    #[test]
    fn toggle_flips_and_returns_state() {
        let mut task = Task::new("Call bank", "Ask about loan", Priority::High);
        assert!(task.toggle());
        assert!(task.completed);
        assert!(!task.toggle());
        assert!(!task.completed);
    }

    #[test]
    fn blank_title_is_accepted() {
        let task = Task::new("", "", Priority::None);
        assert!(task.title.is_empty());
    }

    #[test]
    fn deserialize_defaults() {
        let task: Task = serde_json::from_str(r#"{"title":"x","priority":"low"}"#).unwrap();
        assert_eq!(task, Task::new("x", "", Priority::Low));
    }
}
