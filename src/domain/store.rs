//! Task store
//!
//! Owns the ordered task list together with the form and filter state.
//! The list is append-only; the only in-place change is toggling
//! completion.

use super::filter::PriorityFilter;
use super::form::TaskForm;
use super::priority::Priority;
use super::task::Task;

/// A row of the filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTask<'a> {
    /// Position in the underlying list
    pub index: usize,
    pub task: &'a Task,
}

/// All state of the task list screen
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    form: TaskForm,
    filter: PriorityFilter,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store starting with the given filter
    pub fn with_filter(filter: PriorityFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Appends an open task and returns it
    pub fn create_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> &Task {
        self.push(Task::new(title, description, priority))
    }

    /// Submits the form, appending the resulting task
    pub fn submit_form(&mut self) -> &Task {
        let task = self.form.submit();
        self.push(task)
    }

    fn push(&mut self, task: Task) -> &Task {
        self.tasks.push(task);
        let last = self.tasks.len() - 1;
        &self.tasks[last]
    }

    /// Flips completion of the task at `index`.
    ///
    /// Returns the new state, or `None` if there is no such task.
    pub fn toggle_completion(&mut self, index: usize) -> Option<bool> {
        self.tasks.get_mut(index).map(Task::toggle)
    }

    pub fn set_filter(&mut self, filter: PriorityFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> PriorityFilter {
        self.filter
    }

    /// The tasks passing the active filter, in list order
    pub fn visible_tasks(&self) -> Vec<VisibleTask<'_>> {
        self.filter
            .apply(&self.tasks)
            .into_iter()
            .map(|(index, task)| VisibleTask { index, task })
            .collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
