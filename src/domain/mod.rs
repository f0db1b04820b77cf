//! Domain models for tasklist
//!
//! Contains the task state and its filtering without any I/O concerns.

mod priority;
mod task;
mod filter;
mod form;
mod store;

pub use priority::{Priority, PriorityError};
pub use task::Task;
pub use filter::PriorityFilter;
pub use form::TaskForm;
pub use store::{TaskStore, VisibleTask};
