//! tasklist - A single-screen terminal task list
//!
//! Tasks have a title, an optional description and a priority. They can be
//! marked complete and the list can be filtered by priority. Everything
//! lives in memory for the lifetime of the process.

pub mod domain;
pub mod config;
pub mod cli;

pub use domain::{Priority, PriorityFilter, Task, TaskForm, TaskStore};
