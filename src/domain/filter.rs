//! Priority filter
//!
//! Derives the visible subset of the task list. Filtering is stable and
//! never reorders: `All` yields the list as-is, `Only(p)` yields the tasks
//! whose priority rank equals `p`'s rank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::priority::{Priority, PriorityError};
use super::task::Task;

/// Active filter criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Filter select options in display order
    pub const OPTIONS: [PriorityFilter; 5] = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::High),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::Low),
        PriorityFilter::Only(Priority::None),
    ];

    /// Returns true if the task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority.rank() == p.rank(),
        }
    }

    /// Applies the filter, keeping each task's position in `tasks`
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<(usize, &'a Task)> {
        tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| self.matches(t))
            .collect()
    }

    /// Display label of the select option
    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All",
            PriorityFilter::Only(p) => p.label(),
        }
    }

    pub fn next(self) -> Self {
        match self {
            PriorityFilter::All => PriorityFilter::Only(Priority::High),
            PriorityFilter::Only(Priority::None) => PriorityFilter::All,
            PriorityFilter::Only(p) => PriorityFilter::Only(p.next()),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PriorityFilter::All => PriorityFilter::Only(Priority::None),
            PriorityFilter::Only(Priority::High) => PriorityFilter::All,
            PriorityFilter::Only(p) => PriorityFilter::Only(p.prev()),
        }
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriorityFilter {
    type Err = PriorityError;

    /// Accepts "all" or anything [`Priority`] parses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(PriorityFilter::All)
        } else {
            s.parse().map(PriorityFilter::Only)
        }
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = PriorityError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PriorityFilter> for String {
    fn from(filter: PriorityFilter) -> Self {
        filter.label().to_lowercase()
    }
}
