//! Task priority
//!
//! A closed set of levels, each with a display label and a numeric rank.
//! The rank is what form values and filters compare; the label is only
//! ever shown.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PriorityError {
    #[error("Unknown priority rank: {0} (expected 1-4)")]
    UnknownRank(u8),

    #[error("Unknown priority: '{0}' (expected high, medium, low or none)")]
    UnknownLabel(String),
}

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl Priority {
    /// All priorities in select-option order
    pub const ALL: [Priority; 4] = [
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::None,
    ];

    /// Numeric rank (1 = High ... 4 = None)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
            Priority::None => 4,
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
            Priority::None => "None",
        }
    }

    /// Looks up a priority by its rank
    pub fn from_rank(rank: u8) -> Result<Self, PriorityError> {
        Self::ALL
            .into_iter()
            .find(|p| p.rank() == rank)
            .ok_or(PriorityError::UnknownRank(rank))
    }

    /// The next option in the priority select, wrapping around
    pub fn next(self) -> Self {
        match self {
            Priority::High => Priority::Medium,
            Priority::Medium => Priority::Low,
            Priority::Low => Priority::None,
            Priority::None => Priority::High,
        }
    }

    /// The previous option in the priority select, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Priority::High => Priority::None,
            Priority::Medium => Priority::High,
            Priority::Low => Priority::Medium,
            Priority::None => Priority::Low,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = PriorityError;

    /// Accepts a label (any case) or a rank
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(rank) = s.parse::<u8>() {
            return Self::from_rank(rank);
        }
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| PriorityError::UnknownLabel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_and_labels() {
        let table: Vec<_> = Priority::ALL.iter().map(|p| (p.label(), p.rank())).collect();
        assert_eq!(
            table,
            vec![("High", 1), ("Medium", 2), ("Low", 3), ("None", 4)]
        );
    }

    #[test]
    fn default_is_none() {
        assert_eq!(Priority::default(), Priority::None);
    }

    #[test]
    fn from_rank_roundtrip() {
        for p in Priority::ALL {
            assert_eq!(Priority::from_rank(p.rank()), Ok(p));
        }
    }

    #[test]
    fn from_rank_out_of_range() {
        assert_eq!(Priority::from_rank(0), Err(PriorityError::UnknownRank(0)));
        assert_eq!(Priority::from_rank(5), Err(PriorityError::UnknownRank(5)));
    }

    #[test]
    fn parse_label_case_insensitive() {
        assert_eq!("high".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("MEDIUM".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!(" Low ".parse::<Priority>(), Ok(Priority::Low));
        assert_eq!("none".parse::<Priority>(), Ok(Priority::None));
    }

    #[test]
    fn parse_rank() {
        assert_eq!("1".parse::<Priority>(), Ok(Priority::High));
        assert_eq!("4".parse::<Priority>(), Ok(Priority::None));
        assert!("9".parse::<Priority>().is_err());
    }

    #[test]
    fn parse_unknown_label() {
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(PriorityError::UnknownLabel("urgent".to_string()))
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Priority::Medium.to_string(), "Medium");
    }

    #[test]
    fn next_prev_cycle() {
        for p in Priority::ALL {
            assert_eq!(p.next().prev(), p);
        }
        assert_eq!(Priority::None.next(), Priority::High);
        assert_eq!(Priority::High.prev(), Priority::None);
    }

    #[test]
    fn serde_snake_case() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
        let back: Priority = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(back, Priority::None);
    }
}
