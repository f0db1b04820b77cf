//! # Command-Line Interface
//!
//! Entry point, output formatting and the interactive task-list screen.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | (none), `tui` | Open the task-list screen |
//! | `priorities` | Print the priority table |
//!
//! ## Output Formats
//!
//! Non-interactive commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! tasklist --verbose --filter high
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod tui;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
