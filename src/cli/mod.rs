//! CLI module for sortstep.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The entry point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, DataArgs, TraceFormat};
pub use commands::{play, resolve_input, run_cli, ResolvedInput};
pub use output::{format_advance, format_stats, format_version, print_help, print_version};
