//! sortstep CLI - step-through sorting visualizer
//!
//! Thin wrapper: parsing, dispatch, logging setup and output live in
//! `sortstep::cli`.

use std::process::ExitCode;

use sortstep::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
