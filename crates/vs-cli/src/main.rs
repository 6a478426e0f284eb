//! # vs CLI
//!
//! Developer workspace launcher: opens project and scratch directories in an
//! editor, clones repositories from the clipboard, and collects `.todo`
//! checklists across projects.
//!
//! Run `vs --help` for usage information.

mod cli;
pub mod ui;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run()
}
