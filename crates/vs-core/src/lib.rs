//! # vs-core
//!
//! **vs** – developer workspace launcher, core library.
//!
//! This crate holds the decision logic behind the `vs` CLI: resolving
//! workspace directories, deriving clone targets from repository URLs, and
//! aggregating per-project `.todo` checklists.
//!
//! ## Main Types
//!
//! - [`Launcher`] – the entry point for every subcommand
//! - [`WorkspaceConfig`] – the configured base directories and editor
//! - [`VsError`] – domain-specific error type
//!
//! ## Modules
//!
//! - [`config`] – loading, saving, and validating `~/.vs/config.json`
//! - [`repo`] – repository name resolution and clone decisions
//! - [`todo`] – checklist parsing with an injected Markdown renderer
//! - [`aggregate`] – todo aggregation across projects
//! - [`runner`] – external process execution
//! - [`launcher`] – the orchestrator
//!
//! ## Example
//!
//! ```ignore
//! use vs_core::{Launcher, ProjectSelector, TodoMode, WorkspaceConfig};
//!
//! let config = WorkspaceConfig::load_default()?;
//! let launcher = Launcher::new(config);
//!
//! for (project, items) in launcher.todos(&ProjectSelector::All, TodoMode::Text)?.pairs() {
//!     println!("{}: {:?}", project, items);
//! }
//! ```

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod errors;
pub mod launcher;
pub mod repo;
pub mod runner;
pub mod todo;

// Re-exports for convenience
pub use aggregate::{aggregate, ProjectSelector, ProjectTodoStatus, ProjectTodos, TodoCollection};
pub use config::{RootKind, WorkspaceConfig};
pub use errors::VsError;
pub use launcher::{CloneResult, Launcher, OpenResult};
pub use repo::{resolve_repo_name, CloneAction, CloneTarget};
pub use runner::{CommandRunner, CommandSpec, CommandStatus, RecordingRunner, SystemRunner};
pub use todo::{
    Checklist, ChecklistStatus, MarkdownRenderer, PulldownRenderer, TodoItem, TodoMode, TodoParser,
};
