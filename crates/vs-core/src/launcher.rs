//! Launcher – the orchestrator behind every `vs` subcommand.
//!
//! The [`Launcher`] owns the loaded [`WorkspaceConfig`], a [`CommandRunner`]
//! for external programs, and a [`TodoParser`]. The CLI builds one per
//! invocation and calls exactly one operation on it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::{aggregate, ProjectSelector, TodoCollection};
use crate::config::{RootKind, WorkspaceConfig};
use crate::constants::{is_valid_dir_name, GIT_PROGRAM};
use crate::errors::VsError;
use crate::repo::{CloneAction, CloneTarget};
use crate::runner::{CommandRunner, CommandSpec, SystemRunner};
use crate::todo::{TodoMode, TodoParser};

// ============================================================================
// Results
// ============================================================================

/// Result of opening a directory under a workspace root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenResult {
    /// The directory that was opened.
    pub path: PathBuf,
    /// Whether the directory had to be created first.
    pub created: bool,
}

/// Result of a clone request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneResult {
    /// The resolved target.
    pub target: CloneTarget,
    /// What was decided for the target.
    pub action: CloneAction,
}

// ============================================================================
// Launcher
// ============================================================================

/// Entry point for workspace operations.
///
/// # Example
///
/// ```ignore
/// use vs_core::{Launcher, WorkspaceConfig};
///
/// let config = WorkspaceConfig::load_default()?;
/// let launcher = Launcher::new(config);
/// launcher.open_code("scratch")?;
/// ```
#[derive(Debug)]
pub struct Launcher<R = SystemRunner> {
    config: WorkspaceConfig,
    runner: R,
    parser: TodoParser,
}

impl Launcher<SystemRunner> {
    /// Create a launcher that spawns real processes.
    pub fn new(config: WorkspaceConfig) -> Self {
        Self::with_runner(config, SystemRunner)
    }
}

impl<R: CommandRunner> Launcher<R> {
    /// Create a launcher with a custom command runner.
    pub fn with_runner(config: WorkspaceConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            parser: TodoParser::new(),
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // code / project
    // -------------------------------------------------------------------------

    /// Resolve `<root>/<name>`, create it if missing, and open it in the editor.
    ///
    /// Only the last path component is created; the root must already exist.
    ///
    /// # Errors
    ///
    /// - [`VsError::InvalidDirName`] if `name` is not a single directory name
    /// - [`VsError::Io`] if the directory cannot be created
    /// - editor errors from [`Launcher::open_editor`]
    pub fn open(&self, kind: RootKind, name: &str) -> Result<OpenResult, VsError> {
        if !is_valid_dir_name(name) {
            return Err(VsError::InvalidDirName(name.to_string()));
        }

        let path = self.config.root(kind).join(name);
        let created = if path.is_dir() {
            false
        } else {
            fs::create_dir(&path)?;
            tracing::debug!("Created {} directory {}", kind, path.display());
            true
        };

        self.open_editor(&path)?;
        Ok(OpenResult { path, created })
    }

    /// Open `<code_root>/<name>`.
    pub fn open_code(&self, name: &str) -> Result<OpenResult, VsError> {
        self.open(RootKind::Code, name)
    }

    /// Open `<project_root>/<name>`.
    pub fn open_project(&self, name: &str) -> Result<OpenResult, VsError> {
        self.open(RootKind::Project, name)
    }

    /// Launch the configured editor on `dir` and wait for it to return.
    pub fn open_editor(&self, dir: &Path) -> Result<(), VsError> {
        let spec = CommandSpec::from_command_line(self.config.editor(), dir)?.arg(".");
        let status = self.runner.run(&spec)?;
        status.check(&spec.program)
    }

    // -------------------------------------------------------------------------
    // clone
    // -------------------------------------------------------------------------

    /// Resolve where `url` would be cloned under the selected root.
    ///
    /// `into_projects` selects the project root instead of the clone root.
    fn clone_target(&self, url: &str, into_projects: bool) -> Result<CloneTarget, VsError> {
        let kind = if into_projects {
            RootKind::Project
        } else {
            RootKind::Clone
        };
        CloneTarget::resolve(url, self.config.root(kind))
    }

    /// Clone `url` unless its target already exists.
    ///
    /// The clone runs `git clone -- <url> <name>` inside the base directory.
    /// Nothing is spawned and nothing is created when the URL is invalid.
    pub fn clone_repo(&self, url: &str, into_projects: bool) -> Result<CloneResult, VsError> {
        let target = self.clone_target(url, into_projects)?;
        let action = target.decide();

        if action == CloneAction::NeedsClone {
            let base = target.path().parent().unwrap_or(target.path());
            let spec = CommandSpec::new(GIT_PROGRAM, base)
                .arg("clone")
                .arg("--")
                .arg(url.trim())
                .arg(target.name());
            let status = self.runner.run(&spec)?;
            status.check(GIT_PROGRAM)?;
        }

        Ok(CloneResult { target, action })
    }

    /// Clone `url` if needed, then open the target in the editor.
    pub fn clone_and_open(&self, url: &str, into_projects: bool) -> Result<CloneResult, VsError> {
        let result = self.clone_repo(url, into_projects)?;
        self.open_editor(result.target.path())?;
        Ok(result)
    }

    // -------------------------------------------------------------------------
    // todos
    // -------------------------------------------------------------------------

    /// Aggregate todos for the selected projects.
    pub fn todos(
        &self,
        selector: &ProjectSelector,
        mode: TodoMode,
    ) -> Result<TodoCollection, VsError> {
        aggregate(&self.config, selector, mode, &self.parser)
    }
}

// ============================================================================
// Tests
// ============================================================================
