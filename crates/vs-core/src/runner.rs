//! External process execution.
//!
//! Everything that leaves the process (cloning, launching the editor) goes
//! through the [`CommandRunner`] trait so the launcher can be exercised in
//! tests without spawning anything.

use std::path::PathBuf;
use std::process::Command;
use std::sync::Mutex;

use crate::errors::VsError;

// ============================================================================
// CommandSpec / CommandStatus
// ============================================================================

/// A program invocation: program, arguments, and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory for the process.
    pub cwd: PathBuf,
}

impl CommandSpec {
    /// Create a spec for `program` running in `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Append an argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Build a spec from a shell-style command line such as `code -n`.
    ///
    /// # Errors
    ///
    /// Returns [`VsError::CommandSpawn`] if the line cannot be split or is empty.
    pub fn from_command_line(line: &str, cwd: impl Into<PathBuf>) -> Result<Self, VsError> {
        let mut words = split_command_line(line)?.into_iter();
        let program = words.next().ok_or_else(|| VsError::CommandSpawn {
            program: line.to_string(),
            message: "empty command".to_string(),
        })?;
        Ok(Self {
            program,
            args: words.collect(),
            cwd: cwd.into(),
        })
    }
}

/// Split a command line into words.
///
/// `shell_words` treats backslashes as escapes, which mangles Windows paths
/// such as `C:\Tools\edit.exe`, so Windows splits on whitespace only.
fn split_command_line(line: &str) -> Result<Vec<String>, VsError> {
    if cfg!(windows) {
        Ok(line.split_whitespace().map(str::to_string).collect())
    } else {
        shell_words::split(line).map_err(|e| VsError::CommandSpawn {
            program: line.to_string(),
            message: e.to_string(),
        })
    }
}

/// Locate `program` on `PATH`, including Windows `PATHEXT` shims like
/// `code.cmd`.
pub fn resolve_program(program: &str) -> Result<PathBuf, VsError> {
    which::which(program).map_err(|e| VsError::CommandSpawn {
        program: program.to_string(),
        message: e.to_string(),
    })
}

impl std::fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` when terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    /// Status of a program that exited with code 0.
    pub const SUCCESS: CommandStatus = CommandStatus { code: Some(0) };

    /// Whether the program exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Convert a non-zero status into [`VsError::CommandFailed`].
    pub fn check(self, program: &str) -> Result<(), VsError> {
        if self.success() {
            Ok(())
        } else {
            Err(VsError::CommandFailed {
                program: program.to_string(),
                code: self.code,
            })
        }
    }
}

// ============================================================================
// CommandRunner
// ============================================================================

/// Runs a program to completion and reports its exit status.
pub trait CommandRunner {
    /// Run `spec` and wait for it to exit.
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus, VsError>;
}

/// Runs programs with [`std::process::Command`], inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus, VsError> {
        let program = resolve_program(&spec.program)?;
        tracing::debug!(
            "Running `{}` ({}) in {}",
            spec,
            program.display(),
            spec.cwd.display()
        );
        let status = Command::new(&program)
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .status()
            .map_err(|e| VsError::CommandSpawn {
                program: spec.program.clone(),
                message: e.to_string(),
            })?;
        Ok(CommandStatus {
            code: status.code(),
        })
    }
}

/// Records every invocation and answers with a fixed status.
///
/// Useful for dry runs and tests.
#[derive(Debug)]
pub struct RecordingRunner {
    status: CommandStatus,
    calls: Mutex<Vec<CommandSpec>>,
}

impl RecordingRunner {
    /// A runner whose commands all succeed.
    pub fn new() -> Self {
        Self::with_status(CommandStatus::SUCCESS)
    }

    /// A runner whose commands all finish with `status`.
    pub fn with_status(status: CommandStatus) -> Self {
        Self {
            status,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// The invocations seen so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus, VsError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(spec.clone());
        }
        Ok(self.status)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus, VsError> {
        (**self).run(spec)
    }
}
