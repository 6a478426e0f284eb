//! Error types for vs-core.

use std::path::PathBuf;

use thiserror::Error;

/// Domain-specific errors for vs operations.
#[derive(Error, Debug)]
pub enum VsError {
    /// The configuration file is missing or cannot be read.
    #[error("Config not initialized at {}. Run `vs init`.", path.display())]
    ConfigNotInitialized {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// A required key is missing or a configured directory does not exist.
    #[error("Config incomplete: {0}")]
    ConfigIncomplete(String),

    /// The configuration file exists but is not valid JSON.
    #[error("Config invalid at {}: {message}", path.display())]
    InvalidConfig {
        /// Path to the configuration file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The input is not a recognizable repository reference.
    #[error("Invalid git repo `{0}`: expected a URL ending in `/<name>.git`")]
    InvalidRepoUrl(String),

    /// A directory name is empty, a dot segment, or contains a path separator.
    #[error("Invalid directory name `{0}`")]
    InvalidDirName(String),

    /// The project root could not be listed.
    #[error("Cannot list project root {}: {message}", path.display())]
    ProjectRootUnreadable {
        /// The project root.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// A checklist file exists but could not be read.
    #[error("Checklist unreadable at {}: {message}", path.display())]
    ChecklistUnreadable {
        /// Path to the checklist file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The Markdown renderer (or the list extraction that follows it) failed.
    #[error("Failed to render checklist {}: {message}", path.display())]
    RenderFailure {
        /// Path to the checklist file.
        path: PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// An external program could not be started.
    #[error("Failed to start `{program}`: {message}")]
    CommandSpawn {
        /// The program that failed to start.
        program: String,
        /// Description of the failure.
        message: String,
    },

    /// An external program exited unsuccessfully.
    #[error("`{program}` exited with {}", code.map_or_else(|| "a signal".to_string(), |c| format!("status {c}")))]
    CommandFailed {
        /// The program that failed.
        program: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },

    /// The clipboard could not be read.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A wrapped generic error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VsError {
    /// Whether this error comes from loading or validating the configuration.
    ///
    /// The CLI attaches a `vs init` hint to these.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotInitialized { .. } | Self::ConfigIncomplete(_) | Self::InvalidConfig { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = VsError::CommandFailed {
            program: "git".to_string(),
            code: Some(128),
        };
        assert_eq!(err.to_string(), "`git` exited with status 128");

        let err = VsError::CommandFailed {
            program: "git".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "`git` exited with a signal");
    }

    #[test]
    fn test_is_config_error() {
        assert!(VsError::ConfigIncomplete("x".into()).is_config_error());
        assert!(VsError::ConfigNotInitialized {
            path: PathBuf::from("/nope")
        }
        .is_config_error());
        assert!(!VsError::InvalidRepoUrl("x".into()).is_config_error());
    }
}
