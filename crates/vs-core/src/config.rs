//! Configuration for vs.
//!
//! [`WorkspaceConfig`] holds the three workspace roots (projects, scratch
//! code, clone targets) and the editor command. It is persisted as JSON in
//! `~/.vs/config.json`:
//!
//! ```json
//! {
//!     "PROJECT_DIR": "/home/me/projects",
//!     "CODE_DIR": "/home/me/code",
//!     "CLONE_DIR": "/home/me/clones",
//!     "EDITOR": "code"
//! }
//! ```
//!
//! A config is loaded once at process entry and passed by reference into
//! every operation. It is never mutated afterwards.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILENAME, DEFAULT_EDITOR, VS_HOME_DIR};
use crate::errors::VsError;

// ============================================================================
// RootKind
// ============================================================================

/// One of the three configured workspace roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootKind {
    /// Long-lived projects (`PROJECT_DIR`).
    Project,
    /// Scratch/playground code (`CODE_DIR`).
    Code,
    /// Clone targets (`CLONE_DIR`).
    Clone,
}

impl RootKind {
    /// All root kinds, in the order they are reported.
    pub const ALL: [RootKind; 3] = [RootKind::Project, RootKind::Code, RootKind::Clone];

    /// The key used for this root in the config file.
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::Project => "PROJECT_DIR",
            Self::Code => "CODE_DIR",
            Self::Clone => "CLONE_DIR",
        }
    }
}

impl std::fmt::Display for RootKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Code => write!(f, "code"),
            Self::Clone => write!(f, "clone"),
        }
    }
}

// ============================================================================
// RawConfig
// ============================================================================

/// On-disk shape of the config file. Every key is optional here so that a
/// missing key is reported as [`VsError::ConfigIncomplete`] rather than as a
/// JSON error.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(rename = "PROJECT_DIR")]
    project_dir: Option<PathBuf>,
    #[serde(rename = "CODE_DIR")]
    code_dir: Option<PathBuf>,
    #[serde(rename = "CLONE_DIR")]
    clone_dir: Option<PathBuf>,
    #[serde(rename = "EDITOR")]
    editor: Option<String>,
}

// ============================================================================
// WorkspaceConfig
// ============================================================================

/// The configured workspace roots and editor command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceConfig {
    #[serde(rename = "PROJECT_DIR")]
    project_root: PathBuf,
    #[serde(rename = "CODE_DIR")]
    code_root: PathBuf,
    #[serde(rename = "CLONE_DIR")]
    clone_root: PathBuf,
    #[serde(rename = "EDITOR", skip_serializing_if = "Option::is_none")]
    editor: Option<String>,
}

impl WorkspaceConfig {
    /// Create a config from explicit roots without touching the filesystem.
    ///
    /// Call [`WorkspaceConfig::validate`] before handing it to operations.
    pub fn new(
        project_root: impl Into<PathBuf>,
        code_root: impl Into<PathBuf>,
        clone_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            code_root: code_root.into(),
            clone_root: clone_root.into(),
            editor: None,
        }
    }

    /// Set the editor command (e.g. `code -n`).
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        let editor = editor.into();
        self.editor = if editor.trim().is_empty() {
            None
        } else {
            Some(editor)
        };
        self
    }

    /// Get the default config directory (`~/.vs`).
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(VS_HOME_DIR))
    }

    /// Get the default config file path (`~/.vs/config.json`).
    pub fn default_path() -> Option<PathBuf> {
        Self::default_dir().map(|d| d.join(CONFIG_FILENAME))
    }

    /// Load and validate the config from the default location.
    ///
    /// # Errors
    ///
    /// Returns [`VsError::ConfigNotInitialized`] if the home directory cannot
    /// be determined or the file does not exist, plus every error of
    /// [`WorkspaceConfig::load`].
    pub fn load_default() -> Result<Self, VsError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Err(VsError::ConfigNotInitialized {
                path: PathBuf::from("~").join(VS_HOME_DIR).join(CONFIG_FILENAME),
            }),
        }
    }

    /// Load the config from `path` and validate it.
    ///
    /// # Errors
    ///
    /// - [`VsError::ConfigNotInitialized`] if the file is missing or unreadable
    /// - [`VsError::InvalidConfig`] if it is not a JSON object
    /// - [`VsError::ConfigIncomplete`] if a key is missing or a root does not exist
    pub fn load(path: &Path) -> Result<Self, VsError> {
        let config = Self::from_path(path)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read the config from `path` without checking the roots on disk.
    pub fn from_path(path: &Path) -> Result<Self, VsError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() != ErrorKind::NotFound {
                tracing::debug!("Failed to read {}: {}", path.display(), e);
            }
            VsError::ConfigNotInitialized {
                path: path.to_path_buf(),
            }
        })?;

        let raw: RawConfig = serde_json::from_str(&content).map_err(|e| VsError::InvalidConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let missing = |kind: RootKind| {
            VsError::ConfigIncomplete(format!("missing key `{}`", kind.config_key()))
        };

        let config = Self {
            project_root: raw.project_dir.ok_or_else(|| missing(RootKind::Project))?,
            code_root: raw.code_dir.ok_or_else(|| missing(RootKind::Code))?,
            clone_root: raw.clone_dir.ok_or_else(|| missing(RootKind::Clone))?,
            editor: None,
        };

        Ok(match raw.editor {
            Some(editor) => config.with_editor(editor),
            None => config,
        })
    }

    /// Write the config to `path` as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), VsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        tracing::debug!("Wrote config to {}", path.display());
        Ok(())
    }

    /// Check that every configured root exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`VsError::ConfigIncomplete`] naming the first invalid root.
    pub fn validate(&self) -> Result<(), VsError> {
        for kind in RootKind::ALL {
            let root = self.root(kind);
            if !root.is_dir() {
                return Err(VsError::ConfigIncomplete(format!(
                    "`{}` points to a missing directory: {}",
                    kind.config_key(),
                    root.display()
                )));
            }
        }
        Ok(())
    }

    /// Get the path of a root.
    pub fn root(&self, kind: RootKind) -> &Path {
        match kind {
            RootKind::Project => &self.project_root,
            RootKind::Code => &self.code_root,
            RootKind::Clone => &self.clone_root,
        }
    }

    /// Get the project root.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the scratch code root.
    pub fn code_root(&self) -> &Path {
        &self.code_root
    }

    /// Get the clone root.
    pub fn clone_root(&self) -> &Path {
        &self.clone_root
    }

    /// Get the editor command, falling back to [`DEFAULT_EDITOR`].
    pub fn editor(&self) -> &str {
        self.editor.as_deref().unwrap_or(DEFAULT_EDITOR)
    }
}

// ============================================================================
// Tests
// ============================================================================
