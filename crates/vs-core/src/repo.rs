//! Repository name resolution and clone decisions.
//!
//! A pasted repository URL is reduced to its final `/<name>.git` segment;
//! `<name>` becomes the directory under the chosen base where the repository
//! lives. Re-running a clone for the same URL therefore lands on the same
//! directory and is skipped once it exists.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::constants::is_valid_dir_name;
use crate::errors::VsError;

/// Trailing `/<name>.git` segment of a repository URL.
const REPO_NAME_PATTERN: &str = r"/([^/]+)\.git$";

fn repo_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(REPO_NAME_PATTERN).expect("repo name pattern is valid"))
}

/// Extract the repository directory name from a raw URL string.
///
/// Surrounding whitespace is ignored. The rest of the URL (scheme, host,
/// reachability) is not validated.
///
/// # Errors
///
/// Returns [`VsError::InvalidRepoUrl`] if the input does not end in
/// `/<name>.git`.
///
/// # Example
///
/// ```
/// use vs_core::resolve_repo_name;
///
/// assert_eq!(resolve_repo_name("https://example.com/org/my-repo.git").unwrap(), "my-repo");
/// assert_eq!(resolve_repo_name("git@host:org/repo.git").unwrap(), "repo");
/// assert!(resolve_repo_name("not-a-url").is_err());
/// ```
pub fn resolve_repo_name(url: &str) -> Result<String, VsError> {
    let trimmed = url.trim();
    repo_name_regex()
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| VsError::InvalidRepoUrl(trimmed.to_string()))
}

// ============================================================================
// CloneTarget
// ============================================================================

/// What to do with a clone target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CloneAction {
    /// The target path exists; nothing to clone.
    AlreadyPresent,
    /// The target path is absent; the repository must be cloned.
    NeedsClone,
}

/// The local directory a repository URL maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloneTarget {
    name: String,
    path: PathBuf,
}

impl CloneTarget {
    /// Resolve the target for `url` under `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`VsError::InvalidRepoUrl`] if the URL has no `/<name>.git` tail
    /// or the name is a dot segment such as `..`.
    pub fn resolve(url: &str, base_dir: &Path) -> Result<Self, VsError> {
        let name = resolve_repo_name(url)?;
        if !is_valid_dir_name(&name) {
            return Err(VsError::InvalidRepoUrl(url.trim().to_string()));
        }
        let path = base_dir.join(&name);
        Ok(Self { name, path })
    }

    /// Directory name derived from the URL.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full path of the target directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the target path currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Decide whether a clone is required. Only checks existence.
    pub fn decide(&self) -> CloneAction {
        let action = if self.exists() {
            CloneAction::AlreadyPresent
        } else {
            CloneAction::NeedsClone
        };
        tracing::debug!("Clone target {} -> {:?}", self.path.display(), action);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_https_url() {
        assert_eq!(
            resolve_repo_name("https://example.com/org/my-repo.git").unwrap(),
            "my-repo"
        );
    }

    #[test]
    fn test_resolve_scp_style_url() {
        assert_eq!(resolve_repo_name("git@host:org/repo.git").unwrap(), "repo");
    }

    #[test]
    fn test_resolve_keeps_case_and_dots() {
        assert_eq!(
            resolve_repo_name("https://github.com/Org/Some.Lib.git").unwrap(),
            "Some.Lib"
        );
    }

    #[test]
    fn test_resolve_trims_clipboard_whitespace() {
        assert_eq!(
            resolve_repo_name("  https://example.com/a/b.git\n").unwrap(),
            "b"
        );
    }

    #[test]
    fn test_resolve_rejects_unrecognized_input() {
        for input in [
            "not-a-url",
            "git@host:org/repo",
            "https://example.com/org/repo",
            "https://example.com/org/repo.git/",
            "repo.git",
            "/.git",
            "",
        ] {
            let err = resolve_repo_name(input).unwrap_err();
            assert!(
                matches!(err, VsError::InvalidRepoUrl(_)),
                "expected InvalidRepoUrl for {input:?}"
            );
        }
    }

    #[test]
    fn test_clone_target_path() {
        let target = CloneTarget::resolve("https://x.org/a/tool.git", Path::new("/base")).unwrap();
        assert_eq!(target.name(), "tool");
        assert_eq!(target.path(), Path::new("/base/tool"));
    }

    #[test]
    fn test_clone_target_rejects_dot_names() {
        let temp = TempDir::new().unwrap();
        for url in ["https://x.org/a/..git", "https://x.org/a/...git"] {
            let err = CloneTarget::resolve(url, temp.path()).unwrap_err();
            assert!(
                matches!(err, VsError::InvalidRepoUrl(_)),
                "expected InvalidRepoUrl for {url:?}"
            );
        }
        assert_eq!(resolve_repo_name("https://x.org/a/...git").unwrap(), "..");
    }

    #[test]
    fn test_decide_needs_clone_then_present() {
        let temp = TempDir::new().unwrap();
        let target = CloneTarget::resolve("https://x.org/a/tool.git", temp.path()).unwrap();

        assert_eq!(target.decide(), CloneAction::NeedsClone);
        assert_eq!(target.decide(), CloneAction::NeedsClone);
        assert!(!target.path().exists(), "decide must not create the path");

        fs::create_dir(target.path()).unwrap();
        assert_eq!(target.decide(), CloneAction::AlreadyPresent);
        assert_eq!(target.decide(), CloneAction::AlreadyPresent);
    }
}
