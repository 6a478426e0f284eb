//! Common constants used throughout vs-core.
//!
//! This module centralizes file names, directory names, and defaults so the
//! CLI and the core agree on them.

// ============================================================================
// Configuration
// ============================================================================

/// The name of the per-user configuration directory (`~/.vs`).
pub const VS_HOME_DIR: &str = ".vs";

/// The name of the configuration file inside [`VS_HOME_DIR`].
pub const CONFIG_FILENAME: &str = "config.json";

/// Editor command used when the configuration does not name one.
pub const DEFAULT_EDITOR: &str = "code";

/// Program used to clone repositories.
pub const GIT_PROGRAM: &str = "git";

// ============================================================================
// Checklists
// ============================================================================

/// The name of the per-project checklist file.
pub const CHECKLIST_FILENAME: &str = ".todo";

/// Placeholder item returned for projects without a checklist file.
pub const MISSING_CHECKLIST_MESSAGE: &str = "Project doesn't contain .todo file.";

/// Selector value meaning "every project under the project root".
pub const ALL_PROJECTS: &str = "all";

// ============================================================================
// Directory names
// ============================================================================

/// Check whether `name` can be used as a single directory component under a
/// workspace root.
///
/// Rejects empty names, `.` and `..`, and anything containing a path
/// separator.
#[inline]
pub fn is_valid_dir_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
}
