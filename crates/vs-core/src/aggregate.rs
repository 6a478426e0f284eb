//! Todo aggregation across projects.
//!
//! Applies a [`TodoParser`] to one named project or to every immediate
//! subdirectory of the project root. Entries keep the order in which the
//! filesystem lists the directories; nothing is sorted or cached here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::WorkspaceConfig;
use crate::constants::{is_valid_dir_name, ALL_PROJECTS, CHECKLIST_FILENAME};
use crate::errors::VsError;
use crate::todo::{ChecklistStatus, MarkdownRenderer, TodoItem, TodoMode, TodoParser};

// ============================================================================
// ProjectSelector
// ============================================================================

/// Which projects to aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectSelector {
    /// Every subdirectory of the project root.
    All,
    /// A single project by directory name.
    Project(String),
}

impl ProjectSelector {
    /// Parse a CLI value: `all` selects every project, anything else names one.
    pub fn parse(value: &str) -> Self {
        if value == ALL_PROJECTS {
            Self::All
        } else {
            Self::Project(value.to_string())
        }
    }
}

impl std::fmt::Display for ProjectSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_PROJECTS),
            Self::Project(name) => f.write_str(name),
        }
    }
}

// ============================================================================
// ProjectTodos / TodoCollection
// ============================================================================

/// Per-project aggregation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTodoStatus {
    /// The checklist was parsed.
    Parsed,
    /// The project has no checklist; `items` holds the placeholder.
    Absent,
    /// The checklist could not be read or rendered; see `error`.
    Failed,
}

impl From<ChecklistStatus> for ProjectTodoStatus {
    fn from(status: ChecklistStatus) -> Self {
        match status {
            ChecklistStatus::Parsed => Self::Parsed,
            ChecklistStatus::Absent => Self::Absent,
        }
    }
}

/// Todos of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTodos {
    /// Project directory name.
    pub project_name: String,
    /// How `items` was obtained.
    pub status: ProjectTodoStatus,
    /// Items in document order; empty when `status` is `Failed`.
    pub items: Vec<TodoItem>,
    /// Failure message when `status` is `Failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProjectTodos {
    /// Item contents as plain strings.
    pub fn item_strings(&self) -> Vec<&str> {
        self.items.iter().map(TodoItem::as_str).collect()
    }
}

/// Ordered per-project todos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TodoCollection {
    projects: Vec<ProjectTodos>,
}

impl TodoCollection {
    /// Entries in aggregation order.
    pub fn projects(&self) -> &[ProjectTodos] {
        &self.projects
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Entries whose checklist failed to load.
    pub fn failures(&self) -> impl Iterator<Item = &ProjectTodos> {
        self.projects
            .iter()
            .filter(|p| p.status == ProjectTodoStatus::Failed)
    }

    /// Sort entries by project name.
    ///
    /// Aggregation itself keeps filesystem listing order.
    pub fn sort_by_name(&mut self) {
        self.projects
            .sort_by(|a, b| a.project_name.cmp(&b.project_name));
    }

    /// `(project_name, item strings)` pairs, for presentation.
    pub fn pairs(&self) -> Vec<(&str, Vec<&str>)> {
        self.projects
            .iter()
            .map(|p| (p.project_name.as_str(), p.item_strings()))
            .collect()
    }
}

// ============================================================================
// Aggregation
// ============================================================================

/// Collect todos for the selected projects under `config.project_root()`.
///
/// Per-project failures are recorded in the entry (`status = failed`) and do
/// not stop the other projects.
///
/// # Errors
///
/// - [`VsError::InvalidDirName`] if a named project is not a plain directory name
/// - [`VsError::ProjectRootUnreadable`] if the project root cannot be listed
pub fn aggregate<M: MarkdownRenderer>(
    config: &WorkspaceConfig,
    selector: &ProjectSelector,
    mode: TodoMode,
    parser: &TodoParser<M>,
) -> Result<TodoCollection, VsError> {
    let project_root = config.project_root();

    let projects = match selector {
        ProjectSelector::Project(name) => {
            if !is_valid_dir_name(name) {
                return Err(VsError::InvalidDirName(name.clone()));
            }
            vec![collect_project(name, &project_root.join(name), mode, parser)]
        }
        ProjectSelector::All => list_project_dirs(project_root)?
            .iter()
            .map(|(name, dir)| collect_project(name, dir, mode, parser))
            .collect(),
    };

    tracing::debug!(
        "Aggregated {} project(s) for selector `{}`",
        projects.len(),
        selector
    );
    Ok(TodoCollection { projects })
}

/// Immediate subdirectories of `root` as `(display name, path)`, in listing
/// order. The path is kept as listed so non-UTF-8 names still resolve.
fn list_project_dirs(root: &Path) -> Result<Vec<(String, PathBuf)>, VsError> {
    let unreadable = |e: std::io::Error| VsError::ProjectRootUnreadable {
        path: root.to_path_buf(),
        message: e.to_string(),
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        // Follows symlinks so linked project directories are included.
        if !path.is_dir() {
            continue;
        }
        dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    Ok(dirs)
}

fn collect_project<M: MarkdownRenderer>(
    name: &str,
    project_dir: &Path,
    mode: TodoMode,
    parser: &TodoParser<M>,
) -> ProjectTodos {
    let checklist_path = project_dir.join(CHECKLIST_FILENAME);
    match parser.parse(&checklist_path, mode) {
        Ok(checklist) => ProjectTodos {
            project_name: name.to_string(),
            status: checklist.status.into(),
            items: checklist.items,
            error: None,
        },
        Err(e) => {
            tracing::warn!("Skipping todos for `{}`: {}", name, e);
            ProjectTodos {
                project_name: name.to_string(),
                status: ProjectTodoStatus::Failed,
                items: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
