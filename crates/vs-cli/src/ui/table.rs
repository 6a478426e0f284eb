//! Table rendering for CLI output using comfy-table.
//!
//! | Command | Table Function |
//! |---------|----------------|
//! | `vs config show` | `render_roots_table()` |
//! | `vs todos --summary` | `render_todo_summary()` |

use comfy_table::presets::NOTHING;
use comfy_table::{Cell, CellAlignment, ColumnConstraint, Table, Width};

use vs_core::{ProjectTodoStatus, RootKind, TodoCollection, WorkspaceConfig};

use super::color::terminal_width;
use super::format::truncate_str;

/// Render the configured roots.
///
/// # Example Output
///
/// ```text
/// ROOT      KEY           PATH                  STATUS
/// project   PROJECT_DIR   /home/me/projects     ok
/// code      CODE_DIR      /home/me/code         ok
/// clone     CLONE_DIR     /home/me/clones       missing
/// ```
pub fn render_roots_table(config: &WorkspaceConfig) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        Cell::new("ROOT"),
        Cell::new("KEY"),
        Cell::new("PATH"),
        Cell::new("STATUS"),
    ]);

    for kind in RootKind::ALL {
        let path = config.root(kind);
        let status = if path.is_dir() { "ok" } else { "missing" };
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(kind.config_key()),
            Cell::new(path.display()),
            Cell::new(status),
        ]);
    }

    table.trim_fmt().to_string()
}

/// Render one row per project with its item count and first item.
///
/// Absent checklists count zero items; failed ones show `-`.
///
/// # Example Output
///
/// ```text
/// PROJECT   STATUS   ITEMS   FIRST ITEM
/// alpha     parsed       2   write spec
/// beta      absent       0   -
/// ```
pub fn render_todo_summary(todos: &TodoCollection) -> String {
    if todos.is_empty() {
        return String::new();
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec![
        Cell::new("PROJECT"),
        Cell::new("STATUS"),
        Cell::new("ITEMS").set_alignment(CellAlignment::Right),
        Cell::new("FIRST ITEM"),
    ]);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(8)), // PROJECT
        ColumnConstraint::LowerBoundary(Width::Fixed(7)), // STATUS
        ColumnConstraint::LowerBoundary(Width::Fixed(5)), // ITEMS
    ]);

    let first_item_width = terminal_width().saturating_sub(50).max(20);

    for project in todos.projects() {
        let (status, count, first) = match project.status {
            ProjectTodoStatus::Parsed => (
                "parsed",
                project.items.len().to_string(),
                project
                    .items
                    .first()
                    .map(|item| truncate_str(item.as_str(), first_item_width))
                    .unwrap_or_else(|| "-".to_string()),
            ),
            ProjectTodoStatus::Absent => ("absent", "0".to_string(), "-".to_string()),
            ProjectTodoStatus::Failed => ("failed", "-".to_string(), "-".to_string()),
        };

        table.add_row(vec![
            Cell::new(truncate_str(&project.project_name, 30)),
            Cell::new(status),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(first),
        ]);
    }

    table.trim_fmt().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vs_core::{aggregate, ProjectSelector, TodoMode, TodoParser};

    fn workspace() -> (TempDir, WorkspaceConfig) {
        let temp = TempDir::new().unwrap();
        let roots = ["projects", "code", "clones"].map(|n| temp.path().join(n));
        for r in &roots {
            fs::create_dir_all(r).unwrap();
        }
        let config = WorkspaceConfig::new(&roots[0], &roots[1], &roots[2]);
        (temp, config)
    }

    #[test]
    fn test_roots_table_lists_every_root() {
        let (_temp, config) = workspace();
        let output = render_roots_table(&config);

        assert!(output.contains("ROOT"));
        assert!(output.contains("PROJECT_DIR"));
        assert!(output.contains("CODE_DIR"));
        assert!(output.contains("CLONE_DIR"));
        assert!(!output.contains("missing"));
    }

    #[test]
    fn test_roots_table_flags_missing_root() {
        let (_temp, config) = workspace();
        fs::remove_dir(config.clone_root()).unwrap();
        let output = render_roots_table(&config);
        let clone_line = output.lines().find(|l| l.contains("CLONE_DIR")).unwrap();
        assert!(clone_line.contains("missing"));
    }

    #[test]
    fn test_todo_summary_rows() {
        let (_temp, config) = workspace();
        let alpha = config.project_root().join("alpha");
        fs::create_dir(&alpha).unwrap();
        fs::write(alpha.join(".todo"), "- write spec\n- review\n").unwrap();
        fs::create_dir(config.project_root().join("beta")).unwrap();

        let mut todos = aggregate(
            &config,
            &ProjectSelector::All,
            TodoMode::Text,
            &TodoParser::new(),
        )
        .unwrap();
        todos.sort_by_name();
        let output = render_todo_summary(&todos);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("FIRST ITEM"));
        assert!(lines[1].contains("alpha") && lines[1].contains("parsed"));
        assert!(lines[1].contains("write spec"));
        assert!(lines[2].contains("beta") && lines[2].contains("absent"));
    }

    #[test]
    fn test_todo_summary_empty() {
        assert!(render_todo_summary(&TodoCollection::default()).is_empty());
    }
}
