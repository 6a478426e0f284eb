//! Standalone HTML page for `vs todos --html`.
//!
//! Each project gets a `<section>` with its name as a heading followed by its
//! rendered checklist. Rendered fragments are inserted as-is; everything
//! else (project names, text items, error messages) is escaped.

use vs_core::{ProjectTodoStatus, ProjectTodos, TodoCollection, TodoItem};

const PAGE_TITLE: &str = "Todos";

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
section { border-top: 1px solid #ddd; padding: 0.5rem 0; }
h2 { font-size: 1.2rem; margin: 0.5rem 0; }
li { margin: 0.2rem 0; }
.absent { color: #888; }
.error { color: #b00; }
";

/// Escape text for use in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_items(project: &ProjectTodos) -> String {
    if project.status == ProjectTodoStatus::Failed {
        let message = project.error.as_deref().unwrap_or("checklist could not be loaded");
        return format!("<p class=\"error\">{}</p>\n", escape_html(message));
    }

    let mut out = String::new();
    let mut list_open = false;
    for item in &project.items {
        match item {
            TodoItem::Html(fragment) => out.push_str(fragment),
            TodoItem::Text(text) if project.status == ProjectTodoStatus::Absent => {
                out.push_str(&format!("<p class=\"absent\">{}</p>\n", escape_html(text)));
            }
            TodoItem::Text(text) => {
                if !list_open {
                    out.push_str("<ul>\n");
                    list_open = true;
                }
                out.push_str(&format!("<li>{}</li>\n", escape_html(text)));
            }
        }
    }
    if list_open {
        out.push_str("</ul>\n");
    }
    out
}

/// Assemble a complete HTML document from aggregated todos.
pub fn render_todo_page(todos: &TodoCollection) -> String {
    let mut body = String::new();
    for project in todos.projects() {
        body.push_str("<section class=\"project\">\n");
        body.push_str(&format!("<h2>{}</h2>\n", escape_html(&project.project_name)));
        body.push_str(&render_items(project));
        body.push_str("</section>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{style}</style>\n</head>\n<body>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = PAGE_TITLE,
        style = PAGE_STYLE,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vs_core::{aggregate, ProjectSelector, TodoMode, TodoParser, WorkspaceConfig};

    fn collect(setup: impl FnOnce(&std::path::Path), mode: TodoMode) -> (TempDir, TodoCollection) {
        let temp = TempDir::new().unwrap();
        let roots = ["projects", "code", "clones"].map(|n| temp.path().join(n));
        for r in &roots {
            fs::create_dir_all(r).unwrap();
        }
        setup(&roots[0]);
        let config = WorkspaceConfig::new(&roots[0], &roots[1], &roots[2]);
        let mut todos = aggregate(&config, &ProjectSelector::All, mode, &TodoParser::new()).unwrap();
        todos.sort_by_name();
        (temp, todos)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_html_page_embeds_fragments() {
        let (_temp, todos) = collect(
            |root| {
                fs::create_dir(root.join("alpha")).unwrap();
                fs::write(root.join("alpha").join(".todo"), "- **bold** task\n").unwrap();
                fs::create_dir(root.join("beta")).unwrap();
            },
            TodoMode::Html,
        );
        let page = render_todo_page(&todos);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h2>alpha</h2>"));
        assert!(page.contains("<li><strong>bold</strong> task</li>"));
        assert!(page.contains("<h2>beta</h2>\n<p>Project doesn't contain .todo file.</p>"));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_text_items_are_escaped() {
        let (_temp, todos) = collect(
            |root| {
                fs::create_dir(root.join("r&d")).unwrap();
                fs::write(root.join("r&d").join(".todo"), "- use `Vec<T>`\n").unwrap();
            },
            TodoMode::Text,
        );
        let page = render_todo_page(&todos);

        assert!(page.contains("<h2>r&amp;d</h2>"));
        assert!(page.contains("<ul>\n<li>use Vec&lt;T&gt;</li>\n</ul>"));
    }

    #[test]
    fn test_absent_text_placeholder() {
        let (_temp, todos) = collect(
            |root| fs::create_dir(root.join("empty")).unwrap(),
            TodoMode::Text,
        );
        let page = render_todo_page(&todos);
        assert!(page.contains("<p class=\"absent\">Project doesn&#39;t contain .todo file.</p>"));
        assert!(!page.contains("<ul>"));
    }
}
