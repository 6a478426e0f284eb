//! Checklist parsing.
//!
//! A project's checklist is a Markdown file named `.todo` at the project
//! root. Every Markdown list item is a task, with or without checkbox
//! syntax. The file is rendered to HTML by a [`MarkdownRenderer`]; in text
//! mode the text of each `<li>` is then extracted, in HTML mode the rendered
//! fragment is returned whole.
//!
//! ## Outcomes
//!
//! | File state | Result |
//! |------------|--------|
//! | present and readable | `Ok` with [`ChecklistStatus::Parsed`] |
//! | absent | `Ok` with [`ChecklistStatus::Absent`] and one placeholder item |
//! | unreadable | `Err(VsError::ChecklistUnreadable)` |
//! | renderer failed | `Err(VsError::RenderFailure)` |

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use pulldown_cmark::{html, Options, Parser};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

use crate::constants::MISSING_CHECKLIST_MESSAGE;
use crate::errors::VsError;

// ============================================================================
// Types
// ============================================================================

/// Output representation of checklist items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoMode {
    /// One plain-text item per list entry.
    #[default]
    Text,
    /// A single rendered HTML fragment.
    Html,
}

/// A single checklist entry.
///
/// A parse result holds only `Text` items or only `Html` items, matching the
/// requested [`TodoMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TodoItem {
    /// Text content of one list item.
    Text(String),
    /// Rendered HTML fragment of the whole checklist.
    Html(String),
}

impl TodoItem {
    /// The item's string content regardless of representation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Html(s) => s,
        }
    }

    /// The placeholder used when a project has no checklist file.
    pub fn missing_checklist(mode: TodoMode) -> Self {
        match mode {
            TodoMode::Text => Self::Text(MISSING_CHECKLIST_MESSAGE.to_string()),
            TodoMode::Html => Self::Html(format!("<p>{}</p>\n", MISSING_CHECKLIST_MESSAGE)),
        }
    }
}

impl std::fmt::Display for TodoItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a checklist was read or replaced by the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistStatus {
    /// The file was read and rendered.
    Parsed,
    /// The file does not exist.
    Absent,
}

/// Items parsed from one checklist file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    /// How the items were obtained.
    pub status: ChecklistStatus,
    /// The items, in document order.
    pub items: Vec<TodoItem>,
}

impl Checklist {
    fn absent(mode: TodoMode) -> Self {
        Self {
            status: ChecklistStatus::Absent,
            items: vec![TodoItem::missing_checklist(mode)],
        }
    }

    /// Item contents as plain strings.
    pub fn item_strings(&self) -> Vec<&str> {
        self.items.iter().map(TodoItem::as_str).collect()
    }
}

// ============================================================================
// MarkdownRenderer
// ============================================================================

/// Renders Markdown source to an HTML fragment.
pub trait MarkdownRenderer {
    /// Render `markdown` to HTML.
    ///
    /// Returns a human-readable message on failure.
    fn render(&self, markdown: &str) -> Result<String, String>;
}

/// CommonMark renderer backed by `pulldown-cmark`, with task lists, tables
/// and strikethrough enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownRenderer;

impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str) -> Result<String, String> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

/// Extract the text content of every `<li>` element, in document order.
///
/// Nested markup is discarded and each entry is trimmed. A nested list item
/// appears both inside its parent's text and as its own entry.
pub fn extract_list_items(fragment: &str) -> Result<Vec<String>, String> {
    let selector = Selector::parse("li").map_err(|e| e.to_string())?;
    let document = Html::parse_fragment(fragment);
    Ok(document
        .select(&selector)
        .map(|li| li.text().collect::<String>().trim().to_string())
        .collect())
}

// ============================================================================
// TodoParser
// ============================================================================

/// Parses checklist files with an injected [`MarkdownRenderer`].
#[derive(Debug, Clone, Default)]
pub struct TodoParser<M = PulldownRenderer> {
    renderer: M,
}

impl TodoParser<PulldownRenderer> {
    /// A parser using the default `pulldown-cmark` renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MarkdownRenderer> TodoParser<M> {
    /// A parser using `renderer`.
    pub fn with_renderer(renderer: M) -> Self {
        Self { renderer }
    }

    /// Parse the checklist at `path`.
    ///
    /// A missing file is not an error: it yields the one-item placeholder
    /// with [`ChecklistStatus::Absent`].
    ///
    /// # Errors
    ///
    /// - [`VsError::ChecklistUnreadable`] for any read failure other than "not found"
    /// - [`VsError::RenderFailure`] if rendering or list extraction fails
    pub fn parse(&self, path: &Path, mode: TodoMode) -> Result<Checklist, VsError> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No checklist at {}", path.display());
                return Ok(Checklist::absent(mode));
            }
            Err(e) => {
                return Err(VsError::ChecklistUnreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };

        let render_failure = |message: String| VsError::RenderFailure {
            path: path.to_path_buf(),
            message,
        };

        let fragment = self.renderer.render(&source).map_err(render_failure)?;

        let items = match mode {
            TodoMode::Html => vec![TodoItem::Html(fragment)],
            TodoMode::Text => extract_list_items(&fragment)
                .map_err(render_failure)?
                .into_iter()
                .map(TodoItem::Text)
                .collect(),
        };

        Ok(Checklist {
            status: ChecklistStatus::Parsed,
            items,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
