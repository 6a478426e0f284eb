//! CLI definition and command dispatch for vs.
//!
//! This module defines the command-line interface using `clap` and provides
//! the `run()` function that loads the workspace config and dispatches to the
//! launcher.
//!
//! ## Configuration Precedence
//!
//! 1. `--config <path>`
//! 2. `VS_CONFIG` environment variable
//! 3. `~/.vs/config.json`

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::ui::{format, page, table, ColorMode, MessageType, Style};

use vs_core::{
    CloneAction, Launcher, OpenResult, ProjectSelector, ProjectTodoStatus, RootKind, TodoCollection,
    TodoMode, VsError, WorkspaceConfig,
};

// ============================================================================
// CLI Definition
// ============================================================================

/// Version string including git commit hash
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

const INIT_HINT: &str =
    "Run `vs init --project-dir <dir> --code-dir <dir> --clone-dir <dir>` to create it";

/// vs – open workspaces, clone repositories, and collect project todos
#[derive(Parser, Debug)]
#[command(name = "vs")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true, env = "VS_VERBOSE")]
    pub verbose: bool,

    /// Suppress informational messages
    #[arg(short, long, global = true, env = "VS_QUIET")]
    pub quiet: bool,

    /// Path to configuration file (default: ~/.vs/config.json)
    #[arg(long, global = true, env = "VS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Color output mode: always, never, or auto (default: auto)
    #[arg(long, global = true, env = "VS_COLOR", default_value = "auto")]
    pub color: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the configuration file with the three workspace roots
    #[command(after_help = r#"EXAMPLES:
    vs init --project-dir ~/projects --code-dir ~/code --clone-dir ~/clones

    # Use a different editor command
    vs init --project-dir ~/p --code-dir ~/c --clone-dir ~/g --editor "code -n"
"#)]
    Init {
        /// Directory holding long-lived projects
        #[arg(long)]
        project_dir: PathBuf,

        /// Directory holding scratch code
        #[arg(long)]
        code_dir: PathBuf,

        /// Directory that cloned repositories go into
        #[arg(long)]
        clone_dir: PathBuf,

        /// Editor command, run with `.` in the opened directory (default: code)
        #[arg(long)]
        editor: Option<String>,
    },

    /// Open (creating if needed) a directory under the code root
    #[command(after_help = r#"EXAMPLES:
    vs code scratch
"#)]
    Code {
        /// Directory name under the code root
        name: String,
    },

    /// Open (creating if needed) a directory under the project root
    #[command(after_help = r#"EXAMPLES:
    vs project website
"#)]
    Project {
        /// Directory name under the project root
        name: String,
    },

    /// Clone the repository URL on the clipboard, then open it
    #[command(after_help = r#"EXAMPLES:
    # Copy https://github.com/org/repo.git, then:
    vs clone

    # Clone into the project root instead of the clone root
    vs clone --project

    # Skip the clipboard
    vs clone --url https://github.com/org/repo.git
"#)]
    Clone {
        /// Clone into the project root instead of the clone root
        #[arg(long)]
        project: bool,

        /// Repository URL to use instead of the clipboard contents
        #[arg(long)]
        url: Option<String>,
    },

    /// Show `.todo` checklists for one project or all projects
    #[command(after_help = r#"EXAMPLES:
    # Every project, in directory listing order
    vs todos

    # One project
    vs todos --project website

    # HTML page
    vs todos --html --output todos.html

    # One row per project
    vs todos --summary --sort
"#)]
    Todos {
        /// Project name, or `all`
        #[arg(long, default_value = "all")]
        project: String,

        /// Render checklists to an HTML page
        #[arg(long, conflicts_with_all = ["json", "summary"])]
        html: bool,

        /// Output in JSON format
        #[arg(long, conflicts_with = "summary")]
        json: bool,

        /// Show one summary row per project
        #[arg(long)]
        summary: bool,

        /// Sort projects by name
        #[arg(long)]
        sort: bool,

        /// Write the output to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the configured roots and editor
    Show {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Check that every configured root exists
    Check,
}

// ============================================================================
// Run function
// ============================================================================

/// Run the CLI application.
///
/// Returns `ExitCode::SUCCESS` on success, or `ExitCode::FAILURE` on error.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Warnings always; debug with --verbose
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = format!("vs_core={},vs={}", log_level, log_level);

    tracing_subscriber::fmt()
        .with_env_filter(&filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let color_mode = cli.color.parse::<ColorMode>().unwrap_or_default();
    let style = Style::new(color_mode);

    let config_path = match cli.config.clone().or_else(WorkspaceConfig::default_path) {
        Some(path) => path,
        None => {
            eprintln!(
                "{}",
                style.error_with_context(
                    "Cannot locate the config file",
                    Some("home directory is unknown"),
                    Some("Pass --config <path> or set VS_CONFIG"),
                )
            );
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!("Using config {}", config_path.display());

    let result = dispatch(&style, cli.quiet, &config_path, cli.command);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_config_error() => {
            eprintln!(
                "{}",
                style.error_with_context("Configuration error", Some(&e.to_string()), Some(INIT_HINT))
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", style.message(MessageType::Err, &e.to_string()));
            ExitCode::FAILURE
        }
    }
}

/// Route a parsed command to its handler.
///
/// Only the commands that touch the workspace roots load the configuration.
fn dispatch(style: &Style, quiet: bool, config_path: &Path, command: Command) -> Result<(), VsError> {
    match command {
        Command::Init {
            project_dir,
            code_dir,
            clone_dir,
            editor,
        } => handle_init(
            style,
            quiet,
            config_path,
            project_dir,
            code_dir,
            clone_dir,
            editor,
        ),
        Command::Config { action } => match action {
            ConfigAction::Show { json } => handle_config_show(style, config_path, json),
            ConfigAction::Check => handle_config_check(style, quiet, config_path),
        },
        Command::Code { name } => {
            report_open(style, quiet, load_launcher(config_path)?.open_code(&name)?)
        }
        Command::Project { name } => {
            report_open(style, quiet, load_launcher(config_path)?.open_project(&name)?)
        }
        Command::Clone { project, url } => {
            handle_clone(style, quiet, &load_launcher(config_path)?, project, url)
        }
        Command::Todos {
            project,
            html,
            json,
            summary,
            sort,
            output,
        } => handle_todos(
            style,
            quiet,
            &load_launcher(config_path)?,
            TodosArgs {
                selector: ProjectSelector::parse(&project),
                html,
                json,
                summary,
                sort,
                output,
            },
        ),
    }
}

fn load_launcher(config_path: &Path) -> Result<Launcher, VsError> {
    WorkspaceConfig::load(config_path).map(Launcher::new)
}

// ============================================================================
// Command handlers
// ============================================================================

fn handle_init(
    style: &Style,
    quiet: bool,
    config_path: &Path,
    project_dir: PathBuf,
    code_dir: PathBuf,
    clone_dir: PathBuf,
    editor: Option<String>,
) -> Result<(), VsError> {
    let mut config = WorkspaceConfig::new(
        std::path::absolute(project_dir)?,
        std::path::absolute(code_dir)?,
        std::path::absolute(clone_dir)?,
    );
    if let Some(editor) = editor {
        config = config.with_editor(editor);
    }

    config.validate()?;
    config.save(config_path)?;

    if !quiet {
        println!(
            "{}",
            style.message(
                MessageType::Ok,
                &format!("Wrote config to {}", style.file_path(&config_path.display().to_string()))
            )
        );
        for kind in RootKind::ALL {
            println!(
                "{}",
                style.message_detail(kind.config_key(), &config.root(kind).display().to_string())
            );
        }
        println!("{}", style.message_detail("EDITOR", config.editor()));
        println!();
        println!(
            "{}",
            style.message(MessageType::Hint, "Try `vs project <name>` or `vs todos`")
        );
    }
    Ok(())
}

fn report_open(style: &Style, quiet: bool, opened: OpenResult) -> Result<(), VsError> {
    if !quiet {
        let path = style.file_path(&opened.path.display().to_string());
        let text = if opened.created {
            format!("Created and opened {}", path)
        } else {
            format!("Opened {}", path)
        };
        println!("{}", style.message(MessageType::Ok, &text));
    }
    Ok(())
}

fn read_clipboard() -> Result<String, VsError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| VsError::Clipboard(e.to_string()))?;
    clipboard
        .get_text()
        .map_err(|e| VsError::Clipboard(e.to_string()))
}

fn handle_clone(
    style: &Style,
    quiet: bool,
    launcher: &Launcher,
    into_projects: bool,
    url: Option<String>,
) -> Result<(), VsError> {
    let url = match url {
        Some(url) => url,
        None => read_clipboard()?,
    };

    tracing::debug!("Clone URL: {}", url.trim());
    let cloned = launcher.clone_and_open(&url, into_projects)?;
    if !quiet {
        let path = style.file_path(&cloned.target.path().display().to_string());
        let line = match cloned.action {
            CloneAction::AlreadyPresent => style.message(
                MessageType::Skip,
                &format!("{} already exists at {}", cloned.target.name(), path),
            ),
            CloneAction::NeedsClone => style.message(
                MessageType::Ok,
                &format!("Cloned {} into {}", cloned.target.name(), path),
            ),
        };
        println!("{}", line);
    }
    Ok(())
}

struct TodosArgs {
    selector: ProjectSelector,
    html: bool,
    json: bool,
    summary: bool,
    sort: bool,
    output: Option<PathBuf>,
}

fn handle_todos(
    style: &Style,
    quiet: bool,
    launcher: &Launcher,
    args: TodosArgs,
) -> Result<(), VsError> {
    let mode = if args.html { TodoMode::Html } else { TodoMode::Text };
    let mut todos = launcher.todos(&args.selector, mode)?;
    if args.sort {
        todos.sort_by_name();
    }

    if !args.json {
        for failed in todos.failures() {
            eprintln!(
                "{}",
                style.message(
                    MessageType::Warn,
                    &format!(
                        "Skipped {}: {}",
                        failed.project_name,
                        failed.error.as_deref().unwrap_or("unknown error")
                    )
                )
            );
        }
    }

    // Files never get ANSI escapes.
    let render_style = if args.output.is_some() {
        Style::new(ColorMode::Never)
    } else {
        style.clone()
    };

    let content = if args.json {
        format!("{}\n", serde_json::to_string_pretty(&todos)?)
    } else if args.html {
        page::render_todo_page(&todos)
    } else if args.summary {
        let rendered = table::render_todo_summary(&todos);
        if rendered.is_empty() {
            String::new()
        } else {
            format!("{}\n", rendered)
        }
    } else {
        render_todo_text(&render_style, &todos)
    };

    if todos.is_empty() && !args.json && !quiet {
        eprintln!(
            "{}",
            style.message(
                MessageType::Info,
                &format!("No projects under {}", launcher.config().project_root().display())
            )
        );
    }

    match args.output {
        Some(path) => {
            fs::write(&path, content)?;
            if !quiet {
                println!(
                    "{}",
                    style.message(
                        MessageType::Ok,
                        &format!(
                            "Wrote todos for {} to {}",
                            format::count_noun(todos.len(), "project", "projects"),
                            style.file_path(&path.display().to_string())
                        )
                    )
                );
            }
        }
        None => print!("{}", content),
    }
    Ok(())
}

fn render_todo_text(style: &Style, todos: &TodoCollection) -> String {
    let mut out = String::new();
    for (i, project) in todos.projects().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&style.section(&project.project_name));
        out.push('\n');

        if project.status == ProjectTodoStatus::Failed {
            let error = project.error.as_deref().unwrap_or("unknown error");
            out.push_str(&style.todo_item(&format!("(failed: {})", error), true));
            out.push('\n');
            continue;
        }
        let placeholder = project.status == ProjectTodoStatus::Absent;
        for item in &project.items {
            out.push_str(&style.todo_item(item.as_str(), placeholder));
            out.push('\n');
        }
    }
    out
}

// ============================================================================
// Config command handlers
// ============================================================================

fn handle_config_show(style: &Style, config_path: &Path, json: bool) -> Result<(), VsError> {
    let config = WorkspaceConfig::from_path(config_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!(
        "{}",
        style.key_value("Config", &style.file_path(&config_path.display().to_string()))
    );
    println!("{}", style.key_value("Editor", config.editor()));
    println!();
    println!("{}", table::render_roots_table(&config));
    Ok(())
}

fn handle_config_check(style: &Style, quiet: bool, config_path: &Path) -> Result<(), VsError> {
    let config = WorkspaceConfig::from_path(config_path)?;

    if !quiet {
        for kind in RootKind::ALL {
            let root = config.root(kind);
            let msg_type = if root.is_dir() {
                MessageType::Ok
            } else {
                MessageType::Err
            };
            println!(
                "{}",
                style.message(msg_type, &format!("{}: {}", kind.config_key(), root.display()))
            );
        }
    }

    config.validate()?;
    if !quiet {
        println!("{}", style.message(MessageType::Ok, "Configuration is valid"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use vs_core::{aggregate, TodoParser};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_todos_defaults_to_all() {
        let cli = Cli::try_parse_from(["vs", "todos"]).unwrap();
        match cli.command {
            Command::Todos { project, html, .. } => {
                assert_eq!(ProjectSelector::parse(&project), ProjectSelector::All);
                assert!(!html);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_html_conflicts_with_json() {
        assert!(Cli::try_parse_from(["vs", "todos", "--html", "--json"]).is_err());
    }

    #[test]
    fn test_clone_flags() {
        let cli = Cli::try_parse_from(["vs", "clone", "--project", "--url", "u.git"]).unwrap();
        match cli.command {
            Command::Clone { project, url } => {
                assert!(project);
                assert_eq!(url.as_deref(), Some("u.git"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_render_todo_text() {
        let temp = tempfile::TempDir::new().unwrap();
        let roots = ["p", "c", "g"].map(|n| temp.path().join(n));
        for r in &roots {
            fs::create_dir_all(r).unwrap();
        }
        fs::create_dir(roots[0].join("alpha")).unwrap();
        fs::write(roots[0].join("alpha").join(".todo"), "- write spec\n- review\n").unwrap();
        fs::create_dir(roots[0].join("beta")).unwrap();

        let config = WorkspaceConfig::new(&roots[0], &roots[1], &roots[2]);
        let mut todos =
            aggregate(&config, &ProjectSelector::All, TodoMode::Text, &TodoParser::new()).unwrap();
        todos.sort_by_name();

        let text = render_todo_text(&Style::new(ColorMode::Never), &todos);
        assert_eq!(
            text,
            "alpha\n  - write spec\n  - review\n\nbeta\n  - Project doesn't contain .todo file.\n"
        );
    }
}
