//! Shared test utilities for vs-cli integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get a Command for the vs binary with no inherited `VS_*` settings.
#[allow(deprecated)]
pub fn vs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vs").expect("vs binary should exist");
    for var in ["VS_CONFIG", "VS_VERBOSE", "VS_QUIET", "VS_COLOR"] {
        cmd.env_remove(var);
    }
    cmd
}

/// A temp directory with `projects/`, `code/`, and `clones/` roots and a
/// config path inside it.
pub struct TestWorkspace {
    pub temp: TempDir,
    pub config_path: PathBuf,
}

impl TestWorkspace {
    /// Create the three roots. No config file is written.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        for name in ["projects", "code", "clones"] {
            fs::create_dir(temp.path().join(name)).expect("create root");
        }
        let config_path = temp.path().join("home").join(".vs").join("config.json");
        Self { temp, config_path }
    }

    /// Create the roots and write a config using `editor`.
    pub fn with_editor(editor: &str) -> Self {
        let ws = Self::new();
        ws.write_config(serde_json::json!({
            "PROJECT_DIR": ws.projects(),
            "CODE_DIR": ws.code(),
            "CLONE_DIR": ws.clones(),
            "EDITOR": editor,
        }));
        ws
    }

    pub fn write_config(&self, value: serde_json::Value) {
        fs::create_dir_all(self.config_path.parent().expect("config parent"))
            .expect("create config dir");
        fs::write(&self.config_path, value.to_string()).expect("write config");
    }

    pub fn projects(&self) -> PathBuf {
        self.temp.path().join("projects")
    }

    pub fn code(&self) -> PathBuf {
        self.temp.path().join("code")
    }

    pub fn clones(&self) -> PathBuf {
        self.temp.path().join("clones")
    }

    /// Add a project directory, optionally with a `.todo` file.
    pub fn add_project(&self, name: &str, todo: Option<&str>) -> PathBuf {
        let dir = self.projects().join(name);
        fs::create_dir(&dir).expect("create project");
        if let Some(content) = todo {
            fs::write(dir.join(".todo"), content).expect("write .todo");
        }
        dir
    }

    /// A `vs` command pointed at this workspace's config, colors off.
    pub fn cmd(&self) -> Command {
        let mut cmd = vs_cmd();
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--color")
            .arg("never");
        cmd
    }
}

/// Number of entries in a directory.
pub fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).expect("read dir").count()
}
