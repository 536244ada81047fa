//! Test environment for isolated greedy-build runs.
//!
//! Provides `TestEnv` - a temp project directory plus helpers to run the
//! CLI inside it.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{GRID_SCSS, HELPERS_SCSS, MANIFEST, MIXINS_SCSS};

/// Result of running a greedy-build command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_greedy-build")),
        }
    }

    /// Project with a manifest and one file per default pattern
    pub fn with_library() -> Self {
        let env = Self::new();
        env.write_file("package.json", MANIFEST);
        env.write_file("src/helpers/_helpers.scss", HELPERS_SCSS);
        env.write_file("src/generators/_mixins.scss", MIXINS_SCSS);
        env.write_file("src/_grid.scss", GRID_SCSS);
        env
    }

    /// Get path relative to project root
    pub fn path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Read a project file, panicking with context if absent
    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// The bundle at the default location
    pub fn read_bundle(&self) -> String {
        self.read_file("dist/_greedy.scss")
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");

        for key in [
            "GREEDY_OUTPUT_DIR",
            "GREEDY_FILE_NAME",
            "GREEDY_MANIFEST",
            "GREEDY_PATTERNS",
            "GREEDY_VERBOSITY",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute greedy-build");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
