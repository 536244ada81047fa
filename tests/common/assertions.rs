//! Assertion macros with descriptive failure messages.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that a path exists relative to the project root.
#[macro_export]
macro_rules! assert_exists {
    ($env:expr, $path:expr) => {
        assert!(
            $env.path($path).exists(),
            "Expected '{}' to exist.\nFiles found:\n  {}",
            $path,
            $crate::common::list_all_files($env.project_root.path()).join("\n  ")
        );
    };
}

/// Assert that a path does not exist relative to the project root.
#[macro_export]
macro_rules! assert_not_exists {
    ($env:expr, $path:expr) => {
        assert!(
            !$env.path($path).exists(),
            "Expected '{}' to NOT exist, but it does.",
            $path
        );
    };
}

/// Assert that a command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Command failed with exit code {}:\n{}",
            $result.exit_code,
            $result.combined_output()
        );
    };
}

/// Assert that stdout or stderr contains `pattern`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\nstdout:\n{}\nstderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}
