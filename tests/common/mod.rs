#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the segment-bar binary.
#[macro_export]
macro_rules! segment_bar {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("segment-bar"))
    };
}

/// Three segments, one of them titled and one with an explicit color.
pub const BASIC_CHART_JSON: &str = r##"[
  {"value": 1200, "title": "Rust"},
  {"value": 600, "color": "#123456"},
  {"value": 200}
]"##;

/// Same data as [`BASIC_CHART_JSON`] in the TOML input shape.
pub const BASIC_CHART_TOML: &str = r##"height = "40px"

[[data]]
value = 1200
title = "Rust"

[[data]]
value = 600
color = "#123456"

[[data]]
value = 200
"##;

pub const BASIC_CONFIG: &str = r#"version = "1"

[render]
height = "24px"
locale = "de-DE"

[output]
format = "fragment"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.segment-bar.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".segment-bar.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
