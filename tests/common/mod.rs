//! Common test utilities for clientctl integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A launcher-style target directory with an install profile
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write an install profile into the workspace root
    pub fn write_manifest(&self, json: &str) {
        self.write_file("install_profile.json", json);
    }

    /// Write a legacy (spec 0) profile for `coordinate`
    pub fn write_legacy_manifest(&self, coordinate: &str, version: &str) {
        self.write_manifest(&format!(
            r#"{{"spec": 0, "path": "{coordinate}", "version": "{version}"}}"#
        ));
    }

    /// Write a v1 profile for `profile`/`version`
    pub fn write_v1_manifest(&self, profile: &str, version: &str) {
        self.write_manifest(&format!(
            r#"{{"profile": "{profile}", "version": "{version}", "json": "/version.json"}}"#
        ));
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}
