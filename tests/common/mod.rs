#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Temporary `<root>/<group>/<file>` tree for integration tests.
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

    /// Creates an empty file at the given relative path.
    pub fn create_file(&self, relative_path: &str) {
        self.write_file(relative_path, "");
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates one LMD file per tube for `material` in `group`.
    pub fn create_panel(&self, group: &str, label: &str, material: &str, tubes: &[u8]) {
        for tube in tubes {
            self.create_file(&format!(
                "{group}/{label}-{material} CLL 9F 0{tube} panel.LMD"
            ));
        }
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
