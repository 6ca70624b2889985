// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

pub mod fixtures;

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zuban::{LanguageDetector, UnavailableClassifier};

/// Test fixture helper for creating temporary input and settings files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Write a file under the fixture root
    pub fn create_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    /// Write a JSON-lines batch file, one serialized value per line
    pub fn create_batch_file(&self, name: &str, values: &[serde_json::Value]) -> PathBuf {
        let content: String = values
            .iter()
            .map(|value| format!("{value}\n"))
            .collect();
        self.create_file(name, &content)
    }
}

/// Detector without any statistical fallback, for assertions on script analysis alone
pub fn script_only_detector() -> LanguageDetector {
    LanguageDetector::with_classifier(Box::new(UnavailableClassifier), true)
}
