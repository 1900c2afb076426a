//! Common test utilities for Tuyau integration tests.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use tuyau::fs::LocalFs;
use tuyau::layout::main_folders;
use tuyau::scaffold;
use tuyau::tracker::Tracker;

/// A scaffolded project in a temp directory
pub struct TestProject {
    /// Keeps the temp directory alive for the duration of the test
    pub parent: TempDir,
    pub root: PathBuf,
}

impl TestProject {
    /// Create a project tree with main folders and an empty tracker
    pub fn create(name: &str) -> Self {
        let parent = TempDir::new().expect("temp dir");
        let fs = LocalFs::new();

        let root = scaffold::create_project(&fs, parent.path(), name).expect("create project");
        Tracker::in_data_folder(&main_folders(&root).data)
            .create()
            .expect("create tracker");

        Self { parent, root }
    }

    /// Path of a main folder by its layout label
    pub fn main_folder(&self, label: &str) -> PathBuf {
        let layout = main_folders(&self.root);
        layout
            .entries()
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, p)| p.to_path_buf())
            .unwrap_or_else(|| panic!("unknown layout label '{}'", label))
    }
}
