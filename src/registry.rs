//! Project registry
//!
//! Per-user mapping from project names to project roots, for tooling that
//! starts outside any workspace (the texturing-tool side of the pipeline).
//! Persisted as `projects.json` under the user config directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::error::{TuyauError, TuyauResult};
use crate::fs::{FileSystem, LocalFs};
use crate::layout;

/// Registry file name
pub const REGISTRY_FILE: &str = "projects.json";

/// One registered project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,

    #[serde(rename = "project_path")]
    pub path: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<DateTime<Utc>>,
}

/// The registry document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectRegistry {
    pub projects: Vec<ProjectEntry>,
}

impl ProjectRegistry {
    /// Root path of a registered project
    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.path.as_path())
    }

    /// Register a project; returns false when the name is already taken
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> bool {
        let name = name.into();
        if self.projects.iter().any(|p| p.name == name) {
            return false;
        }
        self.projects.push(ProjectEntry {
            name,
            path: path.into(),
            added: Some(Utc::now()),
        });
        true
    }

    /// Remove a project by name; returns false when it was not registered
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.name != name);
        self.projects.len() != before
    }
}

/// Handle to a registry file on disk
pub struct Registry {
    path: PathBuf,
}

impl Registry {
    /// Registry at the default per-user location
    ///
    /// `TUYAU_REGISTRY_PATH` overrides the location for tests and farm jobs.
    pub fn new() -> Self {
        Self {
            path: default_registry_path(),
        }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    /// Load the registry; a missing file is an empty registry
    pub fn load(&self) -> TuyauResult<ProjectRegistry> {
        if !self.path.exists() {
            return Ok(ProjectRegistry::default());
        }

        let content = LocalFs::new().read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| TuyauError::CorruptedData {
            file: self.path.clone(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, registry: &ProjectRegistry) -> TuyauResult<()> {
        let content = serde_json::to_string_pretty(registry)?;
        LocalFs::new().write_atomic(&self.path, &content)
    }

    /// Locked read-modify-write registration
    pub fn register(&self, name: &str, path: &Path) -> TuyauResult<bool> {
        self.with_lock(|registry| Ok(registry.add(name, path)))
    }

    /// Locked read-modify-write removal
    pub fn unregister(&self, name: &str) -> TuyauResult<bool> {
        self.with_lock(|registry| {
            if registry.remove(name) {
                Ok(true)
            } else {
                Err(TuyauError::UnknownProject {
                    name: name.to_string(),
                })
            }
        })
    }

    fn with_lock<T>(
        &self,
        apply: impl FnOnce(&mut ProjectRegistry) -> TuyauResult<T>,
    ) -> TuyauResult<T> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let lock_file = fs::File::create(self.lock_path())?;
        lock_file.lock_exclusive()?;

        let result = (|| {
            let mut registry = self.load()?;
            let value = apply(&mut registry)?;
            self.save(&registry)?;
            Ok(value)
        })();

        let _ = fs2::FileExt::unlock(&lock_file);
        result
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn default_registry_path() -> PathBuf {
    if let Ok(path) = std::env::var("TUYAU_REGISTRY_PATH") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .map(|c| c.join("tuyau").join(REGISTRY_FILE))
        .unwrap_or_else(|| PathBuf::from(REGISTRY_FILE))
}

/// A root qualifies as a project when its data folder exists
pub fn looks_like_project(fs: &dyn FileSystem, root: &Path) -> bool {
    fs.exists(&layout::main_folders(root).data)
}
