//! File system abstraction
//!
//! Scaffolding and bookkeeping go through this trait so the resolvers stay
//! pure and tests can observe exactly which operations happen on disk.

use std::path::{Path, PathBuf};

use crate::error::TuyauResult;

/// Abstract file system interface
pub trait FileSystem {
    /// Read file content
    fn read_to_string(&self, path: &Path) -> TuyauResult<String>;

    /// Write file content atomically (temp file + rename)
    fn write_atomic(&self, path: &Path, content: &str) -> TuyauResult<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> TuyauResult<()>;

    /// File names inside a directory (files only, no sub-directories)
    fn list_dir(&self, path: &Path) -> TuyauResult<Vec<String>>;

    /// Rename a file in place
    fn rename(&self, from: &Path, to: &Path) -> TuyauResult<()>;
}

/// Local disk implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read_to_string(&self, path: &Path) -> TuyauResult<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> TuyauResult<()> {
        use std::io::Write;

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> TuyauResult<()> {
        Ok(std::fs::create_dir_all(path)?)
    }

    fn list_dir(&self, path: &Path) -> TuyauResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        // Deterministic order regardless of the underlying filesystem
        names.sort();
        Ok(names)
    }

    fn rename(&self, from: &Path, to: &Path) -> TuyauResult<()> {
        Ok(std::fs::rename(from, to)?)
    }
}

/// Mock file system for testing
///
/// Stores files/directories in memory and records every call so tests can
/// assert that pure code paths perform zero filesystem operations.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    state: std::sync::Arc<std::sync::Mutex<MockState>>,
}

#[cfg(test)]
#[derive(Default)]
struct MockState {
    files: std::collections::HashMap<PathBuf, String>,
    dirs: std::collections::HashSet<PathBuf>,
    calls: Vec<String>,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation performed so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn insert_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        let path = path.into();
        if let Some(parent) = path.parent() {
            state.dirs.insert(parent.to_path_buf());
        }
        state.files.insert(path, content.into());
    }

    pub fn insert_dir(&self, path: impl Into<PathBuf>) {
        self.state.lock().unwrap().dirs.insert(path.into());
    }

    pub fn dir_exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(path)
    }

    fn record(&self, call: String) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> TuyauResult<String> {
        self.record(format!("read {}", path.display()));
        let state = self.state.lock().unwrap();
        state.files.get(path).cloned().ok_or_else(|| {
            crate::error::TuyauError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            ))
        })
    }

    fn write_atomic(&self, path: &Path, content: &str) -> TuyauResult<()> {
        self.record(format!("write {}", path.display()));
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.record(format!("exists {}", path.display()));
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> TuyauResult<()> {
        self.record(format!("mkdir {}", path.display()));
        let mut state = self.state.lock().unwrap();
        let mut current = path.to_path_buf();
        loop {
            state.dirs.insert(current.clone());
            match current.parent() {
                Some(parent) if parent != Path::new("") => current = parent.to_path_buf(),
                _ => break,
            }
        }
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> TuyauResult<Vec<String>> {
        self.record(format!("list {}", path.display()));
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = state
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn rename(&self, from: &Path, to: &Path) -> TuyauResult<()> {
        self.record(format!("rename {} -> {}", from.display(), to.display()));
        let mut state = self.state.lock().unwrap();
        match state.files.remove(from) {
            Some(content) => {
                state.files.insert(to.to_path_buf(), content);
                Ok(())
            }
            None => Err(crate::error::TuyauError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "file not found",
            ))),
        }
    }
}
