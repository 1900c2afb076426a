//! Production tracker
//!
//! JSON bookkeeping of per-asset production stages, stored as
//! `production_tracker.json` inside the project data folder. Several DCC
//! sessions may update it, so read-modify-write cycles take an advisory
//! file lock.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::error::{TuyauError, TuyauResult};
use crate::fs::{FileSystem, LocalFs};

/// File name of the tracker inside the data folder
pub const TRACKER_FILE: &str = "production_tracker.json";

/// Name of the record a fresh tracker starts with
pub const PLACEHOLDER_ASSET: &str = "no_assets";

/// Production status of one stage of an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StageStatus {
    #[default]
    #[serde(rename = "TODO")]
    Todo,
    #[serde(rename = "WIP")]
    Wip,
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "RETAKE")]
    Retake,
}

/// Tracked stages of one asset
///
/// Field spellings on the wire are historical and must not change; existing
/// tracker files in running productions depend on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub name: String,

    #[serde(rename = "Modeling")]
    pub modeling: StageStatus,

    #[serde(rename = "UV unfold")]
    pub uv_unfold: StageStatus,

    #[serde(rename = "Surfacing")]
    pub surfacing: StageStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl AssetRecord {
    /// Fresh record with every stage still to do
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modeling: StageStatus::Todo,
            uv_unfold: StageStatus::Todo,
            surfacing: StageStatus::Todo,
            updated: None,
        }
    }
}

/// The tracker document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackerFile {
    pub assets: Vec<AssetRecord>,
}

impl TrackerFile {
    /// A new tracker holds a single placeholder record
    pub fn empty() -> Self {
        Self {
            assets: vec![AssetRecord::new(PLACEHOLDER_ASSET)],
        }
    }

    pub fn contains(&self, asset_name: &str) -> bool {
        self.assets.iter().any(|a| a.name == asset_name)
    }

    /// Add an asset record
    ///
    /// The first real asset replaces the placeholder; later assets append
    /// and the list is re-sorted by name. Returns false when the asset is
    /// already tracked.
    pub fn add(&mut self, asset_name: &str) -> bool {
        if self.contains(asset_name) {
            return false;
        }

        let mut record = AssetRecord::new(asset_name);
        record.updated = Some(Utc::now());

        let replaces_placeholder =
            self.assets.len() == 1 && self.assets[0].name == PLACEHOLDER_ASSET;
        if replaces_placeholder {
            self.assets[0] = record;
        } else {
            self.assets.push(record);
            self.assets.sort_by(|a, b| a.name.cmp(&b.name));
        }
        true
    }
}

/// Handle to a tracker file on disk
pub struct Tracker {
    path: PathBuf,
}

impl Tracker {
    /// Tracker inside a project data folder
    pub fn in_data_folder(data_folder: &Path) -> Self {
        Self {
            path: data_folder.join(TRACKER_FILE),
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

    /// Write a fresh tracker with the placeholder record
    pub fn create(&self) -> TuyauResult<()> {
        self.save(&TrackerFile::empty())
    }

    pub fn load(&self) -> TuyauResult<TrackerFile> {
        let content = LocalFs::new().read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| TuyauError::CorruptedData {
            file: self.path.clone(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, tracker: &TrackerFile) -> TuyauResult<()> {
        let content = serde_json::to_string_pretty(tracker)?;
        LocalFs::new().write_atomic(&self.path, &content)
    }

    /// Locked read-modify-write; returns false when already tracked
    pub fn add_asset(&self, asset_name: &str) -> TuyauResult<bool> {
        let lock_file = fs::File::create(self.lock_path())?;
        lock_file.lock_exclusive()?;

        let result = (|| {
            let mut tracker = self.load()?;
            let added = tracker.add(asset_name);
            if added {
                self.save(&tracker)?;
            }
            Ok(added)
        })();

        let _ = fs2::FileExt::unlock(&lock_file);
        result
    }
}
