//! Project folder layout resolver
//!
//! Deterministic mapping from a project root and an asset/set name to the
//! closed set of well-known pipeline folders. Pure path arithmetic: nothing
//! in this module touches the filesystem, and callers decide whether and when
//! directories get created (see `scaffold`).

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::error::{TuyauError, TuyauResult};

/// The six fixed top-level folders of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectLayout {
    pub preprod: PathBuf,
    pub proxy: PathBuf,
    pub asset: PathBuf,
    pub env: PathBuf,
    pub shot: PathBuf,
    pub data: PathBuf,
}

impl ProjectLayout {
    /// Iterate the folders in pipeline order with their display labels
    pub fn entries(&self) -> [(&'static str, &Path); 6] {
        [
            ("preprod", &self.preprod),
            ("proxy", &self.proxy),
            ("asset", &self.asset),
            ("env", &self.env),
            ("shot", &self.shot),
            ("data", &self.data),
        ]
    }
}

/// Compute the six main folders of a project
///
/// Pure function: no existence check, no creation.
pub fn main_folders(project_root: &Path) -> ProjectLayout {
    ProjectLayout {
        preprod: project_root.join("000_preprod"),
        proxy: project_root.join("010_proxy"),
        asset: project_root.join("020_mod_surf"),
        env: project_root.join("030_sets_envs"),
        shot: project_root.join("040_shot_renders"),
        data: project_root.join("999_datas"),
    }
}

/// Sub-folders of an asset within the asset root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFolder {
    Publish,
    TextureMaps,
    Wip,
    WipMaya,
    WipSubstance,
    WipUsd,
}

impl AssetFolder {
    pub const ALL: [AssetFolder; 6] = [
        AssetFolder::Publish,
        AssetFolder::TextureMaps,
        AssetFolder::Wip,
        AssetFolder::WipMaya,
        AssetFolder::WipSubstance,
        AssetFolder::WipUsd,
    ];

    /// Fixed sub-path relative to the asset folder
    pub fn subpath(self) -> &'static str {
        match self {
            AssetFolder::Publish => "publish",
            AssetFolder::TextureMaps => "publish/texture_maps",
            AssetFolder::Wip => "wip",
            AssetFolder::WipMaya => "wip/maya",
            AssetFolder::WipSubstance => "wip/substance",
            AssetFolder::WipUsd => "wip/usd",
        }
    }
}

impl FromStr for AssetFolder {
    type Err = TuyauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(AssetFolder::Publish),
            "texture_maps" => Ok(AssetFolder::TextureMaps),
            "wip" => Ok(AssetFolder::Wip),
            "wip_maya" => Ok(AssetFolder::WipMaya),
            "wip_substance" => Ok(AssetFolder::WipSubstance),
            "wip_usd" => Ok(AssetFolder::WipUsd),
            _ => Err(TuyauError::UnknownFolderKind {
                kind: s.to_string(),
                expected: "publish, texture_maps, wip, wip_maya, wip_substance, wip_usd",
            }),
        }
    }
}

/// Sub-folders of a set within the env root
///
/// Sets have no Maya wip stage and keep their textures next to the props.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetFolder {
    Publish,
    Wip,
    WipSubstance,
    WipUsd,
}

impl SetFolder {
    pub const ALL: [SetFolder; 4] = [
        SetFolder::Publish,
        SetFolder::Wip,
        SetFolder::WipSubstance,
        SetFolder::WipUsd,
    ];

    pub fn subpath(self) -> &'static str {
        match self {
            SetFolder::Publish => "publish",
            SetFolder::Wip => "wip",
            SetFolder::WipSubstance => "wip/substance",
            SetFolder::WipUsd => "wip/usd",
        }
    }
}

impl FromStr for SetFolder {
    type Err = TuyauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "publish" => Ok(SetFolder::Publish),
            "wip" => Ok(SetFolder::Wip),
            "wip_substance" => Ok(SetFolder::WipSubstance),
            "wip_usd" => Ok(SetFolder::WipUsd),
            _ => Err(TuyauError::UnknownFolderKind {
                kind: s.to_string(),
                expected: "publish, wip, wip_substance, wip_usd",
            }),
        }
    }
}

/// Sub-folder of an asset: `asset_root/asset_name/<fixed subpath>`
pub fn asset_subfolder(asset_root: &Path, asset_name: &str, which: AssetFolder) -> PathBuf {
    asset_root.join(asset_name).join(which.subpath())
}

/// Sub-folder of a set: `env_root/set_name/<fixed subpath>`
pub fn set_subfolder(env_root: &Path, set_name: &str, which: SetFolder) -> PathBuf {
    env_root.join(set_name).join(which.subpath())
}

/// Proxy assets live in a flat folder, no wip/publish split
pub fn proxy_folder(proxy_root: &Path, asset_name: &str) -> PathBuf {
    proxy_root.join(asset_name)
}

/// Pipeline folders recovered from the absolute path of an open work file
///
/// The inverse of the resolver above, used by tooling that only knows the
/// path of the document it has open: `<project>/<dpt>/<asset>/wip/<app>/<file>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkFileLocation {
    pub project_root: PathBuf,
    pub department_folder: String,
    pub asset_folder: String,
    pub wip_folder: String,
    pub file_name: String,
}

impl WorkFileLocation {
    /// Publish texture folder of the asset this work file belongs to
    pub fn texture_maps_folder(&self) -> PathBuf {
        self.project_root
            .join(&self.department_folder)
            .join(&self.asset_folder)
            .join(AssetFolder::TextureMaps.subpath())
    }
}

/// Split a work-file path into its pipeline folders
///
/// Separators are normalized to `/` first so paths coming from Windows hosts
/// resolve the same way.
pub fn locate_work_file(path: &str) -> TuyauResult<WorkFileLocation> {
    let normalized = path.replace('\\', "/");
    let parts: Vec<&str> = normalized.split('/').collect();
    if parts.len() < 6 {
        return Err(TuyauError::UnresolvableWorkPath {
            path: PathBuf::from(path),
        });
    }

    let n = parts.len();
    Ok(WorkFileLocation {
        project_root: PathBuf::from(parts[..n - 5].join("/")),
        department_folder: parts[n - 5].to_string(),
        asset_folder: parts[n - 4].to_string(),
        wip_folder: format!("{}/{}", parts[n - 3], parts[n - 2]),
        file_name: parts[n - 1].to_string(),
    })
}
