//! Directory scaffolding
//!
//! The I/O counterpart of `layout`: creates on disk what the resolver
//! computes. Kept separate so the path arithmetic stays trivially testable
//! and callers can decide when creation happens.

use std::path::{Path, PathBuf};

use crate::error::{TuyauError, TuyauResult};
use crate::fs::FileSystem;
use crate::layout::{self, AssetFolder, SetFolder};
use crate::textures;

/// Create a project root with its six main folders
///
/// Fails when the parent folder is missing, the project name is empty, or
/// the project folder already exists.
pub fn create_project(fs: &dyn FileSystem, parent: &Path, name: &str) -> TuyauResult<PathBuf> {
    if name.is_empty() {
        return Err(TuyauError::EmptyName {
            what: "project name",
        });
    }
    if !fs.exists(parent) {
        return Err(TuyauError::DirectoryNotFound {
            path: parent.to_path_buf(),
        });
    }

    let root = parent.join(name);
    if fs.exists(&root) {
        return Err(TuyauError::AlreadyExists { path: root });
    }

    fs.create_dir_all(&root)?;
    for (_, folder) in layout::main_folders(&root).entries() {
        fs.create_dir_all(folder)?;
    }

    Ok(root)
}

/// Create an asset folder with its publish/texture/wip sub-folders
pub fn create_asset_folders(
    fs: &dyn FileSystem,
    asset_root: &Path,
    asset_name: &str,
) -> TuyauResult<PathBuf> {
    let folder = asset_root.join(asset_name);
    if fs.exists(&folder) {
        return Err(TuyauError::AlreadyExists { path: folder });
    }

    fs.create_dir_all(&folder)?;
    for which in AssetFolder::ALL {
        fs.create_dir_all(&layout::asset_subfolder(asset_root, asset_name, which))?;
    }

    Ok(folder)
}

/// Create a set folder with its publish/wip sub-folders
pub fn create_set_folders(
    fs: &dyn FileSystem,
    env_root: &Path,
    set_name: &str,
) -> TuyauResult<PathBuf> {
    let folder = env_root.join(set_name);
    if fs.exists(&folder) {
        return Err(TuyauError::AlreadyExists { path: folder });
    }

    fs.create_dir_all(&folder)?;
    for which in SetFolder::ALL {
        fs.create_dir_all(&layout::set_subfolder(env_root, set_name, which))?;
    }

    Ok(folder)
}

/// Create the flat proxy folder for an asset
pub fn create_proxy_folder(
    fs: &dyn FileSystem,
    proxy_root: &Path,
    asset_name: &str,
) -> TuyauResult<PathBuf> {
    let folder = layout::proxy_folder(proxy_root, asset_name);
    if fs.exists(&folder) {
        return Err(TuyauError::AlreadyExists { path: folder });
    }

    fs.create_dir_all(&folder)?;
    Ok(folder)
}

/// Strip the shading-group infix from freshly exported texture files
///
/// Returns the `(old, new)` pairs that were renamed.
pub fn rename_shading_group_textures(
    fs: &dyn FileSystem,
    dir: &Path,
) -> TuyauResult<Vec<(String, String)>> {
    let mut renamed = Vec::new();

    for file in fs.list_dir(dir)? {
        if let Some(new_name) = textures::strip_shading_group_infix(&file) {
            fs.rename(&dir.join(&file), &dir.join(&new_name))?;
            renamed.push((file, new_name));
        }
    }

    Ok(renamed)
}
