//! Tuyau - asset naming and project layout toolkit
//!
//! Tuyau is the shared core of a 3D production pipeline: it owns the file and
//! element naming convention, resolves the on-disk project layout, and keeps
//! the pipeline bookkeeping (production tracker, project registry) that DCC
//! integrations read and write. The resolvers are pure functions; all disk
//! access goes through an injectable file system.

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod layout;
pub mod naming;
pub mod registry;
pub mod scaffold;
pub mod textures;
pub mod tracker;
pub mod ui;

// Re-exports for convenience
pub use checks::{run_checks, CheckCategory, CheckReport, CheckStatus, SceneSnapshot};
pub use config::Config;
pub use error::{TuyauError, TuyauResult};
pub use fs::{FileSystem, LocalFs};
pub use layout::{
    asset_subfolder, locate_work_file, main_folders, proxy_folder, set_subfolder, AssetFolder,
    ProjectLayout, SetFolder, WorkFileLocation,
};
pub use naming::{
    format_file_name, format_increment, parse_element_name, parse_file_name, ElementName, FileName,
};
pub use registry::{looks_like_project, ProjectRegistry, Registry};
pub use textures::{select_channel_file, Resolution, TextureChannel, UDIM_TILE, UDIM_TOKEN};
pub use tracker::{StageStatus, Tracker, TrackerFile};
