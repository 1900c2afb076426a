use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Tuyau - asset naming and project layout toolkit
#[derive(Parser, Debug)]
#[command(name = "tuyau")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project with its main folders and production tracker
    Init {
        /// Name of the project folder
        name: String,

        /// Parent folder the project is created in
        #[arg(short, long)]
        parent: Option<PathBuf>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Create the folders for an asset, set or proxy (dispatched by prefix)
    Asset {
        /// Project root
        project: PathBuf,

        /// Full asset name (prp_jarA, prx_jarA, set_kitchenA, ...)
        name: String,
    },

    /// Parse a file or element name and print its fields
    Parse {
        /// Name to parse (prp_jarA_001.ma or grp_jarA)
        name: String,

        /// Parse as a 2-segment element name
        #[arg(long)]
        element: bool,
    },

    /// Print project folders, or one asset sub-folder
    Layout {
        /// Project root
        project: PathBuf,

        /// Asset or set name to resolve a sub-folder for
        #[arg(short, long)]
        asset: Option<String>,

        /// Sub-folder kind (publish, texture_maps, wip, wip_maya, wip_substance, wip_usd)
        #[arg(short, long, requires = "asset")]
        kind: Option<String>,
    },

    /// Run naming checks against a work file on disk
    Check {
        /// Project root
        project: PathBuf,

        /// Work-file path to check
        file: PathBuf,
    },

    /// Manage the per-user project registry
    Projects {
        #[command(subcommand)]
        command: ProjectsCommands,
    },

    /// Inspect or update the production tracker of a project
    Tracker {
        #[command(subcommand)]
        command: TrackerCommands,
    },

    /// Texture file helpers for the publish folder
    Textures {
        #[command(subcommand)]
        command: TexturesCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectsCommands {
    /// List registered projects
    List,

    /// Register a project root under a name
    Add {
        name: String,
        path: PathBuf,
    },

    /// Remove a project from the registry
    Remove {
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrackerCommands {
    /// Print the tracked assets and their stages
    Show {
        /// Project root
        project: PathBuf,
    },

    /// Track a new asset
    Add {
        /// Project root
        project: PathBuf,

        /// Full asset name (prp_jarA)
        asset: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TexturesCommands {
    /// Pick the file a shader input should use for one channel
    Pick {
        /// Folder holding the exported textures
        dir: PathBuf,

        /// Channel to select (baseColor, roughness, ...)
        #[arg(short, long)]
        channel: String,
    },

    /// Strip the shading-group infix from exported texture names
    FixNames {
        /// Folder holding the exported textures
        dir: PathBuf,
    },
}
