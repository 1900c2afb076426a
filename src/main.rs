//! Tuyau CLI - asset naming and project layout toolkit
//!
//! Usage: tuyau <COMMAND>
//!
//! Commands:
//!   init      Create a project with its main folders and tracker
//!   asset     Create the folders for an asset, set or proxy
//!   parse     Parse a file or element name
//!   layout    Print project folders or one asset sub-folder
//!   check     Run naming checks against a work file
//!   projects  Manage the per-user project registry
//!   tracker   Inspect or update the production tracker
//!   textures  Texture file helpers for the publish folder

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;

use tuyau::checks::{self, CheckReport, SceneSnapshot};
use tuyau::cli::{Cli, Commands, ProjectsCommands, TexturesCommands, TrackerCommands};
use tuyau::fs::{FileSystem, LocalFs};
use tuyau::layout::{main_folders, AssetFolder, SetFolder};
use tuyau::registry::{looks_like_project, Registry};
use tuyau::scaffold;
use tuyau::textures::TextureChannel;
use tuyau::tracker::Tracker;
use tuyau::{naming, ui, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { name, parent, yes } => cmd_init(&name, parent, yes, cli.json),
        Commands::Asset { project, name } => cmd_asset(&project, &name, cli.json),
        Commands::Parse { name, element } => cmd_parse(&name, element, cli.json),
        Commands::Layout {
            project,
            asset,
            kind,
        } => cmd_layout(&project, asset, kind, cli.json),
        Commands::Check { project, file } => cmd_check(&project, &file, cli.json),
        Commands::Projects { command } => cmd_projects(command, cli.json),
        Commands::Tracker { command } => cmd_tracker(command, cli.json),
        Commands::Textures { command } => cmd_textures(command, cli.json),
    }
}

fn cmd_init(name: &str, parent: Option<PathBuf>, yes: bool, json: bool) -> Result<()> {
    let config = Config::load_user();
    let parent = parent
        .or(config.projects.parent_dir)
        .or_else(|| std::env::current_dir().ok())
        .ok_or_else(|| anyhow::anyhow!("could not determine a parent folder for the project"))?;

    if !yes && !json {
        let prompt = format!("Create project '{}' in {}?", name, parent.display());
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let fs = LocalFs::new();
    let root = scaffold::create_project(&fs, &parent, name)?;

    let layout = main_folders(&root);
    Tracker::in_data_folder(&layout.data).create()?;

    let registered = Registry::new().register(name, &root)?;

    if json {
        let event = serde_json::json!({
            "event": "init",
            "project": name,
            "root": root,
            "registered": registered,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("📁 Created project '{}'", name);
        print!("{}", ui::render_layout(&layout));
        if !registered {
            println!("⚠ '{}' was already in the project registry", name);
        }
    }

    Ok(())
}

fn cmd_asset(project: &Path, name: &str, json: bool) -> Result<()> {
    let element = naming::parse_element_name(name)?;
    let layout = main_folders(project);
    let fs = LocalFs::new();

    let folder = match element.element_type.as_str() {
        "prx" => scaffold::create_proxy_folder(&fs, &layout.proxy, name)?,
        "set" => scaffold::create_set_folders(&fs, &layout.env, name)?,
        _ => scaffold::create_asset_folders(&fs, &layout.asset, name)?,
    };

    // Sets are published, not tracked per stage.
    let mut tracked = false;
    if element.element_type != "set" {
        let tracker = Tracker::in_data_folder(&layout.data);
        if fs.exists(tracker.path()) {
            tracked = tracker.add_asset(name)?;
        }
    }

    if json {
        let event = serde_json::json!({
            "event": "asset",
            "name": name,
            "folder": folder,
            "tracked": tracked,
        });
        println!("{}", serde_json::to_string(&event)?);
    } else {
        println!("📦 Created '{}'", folder.display());
        if tracked {
            println!("✓ Added '{}' to the production tracker", name);
        }
    }

    Ok(())
}

fn cmd_parse(name: &str, element: bool, json: bool) -> Result<()> {
    if element {
        let parsed = naming::parse_element_name(name)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        } else {
            println!("element_type:       {}", parsed.element_type);
            println!("element_name:       {}", parsed.element_name);
            println!("element_short_name: {}", parsed.element_short_name);
        }
    } else {
        let parsed = naming::parse_file_name(name)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        } else {
            println!("asset_type:       {}", parsed.asset_type);
            println!("asset_name:       {}", parsed.asset_name);
            println!("asset_short_name: {}", parsed.asset_short_name);
            println!("inc_number:       {}", naming::format_increment(parsed.inc_number));
            println!("file_type:        {}", parsed.file_type);
        }
    }

    Ok(())
}

fn cmd_layout(project: &Path, asset: Option<String>, kind: Option<String>, json: bool) -> Result<()> {
    let layout = main_folders(project);

    if let (Some(asset), Some(kind)) = (asset.as_deref(), kind.as_deref()) {
        let path = if asset.starts_with("set_") {
            let which: SetFolder = kind.parse()?;
            tuyau::set_subfolder(&layout.env, asset, which)
        } else {
            let which: AssetFolder = kind.parse()?;
            tuyau::asset_subfolder(&layout.asset, asset, which)
        };

        if json {
            println!("{}", serde_json::json!({ "path": path }));
        } else {
            println!("{}", path.display());
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print!("{}", ui::render_layout(&layout));
    }

    Ok(())
}

fn cmd_check(project: &Path, file: &Path, json: bool) -> Result<()> {
    let fs = LocalFs::new();
    let snapshot = SceneSnapshot {
        file_path: file.to_string_lossy().into_owned(),
        file_name: file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        ..SceneSnapshot::default()
    };

    // Outside a DCC session only the disk-computable checks run; the host
    // integrations feed the full snapshot through the library instead.
    let mut report = CheckReport::new();
    checks::check_workspace(&mut report, project, &snapshot);
    if let Some(parsed) = checks::check_file_name(&mut report, &snapshot) {
        let layout = main_folders(project);
        if parsed.asset_type == "set" {
            checks::check_existing_set_publish(&mut report, &fs, &layout.env, &parsed.asset_name);
        } else {
            checks::check_existing_publish(&mut report, &fs, &layout.asset, &parsed.asset_name);
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", ui::render_report(&report, ui::supports_color()));
    }

    if !report.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_projects(command: ProjectsCommands, json: bool) -> Result<()> {
    let registry = Registry::new();

    match command {
        ProjectsCommands::List => {
            let projects = registry.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&projects)?);
            } else if projects.projects.is_empty() {
                println!("No projects registered.");
            } else {
                for entry in &projects.projects {
                    println!("{:<20} {}", entry.name, entry.path.display());
                }
            }
        }
        ProjectsCommands::Add { name, path } => {
            let fs = LocalFs::new();
            if !looks_like_project(&fs, &path) {
                println!(
                    "⚠ '{}' does not look like a project (no 999_datas folder)",
                    path.display()
                );
            }
            let added = registry.register(&name, &path)?;
            if json {
                let event = serde_json::json!({ "event": "projects.add", "name": name, "added": added });
                println!("{}", serde_json::to_string(&event)?);
            } else if added {
                println!("✓ Registered '{}'", name);
            } else {
                println!("⚠ '{}' is already registered", name);
            }
        }
        ProjectsCommands::Remove { name } => {
            registry.unregister(&name)?;
            if json {
                let event = serde_json::json!({ "event": "projects.remove", "name": name });
                println!("{}", serde_json::to_string(&event)?);
            } else {
                println!("✓ Removed '{}'", name);
            }
        }
    }

    Ok(())
}

fn cmd_tracker(command: TrackerCommands, json: bool) -> Result<()> {
    match command {
        TrackerCommands::Show { project } => {
            let tracker = Tracker::in_data_folder(&main_folders(&project).data);
            let file = tracker.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&file)?);
            } else {
                for asset in &file.assets {
                    println!(
                        "{:<24} modeling: {:<8} uv: {:<8} surfacing: {:<8}",
                        asset.name,
                        format!("{:?}", asset.modeling).to_uppercase(),
                        format!("{:?}", asset.uv_unfold).to_uppercase(),
                        format!("{:?}", asset.surfacing).to_uppercase(),
                    );
                }
            }
        }
        TrackerCommands::Add { project, asset } => {
            // Validate the name before it lands in the tracker.
            naming::parse_element_name(&asset)?;
            let tracker = Tracker::in_data_folder(&main_folders(&project).data);
            let added = tracker.add_asset(&asset)?;
            if json {
                let event = serde_json::json!({ "event": "tracker.add", "asset": asset, "added": added });
                println!("{}", serde_json::to_string(&event)?);
            } else if added {
                println!("✓ Added '{}'", asset);
            } else {
                println!("⚠ '{}' is already tracked", asset);
            }
        }
    }

    Ok(())
}

fn cmd_textures(command: TexturesCommands, json: bool) -> Result<()> {
    let fs = LocalFs::new();

    match command {
        TexturesCommands::Pick { dir, channel } => {
            let channel: TextureChannel = channel.parse()?;
            let files = fs.list_dir(&dir)?;
            match tuyau::select_channel_file(&files, channel) {
                Some(picked) => {
                    if json {
                        let event = serde_json::json!({ "event": "textures.pick", "file": picked });
                        println!("{}", serde_json::to_string(&event)?);
                    } else {
                        println!("{}", picked);
                    }
                }
                None => {
                    anyhow::bail!("no texture in {} matches channel '{:?}'", dir.display(), channel);
                }
            }
        }
        TexturesCommands::FixNames { dir } => {
            let renamed = scaffold::rename_shading_group_textures(&fs, &dir)?;
            if json {
                let event = serde_json::json!({ "event": "textures.fix-names", "renamed": renamed });
                println!("{}", serde_json::to_string(&event)?);
            } else if renamed.is_empty() {
                println!("Nothing to rename.");
            } else {
                for (old, new) in &renamed {
                    println!("{} -> {}", old, new);
                }
            }
        }
    }

    Ok(())
}
