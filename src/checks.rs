//! Naming sanity checks
//!
//! Host-independent validations of the naming convention. The DCC side hands
//! over plain facts about the open scene (file path, group names, shader
//! names) and gets back a categorized report it can display as-is. Nothing
//! here queries a scene graph.

use std::path::Path;

use serde::Serialize;

use crate::fs::FileSystem;
use crate::layout::{self, AssetFolder, SetFolder};
use crate::naming;

/// Status of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Pass => write!(f, "✓"),
            CheckStatus::Warning => write!(f, "⚠"),
            CheckStatus::Error => write!(f, "✗"),
        }
    }
}

/// Report category a check belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    Global,
    Naming,
    Shading,
}

impl CheckCategory {
    pub const ALL: [CheckCategory; 3] = [
        CheckCategory::Global,
        CheckCategory::Naming,
        CheckCategory::Shading,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CheckCategory::Global => "Global",
            CheckCategory::Naming => "Naming Convention",
            CheckCategory::Shading => "Shading",
        }
    }
}

/// Result of one check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamingCheck {
    pub name: String,
    pub category: CheckCategory,
    pub status: CheckStatus,
    pub message: String,
    /// Offending items, empty on pass
    pub items: Vec<String>,
}

/// Collected check results
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub checks: Vec<NamingCheck>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn add_pass(&mut self, category: CheckCategory, name: &str, message: &str) {
        self.checks.push(NamingCheck {
            name: name.to_string(),
            category,
            status: CheckStatus::Pass,
            message: message.to_string(),
            items: Vec::new(),
        });
    }

    pub fn add_warning(
        &mut self,
        category: CheckCategory,
        name: &str,
        message: &str,
        items: Vec<String>,
    ) {
        self.checks.push(NamingCheck {
            name: name.to_string(),
            category,
            status: CheckStatus::Warning,
            message: message.to_string(),
            items,
        });
    }

    pub fn add_error(
        &mut self,
        category: CheckCategory,
        name: &str,
        message: &str,
        items: Vec<String>,
    ) {
        self.checks.push(NamingCheck {
            name: name.to_string(),
            category,
            status: CheckStatus::Error,
            message: message.to_string(),
            items,
        });
    }

    pub fn passes(&self) -> usize {
        self.count(CheckStatus::Pass)
    }

    pub fn warnings(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    pub fn errors(&self) -> usize {
        self.count(CheckStatus::Error)
    }

    pub fn is_success(&self) -> bool {
        self.errors() == 0
    }

    pub fn in_category(&self, category: CheckCategory) -> impl Iterator<Item = &NamingCheck> {
        self.checks.iter().filter(move |c| c.category == category)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

/// Scene facts exported by the host for checking
///
/// Everything is plain strings/paths so the checks run identically under a
/// DCC session, in a farm job, or in tests.
#[derive(Debug, Clone, Default)]
pub struct SceneSnapshot {
    /// Absolute path of the open scene file
    pub file_path: String,
    /// Short file name of the open scene file
    pub file_name: String,
    /// Transform groups at the scene root
    pub root_groups: Vec<String>,
    /// Transform groups directly under the master group
    pub master_children: Vec<String>,
    /// Shader names assigned in the scene
    pub shaders: Vec<String>,
}

/// The open scene must live inside the project workspace
pub fn check_workspace(report: &mut CheckReport, project_root: &Path, snapshot: &SceneSnapshot) {
    let root = project_root.to_string_lossy().replace('\\', "/");
    let file = snapshot.file_path.replace('\\', "/");

    if !root.is_empty() && file.starts_with(&root) {
        report.add_pass(CheckCategory::Global, "workspace", "scene is inside the workspace");
    } else {
        report.add_error(
            CheckCategory::Global,
            "workspace",
            "the open scene file is outside the current workspace",
            vec![snapshot.file_path.clone()],
        );
    }
}

/// The file name must parse against the convention; returns the parsed name
pub fn check_file_name(
    report: &mut CheckReport,
    snapshot: &SceneSnapshot,
) -> Option<naming::FileName> {
    match naming::parse_file_name(&snapshot.file_name) {
        Ok(parsed) => {
            report.add_pass(
                CheckCategory::Global,
                "file name",
                "file name follows the naming convention",
            );
            Some(parsed)
        }
        Err(e) => {
            report.add_error(
                CheckCategory::Global,
                "file name",
                &e.to_string(),
                vec![snapshot.file_name.clone()],
            );
            None
        }
    }
}

/// Exactly one root group, named like the file without its increment
pub fn check_master_group(
    report: &mut CheckReport,
    file: &naming::FileName,
    snapshot: &SceneSnapshot,
) {
    let expected = &file.asset_name;
    let matching: Vec<&String> = snapshot
        .root_groups
        .iter()
        .filter(|g| *g == expected)
        .collect();

    if matching.len() == 1 && snapshot.root_groups.len() == 1 {
        report.add_pass(CheckCategory::Global, "main group", "main group matches the file name");
    } else {
        report.add_error(
            CheckCategory::Global,
            "main group",
            &format!(
                "expected a single root group named '{}' matching the file name",
                expected
            ),
            snapshot.root_groups.clone(),
        );
    }
}

/// Children of the master group must carry a `prp_` or `grp_` prefix
pub fn check_child_prefixes(report: &mut CheckReport, snapshot: &SceneSnapshot) {
    let offenders: Vec<String> = snapshot
        .master_children
        .iter()
        .filter(|child| {
            naming::parse_element_name(child)
                .map(|e| e.element_type != "prp" && e.element_type != "grp")
                .unwrap_or(true)
        })
        .cloned()
        .collect();

    if offenders.is_empty() {
        report.add_pass(
            CheckCategory::Naming,
            "group prefixes",
            "all child groups carry a prp_ or grp_ prefix",
        );
    } else {
        report.add_error(
            CheckCategory::Naming,
            "group prefixes",
            "child groups of the main group must be prefixed prp_ or grp_",
            offenders,
        );
    }
}

/// Every element name must decompose against the convention
pub fn check_element_names(report: &mut CheckReport, elements: &[String]) {
    let offenders: Vec<String> = elements
        .iter()
        .filter(|e| naming::parse_element_name(e).is_err())
        .cloned()
        .collect();

    if offenders.is_empty() {
        report.add_pass(
            CheckCategory::Naming,
            "element names",
            "all element names decompose against the convention",
        );
    } else {
        report.add_error(
            CheckCategory::Naming,
            "element names",
            "element names must be <type>_<shortName>",
            offenders,
        );
    }
}

/// Warn when an asset has already been published
pub fn check_existing_publish(
    report: &mut CheckReport,
    fs: &dyn FileSystem,
    asset_root: &Path,
    asset_name: &str,
) {
    let publish_file = layout::asset_subfolder(asset_root, asset_name, AssetFolder::Publish)
        .join(naming::publish_file_name(asset_name));

    if fs.exists(&publish_file) {
        report.add_warning(
            CheckCategory::Naming,
            "existing publish",
            "this asset has already been published; publishing again overwrites it",
            vec![publish_file.to_string_lossy().into_owned()],
        );
    } else {
        report.add_pass(CheckCategory::Naming, "existing publish", "asset is not yet published");
    }
}

/// Warn when a set has already been published
pub fn check_existing_set_publish(
    report: &mut CheckReport,
    fs: &dyn FileSystem,
    env_root: &Path,
    set_name: &str,
) {
    let publish_file = layout::set_subfolder(env_root, set_name, SetFolder::Publish)
        .join(naming::publish_set_file_name(set_name));

    if fs.exists(&publish_file) {
        report.add_warning(
            CheckCategory::Naming,
            "existing set publish",
            "this set has already been published; publishing again overwrites it",
            vec![publish_file.to_string_lossy().into_owned()],
        );
    } else {
        report.add_pass(
            CheckCategory::Naming,
            "existing set publish",
            "set is not yet published",
        );
    }
}

/// Shaders must be named after the asset short name
///
/// Accepted spellings for short name `jarA`: `usdPrev_jarA`, `usdPrev_jarASG`,
/// `mat_jarA`, `mat_jarASG`.
pub fn check_shader_names(
    report: &mut CheckReport,
    file: &naming::FileName,
    snapshot: &SceneSnapshot,
) {
    let short = &file.asset_short_name;
    let accepted = [
        naming::preview_shader_name(short),
        naming::preview_shading_group(short),
        naming::material_shader_name(short),
        naming::material_shading_group(short),
    ];

    let offenders: Vec<String> = snapshot
        .shaders
        .iter()
        .filter(|s| !accepted.contains(s))
        .cloned()
        .collect();

    if offenders.is_empty() {
        report.add_pass(
            CheckCategory::Shading,
            "shader naming",
            "all shaders are named after the asset short name",
        );
    } else {
        report.add_error(
            CheckCategory::Shading,
            "shader naming",
            &format!(
                "shaders must be named {} or {} (with an SG suffix for shading groups)",
                naming::preview_shader_name(short),
                naming::material_shader_name(short),
            ),
            offenders,
        );
    }
}

/// Run every check that is computable from a scene snapshot
pub fn run_checks(
    fs: &dyn FileSystem,
    project_root: &Path,
    snapshot: &SceneSnapshot,
) -> CheckReport {
    let mut report = CheckReport::new();

    check_workspace(&mut report, project_root, snapshot);

    let Some(file) = check_file_name(&mut report, snapshot) else {
        // Without a parseable file name the remaining checks have no anchor.
        return report;
    };

    check_master_group(&mut report, &file, snapshot);
    check_child_prefixes(&mut report, snapshot);
    check_element_names(&mut report, &snapshot.master_children);

    let layout = layout::main_folders(project_root);
    if file.asset_type == "set" {
        check_existing_set_publish(&mut report, fs, &layout.env, &file.asset_name);
    } else {
        check_existing_publish(&mut report, fs, &layout.asset, &file.asset_name);
    }

    check_shader_names(&mut report, &file, snapshot);

    report
}
