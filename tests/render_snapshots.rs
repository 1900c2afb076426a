//! Snapshot tests for the terminal renderers.
//!
//! Rendered without color so the snapshots hold in any environment.

use std::path::Path;

use tuyau::checks::{CheckCategory, CheckReport};
use tuyau::layout::main_folders;
use tuyau::ui;

#[test]
fn report_renders_grouped_and_aligned() {
    let mut report = CheckReport::new();
    report.add_pass(
        CheckCategory::Global,
        "workspace",
        "scene is inside the workspace",
    );
    report.add_error(
        CheckCategory::Naming,
        "group prefixes",
        "child groups must be prefixed prp_ or grp_",
        vec!["mesh_floating".to_string()],
    );
    report.add_warning(
        CheckCategory::Naming,
        "existing publish",
        "asset already published",
        vec!["prp_jarA_publish.usdc".to_string()],
    );
    report.add_pass(
        CheckCategory::Shading,
        "shader naming",
        "all shaders follow the convention",
    );

    let rendered = ui::render_report(&report, false);
    insta::assert_snapshot!("report_plain", rendered);
}

#[test]
fn layout_renders_six_folders() {
    let rendered = ui::render_layout(&main_folders(Path::new("/proj")));
    insta::assert_snapshot!("layout_plain", rendered);
}
