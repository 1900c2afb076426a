//! Terminal output helpers
//!
//! Human-facing rendering of reports and layouts. Color is opt-in so the
//! same renderers serve snapshots, pipes and CI logs; callers gate it on
//! [`supports_color`].

use is_terminal::IsTerminal;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::checks::{CheckCategory, CheckReport, CheckStatus};
use crate::layout::ProjectLayout;

/// Whether stdout is a terminal that can take color
pub fn supports_color() -> bool {
    std::io::stdout().is_terminal()
}

fn glyph(status: CheckStatus, color: bool) -> String {
    let raw = status.to_string();
    if !color {
        return raw;
    }
    match status {
        CheckStatus::Pass => format!("{}", raw.green()),
        CheckStatus::Warning => format!("{}", raw.yellow()),
        CheckStatus::Error => format!("{}", raw.red()),
    }
}

/// Render a check report grouped by category
///
/// Labels are padded to a shared column so messages line up.
pub fn render_report(report: &CheckReport, color: bool) -> String {
    let label_width = report
        .checks
        .iter()
        .map(|c| c.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for category in CheckCategory::ALL {
        let checks: Vec<_> = report.in_category(category).collect();
        if checks.is_empty() {
            continue;
        }

        out.push_str(category.label());
        out.push('\n');
        for check in checks {
            let pad = " ".repeat(label_width.saturating_sub(check.name.width()));
            out.push_str(&format!(
                "  {} {}{}  {}\n",
                glyph(check.status, color),
                check.name,
                pad,
                check.message
            ));
            for item in &check.items {
                out.push_str(&format!("      - {}\n", item));
            }
        }
    }

    out.push_str(&format!(
        "{} passed, {} warnings, {} errors\n",
        report.passes(),
        report.warnings(),
        report.errors()
    ));
    out
}

/// Render the six main folders of a project
pub fn render_layout(layout: &ProjectLayout) -> String {
    let mut out = String::new();
    for (label, path) in layout.entries() {
        out.push_str(&format!("{:<8} {}\n", label, path.display()));
    }
    out
}
