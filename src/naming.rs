//! Naming convention codec
//!
//! Single parsing authority for the pipeline naming convention. Work files
//! are named `<type>_<shortName>_<inc>.<ext>` (`prp_jarA_001.ma`), scene
//! elements `<type>_<shortName>` (`grp_jarA`). Every other module asks this
//! one what "asset type", "short name" and "increment" mean.

use serde::Serialize;

use crate::error::{TuyauError, TuyauResult};

/// Minimum display width of a formatted increment
pub const INC_WIDTH: usize = 3;

/// Decomposed work-file name
///
/// For `prp_jarA_001.ma`:
/// - `asset_type`: `prp`
/// - `asset_name`: `prp_jarA`
/// - `asset_short_name`: `jarA`
/// - `inc_number`: 1
/// - `file_type`: `ma`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileName {
    pub asset_type: String,
    pub asset_name: String,
    pub asset_short_name: String,
    pub inc_number: u32,
    pub file_type: String,
}

impl FileName {
    /// Render back to `type_short_NNN.ext` with the increment normalized
    pub fn formatted(&self) -> String {
        format_file_name(
            &self.asset_type,
            &self.asset_short_name,
            self.inc_number,
            &self.file_type,
        )
    }

    /// Same file name with the increment bumped by one
    pub fn next(&self) -> FileName {
        FileName {
            inc_number: self.inc_number + 1,
            ..self.clone()
        }
    }
}

/// Decomposed scene-element name
///
/// For `grp_jarA`:
/// - `element_type`: `grp`
/// - `element_name`: `grp_jarA`
/// - `element_short_name`: `jarA`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementName {
    pub element_type: String,
    pub element_name: String,
    pub element_short_name: String,
}

/// Parse a work-file name into its structured fields
///
/// The extension is everything after the last `.`; the increment is the third
/// underscore segment up to its first `.`. Loose zero-padding on input is
/// accepted (`_7.` and `_007.` both parse to 7).
pub fn parse_file_name(name: &str) -> TuyauResult<FileName> {
    let segments: Vec<&str> = name.split('_').collect();
    if segments.len() < 3 {
        return Err(TuyauError::TooFewSegments {
            name: name.to_string(),
            expected: 3,
            found: segments.len(),
        });
    }

    if !name.contains('.') {
        return Err(TuyauError::MissingExtension {
            name: name.to_string(),
        });
    }
    // After the guard above both splits are non-empty.
    let file_type = name.rsplit('.').next().unwrap_or_default();
    let inc_segment = segments[2].split('.').next().unwrap_or_default();

    let inc_number: u32 = inc_segment.parse().map_err(|_| TuyauError::InvalidIncrement {
        name: name.to_string(),
        segment: inc_segment.to_string(),
    })?;

    Ok(FileName {
        asset_type: segments[0].to_string(),
        asset_name: format!("{}_{}", segments[0], segments[1]),
        asset_short_name: segments[1].to_string(),
        inc_number,
        file_type: file_type.to_string(),
    })
}

/// Parse a scene-element name into its structured fields
///
/// Only the first two segments are significant; trailing segments are
/// tolerated so host suffixes like `grp_jarA_old` still classify.
pub fn parse_element_name(name: &str) -> TuyauResult<ElementName> {
    let segments: Vec<&str> = name.split('_').collect();
    if segments.len() < 2 {
        return Err(TuyauError::TooFewSegments {
            name: name.to_string(),
            expected: 2,
            found: segments.len(),
        });
    }

    Ok(ElementName {
        element_type: segments[0].to_string(),
        element_name: format!("{}_{}", segments[0], segments[1]),
        element_short_name: segments[1].to_string(),
    })
}

/// Render an increment with the shared zero-padding rule
///
/// Always at least [`INC_WIDTH`] digits; wider values keep their digits
/// (1000 renders as `1000`, never truncated).
pub fn format_increment(inc: u32) -> String {
    format!("{:0width$}", inc, width = INC_WIDTH)
}

/// Render `type_short_NNN.ext`
pub fn format_file_name(asset_type: &str, short_name: &str, inc: u32, ext: &str) -> String {
    format!("{}_{}_{}.{}", asset_type, short_name, format_increment(inc), ext)
}

/// Work-file name for an already-composed asset name (`prp_jarA`, 1, `ma`
/// gives `prp_jarA_001.ma`)
pub fn wip_file_name(asset_name: &str, inc: u32, ext: &str) -> String {
    format!("{}_{}.{}", asset_name, format_increment(inc), ext)
}

/// Published USD file name for an asset (`prp_jarA_publish.usdc`)
pub fn publish_file_name(asset_name: &str) -> String {
    format!("{}_publish.usdc", asset_name)
}

/// Published USD file name for a set (`set_kitchenA_publish.usda`)
pub fn publish_set_file_name(set_name: &str) -> String {
    format!("{}_publish.usda", set_name)
}

/// Compose an asset name from its parts (`prp` + `jar` + 'A' gives `prp_jarA`)
pub fn compose_asset_name(asset_type: &str, short_name: &str, variant: char) -> String {
    format!("{}_{}{}", asset_type, short_name, variant)
}

/// Preview shader name for a short name (`usdPrev_jarA`)
pub fn preview_shader_name(short_name: &str) -> String {
    format!("usdPrev_{}", short_name)
}

/// Shading group of the preview shader (`usdPrev_jarASG`)
pub fn preview_shading_group(short_name: &str) -> String {
    format!("usdPrev_{}SG", short_name)
}

/// Material shader name for a short name (`mat_jarA`)
pub fn material_shader_name(short_name: &str) -> String {
    format!("mat_{}", short_name)
}

/// Shading group of the material shader (`mat_jarASG`)
pub fn material_shading_group(short_name: &str) -> String {
    format!("mat_{}SG", short_name)
}
