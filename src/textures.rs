//! Texture channel vocabulary and UDIM-aware file selection
//!
//! Exported texture maps follow `mat_<short>_<channel>[_<tile>].png`. This
//! module owns the fixed channel suffix vocabulary, the UDIM tile handling
//! and the selection policy used when wiring file nodes to shader inputs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TuyauError, TuyauResult};

/// First tile of the UDIM layout; the marker rewritten to [`UDIM_TOKEN`]
pub const UDIM_TILE: &str = "1001";

/// Wildcard token understood by render-time file nodes
pub const UDIM_TOKEN: &str = "<udim>";

/// Exported material textures carry this prefix
pub const MATERIAL_PREFIX: &str = "mat_";

/// Texture files exported with the shading-group name keep an `SG_` infix
/// that publish folders must not contain
pub const SHADING_GROUP_INFIX: &str = "SG_";

/// Color space a channel's file node expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Srgb,
    Raw,
}

/// The fixed vocabulary of texture channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextureChannel {
    BaseColor,
    Roughness,
    Metallic,
    Normal,
    Height,
    Emissive,
    ScatteringMask,
    ScatteringColor,
    Translucency,
    AbsorptionColor,
}

impl TextureChannel {
    pub const ALL: [TextureChannel; 10] = [
        TextureChannel::BaseColor,
        TextureChannel::Roughness,
        TextureChannel::Metallic,
        TextureChannel::Normal,
        TextureChannel::Height,
        TextureChannel::Emissive,
        TextureChannel::ScatteringMask,
        TextureChannel::ScatteringColor,
        TextureChannel::Translucency,
        TextureChannel::AbsorptionColor,
    ];

    /// File-name suffix identifying the channel
    pub fn suffix(self) -> &'static str {
        match self {
            TextureChannel::BaseColor => "_baseColor",
            TextureChannel::Roughness => "_roughness",
            TextureChannel::Metallic => "_metallic",
            TextureChannel::Normal => "_normal",
            TextureChannel::Height => "_height",
            TextureChannel::Emissive => "_emissive",
            TextureChannel::ScatteringMask => "_scatteringMask",
            TextureChannel::ScatteringColor => "_scatteringColor",
            // No leading underscore; legacy exports spell it bare.
            TextureChannel::Translucency => "translucency",
            TextureChannel::AbsorptionColor => "_absorptionColor",
        }
    }

    /// Color channels read as sRGB, data channels as raw
    pub fn color_space(self) -> ColorSpace {
        match self {
            TextureChannel::BaseColor
            | TextureChannel::Emissive
            | TextureChannel::ScatteringColor
            | TextureChannel::AbsorptionColor => ColorSpace::Srgb,
            _ => ColorSpace::Raw,
        }
    }
}

impl FromStr for TextureChannel {
    type Err = TuyauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextureChannel::ALL
            .into_iter()
            .find(|c| c.suffix().trim_start_matches('_') == s)
            .ok_or_else(|| TuyauError::UnknownChannel {
                channel: s.to_string(),
                expected: "baseColor, roughness, metallic, normal, height, emissive, \
                           scatteringMask, scatteringColor, translucency, absorptionColor",
            })
    }
}

/// Classify an exported texture file by its channel suffix
pub fn classify(file_name: &str) -> Option<TextureChannel> {
    TextureChannel::ALL
        .into_iter()
        .find(|c| file_name.contains(c.suffix()))
}

/// Pick the file to wire into a shader input for one channel
///
/// Filters `files` down to material textures carrying the channel suffix.
/// A single match is returned verbatim. With several matches (a UDIM set),
/// every `1001`-carrying entry overwrites the pick with the tile rewritten
/// to `<udim>` - so the last `1001` entry in list order wins. That tie-break
/// is long-standing observed behavior and is kept as-is.
pub fn select_channel_file<S: AsRef<str>>(files: &[S], channel: TextureChannel) -> Option<String> {
    let mut matches: Vec<&str> = Vec::new();
    let mut pick = String::new();

    for file in files {
        let file = file.as_ref();
        if file.contains(channel.suffix()) && file.contains(MATERIAL_PREFIX) {
            matches.push(file);
            if matches.len() == 1 {
                pick = file.to_string();
            }
            if matches.len() > 1 {
                for candidate in &matches {
                    if candidate.contains(UDIM_TILE) {
                        pick = candidate.replace(UDIM_TILE, UDIM_TOKEN);
                    }
                }
            }
        }
    }

    if matches.is_empty() {
        None
    } else {
        Some(pick)
    }
}

/// New name for an exported texture still carrying the shading-group infix
///
/// `mat_jarASG_baseColor.png` publishes as `mat_jarA_baseColor.png`.
pub fn strip_shading_group_infix(file_name: &str) -> Option<String> {
    if file_name.contains(SHADING_GROUP_INFIX) {
        Some(file_name.replace(SHADING_GROUP_INFIX, "_"))
    } else {
        None
    }
}

/// Export resolutions supported by the texturing tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Resolution {
    #[serde(rename = "512")]
    R512,
    #[default]
    #[serde(rename = "1024")]
    R1024,
    #[serde(rename = "2048")]
    R2048,
    #[serde(rename = "4096")]
    R4096,
    #[serde(rename = "8192")]
    R8192,
}

impl Resolution {
    /// Log2 size value the export API expects
    pub fn size_log2(self) -> u32 {
        match self {
            Resolution::R512 => 9,
            Resolution::R1024 => 10,
            Resolution::R2048 => 11,
            Resolution::R4096 => 12,
            Resolution::R8192 => 13,
        }
    }
}

impl FromStr for Resolution {
    type Err = TuyauError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "512" => Ok(Resolution::R512),
            "1024" => Ok(Resolution::R1024),
            "2048" => Ok(Resolution::R2048),
            "4096" => Ok(Resolution::R4096),
            "8192" => Ok(Resolution::R8192),
            _ => Err(TuyauError::UnknownResolution {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let px = match self {
            Resolution::R512 => "512",
            Resolution::R1024 => "1024",
            Resolution::R2048 => "2048",
            Resolution::R4096 => "4096",
            Resolution::R8192 => "8192",
        };
        write!(f, "{}", px)
    }
}

pub fn parse_resolution(s: &str) -> TuyauResult<Resolution> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_single_file_verbatim() {
        let files = ["mat_x_baseColor.png"];
        assert_eq!(
            select_channel_file(&files, TextureChannel::BaseColor),
            Some("mat_x_baseColor.png".to_string())
        );
    }

    #[test]
    fn test_select_udim_set_rewrites_tile() {
        let files = ["mat_x_baseColor_1001.png", "mat_x_baseColor_1002.png"];
        assert_eq!(
            select_channel_file(&files, TextureChannel::BaseColor),
            Some("mat_x_baseColor_<udim>.png".to_string())
        );
    }

    #[test]
    fn test_select_last_first_tile_entry_wins() {
        // Two entries carry the 1001 marker; the later one in list order wins.
        let files = [
            "mat_a_baseColor_1001.png",
            "mat_b_baseColor_1001.png",
            "mat_b_baseColor_1002.png",
        ];
        assert_eq!(
            select_channel_file(&files, TextureChannel::BaseColor),
            Some("mat_b_baseColor_<udim>.png".to_string())
        );
    }

    #[test]
    fn test_select_multiple_without_first_tile_keeps_first() {
        let files = ["mat_x_baseColor_1002.png", "mat_x_baseColor_1003.png"];
        assert_eq!(
            select_channel_file(&files, TextureChannel::BaseColor),
            Some("mat_x_baseColor_1002.png".to_string())
        );
    }

    #[test]
    fn test_select_requires_material_prefix() {
        let files = ["usdPrev_x_baseColor.png"];
        assert_eq!(select_channel_file(&files, TextureChannel::BaseColor), None);
    }

    #[test]
    fn test_select_ignores_other_channels() {
        let files = ["mat_x_roughness_1001.png"];
        assert_eq!(select_channel_file(&files, TextureChannel::BaseColor), None);
        assert!(select_channel_file(&files, TextureChannel::Roughness).is_some());
    }

    #[test]
    fn test_classify_by_suffix() {
        assert_eq!(
            classify("mat_jarA_scatteringMask_1001.png"),
            Some(TextureChannel::ScatteringMask)
        );
        assert_eq!(classify("mat_jarA_diffuse.png"), None);
    }

    #[test]
    fn test_channel_from_str() {
        assert_eq!(
            "baseColor".parse::<TextureChannel>().unwrap(),
            TextureChannel::BaseColor
        );
        assert_eq!(
            "absorptionColor".parse::<TextureChannel>().unwrap(),
            TextureChannel::AbsorptionColor
        );
        assert!("diffuse".parse::<TextureChannel>().is_err());
    }

    #[test]
    fn test_color_spaces() {
        assert_eq!(TextureChannel::BaseColor.color_space(), ColorSpace::Srgb);
        assert_eq!(TextureChannel::Roughness.color_space(), ColorSpace::Raw);
        assert_eq!(TextureChannel::Normal.color_space(), ColorSpace::Raw);
        assert_eq!(TextureChannel::AbsorptionColor.color_space(), ColorSpace::Srgb);
    }

    #[test]
    fn test_strip_shading_group_infix() {
        assert_eq!(
            strip_shading_group_infix("mat_jarASG_baseColor.png"),
            Some("mat_jarA_baseColor.png".to_string())
        );
        assert_eq!(strip_shading_group_infix("mat_jarA_baseColor.png"), None);
    }

    #[test]
    fn test_resolution_log2() {
        assert_eq!(Resolution::R512.size_log2(), 9);
        assert_eq!(Resolution::R1024.size_log2(), 10);
        assert_eq!(Resolution::R8192.size_log2(), 13);
    }

    #[test]
    fn test_resolution_parse_display() {
        assert_eq!("2048".parse::<Resolution>().unwrap(), Resolution::R2048);
        assert_eq!(Resolution::R4096.to_string(), "4096");
        assert!(matches!(
            "300".parse::<Resolution>(),
            Err(TuyauError::UnknownResolution { .. })
        ));
    }
}
