//! Property tests for the texture selection policy.

use proptest::prelude::*;

use tuyau::textures::{select_channel_file, TextureChannel, UDIM_TILE, UDIM_TOKEN};

fn tile() -> impl Strategy<Value = u32> {
    1001u32..=1009
}

fn tile_files() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(tile(), 1..=6).prop_map(|tiles| {
        tiles
            .into_iter()
            .map(|t| format!("mat_x_baseColor_{}.png", t))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Selection returns a value exactly when a matching file exists.
    #[test]
    fn property_selection_some_iff_match(files in tile_files()) {
        let picked = select_channel_file(&files, TextureChannel::BaseColor);
        prop_assert!(picked.is_some());

        let picked = select_channel_file(&files, TextureChannel::Roughness);
        prop_assert!(picked.is_none());
    }

    /// PROPERTY: A single matching file is returned verbatim.
    #[test]
    fn property_single_match_is_verbatim(t in tile()) {
        let file = format!("mat_x_baseColor_{}.png", t);
        let picked = select_channel_file(std::slice::from_ref(&file), TextureChannel::BaseColor);
        prop_assert_eq!(picked, Some(file));
    }

    /// PROPERTY: The wildcard token only appears when several tiles exist and
    /// one of them is the first tile.
    #[test]
    fn property_udim_token_requires_first_tile(files in tile_files()) {
        let picked = select_channel_file(&files, TextureChannel::BaseColor)
            .expect("matching files must select");

        let has_first_tile = files.iter().any(|f| f.contains(UDIM_TILE));
        if picked.contains(UDIM_TOKEN) {
            prop_assert!(files.len() > 1);
            prop_assert!(has_first_tile);
        } else if files.len() > 1 {
            prop_assert!(!has_first_tile);
        }
    }

    /// PROPERTY: Selection never panics on arbitrary file names.
    #[test]
    fn property_selection_never_panics(
        files in proptest::collection::vec("(?s).{0,32}", 0..=8)
    ) {
        for channel in TextureChannel::ALL {
            let _ = select_channel_file(&files, channel);
        }
    }
}
