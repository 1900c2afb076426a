//! Property tests for the layout resolver.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use tuyau::layout::{
    asset_subfolder, locate_work_file, main_folders, proxy_folder, set_subfolder, AssetFolder,
    SetFolder,
};

fn root_path() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| format!("/{}", segments.join("/")))
}

fn asset_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(prp|prx|set)_[A-Za-z0-9]{1,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The resolvers are pure - identical inputs yield identical outputs.
    #[test]
    fn property_resolvers_idempotent(root in root_path(), asset in asset_name()) {
        let root = Path::new(&root);

        prop_assert_eq!(main_folders(root), main_folders(root));
        for which in AssetFolder::ALL {
            prop_assert_eq!(
                asset_subfolder(root, &asset, which),
                asset_subfolder(root, &asset, which)
            );
        }
        for which in SetFolder::ALL {
            prop_assert_eq!(
                set_subfolder(root, &asset, which),
                set_subfolder(root, &asset, which)
            );
        }
        prop_assert_eq!(proxy_folder(root, &asset), proxy_folder(root, &asset));
    }

    /// PROPERTY: The six main folders are direct children of the root and distinct.
    #[test]
    fn property_main_folders_are_distinct_children(root in root_path()) {
        let root = PathBuf::from(&root);
        let layout = main_folders(&root);

        let entries = layout.entries();
        for (_, folder) in &entries {
            prop_assert_eq!(folder.parent(), Some(root.as_path()));
        }

        let mut paths: Vec<&Path> = entries.iter().map(|(_, p)| *p).collect();
        paths.sort();
        paths.dedup();
        prop_assert_eq!(paths.len(), 6);
    }

    /// PROPERTY: Every asset sub-folder stays under the asset folder.
    #[test]
    fn property_asset_subfolders_stay_under_asset(root in root_path(), asset in asset_name()) {
        let root = Path::new(&root);
        let asset_folder = root.join(&asset);

        for which in AssetFolder::ALL {
            let sub = asset_subfolder(root, &asset, which);
            prop_assert!(sub.starts_with(&asset_folder));
        }
    }

    /// PROPERTY: Splitting a constructed work-file path recovers its parts.
    #[test]
    fn property_locate_work_file_inverts_join(
        root in root_path(),
        asset in asset_name(),
        file in proptest::string::string_regex("[A-Za-z0-9_]{1,12}\\.[a-z]{1,4}").unwrap(),
    ) {
        let path = format!("{}/020_mod_surf/{}/wip/substance/{}", root, asset, file);
        let location = locate_work_file(&path).expect("constructed path must resolve");

        prop_assert_eq!(location.project_root, PathBuf::from(&root));
        prop_assert_eq!(location.department_folder, "020_mod_surf");
        prop_assert_eq!(location.asset_folder, asset);
        prop_assert_eq!(location.wip_folder, "wip/substance");
        prop_assert_eq!(location.file_name, file);
    }

    /// PROPERTY: Locating a work file never panics on arbitrary input.
    #[test]
    fn property_locate_work_file_never_panics(s in "(?s).{0,128}") {
        let _ = locate_work_file(&s);
    }
}
