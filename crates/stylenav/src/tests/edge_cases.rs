//! Edge case tests for the resolution pipeline.
//!
//! Broken configs, configs outside the workspace, and files that exist
//! only as directories.

use super::test_helpers::*;
use crate::locator::ConfigLocator;
use crate::runtime::NativeRuntime;
use tempfile::TempDir;

#[test]
fn test_unparseable_config_yields_no_aliases() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("tsconfig.json", "{ \"compilerOptions\": { \"paths\": "),
            ("src/a.module.css", ""),
        ],
    );

    let navigator = quiet_navigator();
    assert!(navigator.aliases(&at(&root, "src"), &root).is_empty());
    // Relative imports still work without aliases.
    assert!(navigator.navigate("./a.module.css", &at(&root, "src"), &root).is_found());
}

#[test]
fn test_config_without_paths_yields_no_aliases() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[("tsconfig.json", r#"{"compilerOptions":{"strict":true}}"#)],
    );

    assert!(quiet_navigator().aliases(&root, &root).is_empty());
}

#[test]
fn test_config_above_workspace_is_ignored() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("tsconfig.json", r#"{"compilerOptions":{"paths":{"@/*":["./src/*"]}}}"#),
            ("ws/src/a.module.css", ""),
        ],
    );
    let workspace = at(&root, "ws");

    let locator_runtime = NativeRuntime::new();
    assert!(
        ConfigLocator::new(&locator_runtime)
            .locate(&at(&root, "ws/src"), &workspace)
            .is_none()
    );
    assert!(!quiet_navigator().navigate("@/a", &at(&root, "ws/src"), &workspace).is_found());
}

#[test]
fn test_sibling_with_common_prefix_is_outside_workspace() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(&temp, &[("ws-2/tsconfig.json", "{}"), ("ws/.keep", "")]);

    let runtime = NativeRuntime::new();
    assert!(
        ConfigLocator::new(&runtime)
            .locate(&at(&root, "ws-2"), &at(&root, "ws"))
            .is_none()
    );
}

#[test]
fn test_directory_named_like_module_is_not_a_match() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(&temp, &[("src/odd.module.css/index.module.css", "")]);

    let result = quiet_navigator().navigate("./odd.module.css", &at(&root, "src"), &root);

    assert!(!result.is_found());
}

#[test]
fn test_config_directory_is_not_a_config() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("tsconfig.json/.keep", ""),
            ("jsconfig.json", r#"{"compilerOptions":{"paths":{"@/*":["./src/*"]}}}"#),
        ],
    );

    let runtime = NativeRuntime::new();
    let location = ConfigLocator::new(&runtime).locate(&root, &root).unwrap();
    assert_eq!(location.config_path, at(&root, "jsconfig.json"));
}

#[test]
fn test_unclean_paths_are_normalized() {
    let temp = TempDir::new().unwrap();
    let root = create_app_project(&temp);
    let dir = root.join("app").join("src").join("..").join("src").join("pages");

    let result = quiet_navigator().navigate("@/styles/home.module.scss", &dir, &root);

    assert_eq!(result.path(), Some(at(&root, "app/src/styles/home.module.scss").as_path()));
}
