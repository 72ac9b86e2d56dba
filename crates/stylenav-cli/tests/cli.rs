//! End-to-end tests for the stylenav binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const JSCONFIG: &str = r#"{
  // app aliases
  "compilerOptions": {
    "baseUrl": ".",
    "paths": { "@/*": ["./src/*"], },
  },
}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "app/jsconfig.json", JSCONFIG);
    write(root, "app/src/styles/home.module.scss", ".home {}");
    write(root, "app/src/components/Card.module.css", ".card {}");
    write(
        root,
        "app/src/pages/Home.tsx",
        "import React from 'react';\nimport styles from '@/styles/home.module.scss';\nimport card from '../components/Card.module.css';\n",
    );
    temp
}

fn stylenav(cwd: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("stylenav");
    cmd.current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("STYLENAV_LENIENT_RELATIVE")
        .env_remove("STYLENAV_LOG_LEVEL")
        .env_remove("STYLENAV_WORKSPACE_ROOTS")
        .arg("--no-color");
    cmd
}

#[test]
fn test_resolve_alias() {
    let temp = project();
    let root = temp.path();

    stylenav(root)
        .args(["resolve", "@/styles/home.module.scss", "--from", "app/src/pages/Home.tsx"])
        .assert()
        .success()
        .stdout(format!(
            "{}\n",
            root.join("app/src/styles/home.module.scss").display()
        ));
}

#[test]
fn test_resolve_not_found_lists_aliases() {
    let temp = project();

    stylenav(temp.path())
        .args(["resolve", "@missing/Thing.module.css", "--from", "app/src/Home.tsx"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Path not found for: @missing/Thing.module.css"))
        .stderr(predicate::str::contains("Available aliases: @/"));
}

#[test]
fn test_resolve_from_sibling_workspace() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "web/src/a.module.css", ".web {}");
    write(root, "docs/tsconfig.json", r#"{ "compilerOptions": { "paths": { "@/*": ["./src/*"] } } }"#);
    write(root, "docs/src/a.module.css", ".docs {}");
    write(root, "docs/page.tsx", "import styles from '@/a';\n");

    stylenav(&root.join("web"))
        .args(["resolve", "@/a", "--from", "../docs/page.tsx", "-w", ".", "-w", "../docs"])
        .assert()
        .success()
        .stdout(format!("{}\n", root.join("docs/src/a.module.css").display()));
}

#[test]
fn test_line_command() {
    let temp = project();
    let root = temp.path();

    stylenav(root)
        .args(["line", "app/src/pages/Home.tsx", "--line", "3"])
        .assert()
        .success()
        .stdout(format!(
            "{}\n",
            root.join("app/src/components/Card.module.css").display()
        ));
}

#[test]
fn test_line_without_import() {
    let temp = project();

    stylenav(temp.path())
        .args(["line", "app/src/pages/Home.tsx", "--line", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no style module import found on this line"));
}

#[test]
fn test_line_past_end_of_file() {
    let temp = project();

    stylenav(temp.path())
        .args(["line", "app/src/pages/Home.tsx", "--line", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("past the end"));
}

#[test]
fn test_line_missing_file() {
    let temp = project();

    stylenav(temp.path())
        .args(["line", "nope.tsx", "--line", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_strict_flag_disables_depth_retry() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "src/features/a/shared/card.module.css", "");

    stylenav(root)
        .args(["resolve", "../shared/card.module.css", "--from", "src/features/a/View.tsx"])
        .assert()
        .success();

    stylenav(root)
        .args([
            "resolve",
            "../shared/card.module.css",
            "--from",
            "src/features/a/View.tsx",
            "--strict",
        ])
        .assert()
        .code(1);
}

#[test]
fn test_settings_file_makes_resolution_strict() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "src/features/a/shared/card.module.css", "");
    write(root, "stylenav.toml", "lenient_relative = false\n");

    stylenav(root)
        .args(["resolve", "../shared/card.module.css", "--from", "src/features/a/View.tsx"])
        .assert()
        .code(1);
}

#[test]
fn test_workspace_flag_bounds_config_search() {
    let temp = project();
    let root = temp.path();

    // The config lives in app/, outside app/src.
    stylenav(root)
        .args([
            "resolve",
            "@/styles/home.module.scss",
            "--from",
            "app/src/pages/Home.tsx",
            "--workspace",
            "app/src",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available aliases: (none)"));
}

#[test]
fn test_aliases_command() {
    let temp = project();
    let root = temp.path();

    stylenav(root)
        .args(["aliases", "app/src/pages"])
        .assert()
        .success()
        .stdout(format!(
            "{}\n@/ -> {}\n",
            root.join("app/jsconfig.json").display(),
            root.join("app/src").display()
        ));
}

#[test]
fn test_aliases_json() {
    let temp = project();

    stylenav(temp.path())
        .args(["aliases", "app", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alias\": \"@/\""))
        .stdout(predicate::str::contains("jsconfig.json"));
}

#[test]
fn test_aliases_without_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("src")).unwrap();

    stylenav(temp.path())
        .args(["aliases", "src"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No tsconfig.json or jsconfig.json found"));
}

#[test]
fn test_missing_settings_file() {
    let temp = project();

    stylenav(temp.path())
        .args(["--config", "missing.toml", "aliases", "app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file not found"));
}
