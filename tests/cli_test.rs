//! Tests for the headless command line

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config, cache and working directory
fn swatchgrid(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("swatchgrid").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"))
        .env_remove("SWATCHGRID_LOG");
    cmd
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();
    swatchgrid(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--state"))
        .stdout(predicate::str::contains("--export"));
}

#[test]
fn test_list_builtin() {
    let home = TempDir::new().unwrap();
    let output = swatchgrid(&home).arg("--list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 70);
    assert!(stdout.lines().next().unwrap().starts_with("1-1"));
}

#[test]
fn test_list_with_state() {
    let home = TempDir::new().unwrap();
    swatchgrid(&home)
        .args(["--state", "tags=cg%3Ared&format=rgb", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rgb(255, 148, 166)"))
        .stdout(predicate::str::contains("Salmon"))
        .stdout(predicate::str::contains("Navy").not());
}

#[test]
fn test_export_writes_file() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out");

    swatchgrid(&home)
        .args(["--state", "layout=push&favorites=1-1"])
        .arg("--export")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("palette-hex-push.json"));

    let content = std::fs::read_to_string(out.join("palette-hex-push.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["format"], "hex");
    let salmon = value["colors"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Salmon")
        .unwrap();
    assert_eq!(salmon["isFavorite"], true);
}

#[test]
fn test_custom_catalog() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("small.toml");
    std::fs::write(&path, common::SMALL_CATALOG).unwrap();

    swatchgrid(&home)
        .arg("--catalog")
        .arg(&path)
        .args(["--state", "tags=warm", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coral"))
        .stdout(predicate::str::contains("Brick"))
        .stdout(predicate::str::contains("Navy").not());
}

#[test]
fn test_invalid_catalog_fails() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    std::fs::write(
        &path,
        "[[color]]\nname = \"Broken\"\nhex = \"#zzzzzz\"\ntags = []\nlive = { col = 1, row = 1 }\n",
    )
    .unwrap();

    swatchgrid(&home)
        .arg("--catalog")
        .arg(&path)
        .arg("--list")
        .assert()
        .failure();
}

#[test]
fn test_local_config_prefix() {
    let home = TempDir::new().unwrap();
    std::fs::create_dir_all(home.path().join(".swatchgrid")).unwrap();
    std::fs::write(
        home.path().join(".swatchgrid/config.toml"),
        "[export]\nfile_prefix = \"clips\"\n",
    )
    .unwrap();

    swatchgrid(&home)
        .arg("--export")
        .arg(home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("clips-hex-live.json"));
}
