use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shyrdak_cmd() -> Command {
    Command::cargo_bin("shyrdak").expect("binary exists")
}

#[test]
fn shyrdak_help_prints_usage() {
    shyrdak_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Felt-motif stamping canvas for Wayland compositors",
        ))
        .stdout(predicate::str::contains("--symmetry"));
}

#[test]
fn canvas_requires_wayland_env() {
    shyrdak_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn unknown_shape_is_rejected() {
    shyrdak_cmd()
        .args(["--shape", "hexagon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("hexagon"));
}

#[test]
fn init_config_writes_into_config_home() {
    let temp = TempDir::new().unwrap();

    shyrdak_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("shyrdak").join("config.toml");
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[keybindings]"));

    // A second run refuses to overwrite.
    shyrdak_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_config_honors_explicit_config_path() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("custom").join("felt.toml");

    shyrdak_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .arg("--config")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("felt.toml"));

    assert!(target.exists());
    assert!(!temp.path().join("shyrdak").join("config.toml").exists());
}
