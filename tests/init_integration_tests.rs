//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    isrc_check!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".isrc-check.toml");
    assert!(content.contains("[scan]"));
    assert!(content.contains("[report]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();

    isrc_check!()
        .current_dir(fixture.path())
        .args(["init", "--output", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.exists("custom.toml"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    isrc_check!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fixture.read(".isrc-check.toml"), "# existing config\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    isrc_check!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".isrc-check.toml").contains("[scan]"));
}

#[test]
fn generated_config_passes_validation() {
    let fixture = TestFixture::new();

    isrc_check!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    isrc_check!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
