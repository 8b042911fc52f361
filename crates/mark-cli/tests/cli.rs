use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A `mark` command isolated from any user config file.
fn mark_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("mark");
    cmd.env("MARK_CONFIG", dir.join("no-such-config.toml"));
    cmd
}

#[test]
fn translates_file_next_to_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("doc.txt");
    fs::write(&input, "blah __blah _blah_ blah__ blah\n\nsecond `code`").unwrap();

    mark_cmd(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("doc.txt.html"));

    let html = fs::read_to_string(dir.path().join("doc.txt.html")).unwrap();
    assert_eq!(
        html,
        "<p>blah <strong>blah <em>blah</em> blah</strong> blah</p><p>second <code>code</code></p>"
    );
}

#[test]
fn empty_file_gives_empty_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();

    mark_cmd(dir.path()).arg(&input).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("empty.txt.html")).unwrap(),
        ""
    );
}

#[test]
fn no_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();

    mark_cmd(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let dir = TempDir::new().unwrap();

    mark_cmd(dir.path())
        .arg("a.txt")
        .arg("b.txt")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn missing_input_fails_without_writing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.txt");

    mark_cmd(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"));

    assert!(!dir.path().join("missing.txt.html").exists());
}

#[test]
fn config_controls_extension_and_paragraph_breaks() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "output_extension = \"htm\"\nparagraph_break = \"line\"\n",
    )
    .unwrap();
    let input = dir.path().join("lines.txt");
    fs::write(&input, "one\ntwo").unwrap();

    let mut cmd = cargo_bin_cmd!("mark");
    cmd.env("MARK_CONFIG", &config).arg(&input).assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("lines.txt.htm")).unwrap(),
        "<p>one</p><p>two</p>"
    );
}

#[test]
fn broken_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "output_extension = [").unwrap();
    let input = dir.path().join("doc.txt");
    fs::write(&input, "text").unwrap();

    let mut cmd = cargo_bin_cmd!("mark");
    cmd.env("MARK_CONFIG", &config)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config file"));

    assert!(!dir.path().join("doc.txt.html").exists());
}
