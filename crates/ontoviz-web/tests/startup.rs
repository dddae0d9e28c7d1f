//! Process-level startup behaviour of the `ontoviz` binary.

use std::fs;
use std::process::Command;

#[test]
fn test_missing_tree_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let labels = dir.path().join("labels.csv");
    fs::write(&labels, "term,label\n").unwrap();

    let config = dir.path().join("ontoviz.toml");
    fs::write(
        &config,
        format!(
            "[data]\ntree_file = {:?}\nlabels_file = {:?}\n\n[server]\nhost = \"127.0.0.1\"\nport = 0\n",
            dir.path().join("tree.csv").display().to_string(),
            labels.display().to_string(),
        ),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ontoviz"))
        .env("ONTOVIZ_CONFIG", &config)
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File not found"), "stderr was: {stderr}");
}

#[test]
fn test_missing_explicit_config_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ontoviz"))
        .env("ONTOVIZ_CONFIG", dir.path().join("absent.toml"))
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file not found"), "stderr was: {stderr}");
}
