use std::io::Write;

use super::*;

#[test]
fn test_defaults_match_shipped_layout() {
    let config = Config::default();
    assert_eq!(config.data.tree_file, PathBuf::from("data/tree.csv"));
    assert_eq!(config.data.labels_file, PathBuf::from("data/labels.csv"));
    assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:5002");
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = Config::from_toml_str(
        r#"
        [server]
        port = 8080
        "#,
    )
    .unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.templates_dir, PathBuf::from("crates/ontoviz-web/templates"));
    assert_eq!(config.data.labels_file, PathBuf::from("data/labels.csv"));
}

#[test]
fn test_invalid_host_is_config_error() {
    let config = Config::from_toml_str("[server]\nhost = \"not-an-ip\"\n").unwrap();
    let err = config.bind_addr().unwrap_err();
    assert!(matches!(err, OntovizError::Config(_)));
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = Config::from_toml_str("[server\nport = 1").unwrap_err();
    assert!(matches!(err, OntovizError::Config(_)));
}

#[test]
fn test_from_file_reads_data_section() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[data]\ntree_file = \"/srv/tree.csv\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.data.tree_file, PathBuf::from("/srv/tree.csv"));
    assert_eq!(config.data.labels_file, PathBuf::from("data/labels.csv"));
}

#[test]
fn test_from_file_missing_is_error() {
    let err = Config::from_file("/nonexistent/ontoviz.toml").unwrap_err();
    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn test_defaults_resolve_from_workspace_root() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    let config = Config::default();

    assert!(root.join(&config.data.tree_file).is_file());
    assert!(root.join(&config.data.labels_file).is_file());
    assert!(root.join(&config.server.templates_dir).join("index.html").is_file());
    assert!(root.join(&config.server.static_dir).join("favicon.ico").is_file());
}
