//! Tests for layered configuration loading

use confview_settings::{Backoff, ConfigLoader, Error, LogLevel, Settings};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_exists() {
    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_config_dir(temp_dir.path());

    let settings = loader.load().unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.config_path, None);
}

#[test]
fn load_reads_the_user_config_and_records_its_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
log_level = "debug"
jobs = 8

[retry]
limit = 7
"#,
    )
    .unwrap();

    let settings = ConfigLoader::with_config_dir(temp_dir.path())
        .load()
        .unwrap();

    assert_eq!(settings.log_level, LogLevel::Debug);
    assert_eq!(settings.jobs, 8);
    assert_eq!(settings.retry.limit, 7);
    // untouched keys keep their defaults
    assert_eq!(settings.retry.backoff, Backoff::Exponential);
    assert_eq!(
        settings.config_path.as_deref(),
        Some(config_path.display().to_string().as_str())
    );
}

#[test]
fn local_overrides_apply_on_top_of_the_user_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.toml"),
        "jobs = 8\neditor = \"vi\"\n",
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("config.local.toml"), "jobs = 2\n").unwrap();

    let settings = ConfigLoader::with_config_dir(temp_dir.path())
        .load()
        .unwrap();

    // local layer wins where it sets a key
    assert_eq!(settings.jobs, 2);
    // base-only keys survive
    assert_eq!(settings.editor.as_deref(), Some("vi"));
}

#[test]
fn local_overrides_apply_even_without_a_user_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.local.toml"), "verbose = true\n").unwrap();

    let settings = ConfigLoader::with_config_dir(temp_dir.path())
        .load()
        .unwrap();

    assert!(settings.verbose);
    // nothing was loaded as the primary config
    assert_eq!(settings.config_path, None);
}

#[test]
fn explicit_missing_path_is_an_error_not_a_silent_skip() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let err = ConfigLoader::with_path(&missing).load().unwrap_err();
    match err {
        Error::ConfigNotFound { path } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn explicit_path_loads_and_its_sibling_local_file_still_applies() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("mine.toml");
    std::fs::write(&config_path, "jobs = 5\n").unwrap();
    std::fs::write(temp_dir.path().join("config.local.toml"), "jobs = 9\n").unwrap();

    let settings = ConfigLoader::with_path(&config_path).load().unwrap();
    assert_eq!(settings.jobs, 9);
}

#[test]
fn invalid_toml_is_an_error_in_any_layer() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "jobs = \"many\"\n").unwrap();

    let err = ConfigLoader::with_config_dir(temp_dir.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::TomlDe(_)));
}
