//! End-to-end tests: layered loading through to rendered text

use confview_core::render;
use confview_settings::{ConfigLoader, Settings};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn dump(settings: &Settings) -> String {
    let mut out = Vec::new();
    render(&settings.record(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn defaults_render_to_the_canonical_dump() {
    assert_eq!(
        dump(&Settings::default()),
        "verbose = false\n\
         color = auto\n\
         log_level = info\n\
         jobs = 4\n\
         timeout = \n\
         retry_count = \n\
         editor = \n\
         cache_dir = \n\
         scan = no-symlinks,no-hidden,gitignore,no-archives\n\
         retry.limit = 3\n\
         retry.backoff = exponential\n\
         retry.max_delay = 30\n"
    );
}

#[test]
fn layered_files_flow_through_to_the_rendered_text() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        r#"
verbose = true
color = "always"
jobs = 16
timeout = 2.5
retry_count = 5

[scan]
symlinks = true
gitignore = false

[retry]
limit = 10
backoff = "linear"
"#,
    )
    .unwrap();
    std::fs::write(
        config_dir.path().join("config.local.toml"),
        "jobs = 2\n\n[retry]\nmax_delay = 0.5\n",
    )
    .unwrap();

    let settings = ConfigLoader::with_config_dir(config_dir.path())
        .load()
        .unwrap();

    assert_eq!(
        dump(&settings),
        "verbose = true\n\
         color = always\n\
         log_level = info\n\
         jobs = 2\n\
         timeout = 2.5\n\
         retry_count = 5\n\
         editor = \n\
         cache_dir = \n\
         scan = symlinks,no-hidden,no-gitignore,no-archives\n\
         retry.limit = 10\n\
         retry.backoff = linear\n\
         retry.max_delay = 0.5\n"
    );
}

#[test]
fn loaded_provenance_stays_out_of_the_dump() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");
    std::fs::write(&config_path, "jobs = 1\n").unwrap();

    let settings = ConfigLoader::with_config_dir(config_dir.path())
        .load()
        .unwrap();

    // provenance is tracked on the settings themselves
    assert_eq!(
        settings.config_path.as_deref(),
        Some(config_path.display().to_string().as_str())
    );
    // but the internal field never reaches the output
    assert!(!dump(&settings).contains("config_path"));
}

#[test]
fn rendering_the_same_settings_twice_is_byte_identical() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "editor = \"emacs -nw\"\n[bindings]\n\"ctrl-r\" = \"reload\"\n",
    )
    .unwrap();

    let settings = ConfigLoader::with_config_dir(config_dir.path())
        .load()
        .unwrap();

    assert_eq!(dump(&settings), dump(&settings));
    // bindings were loaded, but the line format has no rule for them
    assert_eq!(settings.bindings.action("ctrl-r"), Some("reload"));
    assert!(!dump(&settings).contains("bindings"));
    assert!(!dump(&settings).contains("reload"));
}
