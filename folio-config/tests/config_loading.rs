use std::fs;

use folio_config::{
    ConfigLoadError, ConfigLoader, ConfigSource, ManifestSource, PresentationConfig,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

#[test]
fn empty_directory_uses_defaults_and_the_builtin_catalog() {
    let dir = TempDir::new().unwrap();
    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();

    assert_eq!(load.config, PresentationConfig::default());
    assert_eq!(load.metadata.config_source, ConfigSource::Default);
    assert_eq!(load.metadata.manifest_source, ManifestSource::Builtin);
    assert_eq!(load.manifest.files.len(), 17);
    // The built-in portfolio lists one photo twice.
    assert_eq!(load.warnings.len(), 1);
}

#[test]
fn folio_toml_wins_over_nested_config() {
    let dir = TempDir::new().unwrap();
    write(&dir, "folio.toml", "[hero]\ninterval_ms = 8000\n");
    write(&dir, "config/folio.toml", "[hero]\ninterval_ms = 3000\n");

    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();
    assert_eq!(load.config.hero.interval_ms, 8_000);
    assert_eq!(
        load.metadata.config_source,
        ConfigSource::File(dir.path().join("folio.toml"))
    );
}

#[test]
fn manifest_path_is_resolved_against_the_base_dir() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "config/folio.toml",
        "[catalog]\nmanifest_path = \"catalog.json\"\n",
    );
    write(
        &dir,
        "catalog.json",
        r#"{
            "image_folder": "img/",
            "files": ["boda-1999.jpg", "pizza-cortando.jpg"],
            "descriptions": {
                "boda-1999.jpg": {
                    "purpose": "Boda",
                    "technique": "Flash",
                    "story": "Iglesia"
                }
            }
        }"#,
    );

    let load = ConfigLoader::new().with_base_dir(dir.path()).load().unwrap();
    assert_eq!(
        load.metadata.manifest_source,
        ManifestSource::File(dir.path().join("catalog.json"))
    );
    assert!(load.warnings.is_empty());
    let items = load.manifest.items().unwrap();
    assert_eq!(items[0].src, "img/boda-1999.jpg");
    assert_eq!(items[0].description.story, "Iglesia");
}

#[test]
fn zero_interval_fails_the_load() {
    let dir = TempDir::new().unwrap();
    write(&dir, "folio.json", r#"{ "fullscreen": { "interval_ms": 0 } }"#);

    let err = ConfigLoader::new()
        .with_base_dir(dir.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::GuardRail(_)));
}

#[test]
fn broken_files_report_their_origin() {
    let dir = TempDir::new().unwrap();
    write(&dir, "folio.toml", "[hero\n");
    let err = ConfigLoader::new()
        .with_base_dir(dir.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Presentation(_)));
    assert!(format!("{:#}", anyhow::Error::from(err)).contains("folio.toml"));

    let missing = ConfigLoader::new()
        .with_config_path(dir.path().join("nope.toml"))
        .load()
        .unwrap_err();
    assert!(missing.to_string().contains("failed to load presentation configuration"));
}

#[test]
fn blank_manifest_entries_are_rejected() {
    let dir = TempDir::new().unwrap();
    write(&dir, "folio.toml", "[catalog]\nmanifest_path = \"fotos.toml\"\n");
    write(&dir, "fotos.toml", "files = [\"a.jpg\", \" \"]\n");

    let err = ConfigLoader::new()
        .with_base_dir(dir.path())
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidManifest(_)));
}

#[test]
fn env_file_is_reported() {
    let dir = TempDir::new().unwrap();
    write(&dir, ".env", "FOLIO_UNUSED_MARKER=1\n");

    let load = ConfigLoader::new()
        .with_base_dir(dir.path())
        .with_env_file(dir.path().join(".env"))
        .load()
        .unwrap();
    assert!(load.metadata.env_file_loaded);

    let err = ConfigLoader::new()
        .with_base_dir(dir.path())
        .with_env_file(dir.path().join("missing.env"))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::EnvFile(_)));
}
