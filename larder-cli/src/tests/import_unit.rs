//! Focused unit tests covering import CLI configuration and catalog loading.

use super::helpers::{workspace, write_utf8};
use super::*;
use crate::import::{ImportArgs, ImportConfig};
use camino::Utf8PathBuf;
use rstest::rstest;

#[rstest]
fn converting_import_without_catalog_errors() {
    let err = ImportConfig::try_from(ImportArgs::default()).expect_err("missing catalog");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_IMPORT_CATALOG);
            assert_eq!(env, ENV_IMPORT_CATALOG);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn import_config_defaults_database_path() {
    let args = ImportArgs {
        catalog: Some(Utf8PathBuf::from("catalog.json")),
        database: None,
    };
    let config = ImportConfig::try_from(args).expect("config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from("catalog.json"));
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
}

#[rstest]
fn validate_sources_reports_missing_catalog() {
    let (_tmp, root) = workspace();
    let config = ImportConfig {
        catalog: root.join("absent.json"),
        database: root.join("larder.db"),
    };
    match config.validate_sources().expect_err("missing catalog") {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_IMPORT_CATALOG),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_reports_directories() {
    let (_tmp, root) = workspace();
    let catalog = root.join("catalog.json");
    std::fs::create_dir(catalog.as_std_path()).expect("catalog directory");
    let config = ImportConfig {
        catalog: catalog.clone(),
        database: root.join("larder.db"),
    };
    match config.validate_sources().expect_err("directory catalog") {
        CliError::SourcePathNotFile { field, path } => {
            assert_eq!(field, ARG_IMPORT_CATALOG);
            assert_eq!(path, catalog);
        }
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn load_catalog_decodes_items_and_users() {
    let (_tmp, root) = workspace();
    let path = root.join("catalog.json");
    super::helpers::write_baking_catalog(&path);

    let catalog = crate::import::load_catalog(&path).expect("catalog should decode");
    assert_eq!(catalog.items.len(), 3);
    assert_eq!(catalog.users.len(), 2);
    assert_eq!(catalog.items[1].details.title, "Biscuits");
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn load_catalog_rejects_invalid_json() {
    let (_tmp, root) = workspace();
    let path = root.join("catalog.json");
    write_utf8(&path, b"{ not valid json");

    match crate::import::load_catalog(&path).expect_err("invalid json") {
        CliError::ParseCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseCatalog, found {other:?}"),
    }
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn load_catalog_reports_open_failures() {
    let (_tmp, root) = workspace();
    let path = root.join("absent.json");

    match crate::import::load_catalog(&path).expect_err("missing catalog") {
        CliError::OpenCatalog { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected OpenCatalog, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_prefers_cli_database_over_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "database": "from-file.db" }), None);
    composer.push_environment(json!({
        "catalog": "from-env.json",
        "database": "from-env.db",
    }));
    composer.push_cli(json!({ "database": "from-cli.db" }));

    let config = crate::import::config_from_layers_for_test(composer.layers())
        .expect("merged config should build");
    assert_eq!(config.catalog, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.database, Utf8PathBuf::from("from-cli.db"));
}
