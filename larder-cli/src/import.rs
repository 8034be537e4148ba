//! Import command implementation for the Larder CLI.

#[cfg(feature = "store-sqlite")]
use std::io::BufReader;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
#[cfg(feature = "store-sqlite")]
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
#[cfg(feature = "store-sqlite")]
use crate::fs::open_utf8_file;
use crate::{ARG_DATABASE, ARG_IMPORT_CATALOG, CliError, DEFAULT_DATABASE, ENV_IMPORT_CATALOG};

/// CLI arguments for the `import` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Import a JSON catalog of recipes and users' saved lists \
                 into a SQLite database. Re-importing updates recipes in \
                 place and replaces each listed user's saved items.",
    about = "Import a recipe catalog"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct ImportArgs {
    /// Path to the catalog JSON document.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to the SQLite database to create or update.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

impl ImportArgs {
    pub(crate) fn into_config(self) -> Result<ImportConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ImportConfig::try_from(merged)
    }
}

/// Resolved `import` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ImportConfig {
    /// Catalog JSON path.
    pub(crate) catalog: Utf8PathBuf,
    /// Destination database path.
    pub(crate) database: Utf8PathBuf,
}

impl ImportConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_IMPORT_CATALOG)
    }
}

impl TryFrom<ImportArgs> for ImportConfig {
    type Error = CliError;

    fn try_from(args: ImportArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_IMPORT_CATALOG,
            env: ENV_IMPORT_CATALOG,
        })?;
        let database = args
            .database
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE));
        Ok(Self { catalog, database })
    }
}

pub(super) fn run_import(args: ImportArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_import_with(args, &mut stdout)
}

pub(super) fn run_import_with(args: ImportArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let (items, users) = import_catalog(&config)?;
    writeln!(
        writer,
        "imported {items} items and {users} users into {}",
        config.database
    )
    .map_err(CliError::WriteOutput)
}

#[cfg(feature = "store-sqlite")]
fn import_catalog(config: &ImportConfig) -> Result<(usize, usize), CliError> {
    let catalog = load_catalog(&config.catalog)?;
    larder_core::persist_catalog(&config.database, &catalog).map_err(|source| {
        CliError::PersistCatalog {
            path: config.database.clone(),
            source,
        }
    })?;
    Ok((catalog.items.len(), catalog.users.len()))
}

#[cfg(not(feature = "store-sqlite"))]
fn import_catalog(_config: &ImportConfig) -> Result<(usize, usize), CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "import",
    })
}

/// Loads a JSON-encoded [`Catalog`](larder_core::Catalog) from disk.
#[cfg(feature = "store-sqlite")]
pub(super) fn load_catalog(path: &camino::Utf8Path) -> Result<larder_core::Catalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: larder_core::Catalog = serde_json::from_reader(BufReader::new(file))
        .map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        "loaded {} items and {} users from {path}",
        catalog.items.len(),
        catalog.users.len()
    );
    Ok(catalog)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ImportConfig, CliError> {
    let merged = ImportArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ImportConfig::try_from(merged)
}
