//! Recommend command implementation for the Larder CLI.

use std::io::Write;
use std::num::NonZeroUsize;

use camino::Utf8PathBuf;
use clap::Parser;
use larder_core::{DEFAULT_OUTPUT_SIZE, ItemStore, RecommendRequest, Recommendation};
use larder_engine::Recommender;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::fs::require_existing;
use crate::{
    ARG_DATABASE, ARG_RECOMMEND_SEED, ARG_RECOMMEND_SIZE, ARG_RECOMMEND_USER, CliError,
    DEFAULT_DATABASE, ENV_RECOMMEND_USER,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Recommend recipes for a user from an imported catalog. \
                 Recipes similar to the user's saved items come first; the \
                 list is filled with random picks when too few match. The \
                 result is printed as a JSON array.",
    about = "Recommend recipes for a user"
)]
#[ortho_config(prefix = "LARDER")]
pub(crate) struct RecommendArgs {
    /// Identifier of the user to recommend for.
    #[arg(long = ARG_RECOMMEND_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Path to the SQLite catalog written by `larder import`.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Maximum number of recommendations to print.
    #[arg(long = ARG_RECOMMEND_SIZE, value_name = "count")]
    #[serde(default)]
    pub(crate) size: Option<usize>,
    /// Seed for the random fill, for reproducible output.
    #[arg(long = ARG_RECOMMEND_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Catalog database path.
    pub(crate) database: Utf8PathBuf,
    /// Request handed to the recommender.
    pub(crate) request: RecommendRequest,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.database, ARG_DATABASE)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let user = args.user.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_USER,
            env: ENV_RECOMMEND_USER,
        })?;
        let output_size = match args.size {
            None => DEFAULT_OUTPUT_SIZE,
            Some(size) => NonZeroUsize::new(size).ok_or(CliError::ZeroOutputSize {
                field: ARG_RECOMMEND_SIZE,
            })?,
        };
        let mut request = RecommendRequest::new(user).with_output_size(output_size);
        request.seed = args.seed;
        let database = args
            .database
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE));
        Ok(Self { database, request })
    }
}

/// Opens the item store backing a recommend invocation.
pub(super) trait ItemStoreBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn ItemStore>, CliError>;
}

pub(super) struct DefaultItemStoreBuilder;

impl ItemStoreBuilder for DefaultItemStoreBuilder {
    #[cfg(feature = "store-sqlite")]
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn ItemStore>, CliError> {
        let store = larder_core::SqliteItemStore::open(&config.database)?;
        Ok(Box::new(store))
    }

    #[cfg(not(feature = "store-sqlite"))]
    fn build(&self, _config: &RecommendConfig) -> Result<Box<dyn ItemStore>, CliError> {
        Err(CliError::MissingFeature {
            feature: "store-sqlite",
            action: "recommend",
        })
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultItemStoreBuilder;
    run_recommend_with(args, &builder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn ItemStoreBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, builder)?;
    write_recommendations(writer, &recommendations)
}

fn execute_recommend(
    args: RecommendArgs,
    builder: &dyn ItemStoreBuilder,
) -> Result<Vec<Recommendation>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let store = builder.build(&config)?;
    let recommendations = Recommender::new(store)
        .recommend(&config.request)
        .map_err(|source| CliError::Recommend {
            user_id: config.request.user_id.clone(),
            source,
        })?;
    info!(
        "recommended {} items for user {}",
        recommendations.len(),
        config.request.user_id
    );
    Ok(recommendations)
}

fn write_recommendations(
    writer: &mut dyn Write,
    recommendations: &[Recommendation],
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(recommendations)
        .map_err(CliError::SerializeRecommendations)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
