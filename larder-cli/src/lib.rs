//! Command-line interface for the Larder recommender.
//!
//! `larder import` loads a JSON catalog into a SQLite database and
//! `larder recommend` prints recommendations for a user as JSON.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod import;
mod recommend;

pub use error::CliError;

use import::{ImportArgs, run_import};
use recommend::{RecommendArgs, run_recommend};

const ARG_IMPORT_CATALOG: &str = "catalog";
const ARG_DATABASE: &str = "database";
const ARG_RECOMMEND_USER: &str = "user";
const ARG_RECOMMEND_SIZE: &str = "size";
const ARG_RECOMMEND_SEED: &str = "seed";
const ENV_IMPORT_CATALOG: &str = "LARDER_CMDS_IMPORT_CATALOG";
const ENV_RECOMMEND_USER: &str = "LARDER_CMDS_RECOMMEND_USER";
const DEFAULT_DATABASE: &str = "larder.db";

/// Run the Larder CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot be
/// resolved, or the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Import(args) => run_import(args),
        Command::Recommend(args) => run_recommend(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "larder",
    about = "Content-based recipe recommendations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a JSON catalog of recipes and saved lists into SQLite.
    Import(ImportArgs),
    /// Recommend recipes for a user.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
