//! Error types emitted by the Larder CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use larder_core::UserId;
use larder_engine::RecommendError;
use thiserror::Error;

/// Errors emitted by the Larder CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested number of recommendations was zero.
    #[error("--{field} must be at least 1")]
    ZeroOutputSize {
        /// Name of the offending option.
        field: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that must be enabled.
        feature: &'static str,
        /// Operation that needed it.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was not found.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that is not a regular file.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that could not be inspected.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the catalog file failed.
    #[error("failed to open catalog at {path:?}: {source}")]
    OpenCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Catalog JSON could not be decoded.
    #[error("failed to parse catalog JSON at {path:?}: {source}")]
    ParseCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Decoding error.
        #[source]
        source: serde_json::Error,
    },
    /// Persisting the catalog to SQLite failed.
    #[cfg(feature = "store-sqlite")]
    #[error("failed to import catalog into {path:?}: {source}")]
    PersistCatalog {
        /// Destination database path.
        path: Utf8PathBuf,
        /// Persistence error.
        #[source]
        source: larder_core::PersistCatalogError,
    },
    /// Opening the catalog database failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenItemStore(#[from] larder_core::SqliteItemStoreError),
    /// The recommender could not serve the request.
    #[error("failed to recommend for user {user_id}: {source}")]
    Recommend {
        /// User the request was made for.
        user_id: UserId,
        /// Recommendation error.
        #[source]
        source: RecommendError,
    },
    /// Serializing the recommendations failed.
    #[error("failed to serialize recommendations: {0}")]
    SerializeRecommendations(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
