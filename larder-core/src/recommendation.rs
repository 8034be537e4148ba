//! Request-scoped recommendation types.
//!
//! [`ScoredCandidate`] borrows from the catalog snapshot taken at the start
//! of a call, so ranking never clones items. Only the final, truncated list
//! is materialised as owned [`Recommendation`] values.

use std::num::NonZeroUsize;

use crate::{Item, ItemId, UserId};

/// Number of recommendations returned when the caller does not ask for a
/// specific size.
pub const DEFAULT_OUTPUT_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

/// Provenance of a recommended item.
///
/// # Examples
/// ```
/// use larder_core::Source;
///
/// assert_eq!(Source::Similarity.as_str(), "similarity");
/// assert_eq!(Source::Random.to_string(), "random");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Source {
    /// Ranked by feature overlap with the user's saved items.
    Similarity,
    /// Drawn at random to fill the list.
    Random,
}

impl Source {
    /// Return the wire name of the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Similarity => "similarity",
            Self::Random => "random",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item paired with its score and provenance while ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// Borrowed catalog entry.
    pub item: &'a Item,
    /// Best similarity score in `0.0..=1.0`; `0.0` for random picks.
    pub score: f32,
    /// How the candidate was selected.
    pub source: Source,
}

impl<'a> ScoredCandidate<'a> {
    /// Tag `item` as a similarity match with `score`.
    #[must_use]
    pub const fn similarity(item: &'a Item, score: f32) -> Self {
        Self {
            item,
            score,
            source: Source::Similarity,
        }
    }

    /// Tag `item` as a random pick.
    #[must_use]
    pub const fn random(item: &'a Item) -> Self {
        Self {
            item,
            score: 0.0,
            source: Source::Random,
        }
    }

    /// Identifier of the underlying item.
    #[must_use]
    pub const fn id(&self) -> &'a ItemId {
        &self.item.id
    }
}

/// Consumer-visible recommendation: the item plus its provenance.
///
/// Serialises as the item's own fields with `source` (and `score` for
/// similarity matches) added alongside.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// The recommended item.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub item: Item,
    /// How the item was selected.
    pub source: Source,
    /// Similarity score, present only for similarity matches.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub score: Option<f32>,
}

impl From<ScoredCandidate<'_>> for Recommendation {
    fn from(candidate: ScoredCandidate<'_>) -> Self {
        let score = match candidate.source {
            Source::Similarity => Some(candidate.score),
            Source::Random => None,
        };
        Self {
            item: candidate.item.clone(),
            source: candidate.source,
            score,
        }
    }
}

/// Parameters for a single recommendation call.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use larder_core::{DEFAULT_OUTPUT_SIZE, RecommendRequest};
///
/// let request = RecommendRequest::new("user-1").with_seed(7);
/// assert_eq!(request.output_size, DEFAULT_OUTPUT_SIZE);
/// assert_eq!(request.seed, Some(7));
///
/// let three = NonZeroUsize::new(3).expect("non-zero");
/// assert_eq!(request.with_output_size(three).output_size.get(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendRequest {
    /// User whose saved items seed the ranking.
    pub user_id: UserId,
    /// Maximum number of recommendations to return.
    #[cfg_attr(feature = "serde", serde(default = "default_output_size"))]
    pub output_size: NonZeroUsize,
    /// Seed for the random backfill. `None` draws from OS entropy.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub seed: Option<u64>,
}

#[cfg(feature = "serde")]
const fn default_output_size() -> NonZeroUsize {
    DEFAULT_OUTPUT_SIZE
}

impl RecommendRequest {
    /// Request the default number of recommendations for `user_id`.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: user_id.into(),
            output_size: DEFAULT_OUTPUT_SIZE,
            seed: None,
        }
    }

    /// Override the output size.
    #[must_use]
    pub const fn with_output_size(mut self, output_size: NonZeroUsize) -> Self {
        self.output_size = output_size;
        self
    }

    /// Fix the random backfill seed for reproducible results.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
