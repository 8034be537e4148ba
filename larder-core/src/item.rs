//! Catalog items and the feature sets used to compare them.
//!
//! An [`Item`] pairs an identity with a [`FeatureSet`] (for recipes, the
//! ingredient list) and an opaque [`RecipeDetails`] payload. Only the
//! features take part in scoring; the payload is carried through to the
//! caller untouched.

use crate::ItemId;

/// Unordered collection of descriptive tags attached to an item.
///
/// Sources may list the same tag more than once. The set keeps the first
/// occurrence of each tag in source order. Tags are stored verbatim:
/// matching is exact and case-sensitive, so `"egg"`, `"Egg"` and `" egg"`
/// are three different features.
///
/// # Examples
/// ```
/// use larder_core::FeatureSet;
///
/// let features = FeatureSet::new(["flour", "egg", "flour"]);
/// assert_eq!(features.len(), 2);
/// assert!(features.contains("egg"));
/// assert!(!features.contains(" egg"));
/// assert_eq!(features.iter().collect::<Vec<_>>(), ["flour", "egg"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<String>", into = "Vec<String>")
)]
pub struct FeatureSet {
    features: Vec<String>,
}

impl FeatureSet {
    /// Build a set from raw tags, dropping repeated tags.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut features: Vec<String> = Vec::new();
        for tag in raw {
            let text = tag.as_ref();
            if !features.iter().any(|seen| seen == text) {
                features.push(text.to_owned());
            }
        }
        Self { features }
    }

    /// Number of distinct features.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.features.len()
    }

    /// Report whether the set has no features.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Report whether `feature` belongs to the set.
    #[must_use]
    pub fn contains(&self, feature: &str) -> bool {
        self.features.iter().any(|own| own == feature)
    }

    /// Iterate over the features in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(String::as_str)
    }

    /// Count the features of `self` that also occur in `other`.
    ///
    /// # Examples
    /// ```
    /// use larder_core::FeatureSet;
    ///
    /// let cake = FeatureSet::new(["flour", "egg"]);
    /// let biscuit = FeatureSet::new(["flour", "sugar"]);
    /// assert_eq!(cake.shared_count(&biscuit), 1);
    /// ```
    #[must_use]
    pub fn shared_count(&self, other: &Self) -> usize {
        self.iter().filter(|feature| other.contains(feature)).count()
    }
}

impl From<Vec<String>> for FeatureSet {
    fn from(raw: Vec<String>) -> Self {
        Self::new(raw)
    }
}

impl From<FeatureSet> for Vec<String> {
    fn from(set: FeatureSet) -> Self {
        set.features
    }
}

impl<S: AsRef<str>> FromIterator<S> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Descriptive payload owned by the external catalog.
///
/// None of these fields influence ranking.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RecipeDetails {
    /// Human-readable title.
    pub title: String,
    /// Short description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Free-form category, e.g. "dessert".
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub category: Option<String>,
    /// Preparation steps.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub instructions: Option<String>,
    /// Cooking time in minutes.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub cooking_time_minutes: Option<u32>,
    /// Average review rating.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub rating: Option<f32>,
    /// Number of reviews behind `rating`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub review_count: u32,
    /// Stored image reference. Resolving it to bytes is the caller's job.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image: Option<String>,
}

impl RecipeDetails {
    /// Construct details carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// A catalog entry.
///
/// # Examples
/// ```
/// use larder_core::{FeatureSet, Item, ItemId, RecipeDetails};
///
/// let item = Item::new(
///     "pancakes",
///     FeatureSet::new(["flour", "egg", "milk"]),
///     RecipeDetails::titled("Pancakes"),
/// );
/// assert_eq!(item.id, ItemId::from("pancakes"));
/// assert_eq!(item.features.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: ItemId,
    /// Features compared during ranking.
    #[cfg_attr(feature = "serde", serde(rename = "ingredients", alias = "features"))]
    pub features: FeatureSet,
    /// Pass-through payload.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub details: RecipeDetails,
}

impl Item {
    /// Construct an item from its parts.
    pub fn new(id: impl Into<ItemId>, features: FeatureSet, details: RecipeDetails) -> Self {
        Self {
            id: id.into(),
            features,
            details,
        }
    }

    /// Construct an item whose payload is just a title.
    pub fn titled<I, S>(id: impl Into<ItemId>, title: impl Into<String>, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(id, FeatureSet::new(features), RecipeDetails::titled(title))
    }
}
