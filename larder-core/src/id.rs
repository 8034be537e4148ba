//! Opaque identifiers for catalog items and users.
//!
//! Identifiers are compared as exact strings. The engine never parses them;
//! upstream stores are free to use document ids, UUIDs, or integers rendered
//! as text.

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Borrow the raw identifier.
            #[must_use]
            pub const fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a catalog item.
    ///
    /// # Examples
    /// ```
    /// use larder_core::ItemId;
    ///
    /// let id = ItemId::from("65f0c0ffee");
    /// assert_eq!(id.as_str(), "65f0c0ffee");
    /// assert_eq!(id.to_string(), "65f0c0ffee");
    /// ```
    ItemId
);

opaque_id!(
    /// Identifier of a user whose saved items drive recommendations.
    UserId
);
