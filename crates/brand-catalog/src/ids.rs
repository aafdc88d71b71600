//! Newtype IDs for catalog records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A catalog identifier, stored exactly as it appears in the module.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);

impl ProductId {
    /// Build a brand-scoped id such as `bebe-4`.
    pub fn for_brand(brand: &str, seq: u32) -> Self {
        Self(format!("{}-{}", brand, seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("bebe-4");
        assert_eq!(id.as_str(), "bebe-4");
        assert_eq!(id.to_string(), "bebe-4");
    }

    #[test]
    fn test_brand_scoped_id() {
        assert_eq!(ProductId::for_brand("bebe", 15), ProductId::from("bebe-15"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProductId::new("bebe-7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"bebe-7\"");
    }
}
