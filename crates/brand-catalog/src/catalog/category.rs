//! Storefront categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a product is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Fashion,
    Watches,
    Fitness,
    Beauty,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fashion => "fashion",
            Category::Watches => "watches",
            Category::Fitness => "fitness",
            Category::Beauty => "beauty",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
