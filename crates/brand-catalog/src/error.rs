//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or applying a catalog patch.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading or writing the catalog module failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The insertion anchor was not found in the source text.
    #[error("Anchor entry not found: {title} ({model})")]
    AnchorNotFound { title: String, model: String },

    /// A product from the batch is already present in the source.
    #[error("Patch already applied: product {0} is present")]
    AlreadyApplied(String),

    /// Two products in the batch share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// Two products in the batch generate the same slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    /// A product has no images.
    #[error("Product {0} has no images")]
    MissingImages(String),

    /// A price literal could not be parsed.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// A timestamp could not be parsed as RFC 3339.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A generated pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl CatalogError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}
