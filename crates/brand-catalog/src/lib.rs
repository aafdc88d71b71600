//! Typed catalog records and text patches for the storefront brand database.
//!
//! The brand database is a TypeScript module (`src/data/brands.ts`) with
//! hardcoded product literals. This crate does not parse TypeScript. It models
//! the records it writes, renders them as the literal text the module uses, and
//! splices them in by pattern:
//!
//! - **Catalog**: products, images, categories, prices
//! - **Slug**: the storefront's `generateSlug` helper, for previews and checks
//! - **Anchor**: the insertion point after a known product entry
//! - **Metadata**: typed rewrites of the brand summary fields
//! - **Patch**: a validated patch set and its outcome report
//! - **Source**: reading and rewriting the module on disk
//!
//! # Example
//!
//! ```rust,ignore
//! use brand_catalog::prelude::*;
//!
//! let patch = brand_catalog::bebe::patch()?;
//! let outcome = apply_to_file("src/data/brands.ts", &patch, &PatchOptions::default(), WriteMode::Write)?;
//! println!("inserted {} products", outcome.inserted);
//! ```

pub mod error;
pub mod ids;
pub mod literal;
pub mod money;
pub mod slug;

pub mod anchor;
pub mod bebe;
pub mod catalog;
pub mod metadata;
pub mod patch;
pub mod source;

pub use error::CatalogError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    pub use crate::anchor::Anchor;
    pub use crate::catalog::{CatalogProduct, Category, ProductImage};
    pub use crate::metadata::{MetadataRewrite, MetadataValue, RewriteReport};
    pub use crate::patch::{CatalogPatch, PatchOptions, PatchOutcome, PatchStatus};
    pub use crate::slug::generate_slug;
    pub use crate::source::{apply_to_file, SourceFile, WriteMode};
}
