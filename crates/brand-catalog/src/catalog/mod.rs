//! Product catalog module.
//!
//! Contains the product records the brand module holds and their literal
//! rendering.

mod category;
mod product;

pub use category::Category;
pub use product::{CatalogProduct, ProductImage};
