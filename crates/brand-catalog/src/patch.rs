//! Patch sets: a product batch, its anchor and the metadata rewrites that go
//! with it.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::anchor::Anchor;
use crate::catalog::CatalogProduct;
use crate::error::CatalogError;
use crate::metadata::{MetadataRewrite, MetadataValue, RewriteReport, UPDATED_AT};
use crate::money::{Currency, Money};
use crate::Result;

/// Indentation depth of entries inside a brand's `products` array.
const ENTRY_DEPTH: usize = 3;

/// Options controlling how a patch is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    /// Fail when the anchor is missing instead of skipping the insertion.
    pub require_anchor: bool,
    /// Replacement target for the `updatedAt` rewrite.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for PatchOptions {
    fn default() -> Self {
        Self {
            require_anchor: true,
            updated_at: None,
        }
    }
}

/// Result of applying a patch to source text.
#[derive(Debug, Clone, Serialize)]
pub struct PatchOutcome {
    /// The rewritten text.
    #[serde(skip)]
    pub content: String,
    /// Whether the anchor matched and the batch was inserted.
    pub anchor_matched: bool,
    /// Number of product entries inserted.
    pub inserted: usize,
    /// Per-rewrite results, in patch order.
    pub rewrites: Vec<RewriteReport>,
}

impl PatchOutcome {
    /// Whether the patch changed anything.
    pub fn is_noop(&self) -> bool {
        self.inserted == 0 && self.rewrites.iter().all(|r| r.replaced == 0)
    }
}

/// What a patch would do to a source, without changing it.
#[derive(Debug, Clone, Serialize)]
pub struct PatchStatus {
    /// Whether the anchor matches.
    pub anchor_matched: bool,
    /// First batch id already present in the source, if any.
    pub already_applied: Option<String>,
    /// Occurrences each rewrite would replace.
    pub rewrites: Vec<RewriteReport>,
}

impl PatchStatus {
    /// Whether applying with default options would succeed.
    pub fn is_applicable(&self) -> bool {
        self.anchor_matched && self.already_applied.is_none()
    }
}

/// A product batch with its insertion anchor and metadata rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPatch {
    /// Brand the batch belongs to.
    pub brand: String,
    /// Entry the batch is inserted after.
    pub anchor: Anchor,
    /// Products to insert, in order.
    pub products: Vec<CatalogProduct>,
    /// Metadata rewrites applied after the insertion.
    pub rewrites: Vec<MetadataRewrite>,
}

impl CatalogPatch {
    /// Check the batch on its own: unique ids, unique slugs, images present.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();

        for product in &self.products {
            if !ids.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.to_string()));
            }
            let slug = product.slug();
            if !slugs.insert(slug.clone()) {
                return Err(CatalogError::DuplicateSlug(slug));
            }
            if product.images.is_empty() {
                return Err(CatalogError::MissingImages(product.id.to_string()));
            }
        }
        Ok(())
    }

    /// First product of the batch whose id already appears in `source`.
    pub fn already_applied<'a>(&'a self, source: &str) -> Option<&'a CatalogProduct> {
        self.products
            .iter()
            .find(|p| source.contains(&p.id_property()))
    }

    /// Render the batch as array entries, joined with `,\n` and without a
    /// trailing comma.
    pub fn render_block(&self) -> String {
        self.products
            .iter()
            .map(|p| p.to_literal(ENTRY_DEPTH))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    /// Sum of the batch prices.
    pub fn batch_total(&self) -> Option<Money> {
        Money::sum(self.products.iter().map(|p| &p.price), self.currency())
    }

    /// Mean of the batch prices.
    pub fn batch_average(&self) -> Option<Money> {
        Money::mean(self.products.iter().map(|p| &p.price), self.currency())
    }

    fn currency(&self) -> Currency {
        self.products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }

    /// Rewrites with option overrides applied.
    fn effective_rewrites(&self, options: &PatchOptions) -> Vec<MetadataRewrite> {
        self.rewrites
            .iter()
            .map(|rw| match options.updated_at {
                Some(ts) if rw.key == UPDATED_AT => {
                    MetadataRewrite::new(rw.key.clone(), rw.from, MetadataValue::Timestamp(ts))
                }
                _ => rw.clone(),
            })
            .collect()
    }

    /// Report what applying would do, without failing on a missing anchor or
    /// an applied batch.
    pub fn inspect(&self, source: &str, options: &PatchOptions) -> Result<PatchStatus> {
        self.validate()?;

        let rewrites = self
            .effective_rewrites(options)
            .iter()
            .map(|rw| -> Result<RewriteReport> { Ok(rw.report(rw.count(source)?)) })
            .collect::<Result<Vec<_>>>()?;

        Ok(PatchStatus {
            anchor_matched: self.anchor.is_match(source)?,
            already_applied: self.already_applied(source).map(|p| p.id.to_string()),
            rewrites,
        })
    }

    /// Apply the patch to `source`.
    ///
    /// Fails with [`CatalogError::AlreadyApplied`] when any batch id is already
    /// present. A missing anchor fails with [`CatalogError::AnchorNotFound`]
    /// unless `require_anchor` is cleared, in which case the insertion is
    /// skipped and the rewrites still run.
    pub fn apply(&self, source: &str, options: &PatchOptions) -> Result<PatchOutcome> {
        self.validate()?;

        if let Some(existing) = self.already_applied(source) {
            return Err(CatalogError::AlreadyApplied(existing.id.to_string()));
        }

        let block = self.render_block();
        let (mut content, anchor_matched) = match self.anchor.splice(source, &block)? {
            Some(spliced) => (spliced, true),
            None if options.require_anchor => {
                return Err(CatalogError::AnchorNotFound {
                    title: self.anchor.title.clone(),
                    model: self.anchor.model.clone(),
                });
            }
            None => {
                warn!(
                    brand = %self.brand,
                    anchor = %self.anchor.title,
                    "anchor not found, skipping product insertion"
                );
                (source.to_string(), false)
            }
        };
        let inserted = if anchor_matched { self.products.len() } else { 0 };

        let mut rewrites = Vec::with_capacity(self.rewrites.len());
        for rw in self.effective_rewrites(options) {
            let (next, report) = rw.apply(&content)?;
            if report.replaced == 0 {
                debug!(key = %report.key, from = %report.from, "metadata value not present");
            }
            content = next;
            rewrites.push(report);
        }

        info!(brand = %self.brand, inserted, "catalog patch applied");
        Ok(PatchOutcome {
            content,
            anchor_matched,
            inserted,
            rewrites,
        })
    }
}
