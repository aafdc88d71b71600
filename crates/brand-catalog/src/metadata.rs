//! Brand summary rewrites.
//!
//! A brand's `metadata` block carries a product count, an average price and an
//! update timestamp. Rewrites replace a known old literal with a new one
//! everywhere `<key>: <old>` appears.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::error::CatalogError;
use crate::literal::quote;
use crate::money::Money;
use crate::Result;

/// Metadata key for the product count.
pub const TOTAL_PRODUCTS: &str = "totalProducts";
/// Metadata key for the average price.
pub const AVERAGE_PRICE: &str = "averagePrice";
/// Metadata key for the update timestamp.
pub const UPDATED_AT: &str = "updatedAt";

/// A typed metadata value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataValue {
    /// Integer count, written bare (`15`).
    Count(u32),
    /// Money amount, written bare with two decimals (`88.53`).
    Amount(Money),
    /// UTC timestamp, written quoted (`'2025-01-05T00:30:00Z'`). Sub-second
    /// digits are written only when present.
    Timestamp(DateTime<Utc>),
}

impl MetadataValue {
    /// Parse an RFC 3339 timestamp.
    pub fn timestamp(text: &str) -> Result<Self> {
        let parsed = DateTime::parse_from_rfc3339(text)
            .map_err(|_| CatalogError::InvalidTimestamp(text.to_string()))?;
        Ok(MetadataValue::Timestamp(parsed.with_timezone(&Utc)))
    }

    /// Render as it appears in the module.
    pub fn to_literal(&self) -> String {
        match self {
            MetadataValue::Count(n) => n.to_string(),
            MetadataValue::Amount(m) => m.display_amount(),
            MetadataValue::Timestamp(ts) => quote(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

/// Replace one metadata value with another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRewrite {
    /// Property name inside the `metadata` block.
    pub key: String,
    /// Value currently in the module.
    pub from: MetadataValue,
    /// Value to write.
    pub to: MetadataValue,
}

/// What a single rewrite did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteReport {
    pub key: String,
    pub from: String,
    pub to: String,
    /// Number of occurrences replaced.
    pub replaced: usize,
}

impl MetadataRewrite {
    pub fn new(key: impl Into<String>, from: MetadataValue, to: MetadataValue) -> Self {
        Self {
            key: key.into(),
            from,
            to,
        }
    }

    /// Regex source. The old literal must not continue as a longer number, so
    /// `totalProducts: 3` does not match inside `totalProducts: 30`.
    fn pattern(&self) -> String {
        format!(
            r"\b{}:(\s*){}([^0-9.]|$)",
            regex::escape(&self.key),
            regex::escape(&self.from.to_literal()),
        )
    }

    /// Count the occurrences this rewrite would replace.
    pub fn count(&self, source: &str) -> Result<usize> {
        let re = Regex::new(&self.pattern())?;
        Ok(re.find_iter(source).count())
    }

    /// Apply the rewrite to every occurrence.
    pub fn apply(&self, source: &str) -> Result<(String, RewriteReport)> {
        let re = Regex::new(&self.pattern())?;
        let to = self.to.to_literal();
        let mut replaced = 0;

        let out = re
            .replace_all(source, |caps: &Captures<'_>| {
                replaced += 1;
                format!("{}:{}{}{}", self.key, &caps[1], to, &caps[2])
            })
            .into_owned();

        debug!(key = %self.key, from = %self.from, to = %self.to, replaced, "metadata rewrite");
        Ok((out, self.report(replaced)))
    }

    pub(crate) fn report(&self, replaced: usize) -> RewriteReport {
        RewriteReport {
            key: self.key.clone(),
            from: self.from.to_literal(),
            to: self.to.to_literal(),
            replaced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_value_literals() {
        assert_eq!(MetadataValue::Count(15).to_literal(), "15");
        assert_eq!(
            MetadataValue::Amount(Money::new(8853, Currency::USD)).to_literal(),
            "88.53"
        );
        assert_eq!(
            MetadataValue::timestamp("2025-01-05T00:30:00Z").unwrap().to_literal(),
            "'2025-01-05T00:30:00Z'"
        );
    }

    #[test]
    fn test_timestamp_normalized_to_utc() {
        let v = MetadataValue::timestamp("2025-01-05T02:30:00+02:00").unwrap();
        assert_eq!(v.to_literal(), "'2025-01-05T00:30:00Z'");
    }

    #[test]
    fn test_timestamp_keeps_fraction() {
        let v = MetadataValue::timestamp("2025-01-05T00:30:00.750Z").unwrap();
        assert_eq!(v.to_literal(), "'2025-01-05T00:30:00.750Z'");

        let v = MetadataValue::timestamp("2025-01-05T00:30:00.000Z").unwrap();
        assert_eq!(v.to_literal(), "'2025-01-05T00:30:00Z'");
    }

    #[test]
    fn test_invalid_timestamp() {
        assert!(matches!(
            MetadataValue::timestamp("yesterday"),
            Err(CatalogError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_count_rewrite() {
        let rw = MetadataRewrite::new(TOTAL_PRODUCTS, MetadataValue::Count(3), MetadataValue::Count(15));
        let (out, report) = rw.apply("metadata: {\n  totalProducts: 3,\n}").unwrap();
        assert_eq!(out, "metadata: {\n  totalProducts: 15,\n}");
        assert_eq!(report.replaced, 1);
    }

    #[test]
    fn test_rewrite_ignores_longer_numbers() {
        let rw = MetadataRewrite::new(TOTAL_PRODUCTS, MetadataValue::Count(3), MetadataValue::Count(15));
        let source = "totalProducts: 30,\ntotalProducts: 3.5,\ntotalProducts: 3";
        let (out, report) = rw.apply(source).unwrap();
        assert_eq!(out, "totalProducts: 30,\ntotalProducts: 3.5,\ntotalProducts: 15");
        assert_eq!(report.replaced, 1);
    }

    #[test]
    fn test_rewrite_requires_whole_key() {
        let rw = MetadataRewrite::new(TOTAL_PRODUCTS, MetadataValue::Count(3), MetadataValue::Count(15));
        assert_eq!(rw.count("subtotalProducts: 3,").unwrap(), 0);
    }

    #[test]
    fn test_rewrite_replaces_every_occurrence() {
        let rw = MetadataRewrite::new(
            UPDATED_AT,
            MetadataValue::timestamp("2025-01-04T15:30:00Z").unwrap(),
            MetadataValue::timestamp("2025-01-05T00:30:00Z").unwrap(),
        );
        let source = "updatedAt: '2025-01-04T15:30:00Z',\nupdatedAt:'2025-01-04T15:30:00Z'\n";
        let (out, report) = rw.apply(source).unwrap();
        assert_eq!(out, "updatedAt: '2025-01-05T00:30:00Z',\nupdatedAt:'2025-01-05T00:30:00Z'\n");
        assert_eq!(report.replaced, 2);
        assert_eq!(report.to, "'2025-01-05T00:30:00Z'");
    }

    #[test]
    fn test_no_occurrence_leaves_text() {
        let rw = MetadataRewrite::new(
            AVERAGE_PRICE,
            MetadataValue::Amount(Money::new(14467, Currency::USD)),
            MetadataValue::Amount(Money::new(8853, Currency::USD)),
        );
        let (out, report) = rw.apply("averagePrice: 0,").unwrap();
        assert_eq!(out, "averagePrice: 0,");
        assert_eq!(report.replaced, 0);
    }
}
