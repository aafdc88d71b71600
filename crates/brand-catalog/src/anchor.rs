//! Insertion anchor for new product entries.
//!
//! New entries go after a known product: the anchor matches the tail of that
//! entry (its `slug` and `category` properties and closing brace) when it is
//! the last element of the `products` array, followed by the array terminator
//! and the brand's `metadata:` key.

use regex::Regex;
use tracing::debug;

use crate::catalog::Category;
use crate::literal::{indent, quote};
use crate::Result;

/// The product entry new records are inserted after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Title of the anchor product.
    pub title: String,
    /// Model of the anchor product.
    pub model: String,
    /// Category of the anchor product.
    pub category: Category,
}

impl Anchor {
    pub fn new(title: impl Into<String>, model: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            model: model.into(),
            category,
        }
    }

    /// Regex source. Group 1 is the anchor entry's tail, group 2 the array
    /// terminator through `metadata:`.
    pub fn pattern(&self) -> String {
        format!(
            r"(?s)(slug: generateSlug\({}, {}\),\s*category: {}\s*\}})\s*(\]\s*,\s*metadata:)",
            regex::escape(&quote(&self.title)),
            regex::escape(&quote(&self.model)),
            regex::escape(&quote(self.category.as_str())),
        )
    }

    /// Compile the anchor pattern.
    pub fn regex(&self) -> Result<Regex> {
        Ok(Regex::new(&self.pattern())?)
    }

    /// Whether the anchor matches `source`.
    pub fn is_match(&self, source: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(source))
    }

    /// Insert `block` after the anchor entry.
    ///
    /// `block` holds already-rendered entries without a trailing comma. Returns
    /// `None` when the anchor does not match. Only the first match is used.
    pub fn splice(&self, source: &str, block: &str) -> Result<Option<String>> {
        let re = self.regex()?;
        let Some(caps) = re.captures(source) else {
            debug!(title = %self.title, model = %self.model, "anchor not matched");
            return Ok(None);
        };

        // Groups always participate when the whole pattern matched.
        let (Some(span), Some(entry_tail), Some(terminator)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            return Ok(None);
        };
        debug!(offset = span.start(), len = span.len(), "anchor matched");

        let mut out = String::with_capacity(source.len() + block.len() + 8);
        out.push_str(&source[..span.start()]);
        out.push_str(entry_tail.as_str());
        out.push_str(",\n");
        out.push_str(block);
        out.push('\n');
        out.push_str(&indent(2));
        out.push_str(terminator.as_str());
        out.push_str(&source[span.end()..]);
        Ok(Some(out))
    }
}
