//! URL slugs for catalog products.
//!
//! Mirrors the storefront's `generateSlug(title, model)` helper so the slug a
//! rendered entry will get at runtime can be previewed and checked for
//! collisions before the module is rewritten.

use chrono::Utc;

/// Maximum slug length before truncation at a word boundary.
pub const MAX_SLUG_LEN: usize = 100;

/// Generate the storefront slug for a product title and model.
///
/// ```
/// use brand_catalog::slug::generate_slug;
/// assert_eq!(generate_slug("Off-Shoulder Top", "Dusty Rose"), "off_shoulder_top_dusty_rose");
/// ```
pub fn generate_slug(title: &str, model: &str) -> String {
    let combined = format!("{} {}", title, model).to_lowercase();

    // Runs of whitespace and hyphens collapse into one separator. Underscores
    // are stripped with the other punctuation, so they never reach this loop.
    let mut slug = String::with_capacity(combined.len());
    let mut pending_sep = false;
    for c in combined.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c);
        } else if is_js_whitespace(c) || c == '-' {
            pending_sep = true;
        }
    }

    if slug.is_empty() {
        return format!("product_{}", Utc::now().timestamp_millis());
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        if let Some(cut) = slug.rfind('_') {
            slug.truncate(cut);
        }
    }

    slug
}

/// Membership in the JavaScript `\s` class. Unicode `White_Space` differs by
/// U+0085, which `\s` excludes, and U+FEFF, which it includes.
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{feff}' => true,
        c => c.is_whitespace(),
    }
}
