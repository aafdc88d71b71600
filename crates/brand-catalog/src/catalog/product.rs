//! Product records and their literal form.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::literal::{indent, quote};
use crate::money::Money;
use crate::slug::generate_slug;

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text.
    pub alt: String,
}

impl ProductImage {
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }

    fn to_literal(&self) -> String {
        format!("{{ url: {}, alt: {} }}", quote(&self.url), quote(&self.alt))
    }
}

/// A product entry in a brand's `products` array.
///
/// The slug is not stored: the module computes it with
/// `generateSlug(title, model)`, and [`CatalogProduct::slug`] previews the
/// value that call will produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Brand-scoped identifier (e.g., `bebe-4`).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Variant or colorway.
    pub model: String,
    /// Listed price.
    pub price: Money,
    /// Product images, in display order.
    pub images: Vec<ProductImage>,
    /// Optional promotional tag (e.g., `NEW`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Storefront category.
    pub category: Category,
}

impl CatalogProduct {
    /// Create a new fashion product with no images or tag.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        model: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            model: model.into(),
            price,
            images: Vec::new(),
            tag: None,
            category: Category::Fashion,
        }
    }

    /// Add an image with the catalog's default alt text, `<title> in <model>`.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        let alt = format!("{} in {}", self.title, self.model);
        self.images.push(ProductImage::new(url, alt));
        self
    }

    /// Set the promotional tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Preview the slug the storefront will generate for this product.
    pub fn slug(&self) -> String {
        generate_slug(&self.title, &self.model)
    }

    /// The `generateSlug(...)` call expression written into the module.
    pub fn slug_expr(&self) -> String {
        format!("generateSlug({}, {})", quote(&self.title), quote(&self.model))
    }

    /// The `id: '<id>'` property as it appears in the module.
    pub fn id_property(&self) -> String {
        format!("id: {}", quote(self.id.as_str()))
    }

    /// Render the object literal, with its braces at `depth` indentation levels.
    pub fn to_literal(&self, depth: usize) -> String {
        let outer = indent(depth);
        let inner = indent(depth + 1);
        let item = indent(depth + 2);

        let mut fields = vec![
            self.id_property(),
            format!("title: {}", quote(&self.title)),
            format!("model: {}", quote(&self.model)),
            format!("price: {}", quote(&self.price.display())),
        ];

        let images: Vec<String> = self
            .images
            .iter()
            .map(|img| format!("{}{}", item, img.to_literal()))
            .collect();
        fields.push(format!("images: [\n{}\n{}]", images.join(",\n"), inner));

        if let Some(ref tag) = self.tag {
            fields.push(format!("tag: {}", quote(tag)));
        }
        fields.push(format!("slug: {}", self.slug_expr()));
        fields.push(format!("category: {}", quote(self.category.as_str())));

        let body: Vec<String> = fields.iter().map(|f| format!("{}{}", inner, f)).collect();
        format!("{}{{\n{}\n{}}}", outer, body.join(",\n"), outer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use pretty_assertions::assert_eq;

    fn dress() -> CatalogProduct {
        CatalogProduct::new("bebe-4", "Bodycon Midi Dress", "Navy", Money::whole(88, Currency::USD))
            .with_image("https://ext.same-assets.com/2255372474/1984562811.jpeg")
            .with_tag("BESTSELLER")
    }

    #[test]
    fn test_default_alt_text() {
        assert_eq!(dress().images[0].alt, "Bodycon Midi Dress in Navy");
    }

    #[test]
    fn test_literal_layout() {
        let expected = "      {
        id: 'bebe-4',
        title: 'Bodycon Midi Dress',
        model: 'Navy',
        price: '$88',
        images: [
          { url: 'https://ext.same-assets.com/2255372474/1984562811.jpeg', alt: 'Bodycon Midi Dress in Navy' }
        ],
        tag: 'BESTSELLER',
        slug: generateSlug('Bodycon Midi Dress', 'Navy'),
        category: 'fashion'
      }";
        assert_eq!(dress().to_literal(3), expected);
    }

    #[test]
    fn test_literal_without_tag() {
        let mut p = dress();
        p.tag = None;
        let literal = p.to_literal(3);
        assert!(!literal.contains("tag:"));
        assert!(literal.contains("],\n        slug: generateSlug"));
    }

    #[test]
    fn test_literal_escapes_quotes() {
        let p = CatalogProduct::new("x-1", "Levi's 501", "Blue", Money::whole(70, Currency::USD))
            .with_image("https://example.com/a.jpg");
        let literal = p.to_literal(0);
        assert!(literal.contains(r"title: 'Levi\'s 501'"));
        assert!(literal.contains(r"slug: generateSlug('Levi\'s 501', 'Blue')"));
    }

    #[test]
    fn test_slug_preview() {
        assert_eq!(dress().slug(), "bodycon_midi_dress_navy");
    }
}
