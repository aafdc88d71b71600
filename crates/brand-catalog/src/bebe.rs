//! The bebe batch: twelve fashion products added after the
//! "3D Floral Strapless Gown", with the brand summary updated to match.

use crate::anchor::Anchor;
use crate::catalog::{CatalogProduct, Category};
use crate::ids::ProductId;
use crate::metadata::{MetadataRewrite, MetadataValue, AVERAGE_PRICE, TOTAL_PRODUCTS, UPDATED_AT};
use crate::money::{Currency, Money};
use crate::patch::CatalogPatch;
use crate::Result;

/// Brand key in the brand database.
pub const BRAND: &str = "bebe";

/// Default location of the brand module, relative to the storefront root.
pub const DEFAULT_SOURCE_PATH: &str = "src/data/brands.ts";

/// Message printed after a successful run.
pub const SUCCESS_MESSAGE: &str = "Successfully added 12 new products to Bebe brand!";

const IMAGE_HOST: &str = "https://ext.same-assets.com/2255372474";

fn product(seq: u32, title: &str, model: &str, dollars: i64, image: &str) -> CatalogProduct {
    CatalogProduct::new(
        ProductId::for_brand(BRAND, seq),
        title,
        model,
        Money::whole(dollars, Currency::USD),
    )
    .with_image(format!("{}/{}.jpeg", IMAGE_HOST, image))
}

/// The twelve new products, `bebe-4` through `bebe-15`.
pub fn products() -> Vec<CatalogProduct> {
    vec![
        product(4, "Bodycon Midi Dress", "Navy", 88, "1984562811").with_tag("BESTSELLER"),
        product(5, "Ribbed Bodysuit", "White", 45, "2748593621").with_tag("NEW"),
        product(6, "Blazer Dress", "Black", 128, "3951847293").with_tag("TRENDING"),
        product(7, "High-Waisted Wide Leg Pants", "Camel", 78, "1829647382"),
        product(8, "Cutout Maxi Dress", "Burgundy", 148, "4528194756").with_tag("FORMAL"),
        product(9, "Cropped Blazer", "Ivory", 98, "2837591840"),
        product(10, "Mesh Insert Bodysuit", "Black", 58, "3785629047").with_tag("SEXY"),
        product(11, "Wrap Front Mini Dress", "Emerald", 92, "1682493758").with_tag("NEW"),
        product(12, "High-Neck Sweater", "Cream", 68, "2946857321"),
        product(13, "Pleated Mini Skirt", "Black", 52, "4193875046").with_tag("TRENDING"),
        product(14, "Off-Shoulder Top", "Dusty Rose", 42, "3657829142"),
        product(15, "Statement Earrings", "Gold", 32, "2158947362").with_tag("ACCESSORY"),
    ]
}

/// The last existing bebe entry.
pub fn anchor() -> Anchor {
    Anchor::new("3D Floral Strapless Gown", "Black", Category::Fashion)
}

/// Summary updates: 3 -> 15 products, 144.67 -> 88.53 average, new timestamp.
pub fn rewrites() -> Result<Vec<MetadataRewrite>> {
    Ok(vec![
        MetadataRewrite::new(TOTAL_PRODUCTS, MetadataValue::Count(3), MetadataValue::Count(15)),
        MetadataRewrite::new(
            AVERAGE_PRICE,
            MetadataValue::Amount(Money::new(144_67, Currency::USD)),
            MetadataValue::Amount(Money::new(88_53, Currency::USD)),
        ),
        MetadataRewrite::new(
            UPDATED_AT,
            MetadataValue::timestamp("2025-01-04T15:30:00Z")?,
            MetadataValue::timestamp("2025-01-05T00:30:00Z")?,
        ),
    ])
}

/// The full bebe patch set.
pub fn patch() -> Result<CatalogPatch> {
    Ok(CatalogPatch {
        brand: BRAND.to_string(),
        anchor: anchor(),
        products: products(),
        rewrites: rewrites()?,
    })
}
