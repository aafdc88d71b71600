//! List the products in the bebe batch.

use anyhow::Result;
use brand_catalog::bebe;
use brand_catalog::catalog::CatalogProduct;
use serde::Serialize;

use super::ListArgs;
use crate::context::Context;

#[derive(Debug, Serialize)]
struct ProductRow {
    id: String,
    title: String,
    model: String,
    price: String,
    tag: Option<String>,
    slug: String,
}

impl From<&CatalogProduct> for ProductRow {
    fn from(p: &CatalogProduct) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title.clone(),
            model: p.model.clone(),
            price: p.price.display(),
            tag: p.tag.clone(),
            slug: p.slug(),
        }
    }
}

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let patch = bebe::patch()?;

    let rows: Vec<ProductRow> = patch
        .products
        .iter()
        .filter(|p| match args.tag {
            Some(ref tag) => p.tag.as_deref().is_some_and(|t| t.eq_ignore_ascii_case(tag)),
            None => true,
        })
        .map(ProductRow::from)
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header(&format!("{} batch", patch.brand));

    if rows.is_empty() {
        ctx.output.info("No matching products.");
        return Ok(());
    }

    let widths = [9, 28, 11, 6, 11, 36];
    ctx.output
        .table_row(&["ID", "TITLE", "MODEL", "PRICE", "TAG", "SLUG"], &widths);
    ctx.output.info(&"-".repeat(110));

    for row in &rows {
        ctx.output.table_row(
            &[
                &row.id,
                &row.title,
                &row.model,
                &row.price,
                row.tag.as_deref().unwrap_or("-"),
                &row.slug,
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", rows.len()));
    if args.tag.is_none() {
        if let (Some(total), Some(avg)) = (patch.batch_total(), patch.batch_average()) {
            ctx.output.kv("batch value", &total.display());
            ctx.output.kv("batch average", &avg.display());
        }
    }

    Ok(())
}
