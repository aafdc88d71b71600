//! Report what the bebe patch would do to the brand module.

use anyhow::{Context as _, Result};
use brand_catalog::bebe;
use brand_catalog::source::SourceFile;

use super::CheckArgs;
use crate::context::Context;
use crate::output::{format_bytes, status_badge};

/// Run the check command.
pub fn run(args: CheckArgs, ctx: &Context) -> Result<()> {
    let path = ctx.source_path(args.file.as_deref());
    let source = SourceFile::load(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let patch = bebe::patch()?;
    let status = patch.inspect(source.content(), &ctx.config.patch_options()?)?;

    if ctx.output.is_json() {
        ctx.output.json(&status);
        return Ok(());
    }

    ctx.output.header(&format!("Checking {}", path.display()));
    ctx.output.kv("size", &format_bytes(source.content().len() as u64));

    let overall = if status.already_applied.is_some() {
        "applied"
    } else if status.is_applicable() {
        "ready"
    } else {
        "blocked"
    };
    ctx.output.kv("status", &status_badge(overall));

    let anchor = if status.anchor_matched { "matched" } else { "missing" };
    ctx.output.kv(
        "anchor",
        &format!("{} ({}: {})", status_badge(anchor), patch.anchor.title, patch.anchor.model),
    );
    if let Some(ref id) = status.already_applied {
        ctx.output.kv("present", id);
    }

    ctx.output.info("");
    ctx.output.info("Metadata rewrites:");
    for rw in &status.rewrites {
        ctx.output.list_item(&format!(
            "{}: {} -> {} ({} occurrence(s))",
            rw.key, rw.from, rw.to, rw.replaced
        ));
    }

    Ok(())
}
