//! Apply the bebe batch to the brand module.

use anyhow::{Context as _, Result};
use brand_catalog::bebe::{self, SUCCESS_MESSAGE};
use brand_catalog::patch::PatchOptions;
use brand_catalog::source::{apply_to_file, WriteMode};
use dialoguer::Confirm;

use super::ApplyArgs;
use crate::config::parse_timestamp;
use crate::context::Context;

/// Run the apply command.
pub fn run(args: ApplyArgs, ctx: &Context) -> Result<()> {
    let path = ctx.source_path(args.file.as_deref());
    let options = patch_options(&args, ctx)?;
    let mode = write_mode(&args, ctx);
    let patch = bebe::patch()?;

    ctx.output.header(&format!("Patching {} catalog", patch.brand));
    ctx.output.kv("source", &path.display().to_string());
    ctx.output.kv("products", &patch.products.len().to_string());
    ctx.output.debug(&format!("write mode: {:?}", mode));

    if needs_confirmation(&args, mode, console::user_attended()) {
        let confirmed = Confirm::new()
            .with_prompt(format!("Rewrite {}?", path.display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Patch cancelled");
            return Ok(());
        }
    }

    let outcome = apply_to_file(&path, &patch, &options, mode)
        .with_context(|| format!("Failed to patch {}", path.display()))?;

    if ctx.output.is_json() {
        ctx.output.json(&outcome);
        return Ok(());
    }

    if !outcome.anchor_matched {
        ctx.output.warn(&format!(
            "Anchor '{} ({})' not found, no products inserted",
            patch.anchor.title, patch.anchor.model
        ));
    }
    for rw in &outcome.rewrites {
        ctx.output.kv(
            &rw.key,
            &format!("{} -> {} ({} replaced)", rw.from, rw.to, rw.replaced),
        );
        if rw.replaced == 0 {
            ctx.output.warn(&format!("{} value {} not found", rw.key, rw.from));
        }
    }

    match mode {
        WriteMode::DryRun => ctx.output.info("Dry run: nothing written"),
        _ if outcome.is_noop() => ctx.output.info("Nothing to change"),
        _ if outcome.anchor_matched => ctx.output.success(SUCCESS_MESSAGE),
        _ => ctx.output.success("Updated brand metadata only"),
    }

    Ok(())
}

/// Config values, overridden by flags.
fn patch_options(args: &ApplyArgs, ctx: &Context) -> Result<PatchOptions> {
    let mut options = ctx.config.patch_options()?;
    if args.allow_missing_anchor {
        options.require_anchor = false;
    }
    if let Some(ref ts) = args.updated_at {
        options.updated_at = Some(parse_timestamp(ts)?);
    }
    Ok(options)
}

/// Writes ask first unless `--yes` is given or nobody is there to answer.
/// The prompt goes to stderr, so `--json` output is unaffected.
fn needs_confirmation(args: &ApplyArgs, mode: WriteMode, interactive: bool) -> bool {
    !args.yes && mode != WriteMode::DryRun && interactive
}

fn write_mode(args: &ApplyArgs, ctx: &Context) -> WriteMode {
    if args.dry_run {
        WriteMode::DryRun
    } else if args.backup || ctx.config.patch.backup {
        WriteMode::WriteWithBackup
    } else {
        WriteMode::Write
    }
}
