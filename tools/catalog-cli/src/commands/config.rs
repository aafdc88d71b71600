//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, parse_timestamp, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[source]");
    ctx.output.kv("path", &ctx.config.source.path);

    ctx.output.info("");
    ctx.output.info("[patch]");
    ctx.output
        .kv("require_anchor", &ctx.config.patch.require_anchor.to_string());
    ctx.output.kv("backup", &ctx.config.patch.backup.to_string());
    if let Some(ref ts) = ctx.config.patch.updated_at {
        ctx.output.kv("updated_at", ts);
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = find_config_file(ctx)?;
    let config_path = config_path.to_string_lossy().to_string();

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.source.path.is_empty() {
        errors.push("source.path is required".to_string());
    } else {
        let path = ctx.resolve_path(&ctx.config.source.path);
        if !path.exists() {
            warnings.push(format!("source.path '{}' does not exist", path.display()));
        } else if path.extension().map_or(true, |e| e != "ts") {
            warnings.push(format!(
                "source.path '{}' is not a TypeScript module",
                ctx.config.source.path
            ));
        }
    }

    if let Some(ref ts) = ctx.config.patch.updated_at {
        if let Err(e) = parse_timestamp(ts) {
            errors.push(format!("patch.updated_at: {:#}", e));
        }
    }

    if !ctx.config.patch.require_anchor {
        warnings.push(
            "patch.require_anchor is false: a missing anchor only updates metadata".to_string(),
        );
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["source", "path"] => Ok(format!("\"{}\"", config.source.path)),
        ["patch", "require_anchor"] => Ok(config.patch.require_anchor.to_string()),
        ["patch", "backup"] => Ok(config.patch.backup.to_string()),
        ["patch", "updated_at"] => Ok(config
            .patch
            .updated_at
            .as_ref()
            .map(|ts| format!("\"{}\"", ts))
            .unwrap_or_else(|| "null".to_string())),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["source", "path"] => config.source.path = value.to_string(),
        ["patch", "require_anchor"] => config.patch.require_anchor = value.parse()?,
        ["patch", "backup"] => config.patch.backup = value.parse()?,
        ["patch", "updated_at"] => {
            parse_timestamp(value)?;
            config.patch.updated_at = Some(value.to_string());
        }
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

/// The loaded config file, or the first one present in the working directory.
fn find_config_file(ctx: &Context) -> Result<PathBuf> {
    if let Some(ref path) = ctx.config_path {
        return Ok(path.clone());
    }
    for name in &CONFIG_NAMES {
        let path = ctx.cwd.join(name);
        if path.exists() {
            return Ok(path);
        }
    }
    bail!("No config file found. Run `catalog config init` to create one.")
}
