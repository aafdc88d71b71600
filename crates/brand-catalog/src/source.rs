//! Reading and rewriting the brand module on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::CatalogError;
use crate::patch::{CatalogPatch, PatchOptions, PatchOutcome};
use crate::Result;

/// How the rewritten text is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Compute the outcome only.
    DryRun,
    /// Overwrite the module in place.
    #[default]
    Write,
    /// Copy the module to `<path>.bak`, then overwrite it.
    WriteWithBackup,
}

/// The brand module loaded into memory.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    /// Read the whole file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path).map_err(|e| CatalogError::io(&path, e))?;
        debug!(path = %path.display(), bytes = content.len(), "loaded catalog source");
        Ok(Self { path, content })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Path of the backup copy.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Write `content` over the file, optionally keeping a backup of the
    /// current text first.
    pub fn write(&self, content: &str, backup: bool) -> Result<()> {
        if backup {
            let backup_path = self.backup_path();
            fs::write(&backup_path, &self.content)
                .map_err(|e| CatalogError::io(&backup_path, e))?;
            debug!(path = %backup_path.display(), "wrote backup");
        }
        fs::write(&self.path, content).map_err(|e| CatalogError::io(&self.path, e))?;
        info!(path = %self.path.display(), bytes = content.len(), "wrote catalog source");
        Ok(())
    }
}

/// Read the module at `path`, apply `patch`, and persist the result per `mode`.
///
/// Nothing is written when the patch fails or changes nothing.
pub fn apply_to_file(
    path: impl AsRef<Path>,
    patch: &CatalogPatch,
    options: &PatchOptions,
    mode: WriteMode,
) -> Result<PatchOutcome> {
    let source = SourceFile::load(path)?;
    let outcome = patch.apply(source.content(), options)?;

    if outcome.is_noop() {
        debug!(path = %source.path().display(), "patch changed nothing, not writing");
        return Ok(outcome);
    }

    match mode {
        WriteMode::DryRun => {
            debug!(path = %source.path().display(), "dry run, not writing");
        }
        WriteMode::Write => source.write(&outcome.content, false)?,
        WriteMode::WriteWithBackup => source.write(&outcome.content, true)?,
    }
    Ok(outcome)
}
