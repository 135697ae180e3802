//! Direct fallback mover: rename each item into the Trash directory, copying
//! across devices when rename cannot. Items are independent; a failure is
//! recorded and the loop moves on. Nothing already moved is rolled back.

use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::atomic::rename_into_trash;
use super::copy::copy_then_remove;
use super::helpers::io_error_with_help;
use super::naming::trash_destination;
use super::util::is_cross_device;
use crate::errors::TrashError;
use crate::resolve::ResolvedPath;

/// Signature of the rename step, swappable so tests can force EXDEV.
pub type RenameFn = fn(&Path, &Path) -> io::Result<()>;

#[derive(Debug, Clone)]
pub struct DirectMover {
    trash_dir: PathBuf,
    rename: RenameFn,
}

impl DirectMover {
    pub fn new(trash_dir: impl Into<PathBuf>) -> Self {
        Self {
            trash_dir: trash_dir.into(),
            rename: rename_into_trash,
        }
    }

    /// Replace the rename step.
    pub fn with_rename(mut self, rename: RenameFn) -> Self {
        self.rename = rename;
        self
    }

    /// Move one item and return where it landed.
    pub fn move_one(&self, item: &ResolvedPath) -> Result<PathBuf> {
        let src = item.abs.as_path();
        let dest = trash_destination(&self.trash_dir, src)?;

        match (self.rename)(src, &dest) {
            Ok(()) => {
                info!(src = %src.display(), dest = %dest.display(), "Renamed into Trash");
            }
            Err(e) if is_cross_device(&e) => {
                warn!(src = %src.display(), dest = %dest.display(), "cross-device rename; copying then removing source");
                copy_then_remove(src, &dest)?;
                info!(src = %src.display(), dest = %dest.display(), "Copied into Trash and removed source");
            }
            Err(e) => return Err(io_error_with_help("rename", src)(e)),
        }
        Ok(dest)
    }

    /// Move every item, collecting one error string per failed item.
    pub fn move_all(&self, items: &[ResolvedPath]) -> Vec<String> {
        let mut errors = Vec::new();
        for item in items {
            if let Err(e) = self.move_one(item) {
                let err = TrashError::MoveFailed {
                    raw: item.raw.clone(),
                    reason: format!("{e:#}"),
                };
                warn!(kind = err.kind(), raw = %item.raw, error = %e, "failed to move item");
                errors.push(err.to_string());
            }
        }
        errors
    }
}
