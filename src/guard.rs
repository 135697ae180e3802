//! Protected-path refusal.
//!
//! The filesystem root, the base directory and any extra caller-supplied paths
//! (resolved against the base) are never moved. Matching is exact equality of
//! normalized absolute paths: children of a protected directory are allowed,
//! and symlinks are compared by their literal path only.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::errors::TrashError;
use crate::resolve::{fs_root, normalize, resolve, ResolvedPath};

#[derive(Debug, Clone)]
pub struct ProtectedSet {
    paths: HashSet<PathBuf>,
}

impl ProtectedSet {
    pub fn new<S: AsRef<str>>(base: &Path, extra: &[S]) -> Self {
        let mut paths = HashSet::new();
        paths.insert(fs_root());
        paths.insert(normalize(base));
        for p in extra {
            paths.insert(resolve(base, p.as_ref()));
        }
        debug!(count = paths.len(), "protected set built");
        Self { paths }
    }

    pub fn is_protected(&self, abs: &Path) -> bool {
        self.paths.contains(abs)
    }

    /// Refuse the whole batch on the first protected entry.
    pub fn check_batch(&self, batch: &[ResolvedPath]) -> Result<(), TrashError> {
        match batch.iter().find(|r| self.is_protected(&r.abs)) {
            Some(hit) => {
                error!(raw = %hit.raw, abs = %hit.abs.display(), "refusing protected path");
                Err(TrashError::Refused(hit.raw.clone()))
            }
            None => Ok(()),
        }
    }
}
