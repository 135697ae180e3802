//! Existence classification of a (non-refused) batch.

use std::fs;
use tracing::debug;

use crate::resolve::ResolvedPath;

/// Result of splitting a batch by existence.
#[derive(Debug, Default)]
pub struct Classified {
    /// Raw inputs that do not exist (only when missing paths are not allowed).
    pub missing: Vec<String>,
    /// Items that exist and should be moved, in input order.
    pub to_move: Vec<ResolvedPath>,
}

/// An entry counts as existing if it can be lstat'ed, so dangling symlinks
/// are still trashable.
pub fn exists_no_follow(path: &std::path::Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

pub fn classify(batch: Vec<ResolvedPath>, allow_missing: bool) -> Classified {
    let mut out = Classified::default();
    for item in batch {
        if exists_no_follow(&item.abs) {
            out.to_move.push(item);
        } else if allow_missing {
            debug!(raw = %item.raw, "skipping missing path");
        } else {
            debug!(raw = %item.raw, "path is missing");
            out.missing.push(item.raw);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn splits_missing_from_existing() {
        let dir = assert_fs::TempDir::new().unwrap();
        dir.child("a.txt").touch().unwrap();
        let batch = vec![
            ResolvedPath::new(dir.path(), "a.txt"),
            ResolvedPath::new(dir.path(), "gone.txt"),
        ];
        let c = classify(batch, false);
        assert_eq!(c.missing, vec!["gone.txt".to_string()]);
        assert_eq!(c.to_move.len(), 1);
        assert_eq!(c.to_move[0].raw, "a.txt");
    }

    #[test]
    fn allow_missing_drops_silently() {
        let dir = assert_fs::TempDir::new().unwrap();
        let batch = vec![ResolvedPath::new(dir.path(), "gone.txt")];
        let c = classify(batch, true);
        assert!(c.missing.is_empty());
        assert!(c.to_move.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_existing() {
        let dir = assert_fs::TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("link")).unwrap();
        let c = classify(vec![ResolvedPath::new(dir.path(), "link")], false);
        assert_eq!(c.to_move.len(), 1);
    }
}
