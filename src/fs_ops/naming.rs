//! Collision-free names inside the Trash directory.
//!
//! Policy:
//! - `<basename>` when free.
//! - `<basename>-<epoch millis>` when the plain name is taken.
//! - `<basename>-<epoch millis>-<n>` for n = 1, 2, ... until a free name is found.
//!
//! The suffix goes after the whole base name (extension included) so the
//! original name stays a readable prefix. Occupancy is tested without
//! following symlinks, so a dangling link in the Trash still counts as taken.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::errors::TrashError;

fn occupied(p: &Path) -> bool {
    fs::symlink_metadata(p).is_ok()
}

fn with_suffix(name: &std::ffi::OsStr, suffix: &str) -> OsString {
    let mut s = name.to_os_string();
    s.push(suffix);
    s
}

/// Destination for `src` inside `trash_dir`, using the current time.
pub fn trash_destination(trash_dir: &Path, src: &Path) -> Result<PathBuf, TrashError> {
    let epoch_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    trash_destination_at(trash_dir, src, epoch_ms)
}

/// Same as `trash_destination` with an explicit timestamp.
pub fn trash_destination_at(
    trash_dir: &Path,
    src: &Path,
    epoch_ms: u128,
) -> Result<PathBuf, TrashError> {
    let name = src
        .file_name()
        .ok_or_else(|| TrashError::NoFileName(src.to_path_buf()))?;

    let plain = trash_dir.join(name);
    if !occupied(&plain) {
        return Ok(plain);
    }

    let stamp = format!("-{epoch_ms}");
    let stamped = trash_dir.join(with_suffix(name, &stamp));
    if !occupied(&stamped) {
        return Ok(stamped);
    }

    let mut n: u64 = 1;
    loop {
        let candidate = trash_dir.join(with_suffix(name, &format!("{stamp}-{n}")));
        if !occupied(&candidate) {
            trace!(name = ?name, n, "trash name needed numeric suffix");
            return Ok(candidate);
        }
        n += 1;
    }
}
