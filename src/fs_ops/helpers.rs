//! I/O error enrichment.
//!
//! Turns a bare io::Error into "<op> '<path>': <error> (<hint>)" so per-item
//! failure messages tell the user what to check.
//!
//! Usage:
//!   fs::remove_file(p).map_err(io_error_with_help("remove source", p))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

fn hint_for(e: &io::Error) -> Option<&'static str> {
    #[cfg(unix)]
    if let Some(code) = e.raw_os_error() {
        let hint = match code {
            libc::EACCES | libc::EPERM => Some("permission denied; check ownership and write permissions"),
            libc::EXDEV => Some("cross-filesystem; atomic rename not possible"),
            libc::EBUSY => Some("resource busy; another process is using it"),
            libc::ENOENT => Some("path not found; it may have been removed concurrently"),
            libc::EEXIST | libc::ENOTEMPTY => Some("destination already exists"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem"),
            libc::ENAMETOOLONG => Some("filename or path too long"),
            _ => None,
        };
        if hint.is_some() {
            return hint;
        }
    }
    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been removed concurrently"),
        io::ErrorKind::AlreadyExists => Some("destination already exists"),
        io::ErrorKind::CrossesDevices => Some("cross-filesystem; atomic rename not possible"),
        _ => None,
    }
}

pub(crate) fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    match hint_for(e) {
        Some(hint) => format!("{} '{}': {} ({})", op, path.display(), e, hint),
        None => format!("{} '{}': {}", op, path.display(), e),
    }
}

/// Adapter for anyhow::Result code: `.map_err(io_error_with_help(op, path))`.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}
