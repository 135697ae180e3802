//! Cross-device fallback: recursive copy, then forced removal of the source.
//! - Directories are recreated, regular files copied, symlinks recreated as
//!   symlinks (never followed).
//! - Permissions and modification times are carried over (best-effort).
//! - Not transactional: if removal fails after a full copy, both copies remain.

use anyhow::{Context, Result, bail};
use filetime::{FileTime, set_file_mtime};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use super::helpers::io_error_with_help;

/// Copy `src` (file, symlink or directory tree) to the new path `dst`.
pub fn copy_recursive(src: &Path, dst: &Path) -> Result<()> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(src).follow_links(false) {
        let entry = entry.with_context(|| format!("walk '{}'", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .with_context(|| format!("entry outside source: {}", entry.path().display()))?;
        let target = if rel.as_os_str().is_empty() {
            dst.to_path_buf()
        } else {
            dst.join(rel)
        };
        let ftype = entry.file_type();

        if ftype.is_dir() {
            fs::create_dir(&target).map_err(io_error_with_help("create directory", &target))?;
            dirs.push((entry.path().to_path_buf(), target.clone()));
        } else if ftype.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else if ftype.is_file() {
            fs::copy(entry.path(), &target).map_err(io_error_with_help("copy file", &target))?;
            preserve_mtime(entry.path(), &target);
        } else {
            bail!("cannot copy special file: {}", entry.path().display());
        }
        trace!(src = %entry.path().display(), dst = %target.display(), "copied entry");
    }

    // Directory times and modes last: writing children would bump mtime and
    // a read-only mode would block the copy.
    for (from, to) in dirs.iter().rev() {
        if let Ok(meta) = fs::metadata(from) {
            let _ = fs::set_permissions(to, meta.permissions());
        }
        preserve_mtime(from, to);
    }
    debug!(src = %src.display(), dst = %dst.display(), "recursive copy finished");
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    let points_to = fs::read_link(link).map_err(io_error_with_help("read symlink", link))?;
    std::os::unix::fs::symlink(&points_to, target)
        .map_err(io_error_with_help("create symlink", target))
}

#[cfg(not(unix))]
fn copy_symlink(link: &Path, target: &Path) -> Result<()> {
    // Without portable symlink creation, copy what the link points at.
    fs::copy(link, target).map_err(io_error_with_help("copy file", target))?;
    Ok(())
}

fn preserve_mtime(from: &Path, to: &Path) {
    if let Ok(meta) = fs::symlink_metadata(from) {
        let mtime = FileTime::from_last_modification_time(&meta);
        if let Err(e) = set_file_mtime(to, mtime) {
            warn!(path = %to.display(), error = %e, "failed to carry over modification time");
        }
    }
}

/// Remove a file, symlink or directory tree. A path that is already gone is fine.
pub fn remove_all_force(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(io_error_with_help("stat source", path)(e)),
    };
    let res = if meta.file_type().is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match res {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error_with_help("remove source", path)(e)),
    }
}

/// Two-step move used when rename cannot cross devices.
/// A failed copy removes whatever reached `dst`; the source is untouched.
pub fn copy_then_remove(src: &Path, dst: &Path) -> Result<()> {
    if fs::symlink_metadata(dst).is_ok() {
        bail!("destination already exists: {}", dst.display());
    }
    if let Err(e) = copy_recursive(src, dst) {
        if let Err(cleanup) = remove_all_force(dst) {
            warn!(dst = %dst.display(), error = %cleanup, "failed to remove partial copy");
        }
        return Err(e);
    }
    remove_all_force(src)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_tree_and_removes_source() {
        let td = tempdir().unwrap();
        let src = td.path().join("proj");
        fs::create_dir_all(src.join("sub")).unwrap();
        fs::write(src.join("a.txt"), "A").unwrap();
        fs::write(src.join("sub/b.txt"), "B").unwrap();
        let dst = td.path().join("trash-proj");

        copy_then_remove(&src, &dst).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "A");
        assert_eq!(fs::read_to_string(dst.join("sub/b.txt")).unwrap(), "B");
    }

    #[test]
    fn single_file_keeps_mtime() {
        let td = tempdir().unwrap();
        let src = td.path().join("f.bin");
        fs::write(&src, b"xyz").unwrap();
        let old = FileTime::from_unix_time(1_000_000_000, 0);
        set_file_mtime(&src, old).unwrap();
        let dst = td.path().join("g.bin");

        copy_recursive(&src, &dst).unwrap();

        let meta = fs::metadata(&dst).unwrap();
        assert_eq!(FileTime::from_last_modification_time(&meta), old);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_recreated_not_followed() {
        let td = tempdir().unwrap();
        let src = td.path().join("d");
        fs::create_dir_all(&src).unwrap();
        std::os::unix::fs::symlink("/definitely/missing", src.join("l")).unwrap();
        let dst = td.path().join("e");

        copy_recursive(&src, &dst).unwrap();

        let link = fs::read_link(dst.join("l")).unwrap();
        assert_eq!(link, Path::new("/definitely/missing"));
    }

    #[test]
    fn remove_missing_is_ok() {
        let td = tempdir().unwrap();
        remove_all_force(&td.path().join("nope")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn failed_copy_leaves_no_partial_destination() {
        let td = tempdir().unwrap();
        let src = td.path().join("proj");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), "A").unwrap();
        let fifo = std::ffi::CString::new(src.join("zz.fifo").to_str().unwrap()).unwrap();
        assert_eq!(unsafe { libc::mkfifo(fifo.as_ptr(), 0o644) }, 0);
        let dst = td.path().join("trash-proj");

        let err = copy_then_remove(&src, &dst).unwrap_err();

        assert!(err.to_string().contains("special file"), "{err:#}");
        assert!(fs::symlink_metadata(&dst).is_err(), "partial copy left behind");
        assert!(src.join("a.txt").exists());
    }

    #[test]
    fn existing_destination_fails_copy() {
        let td = tempdir().unwrap();
        let src = td.path().join("d");
        fs::create_dir_all(&src).unwrap();
        let dst = td.path().join("taken");
        fs::create_dir_all(&dst).unwrap();
        fs::write(dst.join("keep"), "k").unwrap();
        assert!(copy_recursive(&src, &dst).is_err());
        assert!(copy_then_remove(&src, &dst).is_err());
        assert!(dst.join("keep").exists());
        assert!(src.exists());
    }
}
