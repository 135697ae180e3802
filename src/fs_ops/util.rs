#[cfg(unix)]
use std::fs::File;
use std::io;
use std::path::Path;

/// True when a rename failed because source and destination are on
/// different filesystems (EXDEV / ERROR_NOT_SAME_DEVICE).
pub fn is_cross_device(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::CrossesDevices {
        return true;
    }
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == libc::EXDEV,
        #[cfg(windows)]
        Some(code) => code == 17,
        _ => false,
    }
}

/// Best-effort durability for a rename into `dir`.
#[cfg(unix)]
pub(super) fn fsync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
pub(super) fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn exdev_is_cross_device() {
        assert!(is_cross_device(&io::Error::from_raw_os_error(libc::EXDEV)));
        assert!(!is_cross_device(&io::Error::from_raw_os_error(libc::EACCES)));
    }

    #[test]
    fn plain_kinds_are_not_cross_device() {
        assert!(!is_cross_device(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(is_cross_device(&io::Error::from(io::ErrorKind::CrossesDevices)));
    }
}
