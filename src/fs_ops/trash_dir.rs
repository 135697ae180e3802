//! Platform Trash directory lookup for the direct fallback.

use std::path::PathBuf;
use tracing::debug;

use crate::env::TrashEnv;
use crate::errors::TrashError;

/// `$HOME/.Trash`, which must already exist as a directory. It is never created.
pub fn locate_trash_dir(env: &TrashEnv) -> Result<PathBuf, TrashError> {
    let dir = env.trash_dir().ok_or(TrashError::HomeUnset)?;
    if !dir.is_dir() {
        return Err(TrashError::TrashDirMissing(dir));
    }
    debug!(trash_dir = %dir.display(), "using Trash directory");
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_home_is_reported() {
        let err = locate_trash_dir(&TrashEnv::default()).unwrap_err();
        assert!(matches!(err, TrashError::HomeUnset));
    }

    #[test]
    fn missing_trash_dir_is_not_created() {
        let td = tempdir().unwrap();
        let env = TrashEnv {
            home: Some(td.path().to_path_buf()),
            ..TrashEnv::default()
        };
        let err = locate_trash_dir(&env).unwrap_err();
        assert!(err.to_string().contains(".Trash"));
        assert!(!td.path().join(".Trash").exists());
    }

    #[test]
    fn existing_trash_dir_is_returned() {
        let td = tempdir().unwrap();
        std::fs::create_dir(td.path().join(".Trash")).unwrap();
        let env = TrashEnv {
            home: Some(td.path().to_path_buf()),
            ..TrashEnv::default()
        };
        assert_eq!(locate_trash_dir(&env).unwrap(), td.path().join(".Trash"));
    }
}
