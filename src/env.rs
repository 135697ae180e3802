//! Environment snapshot consumed by the trash subsystem.
//!
//! `HOME`, `PATH` and `HOMEBREW_PREFIX` are read once into a plain value so the
//! mover and the helper probe never touch process-global state directly.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Default package-manager prefix when `HOMEBREW_PREFIX` is unset.
pub const HOMEBREW_PREFIX_DEFAULT: &str = "/opt/homebrew";
/// Hard-coded last-resort helper location.
pub const FALLBACK_BIN_DIR: &str = "/usr/local/bin";
/// Trash directory name under the home directory.
pub const TRASH_DIR_NAME: &str = ".Trash";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrashEnv {
    pub home: Option<PathBuf>,
    pub path: Option<OsString>,
    pub homebrew_prefix: Option<PathBuf>,
}

impl TrashEnv {
    /// Capture the current process environment.
    pub fn from_env() -> Self {
        Self {
            home: non_empty("HOME").map(PathBuf::from),
            path: env::var_os("PATH"),
            homebrew_prefix: non_empty("HOMEBREW_PREFIX").map(PathBuf::from),
        }
    }

    /// Directories derived from `PATH`, in order.
    pub fn path_dirs(&self) -> Vec<PathBuf> {
        match &self.path {
            Some(p) => env::split_paths(p)
                .filter(|d| !d.as_os_str().is_empty())
                .collect(),
            None => Vec::new(),
        }
    }

    /// The two fixed installation directories searched after `PATH`.
    pub fn well_known_dirs(&self) -> [PathBuf; 2] {
        let prefix = self
            .homebrew_prefix
            .clone()
            .unwrap_or_else(|| PathBuf::from(HOMEBREW_PREFIX_DEFAULT));
        [prefix.join("bin"), PathBuf::from(FALLBACK_BIN_DIR)]
    }

    /// `$HOME/.Trash`, if `HOME` is known. Existence is not checked here.
    pub fn trash_dir(&self) -> Option<PathBuf> {
        self.home.as_ref().map(|h| h.join(TRASH_DIR_NAME))
    }
}

fn non_empty(key: &str) -> Option<OsString> {
    env::var_os(key).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_dirs_default_prefix() {
        let env = TrashEnv::default();
        let dirs = env.well_known_dirs();
        assert_eq!(dirs[0], PathBuf::from("/opt/homebrew/bin"));
        assert_eq!(dirs[1], PathBuf::from("/usr/local/bin"));
    }

    #[test]
    fn well_known_dirs_honor_prefix() {
        let env = TrashEnv {
            homebrew_prefix: Some(PathBuf::from("/home/linuxbrew/.linuxbrew")),
            ..TrashEnv::default()
        };
        assert_eq!(
            env.well_known_dirs()[0],
            PathBuf::from("/home/linuxbrew/.linuxbrew/bin")
        );
    }

    #[cfg(unix)]
    #[test]
    fn path_dirs_skip_empty_entries() {
        let env = TrashEnv {
            path: Some(OsString::from("/usr/bin::/bin")),
            ..TrashEnv::default()
        };
        assert_eq!(
            env.path_dirs(),
            vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]
        );
    }

    #[test]
    fn trash_dir_requires_home() {
        assert_eq!(TrashEnv::default().trash_dir(), None);
        let env = TrashEnv {
            home: Some(PathBuf::from("/home/u")),
            ..TrashEnv::default()
        };
        assert_eq!(env.trash_dir(), Some(PathBuf::from("/home/u/.Trash")));
    }
}
