//! Lexical path resolution.
//! Absolute inputs are kept, relative ones are joined onto the base directory,
//! and the result is normalized without touching the filesystem (no symlinks
//! are followed, nothing is required to exist).

use std::path::{Component, Path, PathBuf};

/// A caller-supplied path paired with its absolute, normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Exactly what the caller passed, used for reporting.
    pub raw: String,
    pub abs: PathBuf,
}

impl ResolvedPath {
    pub fn new(base: &Path, raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            abs: resolve(base, raw),
        }
    }
}

/// Resolve `raw` against `base`. Pure and deterministic.
pub fn resolve(base: &Path, raw: &str) -> PathBuf {
    let p = Path::new(raw);
    if p.is_absolute() {
        normalize(p)
    } else {
        normalize(&base.join(p))
    }
}

/// Fold `.` and `..`, collapse duplicate and trailing separators.
/// `..` never climbs above the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::Prefix(p) => out.push(p.as_os_str()),
            Component::RootDir => out.push(comp.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                // relative path climbing past its start: keep the `..`
                _ => out.push(".."),
            },
            Component::Normal(c) => out.push(c),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Filesystem root for the platform.
pub fn fs_root() -> PathBuf {
    #[cfg(windows)]
    {
        PathBuf::from("C:\\")
    }
    #[cfg(not(windows))]
    {
        PathBuf::from("/")
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn absolute_input_is_kept() {
        assert_eq!(resolve(Path::new("/work"), "/etc/hosts"), PathBuf::from("/etc/hosts"));
    }

    #[test]
    fn relative_input_joins_base() {
        assert_eq!(resolve(Path::new("/work"), "a.txt"), PathBuf::from("/work/a.txt"));
        assert_eq!(
            resolve(Path::new("/work"), "./sub//b.txt"),
            PathBuf::from("/work/sub/b.txt")
        );
    }

    #[test]
    fn dot_dot_folds_and_stops_at_root() {
        assert_eq!(resolve(Path::new("/work/x"), ".."), PathBuf::from("/work"));
        assert_eq!(resolve(Path::new("/work"), "../../.."), PathBuf::from("/"));
        assert_eq!(normalize(Path::new("/a/b/../../c/")), PathBuf::from("/c"));
    }

    #[test]
    fn empty_and_dot_resolve_to_base() {
        assert_eq!(resolve(Path::new("/work"), ""), PathBuf::from("/work"));
        assert_eq!(resolve(Path::new("/work/"), "."), PathBuf::from("/work"));
    }

    #[test]
    fn relative_normalize_keeps_leading_parent() {
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
        assert_eq!(normalize(Path::new("a/..")), PathBuf::from("."));
    }

    #[test]
    fn resolved_path_keeps_raw() {
        let r = ResolvedPath::new(Path::new("/work"), "dir/../f");
        assert_eq!(r.raw, "dir/../f");
        assert_eq!(r.abs, PathBuf::from("/work/f"));
    }
}
