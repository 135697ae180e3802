//! Batch entry point: resolve, refuse, classify, then move via the helper or
//! the direct fallback.
//!
//! Outcome rules:
//! - A protected path anywhere in the batch: one error, nothing missing,
//!   nothing touched.
//! - Otherwise missing inputs and move failures are collected without
//!   stopping; later items are still attempted after an earlier failure.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::classify::classify;
use crate::env::TrashEnv;
use crate::fs_ops::{DirectMover, RenameFn, locate_trash_dir, rename_into_trash};
use crate::guard::ProtectedSet;
use crate::helper::{HelperProbe, ProcessRunner, SystemRunner, default_helper_names, trash_with_helper};
use crate::resolve::{ResolvedPath, normalize};

/// Caller options for one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOptions {
    /// Skip nonexistent inputs silently instead of listing them in `missing`.
    pub allow_missing: bool,
    /// Extra protected paths, resolved against the base directory.
    pub refuse_paths: Vec<String>,
}

/// What happened to a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Raw inputs that did not exist.
    pub missing: Vec<String>,
    /// Human-readable failures.
    pub errors: Vec<String>,
}

impl MoveOutcome {
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }

    /// Conventional process exit code: 0 on full success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    fn refused(message: String) -> Self {
        Self {
            missing: Vec::new(),
            errors: vec![message],
        }
    }
}

/// The subsystem with its collaborators made explicit.
pub struct Trasher<'a, R: ProcessRunner> {
    runner: R,
    probe: &'a HelperProbe,
    env: TrashEnv,
    helper_names: Vec<String>,
    rename: RenameFn,
}

impl Trasher<'static, SystemRunner> {
    /// Real processes, the process-wide probe cache and the current environment.
    pub fn system() -> Self {
        Trasher::new(SystemRunner, HelperProbe::global(), TrashEnv::from_env())
    }
}

impl<'a, R: ProcessRunner> Trasher<'a, R> {
    pub fn new(runner: R, probe: &'a HelperProbe, env: TrashEnv) -> Self {
        Self {
            runner,
            probe,
            env,
            helper_names: default_helper_names(),
            rename: rename_into_trash,
        }
    }

    /// Override the helper names tried, most preferred first.
    pub fn with_helper_names(mut self, names: Vec<String>) -> Self {
        self.helper_names = names;
        self
    }

    /// Override the rename step of the direct fallback.
    pub fn with_rename(mut self, rename: RenameFn) -> Self {
        self.rename = rename;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Move `paths` (relative to `base_dir` unless absolute) into the Trash.
    pub fn move_paths<S: AsRef<str>>(
        &self,
        paths: &[S],
        base_dir: &Path,
        options: &MoveOptions,
    ) -> MoveOutcome {
        let base = absolute_base(base_dir);
        let batch: Vec<ResolvedPath> = paths
            .iter()
            .map(|p| ResolvedPath::new(&base, p.as_ref()))
            .collect();

        let protected = ProtectedSet::new(&base, &options.refuse_paths);
        if let Err(e) = protected.check_batch(&batch) {
            return MoveOutcome::refused(e.to_string());
        }

        let classified = classify(batch, options.allow_missing);
        let mut outcome = MoveOutcome {
            missing: classified.missing,
            errors: Vec::new(),
        };
        if classified.to_move.is_empty() {
            debug!(missing = outcome.missing.len(), "nothing to move");
            return outcome;
        }

        match self.probe.find(&self.runner, &self.env, &self.helper_names) {
            Some(helper) => {
                outcome.errors = trash_with_helper(&self.runner, &helper, &classified.to_move);
            }
            None => match locate_trash_dir(&self.env) {
                Ok(trash_dir) => {
                    let mover = DirectMover::new(trash_dir).with_rename(self.rename);
                    outcome.errors = mover.move_all(&classified.to_move);
                }
                Err(e) => {
                    error!(kind = e.kind(), error = %e, "cannot use direct Trash fallback");
                    outcome.errors.push(e.to_string());
                }
            },
        }

        info!(
            requested = paths.len(),
            missing = outcome.missing.len(),
            errors = outcome.errors.len(),
            "trash batch finished"
        );
        outcome
    }
}

fn absolute_base(base_dir: &Path) -> PathBuf {
    if base_dir.is_absolute() {
        normalize(base_dir)
    } else {
        normalize(&std::path::absolute(base_dir).unwrap_or_else(|_| base_dir.to_path_buf()))
    }
}

/// Move `paths` into the Trash using real processes and the process-wide
/// helper cache.
pub fn move_paths_to_trash<S: AsRef<str>>(
    paths: &[S],
    base_dir: &Path,
    options: &MoveOptions,
) -> MoveOutcome {
    Trasher::system().move_paths(paths, base_dir, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_exit_codes() {
        assert_eq!(MoveOutcome::default().exit_code(), 0);
        let o = MoveOutcome {
            missing: vec!["x".into()],
            errors: vec![],
        };
        assert!(!o.is_success());
        assert_eq!(o.exit_code(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn relative_base_is_made_absolute() {
        let b = absolute_base(Path::new("some/rel/../dir"));
        assert!(b.is_absolute());
        assert!(b.ends_with("some/dir"));
    }
}
