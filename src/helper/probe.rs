//! External trash helper discovery.
//!
//! Lifecycle of the cached answer:
//! - `Unknown` until the first batch that actually has something to move.
//! - Then exactly one terminal value: `Found(command)` or `NotFound`.
//! - Never re-checked afterwards; `reset()` and `set_override()` exist for tests
//!   and embedders that need to force a state.
//!
//! The lock is not held while probing. Two threads racing on a cold cache may
//! both probe; probing is idempotent, so they store the same answer.
//!
//! Probing never fails: spawn errors and unexpected exit codes only disqualify
//! the candidate being tried.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, trace};

use super::runner::ProcessRunner;
use crate::env::TrashEnv;

/// Helper program names in preference order.
pub const DEFAULT_HELPERS: &[&str] = &["trash", "trash-put"];

/// Harmless flag used to check a candidate runs at all.
pub const PROBE_FLAG: &str = "--help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HelperState {
    #[default]
    Unknown,
    Found(PathBuf),
    NotFound,
}

impl HelperState {
    /// `None` while unknown, otherwise the terminal answer.
    fn resolved(&self) -> Option<Option<PathBuf>> {
        match self {
            HelperState::Unknown => None,
            HelperState::Found(p) => Some(Some(p.clone())),
            HelperState::NotFound => Some(None),
        }
    }
}

#[derive(Debug, Default)]
pub struct HelperProbe {
    state: Mutex<HelperState>,
}

static GLOBAL: HelperProbe = HelperProbe::new();

impl HelperProbe {
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(HelperState::Unknown),
        }
    }

    /// Process-wide instance used by `move_paths_to_trash`.
    pub fn global() -> &'static HelperProbe {
        &GLOBAL
    }

    fn lock(&self) -> MutexGuard<'_, HelperState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> HelperState {
        self.lock().clone()
    }

    /// Forget any cached answer; the next `find` probes again.
    pub fn reset(&self) {
        *self.lock() = HelperState::Unknown;
    }

    /// Force a state without probing.
    pub fn set_override(&self, state: HelperState) {
        *self.lock() = state;
    }

    /// Return the cached helper, probing on first use.
    pub fn find(
        &self,
        runner: &dyn ProcessRunner,
        env: &TrashEnv,
        names: &[String],
    ) -> Option<PathBuf> {
        if let Some(answer) = self.lock().resolved() {
            trace!(cached = ?answer, "helper probe cache hit");
            return answer;
        }

        let found = probe(runner, env, names);
        let state = match &found {
            Some(cmd) => {
                info!(helper = %cmd.display(), "trash helper found");
                HelperState::Found(cmd.clone())
            }
            None => {
                info!("no trash helper found; using direct Trash fallback");
                HelperState::NotFound
            }
        };
        *self.lock() = state;
        found
    }
}

/// Ordered, de-duplicated candidate commands: for each name, the bare name,
/// then `<dir>/<name>` for every `PATH` entry and the two well-known dirs.
pub fn candidate_commands(env: &TrashEnv, names: &[String]) -> Vec<PathBuf> {
    let mut dirs = env.path_dirs();
    dirs.extend(env.well_known_dirs());

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for name in names {
        let bare = PathBuf::from(name);
        let all = std::iter::once(bare).chain(dirs.iter().map(|d| d.join(name)));
        for cand in all {
            if seen.insert(cand.clone()) {
                out.push(cand);
            }
        }
    }
    out
}

fn probe(runner: &dyn ProcessRunner, env: &TrashEnv, names: &[String]) -> Option<PathBuf> {
    candidate_commands(env, names)
        .into_iter()
        .find(|cand| candidate_works(runner, cand))
}

fn is_qualified(cand: &Path) -> bool {
    cand.components().count() > 1
}

fn candidate_works(runner: &dyn ProcessRunner, cand: &Path) -> bool {
    if is_qualified(cand) && !cand.is_file() {
        return false;
    }
    match runner.run(cand.as_os_str(), &[OsString::from(PROBE_FLAG)]) {
        // Some helpers exit 1 for a bare usage request.
        Ok(out) if matches!(out.code, Some(0) | Some(1)) => {
            debug!(candidate = %cand.display(), code = ?out.code, "helper candidate usable");
            true
        }
        Ok(out) => {
            debug!(candidate = %cand.display(), code = ?out.code, "helper candidate rejected");
            false
        }
        Err(e) => {
            trace!(candidate = %cand.display(), error = %e, "helper candidate failed to spawn");
            false
        }
    }
}

/// Default helper names as owned strings.
pub fn default_helper_names() -> Vec<String> {
    DEFAULT_HELPERS.iter().map(|s| s.to_string()).collect()
}
