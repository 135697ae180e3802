//! Delegated move: one helper invocation for the whole batch.
//! Failures are reported as a single aggregated error and never retried
//! through the direct fallback, since the helper may already have moved
//! some of the items.

use std::ffi::OsString;
use std::path::Path;
use tracing::{error, info};

use super::runner::ProcessRunner;
use crate::errors::TrashError;
use crate::resolve::ResolvedPath;

/// Run `helper <abs1> <abs2> ...` and return the errors to report (zero or one).
pub fn trash_with_helper(
    runner: &dyn ProcessRunner,
    helper: &Path,
    items: &[ResolvedPath],
) -> Vec<String> {
    let args: Vec<OsString> = items.iter().map(|r| r.abs.clone().into_os_string()).collect();
    let command = helper.display().to_string();

    let err = match runner.run(helper.as_os_str(), &args) {
        Ok(out) if out.success() => {
            info!(helper = %command, count = items.len(), "items moved to Trash by helper");
            return Vec::new();
        }
        Ok(out) => {
            let stderr = out.stderr.trim();
            if !stderr.is_empty() {
                error!(helper = %command, code = ?out.code, "trash helper failed");
                return vec![stderr.to_string()];
            }
            match out.code {
                Some(code) => TrashError::HelperExit { command, code },
                None => TrashError::HelperSignal(command),
            }
        }
        Err(e) => TrashError::HelperSpawn {
            command,
            reason: e.to_string(),
        },
    };
    error!(kind = err.kind(), error = %err, "trash helper failed");
    vec![err.to_string()]
}
