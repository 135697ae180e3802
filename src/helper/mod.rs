//! External trash helper: discovery, caching and invocation.

mod invoke;
mod probe;
mod runner;

pub use invoke::trash_with_helper;
pub use probe::{
    DEFAULT_HELPERS, HelperProbe, HelperState, PROBE_FLAG, candidate_commands,
    default_helper_names,
};
pub use runner::{ProcessRunner, RunOutput, SystemRunner};
