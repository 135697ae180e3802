//! CLI definition and parsing.
//!
//! Notes:
//! - `--base` defaults to the current directory.
//! - `--debug` is a shorthand for `--log-level debug`.
//! - `--refuse` adds to, never replaces, the config's refuse list.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Move files and directories to the Trash instead of deleting them.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Move paths to the Trash instead of deleting them")]
pub struct Args {
    /// Paths to move, relative to --base unless absolute.
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<String>,

    /// Directory relative paths are resolved against (also protected).
    #[arg(long, short = 'C', value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub base: Option<PathBuf>,

    /// Ignore nonexistent paths instead of reporting them.
    #[arg(long, short = 'f', help = "Ignore nonexistent paths (like rm -f)")]
    pub allow_missing: bool,

    /// Extra path that must never be moved (repeatable, relative to --base).
    #[arg(long = "refuse", value_name = "PATH")]
    pub refuse: Vec<String>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Precedence: --debug > --log-level value > None (use config).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.allow_missing {
            cfg.allow_missing = true;
        }
        cfg.refuse_paths.extend(self.refuse.iter().cloned());
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_wins_over_log_level() {
        let args = Args::parse_from(["safe-trash", "--debug", "--log-level", "quiet", "x"]);
        assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));
    }

    #[test]
    fn overrides_extend_refuse_list() {
        let args = Args::parse_from(["safe-trash", "-f", "--refuse", "secrets", "a", "b"]);
        let mut cfg = Config {
            refuse_paths: vec![".git".into()],
            ..Config::default()
        };
        args.apply_overrides(&mut cfg);
        assert!(cfg.allow_missing);
        assert_eq!(cfg.refuse_paths, vec![".git".to_string(), "secrets".to_string()]);
        assert_eq!(args.paths, vec!["a".to_string(), "b".to_string()]);
    }
}
