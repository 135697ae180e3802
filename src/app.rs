//! Application orchestrator.
//! Loads/merges config, initializes logging, runs one trash batch and reports
//! the outcome.

use anyhow::{Context, Result};
use safe_trash::cli::Args;
use safe_trash::config::{CONFIG_ENV, load_config};
use safe_trash::output as out;
use safe_trash::{MoveOptions, Trasher, default_config_path};
use tracing::debug;

use crate::logging::init_tracing;

/// Run the CLI and return the process exit code.
pub fn run(args: Args) -> Result<i32> {
    if args.print_config {
        match default_config_path() {
            Some(p) => {
                let note = if std::env::var_os(CONFIG_ENV).is_some() {
                    format!(" (from {CONFIG_ENV})")
                } else {
                    String::new()
                };
                out::print_info(&format!("Config path{note}: {}", p.display()));
                if !p.exists() {
                    out::print_info("No config file exists there; built-in defaults are used.");
                }
            }
            None => out::print_error("Could not determine a default config path"),
        }
        return Ok(0);
    }

    let mut cfg = load_config().context("load safe_trash config")?;
    args.apply_overrides(&mut cfg);

    let _guard = init_tracing(cfg.log_level, cfg.log_file.as_deref(), args.json)
        .inspect_err(|e| out::print_error(&format!("Failed to initialize logging: {e}")))?;
    debug!(?args, "starting safe-trash");

    if args.paths.is_empty() {
        out::print_error("no paths given");
        return Ok(2);
    }

    let base = match &args.base {
        Some(b) => b.clone(),
        None => std::env::current_dir().context("determine current directory")?,
    };
    let options = MoveOptions {
        allow_missing: cfg.allow_missing,
        refuse_paths: cfg.refuse_paths.clone(),
    };

    let outcome = Trasher::system()
        .with_helper_names(cfg.helpers.clone())
        .move_paths(&args.paths, &base, &options);

    for raw in &outcome.missing {
        out::print_missing(raw);
    }
    for e in &outcome.errors {
        out::print_error(e);
    }
    Ok(outcome.exit_code())
}
