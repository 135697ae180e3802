//! Core library for `safe_trash`.
//!
//! Moves paths into a recoverable Trash instead of deleting them. A batch is
//! resolved against a base directory, refused outright if it names a
//! protected path, then handed to an installed trash helper or, when none is
//! found, renamed directly into `$HOME/.Trash`.
//!
//! ```no_run
//! use safe_trash::{move_paths_to_trash, MoveOptions};
//! use std::path::Path;
//!
//! let outcome = move_paths_to_trash(&["build", "notes.txt"], Path::new("/work"), &MoveOptions::default());
//! for e in &outcome.errors {
//!     eprintln!("{e}");
//! }
//! ```

pub mod classify;
pub mod cli;
pub mod config;
pub mod env;
pub mod errors;
pub mod fs_ops;
pub mod guard;
pub mod helper;
pub mod output;
pub mod resolve;
pub mod trash;

pub use config::{Config, LogLevel, default_config_path, default_log_path};
pub use env::TrashEnv;
pub use errors::TrashError;
pub use helper::{HelperProbe, HelperState, ProcessRunner, RunOutput, SystemRunner};
pub use resolve::{ResolvedPath, resolve};
pub use trash::{MoveOptions, MoveOutcome, Trasher, move_paths_to_trash};
