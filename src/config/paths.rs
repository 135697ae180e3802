//! Default config and log locations.

use dirs::{config_dir, data_dir};
use std::env;
use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SAFE_TRASH_CONFIG";

/// `$SAFE_TRASH_CONFIG` if set, else `<config_dir>/safe_trash/config.xml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(p));
    }
    config_dir().map(|base| base.join("safe_trash").join("config.xml"))
}

/// `<data_dir>/safe_trash/safe_trash.log`. The directory is not created here.
pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|base| base.join("safe_trash").join("safe_trash.log"))
}
