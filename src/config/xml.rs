//! XML configuration support (quick_xml + serde).
//!
//! ```xml
//! <config>
//!   <log_level>normal</log_level>
//!   <log_file>/var/log/safe_trash.log</log_file>
//!   <allow_missing>false</allow_missing>
//!   <helpers><helper>trash</helper><helper>trash-put</helper></helpers>
//!   <refuse_paths><path>.git</path></refuse_paths>
//! </config>
//! ```
//!
//! Unknown elements are rejected so typos surface instead of being ignored.
//! A missing file means defaults; a malformed one is an error.

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel};

#[derive(Debug, Deserialize)]
#[serde(rename = "config", deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    allow_missing: Option<bool>,
    helpers: Option<XmlHelpers>,
    refuse_paths: Option<XmlRefusePaths>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlHelpers {
    #[serde(rename = "helper", default)]
    items: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct XmlRefusePaths {
    #[serde(rename = "path", default)]
    items: Vec<String>,
}

fn trimmed_non_empty(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn xml_to_config(parsed: XmlConfig) -> Result<Config> {
    let mut cfg = Config::default();

    if let Some(s) = parsed.log_level.as_deref() {
        cfg.log_level = s.parse::<LogLevel>().map_err(anyhow::Error::msg)?;
    }
    if let Some(s) = parsed.log_file.as_deref() {
        let s = s.trim();
        if !s.is_empty() {
            cfg.log_file = Some(PathBuf::from(s));
        }
    }
    if let Some(b) = parsed.allow_missing {
        cfg.allow_missing = b;
    }
    if let Some(h) = parsed.helpers {
        let helpers = trimmed_non_empty(h.items);
        if helpers.is_empty() {
            bail!("<helpers> must list at least one <helper>");
        }
        cfg.helpers = helpers;
    }
    if let Some(r) = parsed.refuse_paths {
        cfg.refuse_paths = trimmed_non_empty(r.items);
    }
    Ok(cfg)
}

/// Parse a config document.
pub fn parse_config_xml(contents: &str) -> Result<Config> {
    let parsed: XmlConfig = from_xml_str(contents).context("parse config xml")?;
    xml_to_config(parsed)
}

/// Load a Config from a specific XML file.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    parse_config_xml(&contents).with_context(|| format!("in '{}'", path.display()))
}

/// Load the config from the default location, or defaults when there is none.
pub fn load_config() -> Result<Config> {
    match default_config_path() {
        Some(path) if path.exists() => {
            debug!(path = %path.display(), "loading config");
            load_config_from_xml_path(&path)
        }
        _ => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_document_maps_every_field() {
        let cfg = parse_config_xml(
            r#"<config>
  <log_level>debug</log_level>
  <log_file> /tmp/st.log </log_file>
  <allow_missing>true</allow_missing>
  <helpers><helper>trash-put</helper><helper> trash </helper></helpers>
  <refuse_paths><path>.git</path><path>secrets</path></refuse_paths>
</config>"#,
        )
        .unwrap();
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/st.log")));
        assert!(cfg.allow_missing);
        assert_eq!(cfg.helpers, vec!["trash-put".to_string(), "trash".to_string()]);
        assert_eq!(cfg.refuse_paths, vec![".git".to_string(), "secrets".to_string()]);
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(parse_config_xml("<config></config>").unwrap(), Config::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(parse_config_xml("<config><purge>true</purge></config>").is_err());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = parse_config_xml("<config><log_level>loud</log_level></config>").unwrap_err();
        assert!(format!("{err:#}").contains("invalid log level"));
    }
}
