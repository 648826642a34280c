//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("level") {
            config.logging.level = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                section: "logging".to_string(),
                key: "level".to_string(),
                value: v.to_string(),
                reason: "must be one of: off, error, warn, info, debug, trace".to_string(),
            })?;
        }
        if let Some(v) = section.get("stack_traces") {
            config.logging.stack_traces =
                v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "stack_traces".to_string(),
                    value: v.to_string(),
                    reason: "must be 'full' or 'unique-only'".to_string(),
                })?;
        }
        if let Some(v) = section.get("dedup_capacity") {
            let v = v.trim();
            if !v.is_empty() {
                let capacity: usize = v.parse().map_err(|_| ConfigFileError::InvalidValue {
                    section: "logging".to_string(),
                    key: "dedup_capacity".to_string(),
                    value: v.to_string(),
                    reason: "must be a non-negative integer (0 = unbounded)".to_string(),
                })?;
                config.logging.dedup_capacity = (capacity > 0).then_some(capacity);
            }
        }
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
        if let Some(v) = section.get("stdout") {
            config.logging.stdout = parse_bool(v);
        }
    }

    Ok(config)
}

pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
