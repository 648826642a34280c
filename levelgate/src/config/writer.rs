//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let logging = &config.logging;
    let dedup_capacity = logging.dedup_capacity.unwrap_or(0);
    let stdout = if logging.stdout { "true" } else { "false" };

    format!(
        r#"[logging]
; Severity for loggers: off, error, warn, info, debug, trace (default: info)
level = {}
; Fault rendering (default: unique-only)
;   full        - every record carries the full stack trace
;   unique-only - first occurrence in full, repeats as a short token
stack_traces = {}
; Maximum number of distinct faults remembered for dedup (0 = unbounded)
dedup_capacity = {}
; Log directory (default: logs)
directory = {}
; Log file name (default: levelgate.log)
file = {}
; Mirror log output to stdout (default: true)
stdout = {}
"#,
        logging.level,
        logging.stack_traces,
        dedup_capacity,
        path_to_string(&logging.directory),
        logging.file,
        stdout,
    )
}

fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
