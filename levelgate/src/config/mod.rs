//! Configuration for the logging façade.
//!
//! Loaded from an INI file (`~/.levelgate/config.ini` by default). Only the
//! `[logging]` section is read; a missing file or key falls back to the
//! `DEFAULT_*` constants.
//!
//! # Example
//!
//! ```
//! use levelgate::config::ConfigFile;
//! use levelgate::severity::Severity;
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.logging.level, Severity::Info);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LEVEL, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, DEFAULT_STACK_TRACES};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings};
