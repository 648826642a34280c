//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and façade wiring so
//! command handlers only deal with their own arguments.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use levelgate::config::{ConfigFile, LoggingSettings};
use levelgate::logging::{init_logging, LoggingGuard};
use levelgate::service::{LoggingService, ScopedLogger};
use levelgate::severity::{Severity, StackTraceVerbosity};
use levelgate::strategy::LevelStrategyFactory;
use tracing::info;

use crate::error::CliError;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub level: Option<Severity>,
    pub stack_traces: Option<StackTraceVerbosity>,
}

/// Load the config from `path` (or the default location) and apply overrides.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<ConfigFile, CliError> {
    let mut config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    if let Some(level) = overrides.level {
        config.logging.level = level;
    }
    if let Some(stack_traces) = overrides.stack_traces {
        config.logging.stack_traces = stack_traces;
    }
    Ok(config)
}

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    config: ConfigFile,
    factory: LevelStrategyFactory,
    service: Arc<LoggingService>,
}

impl CliRunner {
    /// Initialize logging for `config` and build the façade.
    ///
    /// The stdout layer writes ANSI colour, so it is dropped when stdout is
    /// not a terminal.
    pub fn new(config: ConfigFile) -> Result<Self, CliError> {
        let settings = LoggingSettings {
            stdout: config.logging.stdout && atty::is(atty::Stream::Stdout),
            ..config.logging.clone()
        };

        let logging_guard = init_logging(&settings).map_err(CliError::LoggingInit)?;
        let service = Arc::new(LoggingService::from_settings(&config.logging));

        Ok(Self {
            logging_guard,
            config,
            factory: LevelStrategyFactory::tracing(),
            service,
        })
    }

    /// Get the effective configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("levelgate v{}", levelgate::VERSION);
        info!(
            level = %self.config.logging.level,
            stack_traces = %self.config.logging.stack_traces,
            "levelgate CLI: {} command",
            command
        );
    }

    /// Logger for `context` at the configured level and verbosity.
    pub fn logger(&self, context: &str) -> Result<ScopedLogger, CliError> {
        let wrapper = self.factory.create(self.config.logging.level, context)?;
        Ok(ScopedLogger::new(
            Arc::clone(&self.service),
            wrapper,
            self.config.logging.stack_traces,
        ))
    }

    /// The shared service, for counters.
    pub fn service(&self) -> &LoggingService {
        &self.service
    }

    /// Where file output goes.
    pub fn log_path(&self) -> PathBuf {
        self.config.logging.directory.join(&self.config.logging.file)
    }
}
