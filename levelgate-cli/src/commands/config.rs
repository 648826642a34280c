//! Show or save the effective configuration.

use std::path::Path;

use levelgate::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the config command.
///
/// Prints the configuration after command-line overrides. With `save`, also
/// writes it to `path` (or the default location).
pub fn run(config: &ConfigFile, path: Option<&Path>, save: bool) -> Result<(), CliError> {
    print!("{}", config.to_ini_string());

    if save {
        match path {
            Some(path) => config.save_to(path)?,
            None => config.save()?,
        }
        let target = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
        println!();
        println!("Saved to {}", target.display());
    }
    Ok(())
}
