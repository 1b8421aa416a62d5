//! Core library entry for `idforge`.
//!
//! The [`engine`] renders and validates custom item ID formats. The
//! [`store`] owns the persisted formats and advances their counters. The
//! rest wires both to a command line.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod engine;
pub mod format;
pub mod logging;
pub mod ports;
pub mod store;

use clap::Parser;

use crate::config::Config;

/// Run the CLI with the provided arguments, reading configuration from the environment.
///
/// # Errors
///
/// Returns an error string when configuration is invalid, argument parsing
/// fails, or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let config = Config::from_env()?;
    run_with_config(args, &config)
}

/// Run the CLI with the provided arguments and configuration.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run_with_config<I, T>(args: I, config: &Config) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command, config)
}

#[cfg(test)]
mod tests {
    use super::run_with_config;
    use crate::config::Config;

    fn config_at(name: &str) -> Config {
        let root = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&root);
        Config { store_root: root, fixed_now: None, log_filter: "warn".to_string() }
    }

    #[test]
    fn run_executes_show() {
        let config = config_at("idforge_lib_run_show");
        assert!(run_with_config(["idforge", "show"], &config).is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let config = config_at("idforge_lib_run_unknown");
        assert!(run_with_config(["idforge", "unknown"], &config).is_err());
    }
}
