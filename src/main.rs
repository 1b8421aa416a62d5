//! Binary entrypoint for the `idforge` CLI.

use std::process::ExitCode;

use idforge::config::Config;

fn main() -> ExitCode {
    // A missing .env is fine; the environment alone is enough.
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    idforge::logging::init(&config.log_filter);

    match idforge::run_with_config(std::env::args(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
