//! rs9x - SNES emulator port, SDL2 frontend
//!
//! Main entry point: loads the configuration, brings up the display and
//! runs the frame loop.

use std::process;

use rs9x_core::{config, Config, ConfigError};
use rs9x_frontend::Runner;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::load(std::env::args().skip(1), false) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            print!("{}", config::help());
            return;
        }
        Err(err @ ConfigError::NoRomSpecified) => {
            eprintln!("rs9x: {err}");
            eprintln!("You need to specify a ROM, like this:");
            eprint!("{}", config::usage());
            process::exit(2);
        }
        Err(err) => {
            eprintln!("rs9x: {err}");
            eprint!("{}", config::usage());
            process::exit(2);
        }
    };

    tracing::info!("starting rs9x");

    if let Err(err) = run(config) {
        tracing::error!(%err, "fatal error");
        process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let mut runner = Runner::new(config)?;
    // TODO: Runner::attach_core with the snes9x core port once it lands.
    runner.run()?;
    Ok(())
}
