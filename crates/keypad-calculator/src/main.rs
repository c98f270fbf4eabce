//! keypad-calc: terminal keypad calculator
//!
//! ## Usage
//!
//! ```bash
//! keypad-calc                         # Interactive keypad
//! keypad-calc tui --no-help           # Same, without the help footer
//! keypad-calc press 1 2 x 3 =         # Replay presses, print the display
//! keypad-calc press -f json 5 / 0 =   # JSON output
//! ```

use std::process::ExitCode;

use clap::Parser;
use keypad_calculator::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::AppResult,
    logging::{self, LogSink},
    runner,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let config = cli.build_config()?;

    match cli.command {
        Some(Commands::Press(args)) => {
            logging::init(&config, cli.verbose, LogSink::Stderr)?;
            println!("{}", runner::run_press(&config, &args.sequence())?);
            Ok(())
        }
        Some(Commands::Tui(_)) | None => {
            logging::init(&config, cli.verbose, LogSink::Silent)?;
            run_tui(&config)
        }
    }
}

#[cfg(feature = "tui")]
fn run_tui(config: &AppConfig) -> AppResult<()> {
    runner::run_tui(config)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &AppConfig) -> AppResult<()> {
    Err(keypad_calculator::error::AppError::FeatureDisabled { feature: "tui" })
}
