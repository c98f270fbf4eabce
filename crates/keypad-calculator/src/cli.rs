//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{AppConfig, LogFormat, OutputFormat};
use crate::error::AppResult;

/// Keypad calculator: a button-driven four-function calculator
#[derive(Parser, Debug)]
#[command(name = "keypad-calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// YAML configuration file
    #[arg(long, value_name = "FILE", global = true, env = "KEYPAD_CALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive terminal keypad
    Tui(TuiArgs),

    /// Replay button presses and print the final display
    ///
    /// Labels are keypad captions or their ASCII aliases, for example
    /// `keypad-calc press 1 2 x 3 =` or `keypad-calc press "1 2 * 3 ="`.
    Press(PressArgs),
}

/// Arguments for the tui command
#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Hide the help footer
    #[arg(long)]
    pub no_help: bool,
}

/// Arguments for the press command
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Button labels, pressed in order
    #[arg(required = true, value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl PressArgs {
    /// All labels as one whitespace-separated sequence
    #[must_use]
    pub fn sequence(&self) -> String {
        self.labels.join(" ")
    }
}

impl Cli {
    /// Builds the effective configuration: file values first, then flags
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed.
    pub fn build_config(&self) -> AppResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(path) = &self.log_file {
            config = config.with_log_file(path);
        }
        if let Some(format) = self.log_format {
            config = config.with_log_format(format);
        }
        match &self.command {
            Some(Commands::Tui(args)) if args.no_help => {
                config = config.with_show_help(false);
            }
            Some(Commands::Press(args)) => {
                if let Some(format) = args.format {
                    config = config.with_output(format);
                }
            }
            _ => {}
        }
        Ok(config)
    }
}
