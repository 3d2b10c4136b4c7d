//! # Showdown CLI Library
//!
//! Command-line driver for the showdown table engine: a developer tool
//! for dealing sample hands, running scripted simulations, and inspecting
//! configuration. The rendering and transport layers of the surrounding
//! system live elsewhere; this binary only exercises the engine.
//!
//! The primary entry point is [`run`], which parses arguments and
//! dispatches to the matching subcommand handler.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["showdown", "deal", "--seed", "42"];
//! let code = showdown_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a single hand for inspection
//! - `sim`: Play scripted hands and record JSONL hand histories
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod ui;

use cli::{Commands, ShowdownCli};
use commands::{handle_cfg_command, handle_deal_command, handle_sim_command};

pub use error::CliError;

/// Parse `args` and run the matching subcommand, writing to the injected
/// streams. Returns the process exit code: 0 for success, 2 for errors.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "sim", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = ShowdownCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Showdown Table Engine CLI").is_err()
                        || writeln!(err, "Usage: showdown <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: showdown --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Deal { seed, seats } => match handle_deal_command(seed, seats, out) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
            Commands::Sim {
                hands,
                seats,
                seed,
                output,
            } => match handle_sim_command(hands, seats, seed, output, out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            },
        },
    }
}
