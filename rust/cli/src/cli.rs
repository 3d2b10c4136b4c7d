//! Command-line argument definitions for the `showdown` binary.

use clap::{Parser, Subcommand};

/// Developer driver for the showdown table engine.
#[derive(Debug, Parser)]
#[command(name = "showdown", version, about = "Texas Hold'em table engine driver")]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deal one hand and print every seat's hole cards plus the board
    Deal {
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats at the table (2-9, default from config)
        #[arg(long)]
        seats: Option<usize>,
    },
    /// Play N scripted hands to completion, optionally recording JSONL
    Sim {
        /// Number of hands to play
        #[arg(long)]
        hands: u64,
        /// Number of seats at the table (2-9, default from config)
        #[arg(long)]
        seats: Option<usize>,
        /// Base RNG seed (hand i plays with seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Path to append hand records to (JSONL)
        #[arg(long)]
        output: Option<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
