use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// Import, inspect and convert persona lists stored as XML, JSON or CSV.
#[derive(Debug, Parser)]
#[command(name = "herencia-dto", version, about)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every persona in a file.
    Show {
        input: PathBuf,
    },
    /// Convert a persona file to another format, picked from the output extension.
    Convert {
        input: PathBuf,
        output: PathBuf,
    },
}
