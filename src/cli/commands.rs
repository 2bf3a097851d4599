//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "morning-routine")]
#[command(about = "Morning checklist, affirmations and three journal sentences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file overriding title, checklist or affirmations
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for affirmation picks (reproducible output)
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,

    /// Append logs to this file (RUST_LOG controls the level)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the checklist
    Checklist,

    /// Print one random affirmation
    Affirmation,
}
