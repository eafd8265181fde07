use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tl", about = concat!("tasklist v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read settings from this file instead of the default config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with this task already in the list (repeatable)
    #[arg(short = 't', long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate tasks as if they were added one after another
    Check(CheckArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Task texts, in the order they would be added
    #[arg(required = true, value_name = "TEXT")]
    pub items: Vec<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
