use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;

mod commands;

#[derive(Parser)]
#[command(name = "eagle-tools")]
#[command(about = "EAGLE file parser and inspection tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a high-level document summary
    Info {
        /// EAGLE file (.lbr, .sch or .brd) to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Show the layer table
    Layers {
        /// EAGLE file (.lbr, .sch or .brd) to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },

    /// List nets (schematic) or signals (board)
    Nets {
        /// EAGLE file (.sch or .brd) to inspect
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::Info { file } => commands::info::execute(&file),
        Commands::Layers { file } => commands::layers::execute(&file),
        Commands::Nets { file } => commands::nets::execute(&file),
    }
}
