//! Command-line interface for velha.

use clap::{Parser, Subcommand};

/// Velha - 4x4 tic-tac-toe against a game-state store
#[derive(Parser, Debug)]
#[command(name = "velha")]
#[command(about = "Play 4x4 tic-tac-toe against a game-state store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Store endpoint URL (overrides config and VELHA_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a local store endpoint backed by memory
    Serve {
        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Print the stored board, turn and scores
    Show,

    /// Place the current player's mark (square 0-15, row by row)
    Play {
        /// Square index
        index: usize,
    },

    /// Empty the board, keeping scores
    Restart,
}
