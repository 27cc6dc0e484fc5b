//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use strictly_tictactoe::OpponentKind;

/// Strictly Tic-Tac-Toe - stateless move service
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Validates tic-tac-toe moves and answers with computer moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP move server
    Serve {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Strategy for computer moves
        #[arg(long, value_enum)]
        opponent: Option<OpponentKind>,
    },

    /// Process a single request body and print the response
    Respond {
        /// JSON request body; read from stdin when omitted
        body: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Strategy for computer moves
        #[arg(long, value_enum)]
        opponent: Option<OpponentKind>,
    },
}
