//! Host CLI configuration, loaded from CLI flags via `clap`.

use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "crash-capture-hostd", about = "Crash capture record export service")]
pub struct Config {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Serve the HTTP ingest/export API.
    Serve {
        /// Address to bind the HTTP API to.
        #[arg(long, default_value = "127.0.0.1:8872")]
        listen_addr: String,
    },
    /// Decode a record dumped to a file and print its text report.
    Decode {
        /// Path to the raw record dump.
        path: std::path::PathBuf,
    },
}

impl Config {
    pub fn from_args() -> Config {
        Config::parse()
    }
}
