//! Command-line arguments for the server binary

use clap::Parser;

/// Multi-course study planner API server
#[derive(Parser, Debug)]
#[command(name = "study-planner", version, about)]
pub struct Cli {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,
}
