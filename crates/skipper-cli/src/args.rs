use std::path::PathBuf;

use clap::Parser;

/// Main command-line interface for the Skipper booking wizard
///
/// Skipper walks a user through the six steps of booking a waste-skip
/// delivery: location, waste types, skip size, permit check, delivery
/// date, and payment. The wizard reads commands interactively from stdin,
/// or from a script file for non-interactive runs, and keeps all booking
/// state in memory for the lifetime of the session.
#[derive(Parser)]
#[command(version, about, name = "sk")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Override the location lookup endpoint URL
    #[arg(long)]
    pub lookup_url: Option<String>,

    /// Read wizard commands from a file instead of stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}
