//! Skipper CLI Application
//!
//! Interactive command-line wizard for booking a waste-skip delivery.

mod args;
mod cli;
mod renderer;
mod wizard;

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use cli::Wizard;
use log::info;
use renderer::TerminalRenderer;
use skipper_core::{BookingFlow, HttpLocationLookup};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { no_color, lookup_url, script } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);
    let lookup = match lookup_url {
        Some(url) => HttpLocationLookup::with_base_url(url),
        None => HttpLocationLookup::new(),
    };

    info!("Skipper started");

    let mut wizard = Wizard::new(BookingFlow::new(), renderer, Box::new(lookup));

    match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script file {}", path.display()))?;
            wizard.run(BufReader::new(file)).await
        }
        None => wizard.run(BufReader::new(io::stdin())).await,
    }
}
