//! Main entry point for the tile diagram tool.
//!
//! Loads the configuration, builds a session around a fresh grid and feeds it
//! commands from a script file or from stdin.

use std::path::PathBuf;

use clap::Parser;
use log::info;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use config::file::DiagramConfig;
use session::command::HELP;
use session::{Clipboard, Session};

pub mod config;
mod diagram;
mod error;
mod render;
mod session;

#[derive(Parser)]
#[command(name = "tile-diagram", version, about = "Draw domino tile diagrams on a checkerboard and export them as SVG")]
struct Cli {
    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of columns.
    #[arg(long)]
    width: Option<usize>,
    /// Number of rows.
    #[arg(long)]
    height: Option<usize>,
    /// Side of one square in SVG units.
    #[arg(long)]
    cell_size: Option<u32>,
    /// Run commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
    /// Write the final diagram here once the commands are done.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Program that receives the SVG on stdin for `copy`.
    #[arg(long, env = "TILE_DIAGRAM_CLIPBOARD")]
    clipboard_command: Option<String>,
}

impl Cli {
    /// Command-line values win over the configuration file.
    fn apply(&self, config: &mut DiagramConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(cell_size) = self.cell_size {
            config.cell_size = cell_size;
        }
        if let Some(command) = &self.clipboard_command {
            config.clipboard_command = Some(command.clone());
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DiagramConfig::load(path)?,
        None => DiagramConfig::default(),
    };
    cli.apply(&mut config);

    let clipboard = Clipboard::from_command_line(config.clipboard_command.as_deref());
    let (copy_tx, mut copy_rx) = mpsc::unbounded_channel();
    let mut session = Session::new(&config, clipboard, copy_tx)?;

    match &cli.script {
        Some(path) => {
            info!("[Main] Running script {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            session::runner::run(&mut session, BufReader::new(file), &mut copy_rx).await?;
        }
        None => {
            println!("{}", HELP);
            session::runner::run(&mut session, BufReader::new(tokio::io::stdin()), &mut copy_rx).await?;
        }
    }

    if let Some(path) = &cli.output {
        session.save(path).await?;
        println!("Diagram written to {}", path.display());
    }
    Ok(())
}
