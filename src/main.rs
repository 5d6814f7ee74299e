//! CLI entry point for the artfetch tool.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use artfetch_core::{
    BatchStats, CommonsClient, HttpClient, MIN_IMAGE_WIDTH, parse_input, process_batch,
};
use clap::Parser;
use tracing::{debug, info};

mod cli;

use cli::Args;

/// Fixed output directory for saved images, relative to the working directory.
const OUTPUT_DIR: &str = "artwork_images";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Artfetch starting");

    // Read input: from the positional argument or one line from stdin
    let input_line = match args.query {
        Some(query) => query,
        None => read_query_line()?,
    };

    let batch = parse_input(&input_line);

    if batch.is_empty() {
        info!("No textbook(artwork,...) groups found in input");
        return Ok(());
    }

    info!(
        artworks = batch.len(),
        textbooks = batch.groups.len(),
        "Parsed input"
    );

    let source = CommonsClient::new()?;
    let client = HttpClient::new();
    let output_dir = PathBuf::from(OUTPUT_DIR);

    let reports = process_batch(&batch, &source, &client, &output_dir, MIN_IMAGE_WIDTH).await;

    let stats = BatchStats::from_reports(&reports);
    info!(
        saved = stats.saved(),
        not_found = stats.not_found(),
        failed = stats.failed(),
        total = stats.total(),
        "Batch complete"
    );

    Ok(())
}

/// Reads the query line from stdin, prompting with an example when attached
/// to a terminal.
fn read_query_line() -> Result<String> {
    if io::stdin().is_terminal() {
        print!(
            "Enter query (e.g. textbook1(Creation of Adam Michelangelo,Fountaine Duchamp),textbook2(Mona Lisa Vinci)): "
        );
        io::stdout().flush()?;
    }

    let mut buffer = String::new();
    io::stdin().read_line(&mut buffer)?;
    Ok(buffer)
}
