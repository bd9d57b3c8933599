//! flexchat - a terminal chat interface with flexible message bubbles

mod app;
mod bubble_layout;
mod editing;
mod receipts;
mod text_measure;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "flexchat")]
#[command(about = "A terminal chat interface with flexible message bubbles")]
#[command(version)]
struct Args {
    /// Title shown in the app bar
    #[arg(short, long, default_value = "Chat")]
    title: String,

    /// Delay before a sent message is marked as read, in milliseconds
    #[arg(long, default_value_t = 1500)]
    read_delay_ms: u64,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Run the app
    let mut app = app::App::new(args.title, args.read_delay_ms)?;
    app.run().await
}
