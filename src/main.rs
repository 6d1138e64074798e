use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gemma_chat::cli::Args;
use gemma_chat::cli::commands::chat;
use gemma_chat::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging();

    let default_output = OutputConfig::default();
    output::init(OutputConfig {
        no_color: args.no_color || default_output.no_color,
    });

    let options = chat::ChatOptions {
        endpoint: args.endpoint,
        model: args.model,
        stream: args.stream,
    };
    chat::run_chat(options).await
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
