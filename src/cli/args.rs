use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gemma-chat")]
#[command(about = "Local chat and English-to-Korean translation with Gemma models via Ollama")]
#[command(version)]
pub struct Args {
    /// API endpoint URL (default: http://localhost:11434)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name (skips the model picker)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Print replies as they are generated
    #[arg(short = 's', long)]
    pub stream: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
