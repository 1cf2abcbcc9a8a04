mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "multithresh", about = "Multi-level Otsu thresholding and quantization")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute optimal thresholds for an image
    Thresh(commands::thresh::ThreshArgs),
    /// Quantize an image with a given threshold vector
    Quantize(commands::quantize::QuantizeArgs),
    /// Print or save the default threshold config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Thresh(args) => commands::thresh::run(args),
        Commands::Quantize(args) => commands::quantize::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
