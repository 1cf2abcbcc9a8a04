use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use multithresh_core::io::image_io::{load_image, save_frame};
use multithresh_core::multithresh::multithresh_with_progress;
use multithresh_core::quantize::{quantize_image, quantize_image_values, stretch_classes};
use multithresh_core::search::first_threshold_candidates;
use multithresh_core::{SearchMode, ThresholdConfig};

use super::parse_levels;

#[derive(Args)]
pub struct ThreshArgs {
    /// Input image file
    pub file: PathBuf,

    /// Number of thresholds to compute (1-4)
    #[arg(short = 'n', long)]
    pub thresholds: Option<usize>,

    /// Gray-level alphabet size of the input (2-256)
    #[arg(long)]
    pub levels: Option<usize>,

    /// Threshold config file (TOML); command-line flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run the search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Quantize the image with the found thresholds and save it here
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output value per class when quantizing (e.g. "0,128,255")
    #[arg(long, requires = "output")]
    pub values: Option<String>,

    /// Spread class indices over 0-255 so the output is visible
    #[arg(long, requires = "output", conflicts_with = "values")]
    pub stretch: bool,
}

pub fn run(args: &ThreshArgs) -> Result<()> {
    let config = build_config(args)?;
    config.validate()?;

    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    crate::summary::print_thresh_summary(&args.file, &image, &config);

    let pb = ProgressBar::new(first_threshold_candidates(config.levels, config.thresholds) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:10} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Searching");

    let result = multithresh_with_progress(&image, &config, |done| {
        pb.set_position(done as u64);
    })?;
    pb.finish_with_message("Done");

    crate::summary::print_thresh_result(&result);

    if let Some(ref output) = args.output {
        let quantized = if let Some(ref values) = args.values {
            let values = parse_levels(values, "value")?;
            quantize_image_values(&image, &result.thresholds, &values)?
        } else {
            let classes = quantize_image(&image, &result.thresholds)?;
            if args.stretch {
                stretch_classes(&classes)
            } else {
                classes
            }
        };
        save_frame(&quantized, output)?;
        println!("Saved to {}", output.display());
    }

    Ok(())
}

fn build_config(args: &ThreshArgs) -> Result<ThresholdConfig> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid threshold config")?
    } else {
        ThresholdConfig::default()
    };

    if let Some(n) = args.thresholds {
        config.thresholds = n;
    }
    if let Some(levels) = args.levels {
        config.levels = levels;
    }
    if args.sequential {
        config.search = SearchMode::Sequential;
    }
    Ok(config)
}
