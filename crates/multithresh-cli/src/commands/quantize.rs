use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use multithresh_core::io::image_io::{load_image, save_frame};
use multithresh_core::quantize::{quantize_image, quantize_image_values, stretch_classes};

use super::parse_levels;

#[derive(Args)]
pub struct QuantizeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Ascending thresholds (e.g. "85,170")
    #[arg(short, long)]
    pub thresholds: String,

    /// Output value per class, one more than the thresholds (e.g. "0,128,255")
    #[arg(long)]
    pub values: Option<String>,

    /// Spread class indices over 0-255 so the output is visible
    #[arg(long, conflicts_with = "values")]
    pub stretch: bool,

    /// Output file path
    #[arg(short, long, default_value = "quantized.png")]
    pub output: PathBuf,
}

pub fn run(args: &QuantizeArgs) -> Result<()> {
    let image = load_image(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!("Loaded {}x{} image", image.width(), image.height());

    let thresholds = parse_levels(&args.thresholds, "threshold")?;

    let quantized = if let Some(ref values) = args.values {
        let values = parse_levels(values, "value")?;
        println!("Mapping {} classes to {:?}", thresholds.len() + 1, values);
        quantize_image_values(&image, &thresholds, &values)?
    } else {
        println!("Quantizing into {} classes", thresholds.len() + 1);
        let classes = quantize_image(&image, &thresholds)?;
        if args.stretch {
            stretch_classes(&classes)
        } else {
            classes
        }
    };

    save_frame(&quantized, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
