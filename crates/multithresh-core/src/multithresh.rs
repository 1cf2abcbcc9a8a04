use tracing::info;

use crate::config::ThresholdConfig;
use crate::consts::DEFAULT_THRESHOLD_COUNT;
use crate::error::{MultiThreshError, Result};
use crate::frame::Image;
use crate::histogram::Histogram;
use crate::search::find_thresholds_with_progress;
use crate::tables::MomentTables;

/// Outcome of a multi-level threshold computation.
#[derive(Clone, Debug, PartialEq)]
pub struct ThresholdResult {
    /// Ascending thresholds. Level `t` belongs to the class ending at `t`.
    pub thresholds: Vec<u8>,
    /// Maximized objective: `sum(mu_k^2 / w_k)` over the classes.
    pub score: f64,
    /// Between-class variance `score - mu_T^2`, in squared gray levels.
    pub between_class_variance: f64,
}

/// Compute `n` thresholds (`n + 1` classes) maximizing between-class variance.
///
/// Color images are reduced to luminance first.
pub fn multithresh(image: &Image, n: usize) -> Result<Vec<u8>> {
    multithresh_with_config(image, &ThresholdConfig::with_thresholds(n)).map(|r| r.thresholds)
}

/// Classic two-class Otsu threshold.
pub fn multithresh_default(image: &Image) -> Result<Vec<u8>> {
    multithresh(image, DEFAULT_THRESHOLD_COUNT)
}

pub fn multithresh_with_config(image: &Image, config: &ThresholdConfig) -> Result<ThresholdResult> {
    multithresh_with_progress(image, config, |_| {})
}

/// Run the full histogram -> moment tables -> search chain.
///
/// `on_progress(done)` is forwarded to the search; see
/// [`crate::search::find_thresholds_with_progress`].
pub fn multithresh_with_progress(
    image: &Image,
    config: &ThresholdConfig,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Result<ThresholdResult> {
    config.validate()?;
    if image.is_empty() {
        return Err(MultiThreshError::EmptyInput);
    }

    let mut gray = image.to_gray();
    gray.levels = config.levels;

    let dist = Histogram::from_frame(&gray)?.probabilities()?;
    let tables = MomentTables::build(&dist);
    let best = find_thresholds_with_progress(&tables, config.classes(), config.search, on_progress)?;

    let mean = dist.mean();
    let mut thresholds: Vec<u8> = best.thresholds.iter().map(|&t| t as u8).collect();
    thresholds.sort_unstable();

    info!(
        thresholds = ?thresholds,
        score = best.score,
        "Multi-level thresholds found"
    );

    Ok(ThresholdResult {
        thresholds,
        score: best.score,
        between_class_variance: best.score - mean * mean,
    })
}
