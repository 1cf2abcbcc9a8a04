use rayon::prelude::*;
use tracing::debug;

use crate::consts::{DEFAULT_LEVELS, MIN_LEVELS, PARALLEL_PIXEL_THRESHOLD, PROBABILITY_TOLERANCE};
use crate::error::{MultiThreshError, Result};
use crate::frame::Frame;

/// Pixel counts per gray level.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub counts: Vec<u64>,
    pub total: u64,
}

impl Histogram {
    /// Count every pixel of `frame` into `frame.levels` bins.
    ///
    /// Fails with `PixelOutOfRange` if a pixel does not belong to the alphabet.
    pub fn from_frame(frame: &Frame) -> Result<Self> {
        let levels = frame.levels;
        if !(MIN_LEVELS..=DEFAULT_LEVELS).contains(&levels) {
            return Err(MultiThreshError::InvalidLevels { levels });
        }

        let (h, w) = frame.data.dim();
        let mut counts = if h * w >= PARALLEL_PIXEL_THRESHOLD {
            count_parallel(frame)
        } else {
            count_sequential(frame)
        };

        if let Some(value) = (levels..DEFAULT_LEVELS).find(|&v| counts[v] > 0) {
            return Err(MultiThreshError::PixelOutOfRange {
                value: value as u8,
                levels,
            });
        }

        counts.truncate(levels);
        let total: u64 = counts.iter().sum();
        debug!(levels, total, "Histogram built");

        Ok(Self { counts, total })
    }

    pub fn levels(&self) -> usize {
        self.counts.len()
    }

    /// Normalize counts into a probability distribution.
    pub fn probabilities(&self) -> Result<ProbabilityDistribution> {
        if self.total == 0 {
            return Err(MultiThreshError::EmptyInput);
        }
        let size = self.total as f64;
        let dist = ProbabilityDistribution {
            prob: self.counts.iter().map(|&c| c as f64 / size).collect(),
        };
        debug_assert!((dist.sum() - 1.0).abs() < PROBABILITY_TOLERANCE);
        Ok(dist)
    }
}

/// Full 8-bit bin counts; bins past the frame's alphabet are checked afterwards.
fn count_sequential(frame: &Frame) -> Vec<u64> {
    let mut counts = vec![0u64; DEFAULT_LEVELS];
    for &v in frame.data.iter() {
        counts[v as usize] += 1;
    }
    counts
}

/// Row-parallel counting with per-row partial histograms merged at the end.
fn count_parallel(frame: &Frame) -> Vec<u64> {
    let h = frame.data.nrows();
    (0..h)
        .into_par_iter()
        .fold(
            || vec![0u64; DEFAULT_LEVELS],
            |mut acc, row| {
                for &v in frame.data.row(row).iter() {
                    acc[v as usize] += 1;
                }
                acc
            },
        )
        .reduce(
            || vec![0u64; DEFAULT_LEVELS],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}

/// Probability of each gray level: one non-negative entry per level, summing to 1.
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilityDistribution {
    prob: Vec<f64>,
}

impl ProbabilityDistribution {
    /// Build a distribution directly, e.g. for a toy alphabet.
    ///
    /// Entries must be non-negative and the alphabet must have 2..=256 levels.
    /// The sum is not renormalized.
    pub fn from_probabilities(prob: Vec<f64>) -> Result<Self> {
        let levels = prob.len();
        if !(MIN_LEVELS..=DEFAULT_LEVELS).contains(&levels) {
            return Err(MultiThreshError::InvalidLevels { levels });
        }
        if prob.iter().any(|p| !p.is_finite() || *p < 0.0) {
            return Err(MultiThreshError::InvalidDistribution);
        }
        Ok(Self { prob })
    }

    pub fn levels(&self) -> usize {
        self.prob.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prob
    }

    pub fn sum(&self) -> f64 {
        self.prob.iter().sum()
    }

    /// Mean gray level of the whole distribution.
    pub fn mean(&self) -> f64 {
        self.prob
            .iter()
            .enumerate()
            .map(|(k, p)| k as f64 * p)
            .sum()
    }
}
