use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_LEVELS, DEFAULT_THRESHOLD_COUNT, MAX_CLASSES, MIN_CLASSES, MIN_LEVELS};
use crate::error::{MultiThreshError, Result};

/// How the threshold search spreads work across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Parallel once the search space is large enough to pay for it.
    #[default]
    Auto,
    /// Single thread, plain enumeration order.
    Sequential,
    /// Split the first threshold across the Rayon pool.
    Parallel,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Sequential => write!(f, "Sequential"),
            Self::Parallel => write!(f, "Parallel"),
        }
    }
}

/// Settings for one multi-level threshold computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Number of thresholds to find (1..=4). Produces `thresholds + 1` classes.
    #[serde(default = "default_thresholds")]
    pub thresholds: usize,
    /// Gray-level alphabet size of the input (2..=256).
    #[serde(default = "default_levels")]
    pub levels: usize,
    /// Threading strategy for the search.
    #[serde(default)]
    pub search: SearchMode,
}

fn default_thresholds() -> usize {
    DEFAULT_THRESHOLD_COUNT
}
fn default_levels() -> usize {
    DEFAULT_LEVELS
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLD_COUNT,
            levels: DEFAULT_LEVELS,
            search: SearchMode::default(),
        }
    }
}

impl ThresholdConfig {
    pub fn with_thresholds(thresholds: usize) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Number of classes the thresholds induce.
    pub fn classes(&self) -> usize {
        self.thresholds + 1
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_CLASSES..=MAX_CLASSES).contains(&self.classes()) {
            return Err(MultiThreshError::InvalidClassCount {
                classes: self.classes(),
            });
        }
        if !(MIN_LEVELS..=DEFAULT_LEVELS).contains(&self.levels) {
            return Err(MultiThreshError::InvalidLevels {
                levels: self.levels,
            });
        }
        Ok(())
    }
}
