use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultiThreshError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Image has no pixels")]
    EmptyInput,

    #[error("Class count {classes} out of range (supported: 2..=5)")]
    InvalidClassCount { classes: usize },

    #[error("Value vector has {values} entries, expected {} for {thresholds} thresholds", .thresholds + 1)]
    MismatchedValueVector { thresholds: usize, values: usize },

    #[error("Thresholds must be strictly ascending")]
    UnsortedThresholds,

    #[error("Gray-level alphabet size {levels} out of range (supported: 2..=256)")]
    InvalidLevels { levels: usize },

    #[error("Pixel value {value} outside the {levels}-level alphabet")]
    PixelOutOfRange { value: u8, levels: usize },

    #[error("Probabilities must be finite and non-negative")]
    InvalidDistribution,

    #[error("Cannot place {thresholds} thresholds in a {levels}-level alphabet")]
    TooFewLevels { thresholds: usize, levels: usize },
}

pub type Result<T> = std::result::Result<T, MultiThreshError>;
