use ndarray::Array2;

use crate::consts::{DEFAULT_LEVELS, LUMINANCE_B, LUMINANCE_G, LUMINANCE_R, MIN_LEVELS};
use crate::error::{MultiThreshError, Result};

/// A single-channel intensity image.
/// Pixel values are gray levels in `[0, levels)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<u8>,
    /// Size of the gray-level alphabet the pixels are drawn from
    pub levels: usize,
}

impl Frame {
    /// Wrap an 8-bit grid (256 gray levels).
    pub fn new(data: Array2<u8>) -> Self {
        Self {
            data,
            levels: DEFAULT_LEVELS,
        }
    }

    /// Wrap a grid whose pixels use a smaller alphabet, e.g. a class-index map.
    pub fn with_levels(data: Array2<u8>, levels: usize) -> Result<Self> {
        if !(MIN_LEVELS..=DEFAULT_LEVELS).contains(&levels) {
            return Err(MultiThreshError::InvalidLevels { levels });
        }
        Ok(Self { data, levels })
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Color image composed of separate channel frames.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorFrame {
    pub red: Frame,
    pub green: Frame,
    pub blue: Frame,
}

impl ColorFrame {
    /// Compute luminance using ITU-R BT.601 weights.
    ///
    /// Values are rounded and clamped to the red channel's alphabet.
    pub fn luminance(&self) -> Frame {
        let levels = self.red.levels;
        let max = (levels - 1) as f32;
        let (h, w) = self.red.data.dim();
        let mut data = Array2::<u8>::zeros((h, w));

        for row in 0..h {
            for col in 0..w {
                let y = LUMINANCE_R * self.red.data[[row, col]] as f32
                    + LUMINANCE_G * self.green.data[[row, col]] as f32
                    + LUMINANCE_B * self.blue.data[[row, col]] as f32;
                data[[row, col]] = y.round().clamp(0.0, max) as u8;
            }
        }

        Frame { data, levels }
    }
}

/// An input image with any supported channel layout.
#[derive(Clone, Debug, PartialEq)]
pub enum Image {
    Gray(Frame),
    Color(ColorFrame),
}

impl Image {
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray(_) => 1,
            Self::Color(_) => 3,
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Self::Gray(f) => f.width(),
            Self::Color(c) => c.red.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::Gray(f) => f.height(),
            Self::Color(c) => c.red.height(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Gray(f) => f.is_empty(),
            Self::Color(c) => c.red.is_empty(),
        }
    }

    /// Reduce to a single intensity channel. Gray images are cloned as-is;
    /// color images go through [`ColorFrame::luminance`].
    pub fn to_gray(&self) -> Frame {
        match self {
            Self::Gray(f) => f.clone(),
            Self::Color(c) => c.luminance(),
        }
    }
}

impl From<Frame> for Image {
    fn from(frame: Frame) -> Self {
        Self::Gray(frame)
    }
}

impl From<ColorFrame> for Image {
    fn from(color: ColorFrame) -> Self {
        Self::Color(color)
    }
}
