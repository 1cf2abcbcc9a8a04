use ndarray::{Array2, Axis};
use rayon::prelude::*;
use tracing::debug;

use crate::consts::{DEFAULT_LEVELS, MIN_LEVELS, PARALLEL_PIXEL_THRESHOLD};
use crate::error::{MultiThreshError, Result};
use crate::frame::{Frame, Image};

/// Replace each pixel by the number of thresholds it strictly exceeds.
///
/// A pixel equal to a threshold stays in the lower class. The output uses a
/// `thresholds.len() + 1` level alphabet (class indices `0..=K`).
pub fn quantize(frame: &Frame, thresholds: &[u8]) -> Result<Frame> {
    let classes = thresholds.len() + 1;
    if classes > DEFAULT_LEVELS {
        return Err(MultiThreshError::InvalidLevels { levels: classes });
    }

    let data = map_pixels(&frame.data, |p| {
        thresholds.iter().filter(|&&t| p > t).count() as u8
    });
    debug!(thresholds = ?thresholds, "Quantized to class indices");

    Ok(Frame {
        data,
        levels: classes.max(MIN_LEVELS),
    })
}

/// Replace each pixel by an entry of `values`, one per class.
///
/// `thresholds` must be strictly ascending and `values` must hold one more
/// entry than `thresholds`. A pixel starts at `values[K]`; each threshold it
/// lies strictly below, scanned in ascending order, overwrites the pick with
/// that threshold's value, so the highest qualifying index wins.
pub fn quantize_values(frame: &Frame, thresholds: &[u8], values: &[u8]) -> Result<Frame> {
    if values.len() != thresholds.len() + 1 {
        return Err(MultiThreshError::MismatchedValueVector {
            thresholds: thresholds.len(),
            values: values.len(),
        });
    }
    if !is_strictly_ascending(thresholds) {
        return Err(MultiThreshError::UnsortedThresholds);
    }

    let k = thresholds.len();
    let data = map_pixels(&frame.data, |p| {
        let mut out = values[k];
        for (&t, &v) in thresholds.iter().zip(values) {
            if p < t {
                out = v;
            }
        }
        out
    });
    debug!(thresholds = ?thresholds, values = ?values, "Quantized to mapped values");

    Ok(Frame::new(data))
}

/// [`quantize`] for any channel layout; color images are reduced to luminance.
pub fn quantize_image(image: &Image, thresholds: &[u8]) -> Result<Frame> {
    quantize(&image.to_gray(), thresholds)
}

/// [`quantize_values`] for any channel layout; color images are reduced to luminance.
pub fn quantize_image_values(image: &Image, thresholds: &[u8], values: &[u8]) -> Result<Frame> {
    quantize_values(&image.to_gray(), thresholds, values)
}

/// Spread class indices `0..levels` evenly over `0..=255` for display.
pub fn stretch_classes(frame: &Frame) -> Frame {
    let top = (frame.levels - 1).max(1) as u32;
    let data = map_pixels(&frame.data, |c| ((c as u32 * 255 + top / 2) / top).min(255) as u8);
    Frame::new(data)
}

fn is_strictly_ascending(thresholds: &[u8]) -> bool {
    thresholds.windows(2).all(|w| w[0] < w[1])
}

/// Apply `f` to every pixel, row-parallel for large images.
fn map_pixels(data: &Array2<u8>, f: impl Fn(u8) -> u8 + Sync) -> Array2<u8> {
    let (h, w) = data.dim();
    if h * w < PARALLEL_PIXEL_THRESHOLD {
        return data.mapv(|p| f(p));
    }

    let mut out = Array2::<u8>::zeros((h, w));
    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(data.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(mut dst, src)| {
            for (d, &s) in dst.iter_mut().zip(src.iter()) {
                *d = f(s);
            }
        });
    out
}
