use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use ndarray::Array2;
use tracing::debug;

use crate::error::Result;
use crate::frame::{ColorFrame, Frame, Image};

/// Load an image file, keeping color images as three channels.
///
/// Alpha is dropped. Sources deeper than 8 bits are reduced to 8 bits.
pub fn load_image(path: &Path) -> Result<Image> {
    let img = image::open(path)?;
    let image = decode(&img);
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        channels = image.channels(),
        "Image loaded"
    );
    Ok(image)
}

/// Convert an already decoded image into the crate's representation.
pub fn decode(img: &DynamicImage) -> Image {
    if img.color().has_color() {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let mut red = Array2::<u8>::zeros((h as usize, w as usize));
        let mut green = Array2::<u8>::zeros((h as usize, w as usize));
        let mut blue = Array2::<u8>::zeros((h as usize, w as usize));

        for (col, row, pixel) in rgb.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            let idx = [row as usize, col as usize];
            red[idx] = r;
            green[idx] = g;
            blue[idx] = b;
        }

        Image::Color(ColorFrame {
            red: Frame::new(red),
            green: Frame::new(green),
            blue: Frame::new(blue),
        })
    } else {
        let gray = img.to_luma8();
        let (w, h) = gray.dimensions();
        let mut data = Array2::<u8>::zeros((h as usize, w as usize));
        for (col, row, pixel) in gray.enumerate_pixels() {
            data[[row as usize, col as usize]] = pixel.0[0];
        }
        Image::Gray(Frame::new(data))
    }
}

/// Save a frame as 8-bit grayscale, choosing the format from the file extension.
///
/// Pixel values are written as-is; see [`crate::quantize::stretch_classes`]
/// for making class-index maps visible.
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    let h = frame.height();
    let w = frame.width();

    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &val) in frame.data.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }

    img.save_with_format(path, format_for(path))?;
    debug!(path = %path.display(), "Frame saved");
    Ok(())
}

fn format_for(path: &Path) -> ImageFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => ImageFormat::Tiff,
        Some("bmp") => ImageFormat::Bmp,
        Some("pgm" | "pnm") => ImageFormat::Pnm,
        _ => ImageFormat::Png,
    }
}
