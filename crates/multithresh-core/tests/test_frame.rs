mod common;

use ndarray::Array2;

use common::row_frame;
use multithresh_core::frame::{ColorFrame, Frame, Image};
use multithresh_core::MultiThreshError;

#[test]
fn test_frame_dimensions() {
    let frame = Frame::new(Array2::<u8>::zeros((3, 5)));
    assert_eq!(frame.height(), 3);
    assert_eq!(frame.width(), 5);
    assert_eq!(frame.pixel_count(), 15);
    assert_eq!(frame.levels, 256);
    assert!(!frame.is_empty());
}

#[test]
fn test_with_levels_validates_alphabet() {
    let data = Array2::<u8>::zeros((2, 2));
    assert!(Frame::with_levels(data.clone(), 4).is_ok());
    assert!(matches!(
        Frame::with_levels(data.clone(), 1),
        Err(MultiThreshError::InvalidLevels { levels: 1 })
    ));
    assert!(Frame::with_levels(data, 300).is_err());
}

#[test]
fn test_luminance_weights() {
    let color = ColorFrame {
        red: row_frame(&[255, 0, 0, 255, 100]),
        green: row_frame(&[0, 255, 0, 255, 100]),
        blue: row_frame(&[0, 0, 255, 255, 100]),
    };
    let gray = color.luminance();
    let values: Vec<u8> = gray.data.iter().copied().collect();
    // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
    assert_eq!(values, vec![76, 150, 29, 255, 100]);
}

#[test]
fn test_image_channels_and_gray_reduction() {
    let gray = Image::from(row_frame(&[1, 2, 3]));
    assert_eq!(gray.channels(), 1);
    assert_eq!(gray.to_gray(), row_frame(&[1, 2, 3]));

    let color = Image::from(ColorFrame {
        red: row_frame(&[10]),
        green: row_frame(&[10]),
        blue: row_frame(&[10]),
    });
    assert_eq!(color.channels(), 3);
    assert_eq!((color.width(), color.height()), (1, 1));
    assert_eq!(color.to_gray().data[[0, 0]], 10);
}

#[test]
fn test_empty_image() {
    let image = Image::from(Frame::new(Array2::<u8>::zeros((0, 0))));
    assert!(image.is_empty());
}
