use image::{Rgb, RgbImage};
use ndarray::Array2;

use multithresh_core::frame::{Frame, Image};
use multithresh_core::io::image_io::{load_image, save_frame};

#[test]
fn test_save_load_roundtrip_png() {
    let data = Array2::from_shape_fn((4, 6), |(r, c)| (r * 40 + c * 7) as u8);
    let frame = Frame::new(data.clone());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");

    save_frame(&frame, &path).unwrap();
    match load_image(&path).unwrap() {
        Image::Gray(loaded) => {
            assert_eq!(loaded.width(), 6);
            assert_eq!(loaded.height(), 4);
            assert_eq!(loaded.data, data);
        }
        Image::Color(_) => panic!("grayscale PNG loaded as color"),
    }
}

#[test]
fn test_unknown_extension_falls_back_to_png() {
    let frame = Frame::new(Array2::from_elem((2, 2), 9u8));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classes.out");

    save_frame(&frame, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_color_png_loads_as_three_channels() {
    let mut img = RgbImage::new(3, 2);
    img.put_pixel(0, 0, Rgb([255, 0, 0]));
    img.put_pixel(2, 1, Rgb([10, 20, 30]));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("color.png");
    img.save(&path).unwrap();

    match load_image(&path).unwrap() {
        Image::Color(color) => {
            assert_eq!(color.red.data.dim(), (2, 3));
            assert_eq!(color.red.data[[0, 0]], 255);
            assert_eq!(color.green.data[[0, 0]], 0);
            assert_eq!(color.blue.data[[1, 2]], 30);
        }
        Image::Gray(_) => panic!("color PNG loaded as gray"),
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("nope.png")).is_err());
}
