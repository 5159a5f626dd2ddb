use image::{ImageFormat, RgbaImage};
use std::io::Cursor;

/// Generates a uniform RGBA buffer.
pub fn uniform_rgba(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for _ in 0..width * height {
        img.extend_from_slice(&rgba);
    }
    img
}

/// Generates a uniform gray buffer at the given luma.
pub fn uniform_gray(width: usize, height: usize, luma: u8) -> Vec<u8> {
    uniform_rgba(width, height, [luma, luma, luma, 255])
}

/// Generates a neutral gray buffer whose central band of rows (covering half
/// of all pixels) is strongly reddish.
pub fn reddish_center(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height >= 4, "image must be at least 4 rows tall");
    let mut img = Vec::with_capacity(width * height * 4);
    let y0 = height / 4;
    let y1 = y0 + height / 2;
    for y in 0..height {
        let pixel = if (y0..y1).contains(&y) {
            [200u8, 100, 80, 255]
        } else {
            [128u8, 128, 128, 255]
        };
        for _ in 0..width {
            img.extend_from_slice(&pixel);
        }
    }
    img
}

/// Generates strong vertical banding: luma alternates per row, constant
/// along each row.
pub fn row_banded(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let v = if y % 2 == 0 { 40u8 } else { 215u8 };
        for _ in 0..width {
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// Transpose of `row_banded`: luma alternates per column.
pub fn column_banded(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = Vec::with_capacity(width * height * 4);
    for _y in 0..height {
        for x in 0..width {
            let v = if x % 2 == 0 { 40u8 } else { 215u8 };
            img.extend_from_slice(&[v, v, v, 255]);
        }
    }
    img
}

/// Encode raw RGBA samples as PNG bytes for the decode path.
pub fn encode_png(width: usize, height: usize, rgba: Vec<u8>) -> Vec<u8> {
    let img = RgbaImage::from_raw(width as u32, height as u32, rgba)
        .expect("raw samples must match dimensions");
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, ImageFormat::Png)
        .expect("PNG encoding of a valid buffer cannot fail");
    bytes.into_inner()
}
