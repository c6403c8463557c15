use crate::error::{Error, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, Rgba, RgbaImage};
use std::path::Path;

/// Width, height and tightly packed RGBA8 pixels.
pub struct RawImage(pub u32, pub u32, pub Vec<u8>);

impl From<RgbaImage> for RawImage {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        RawImage(width, height, img.into_raw())
    }
}

/// Decode any format the image crate knows and normalize it to RGBA8.
/// Content sniffing wins over the file extension.
pub fn load(path: &Path) -> Result<RgbaImage> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| Error::from_decode(path.to_path_buf(), e.into()))?;
    let img = reader
        .decode()
        .map_err(|e| Error::from_decode(path.to_path_buf(), e))?;
    Ok(img.into_rgba8())
}

/// Lanczos3 resample to `size`x`size`.
///
/// Filtering runs on premultiplied alpha so colour stored under fully
/// transparent pixels never reaches the visible ones.
pub fn square(src: &RgbaImage, size: u32) -> RawImage {
    let mut premultiplied = DynamicImage::ImageRgba8(src.clone()).into_rgba32f();
    for Rgba([r, g, b, a]) in premultiplied.pixels_mut() {
        *r *= *a;
        *g *= *a;
        *b *= *a;
    }

    let mut resized = imageops::resize(&premultiplied, size, size, FilterType::Lanczos3);
    for Rgba([r, g, b, a]) in resized.pixels_mut() {
        if *a > 0.0 {
            *r = (*r / *a).min(1.0);
            *g = (*g / *a).min(1.0);
            *b = (*b / *a).min(1.0);
        }
    }

    DynamicImage::ImageRgba32F(resized).into_rgba8().into()
}
