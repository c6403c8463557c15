use crate::img::RawImage;
use ::png::{BitDepth, ColorType, Encoder, EncodingError};

/// Encode an RGBA8 bitmap as a non-interlaced 8-bit RGBA PNG.
pub fn encode_img(img: &RawImage) -> Result<Vec<u8>, EncodingError> {
    let RawImage(width, height, pixel_buf) = img;
    let mut bytes = Vec::new();

    let mut encoder = Encoder::new(&mut bytes, *width, *height);
    encoder.set_color(ColorType::Rgba); // keep alpha even for fully opaque icons
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixel_buf)?;
    writer.finish()?;

    Ok(bytes)
}
