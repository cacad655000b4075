//! Shared image encoding helpers.

use crate::error::{BrandError, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageFormat, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;
use tracing::debug;

/// Encode as PNG into memory.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

/// Write a PNG, optionally running it through oxipng first.
pub fn save_png(img: &RgbaImage, path: &Path, optimize: bool) -> Result<()> {
    let mut data = encode_png(img)?;
    if optimize {
        let before = data.len();
        data = oxipng::optimize_from_memory(&data, &oxipng::Options::from_preset(2))
            .map_err(|e| BrandError::image(format!("oxipng failed: {e}")))?;
        debug!(path = %path.display(), before, after = data.len(), "optimized PNG");
    }
    std::fs::write(path, data)
        .map_err(|e| BrandError::file_io_with_source(path, "failed to write PNG", e))
}

/// Write a lossless WebP.
pub fn save_webp(img: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| BrandError::file_io_with_source(path, "failed to create WebP", e))?;
    WebPEncoder::new_lossless(BufWriter::new(file)).encode(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

/// Write a multi-size ICO with PNG-compressed entries.
pub fn save_ico(frames: &[RgbaImage], path: &Path) -> Result<()> {
    let encoded = frames
        .iter()
        .map(|img| {
            IcoFrame::as_png(
                img.as_raw(),
                img.width(),
                img.height(),
                ExtendedColorType::Rgba8,
            )
        })
        .collect::<image::ImageResult<Vec<_>>>()?;

    let file = File::create(path)
        .map_err(|e| BrandError::file_io_with_source(path, "failed to create ICO", e))?;
    IcoEncoder::new(BufWriter::new(file)).encode_images(&encoded)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn png_round_trip() {
        let img = RgbaImage::from_pixel(8, 8, Rgba([1, 2, 3, 255]));
        let data = encode_png(&img).unwrap();
        let back = image::load_from_memory(&data).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (8, 8));
        assert_eq!(back.get_pixel(3, 3).0, [1, 2, 3, 255]);
    }
}
