//! Master logo loading.
//!
//! All generators start from one source image. Raster formats go through
//! `image`; an `.svg` master is rasterized with usvg/resvg first.

use crate::error::{BrandError, Result};
use image::imageops::FilterType;
use image::RgbaImage;
use std::path::Path;
use tracing::debug;

/// Edge length SVG masters are rasterized at.
const SVG_RASTER_EDGE: u32 = 1024;

/// Load the master logo as RGBA.
pub fn load_master(path: &Path) -> Result<RgbaImage> {
    let is_svg = path
        .extension()
        .and_then(|x| x.to_str())
        .is_some_and(|x| x.eq_ignore_ascii_case("svg"));

    let img = if is_svg {
        rasterize_svg(path, SVG_RASTER_EDGE, SVG_RASTER_EDGE)?
    } else {
        image::open(path)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => {
                    BrandError::file_io_with_source(path, "failed to open master logo", io)
                }
                other => other.into(),
            })?
            .to_rgba8()
    };

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded master logo"
    );
    Ok(img)
}

/// Rasterize an SVG file onto a transparent `width`x`height` canvas,
/// scaled to fit and centered.
pub fn rasterize_svg(path: &Path, width: u32, height: u32) -> Result<RgbaImage> {
    let data = std::fs::read(path)
        .map_err(|e| BrandError::file_io_with_source(path, "failed to read SVG", e))?;

    let mut options = usvg::Options::default();
    options.resources_dir = path.parent().map(|p| p.to_path_buf());
    let tree = usvg::Tree::from_data(&data, &options)
        .map_err(|e| BrandError::svg(path, e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(BrandError::svg(path, "zero-sized SVG"));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BrandError::svg(path, "failed to allocate pixmap"))?;
    let scale = (width as f32 / size.width()).min(height as f32 / size.height());
    let x_offset = (width as f32 - size.width() * scale) / 2.0;
    let y_offset = (height as f32 - size.height() * scale) / 2.0;
    let transform =
        tiny_skia::Transform::from_scale(scale, scale).post_translate(x_offset, y_offset);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    RgbaImage::from_raw(width, height, pixmap.take())
        .ok_or_else(|| BrandError::svg(path, "rasterized buffer has wrong length"))
}

/// Error unless `img` is square with edge >= `min_edge`.
pub fn require_square(img: &RgbaImage, path: &Path, min_edge: u32) -> Result<()> {
    let (w, h) = img.dimensions();
    if w != h {
        return Err(BrandError::source_image(
            path,
            format!("must be square, got {}x{}", w, h),
        ));
    }
    if w < min_edge {
        return Err(BrandError::source_image(
            path,
            format!("must be at least {0}x{0}, got {1}x{1}", min_edge, w),
        ));
    }
    Ok(())
}

/// Lanczos3 resize to `edge`x`edge`, preserving alpha.
pub fn resize_square(img: &RgbaImage, edge: u32) -> RgbaImage {
    image::imageops::resize(img, edge, edge, FilterType::Lanczos3)
}

/// Scale to fit inside an `edge`x`edge` transparent canvas, centered,
/// preserving aspect ratio. Square inputs come back exactly `edge`-sized.
pub fn fit_square(img: &RgbaImage, edge: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    if w == h {
        return resize_square(img, edge);
    }
    let scale = edge as f32 / w.max(h) as f32;
    let sw = ((w as f32 * scale).round() as u32).max(1);
    let sh = ((h as f32 * scale).round() as u32).max(1);
    let scaled = image::imageops::resize(img, sw, sh, FilterType::Lanczos3);

    let mut canvas = RgbaImage::new(edge, edge);
    image::imageops::overlay(
        &mut canvas,
        &scaled,
        i64::from((edge - sw) / 2),
        i64::from((edge - sh) / 2),
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn blank(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn square_guard_accepts_square() {
        let img = blank(256, 256);
        assert!(require_square(&img, Path::new("logo.png"), 180).is_ok());
    }

    #[test]
    fn square_guard_rejects_rectangles_and_small_images() {
        let wide = blank(256, 128);
        assert!(require_square(&wide, Path::new("logo.png"), 16).is_err());

        let small = blank(64, 64);
        let err = require_square(&small, Path::new("logo.png"), 180).unwrap_err();
        assert!(err.to_string().contains("180x180"));
    }

    #[test]
    fn resize_square_hits_requested_edge() {
        let img = blank(300, 300);
        let out = resize_square(&img, 48);
        assert_eq!(out.dimensions(), (48, 48));
    }
}
