//! Gradient and glow fills.
//!
//! Plain per-pixel loops; canvases here top out around 1920x1080 so there
//! is nothing to optimize.

use crate::color::{lerp, Rgb};
use crate::error::{BrandError, Result};
use image::{Rgba, RgbaImage};

/// Axis a linear gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
}

impl Direction {
    /// Parse the config spelling.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "diagonal" => Ok(Self::Diagonal),
            other => Err(BrandError::config(format!(
                "unknown gradient direction '{other}' (expected vertical, horizontal or diagonal)"
            ))),
        }
    }
}

/// Fill a new canvas with a linear gradient.
pub fn linear(width: u32, height: u32, from: Rgb, to: Rgb, direction: Direction) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let w = (width.max(2) - 1) as f32;
    let h = (height.max(2) - 1) as f32;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let t = match direction {
            Direction::Vertical => y as f32 / h,
            Direction::Horizontal => x as f32 / w,
            Direction::Diagonal => (x as f32 / w + y as f32 / h) / 2.0,
        };
        *pixel = lerp(from, to, t).opaque();
    }
    img
}

/// Fill a new canvas with a radial gradient centered at `center`,
/// reaching `outer` at `radius` pixels.
pub fn radial(
    width: u32,
    height: u32,
    inner: Rgb,
    outer: Rgb,
    center: (f32, f32),
    radius: f32,
) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let radius = radius.max(1.0);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - center.0;
        let dy = y as f32 - center.1;
        let t = (dx * dx + dy * dy).sqrt() / radius;
        *pixel = lerp(inner, outer, t).opaque();
    }
    img
}

/// Composite a soft radial glow over `canvas`.
///
/// Alpha falls off quadratically from `max_alpha` at the center to zero at
/// `radius`.
pub fn glow(canvas: &mut RgbaImage, center: (f32, f32), radius: f32, color: Rgb, max_alpha: u8) {
    let radius = radius.max(1.0);
    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = x as f32 - center.0;
        let dy = y as f32 - center.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist >= radius {
            continue;
        }
        let falloff = 1.0 - dist / radius;
        let alpha = max_alpha as f32 * falloff * falloff;
        *pixel = blend_over(*pixel, color, alpha / 255.0);
    }
}

/// Darken corners radially. `strength` in 0.0..=1.0 is the darkening at the
/// farthest corner.
pub fn vignette(canvas: &mut RgbaImage, strength: f32) {
    let strength = strength.clamp(0.0, 1.0);
    if strength == 0.0 {
        return;
    }
    let cx = canvas.width() as f32 / 2.0;
    let cy = canvas.height() as f32 / 2.0;
    let max_dist = (cx * cx + cy * cy).sqrt();

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let t = (dx * dx + dy * dy).sqrt() / max_dist;
        let keep = 1.0 - strength * t * t;
        pixel.0[0] = (pixel.0[0] as f32 * keep) as u8;
        pixel.0[1] = (pixel.0[1] as f32 * keep) as u8;
        pixel.0[2] = (pixel.0[2] as f32 * keep) as u8;
    }
}

/// Source-over blend of `color` at `alpha` (0.0..=1.0) onto `dst`.
fn blend_over(dst: Rgba<u8>, color: Rgb, alpha: f32) -> Rgba<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |src: u8, d: u8| (src as f32 * a + d as f32 * (1.0 - a)).round() as u8;
    Rgba([
        mix(color.r, dst.0[0]),
        mix(color.g, dst.0[1]),
        mix(color.b, dst.0[2]),
        dst.0[3].max((a * 255.0) as u8),
    ])
}
