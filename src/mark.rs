//! Neon-mark location and auto-crop.
//!
//! The NeuroBreath mark is drawn in saturated neon magenta and cyan. To cut
//! it out of a larger poster or banner export, we scan for neon-colored
//! pixels, take their bounding box, pad it, and crop a square around it.
//! A single-pass, stateless scan; no other component depends on it.

use crate::error::Result;
use image::{Rgba, RgbaImage};
use tracing::{debug, warn};

/// Pixels with alpha below this never count as neon.
const ALPHA_FLOOR: u8 = 16;

/// Fallback kicks in when fewer than this fraction of pixels are neon.
const NEON_FLOOR_FRAC: f64 = 0.0005;

/// Default bounding-box padding, as a fraction of the box's longer edge.
pub const DEFAULT_PAD_FRAC: f32 = 0.08;

/// Where the crop came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropReport {
    /// Crop rectangle as (x, y, width, height).
    pub rect: (u32, u32, u32, u32),
    /// Number of neon pixels found in the scan.
    pub neon_pixels: usize,
    /// True when the centered-square fallback was used.
    pub fallback: bool,
}

/// Per-pixel neon heuristic.
///
/// Magenta reads as high red and blue with low green; cyan as high green
/// and blue with low red. Thresholds are tuned for the saturated brand
/// accents and deliberately miss the pastel page palette.
pub fn is_neon(px: Rgba<u8>) -> bool {
    let [r, g, b, a] = px.0;
    if a < ALPHA_FLOOR {
        return false;
    }
    let magenta = r > 160 && b > 160 && g < 120;
    let cyan = g > 160 && b > 160 && r < 120;
    magenta || cyan
}

/// Scan for neon pixels, returning their count and inclusive bounding box.
pub fn neon_bounds(img: &RgbaImage) -> (usize, Option<(u32, u32, u32, u32)>) {
    let mut count = 0usize;
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, px) in img.enumerate_pixels() {
        if !is_neon(*px) {
            continue;
        }
        count += 1;
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    (count, bounds)
}

/// Crop the neon mark out of `img`.
///
/// The neon bounding box is padded by `pad_frac` of its longer edge and
/// expanded to a square centered on the box, clamped to the image. When the
/// image contains (almost) no neon pixels the largest centered square is
/// cropped instead and the report says so.
pub fn auto_crop_mark(img: &RgbaImage, pad_frac: f32) -> Result<(RgbaImage, CropReport)> {
    let (w, h) = img.dimensions();
    let total = w as u64 * h as u64;
    let floor = ((total as f64) * NEON_FLOOR_FRAC).ceil() as usize;

    let (count, bounds) = neon_bounds(img);

    let (rect, fallback) = match bounds {
        Some((x0, y0, x1, y1)) if count >= floor => {
            let bw = x1 - x0 + 1;
            let bh = y1 - y0 + 1;
            let pad = (bw.max(bh) as f32 * pad_frac.max(0.0)).round() as u32;
            let side = (bw.max(bh) + 2 * pad).min(w.min(h));

            // Center the square on the box center, then shift inside bounds.
            let cx = (x0 + x1) / 2;
            let cy = (y0 + y1) / 2;
            let x = cx
                .saturating_sub(side / 2)
                .min(w - side);
            let y = cy
                .saturating_sub(side / 2)
                .min(h - side);
            ((x, y, side, side), false)
        }
        _ => {
            warn!(
                neon_pixels = count,
                floor, "no usable neon region, falling back to centered square"
            );
            let side = w.min(h);
            (((w - side) / 2, (h - side) / 2, side, side), true)
        }
    };

    debug!(?rect, neon_pixels = count, fallback, "auto-crop");

    let (x, y, cw, ch) = rect;
    let cropped = image::imageops::crop_imm(img, x, y, cw, ch).to_image();
    Ok((
        cropped,
        CropReport {
            rect,
            neon_pixels: count,
            fallback,
        },
    ))
}
