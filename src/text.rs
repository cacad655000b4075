//! Font resolution and text drawing.

use crate::error::{BrandError, Result};
use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional system font locations probed when no font is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
];

/// Load the card font.
///
/// An explicit path (flag or `[font] path`) wins and must parse; otherwise
/// the first candidate that exists and parses is used.
pub fn resolve_font(explicit: Option<&Path>) -> Result<FontVec> {
    if let Some(path) = explicit {
        return load_font(path);
    }

    let mut searched = Vec::new();
    for candidate in FONT_CANDIDATES {
        let path = Path::new(candidate);
        searched.push(PathBuf::from(candidate));
        if !path.is_file() {
            continue;
        }
        match load_font(path) {
            Ok(font) => {
                debug!(path = %path.display(), "resolved system font");
                return Ok(font);
            }
            Err(_) => continue,
        }
    }
    Err(BrandError::FontNotFound { searched })
}

fn load_font(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path)
        .map_err(|e| BrandError::file_io_with_source(path, "failed to read font", e))?;
    FontVec::try_from_vec(data).map_err(|_| BrandError::FontParse {
        path: path.to_path_buf(),
    })
}

/// Draw a single line at the given pixel height.
pub fn draw_line(
    canvas: &mut RgbaImage,
    text: &str,
    x: i32,
    y: i32,
    px: f32,
    color: Rgba<u8>,
    font: &FontVec,
) {
    draw_text_mut(canvas, color, x, y, PxScale::from(px), font, text);
}

/// Measure a line at the given pixel height.
pub fn measure(text: &str, px: f32, font: &FontVec) -> (u32, u32) {
    text_size(PxScale::from(px), font, text)
}

/// Largest pixel height in `min_px..=start_px` at which `text` fits
/// `max_width`. Bottoms out at `min_px` even when the text still overflows;
/// callers keep the layout stable and let very long titles clip.
pub fn fit_px(text: &str, max_width: u32, start_px: f32, min_px: f32, font: &FontVec) -> f32 {
    let mut px = start_px;
    while px > min_px {
        let (w, _) = measure(text, px, font);
        if w <= max_width {
            return px;
        }
        px -= 2.0;
    }
    min_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_error_lists_probed_paths() {
        let err = resolve_font(Some(Path::new("/nonexistent/brand-font.ttf"))).unwrap_err();
        assert!(matches!(err, BrandError::FileIo { .. }));
    }

    #[test]
    #[ignore = "requires a system TTF font"]
    fn system_font_resolves_and_measures() {
        let font = resolve_font(None).unwrap();
        let (w, h) = measure("NeuroBreath", 48.0, &font);
        assert!(w > 0 && h > 0);
        // Bigger scale, wider text.
        let (w2, _) = measure("NeuroBreath", 96.0, &font);
        assert!(w2 > w);
    }

    #[test]
    #[ignore = "requires a system TTF font"]
    fn fit_px_shrinks_long_titles() {
        let font = resolve_font(None).unwrap();
        let long = "A very long page title that cannot possibly fit at full size";
        let px = fit_px(long, 400, 72.0, 28.0, &font);
        assert!(px < 72.0);
        let (w, _) = measure(long, px, &font);
        assert!(w <= 400 || px == 28.0);
    }
}
