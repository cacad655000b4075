//! PWA app icon set and web manifest.
//!
//! Writes the installable-app icons (192/512) plus maskable variants that
//! keep the mark inside the safe zone, and a matching `site.webmanifest`.

use crate::config::BrandConfig;
use crate::error::Result;
use crate::{encode, mark, source};
use image::imageops::overlay;
use image::RgbaImage;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::info;

/// Plain icon sizes.
const ICON_SIZES: &[u32] = &[192, 512];

/// The master must cover the largest icon.
const MIN_MASTER_EDGE: u32 = 512;

/// Fraction of the canvas the mark occupies in a maskable icon. The rest is
/// safe-zone padding filled with the brand background.
const MASKABLE_CONTENT_FRAC: f32 = 0.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct AppIconOptions {
    pub auto_crop: bool,
    pub optimize: bool,
}

/// Generate the PWA icon set and manifest into `out_dir`.
pub fn generate(
    master_path: &Path,
    out_dir: &Path,
    config: &BrandConfig,
    opts: AppIconOptions,
) -> Result<Vec<PathBuf>> {
    let palette = config.colors.parsed()?;
    let mut master = source::load_master(master_path)?;

    if opts.auto_crop {
        let (cropped, _) = mark::auto_crop_mark(&master, mark::DEFAULT_PAD_FRAC)?;
        master = cropped;
    }
    source::require_square(&master, master_path, MIN_MASTER_EDGE)?;

    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for &size in ICON_SIZES {
        let plain = source::resize_square(&master, size);
        let path = out_dir.join(format!("icon-{size}.png"));
        encode::save_png(&plain, &path, opts.optimize)?;
        info!(path = %path.display(), "wrote app icon");
        written.push(path);

        let maskable = maskable_icon(&master, size, palette.background.opaque());
        let path = out_dir.join(format!("icon-maskable-{size}.png"));
        encode::save_png(&maskable, &path, opts.optimize)?;
        info!(path = %path.display(), "wrote maskable icon");
        written.push(path);
    }

    let manifest_path = out_dir.join("site.webmanifest");
    write_manifest(&manifest_path, config)?;
    info!(path = %manifest_path.display(), "wrote web manifest");
    written.push(manifest_path);

    Ok(written)
}

/// Shrink the mark to the safe zone and center it on an opaque background.
fn maskable_icon(master: &RgbaImage, size: u32, background: image::Rgba<u8>) -> RgbaImage {
    let content = ((size as f32 * MASKABLE_CONTENT_FRAC).round() as u32).max(1);
    let inset = i64::from((size - content) / 2);

    let mut canvas = RgbaImage::from_pixel(size, size, background);
    let scaled = source::resize_square(master, content);
    overlay(&mut canvas, &scaled, inset, inset);
    canvas
}

fn write_manifest(path: &Path, config: &BrandConfig) -> Result<()> {
    let manifest = json!({
        "name": config.brand.name,
        "short_name": config.brand.name,
        "description": config.brand.tagline,
        "start_url": "/",
        "display": "standalone",
        "background_color": config.colors.background,
        "theme_color": config.colors.accent_cyan,
        "icons": [
            { "src": "/icon-192.png", "sizes": "192x192", "type": "image/png" },
            { "src": "/icon-512.png", "sizes": "512x512", "type": "image/png" },
            {
                "src": "/icon-maskable-192.png",
                "sizes": "192x192",
                "type": "image/png",
                "purpose": "maskable"
            },
            {
                "src": "/icon-maskable-512.png",
                "sizes": "512x512",
                "type": "image/png",
                "purpose": "maskable"
            }
        ]
    });

    let body = serde_json::to_string_pretty(&manifest)
        .map_err(|e| crate::error::BrandError::config_with_source("manifest serialization", e))?;
    std::fs::write(path, body)
        .map_err(|e| crate::error::BrandError::file_io_with_source(path, "failed to write manifest", e))
}
