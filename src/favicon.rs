//! Favicon set generation.
//!
//! Produces the classic web favicon family from the master logo:
//! 16/32/48 PNGs, a 180px apple-touch-icon, and a multi-size `favicon.ico`
//! whose entries are PNG-compressed.

use crate::error::Result;
use crate::{encode, mark, source};
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::info;

/// PNG favicon sizes and file names.
const FAVICON_SIZES: &[(u32, &str)] = &[
    (16, "favicon-16x16.png"),
    (32, "favicon-32x32.png"),
    (48, "favicon-48x48.png"),
];

/// Frame sizes embedded in `favicon.ico`.
const ICO_SIZES: &[u32] = &[16, 32, 48];

const APPLE_TOUCH_EDGE: u32 = 180;

#[derive(Debug, Clone, Copy, Default)]
pub struct FaviconOptions {
    /// Auto-crop the neon mark out of the master first.
    pub auto_crop: bool,
    /// Run every PNG through oxipng.
    pub optimize: bool,
}

/// Files written by a favicon run.
#[derive(Debug, Clone)]
pub struct FaviconReport {
    pub written: Vec<PathBuf>,
    /// Set when auto-crop ran.
    pub crop: Option<mark::CropReport>,
}

/// Generate the favicon set into `out_dir`.
pub fn generate(
    master_path: &Path,
    out_dir: &Path,
    opts: FaviconOptions,
) -> Result<FaviconReport> {
    let mut master = source::load_master(master_path)?;
    let mut crop = None;

    if opts.auto_crop {
        let (cropped, report) = mark::auto_crop_mark(&master, mark::DEFAULT_PAD_FRAC)?;
        crop = Some(report);
        master = cropped;
    }
    source::require_square(&master, master_path, APPLE_TOUCH_EDGE)?;

    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let mut ico_frames: Vec<RgbaImage> = Vec::with_capacity(ICO_SIZES.len());
    for (size, name) in FAVICON_SIZES {
        let resized = source::resize_square(&master, *size);
        let path = out_dir.join(name);
        encode::save_png(&resized, &path, opts.optimize)?;
        info!(path = %path.display(), size, "wrote favicon PNG");
        written.push(path);
        if ICO_SIZES.contains(size) {
            ico_frames.push(resized);
        }
    }

    let apple = source::resize_square(&master, APPLE_TOUCH_EDGE);
    let apple_path = out_dir.join("apple-touch-icon.png");
    encode::save_png(&apple, &apple_path, opts.optimize)?;
    info!(path = %apple_path.display(), "wrote apple-touch-icon");
    written.push(apple_path);

    let ico_path = out_dir.join("favicon.ico");
    encode::save_ico(&ico_frames, &ico_path)?;
    info!(path = %ico_path.display(), frames = ico_frames.len(), "wrote favicon.ico");
    written.push(ico_path);

    Ok(FaviconReport { written, crop })
}
