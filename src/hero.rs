//! Hero background gradients.
//!
//! One desktop and one portrait image per configured variant, with a
//! subtle vignette. Optionally writes lossless WebP siblings.

use crate::color::Rgb;
use crate::config::HeroConfig;
use crate::error::Result;
use crate::gradient::{self, Direction};
use crate::encode;
use std::path::{Path, PathBuf};
use tracing::info;

const DESKTOP: (u32, u32) = (1920, 1080);
const PORTRAIT: (u32, u32) = (1080, 1920);

const VIGNETTE_STRENGTH: f32 = 0.18;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeroOptions {
    /// Also write `.webp` siblings.
    pub webp: bool,
}

/// Generate every configured hero variant into `out_dir`.
pub fn generate(out_dir: &Path, config: &HeroConfig, opts: HeroOptions) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    for variant in &config.variants {
        let from = Rgb::from_hex(&variant.from)?;
        let to = Rgb::from_hex(&variant.to)?;
        let direction = Direction::parse(&variant.direction)?;

        for (label, (w, h)) in [("", DESKTOP), ("-portrait", PORTRAIT)] {
            let mut img = gradient::linear(w, h, from, to, direction);
            gradient::vignette(&mut img, VIGNETTE_STRENGTH);

            let path = out_dir.join(format!("hero-{}{}.png", variant.name, label));
            encode::save_png(&img, &path, false)?;
            info!(path = %path.display(), variant = %variant.name, "wrote hero background");
            written.push(path);

            if opts.webp {
                let path = out_dir.join(format!("hero-{}{}.webp", variant.name, label));
                encode::save_webp(&img, &path)?;
                written.push(path);
            }
        }
    }

    Ok(written)
}
