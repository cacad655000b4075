//! Open Graph card generation.
//!
//! A 1200x630 composite: diagonal brand gradient, two neon glows, the logo
//! mark on the left, title/subtitle/footer text on the right. One default
//! card plus one card per configured page.

use crate::config::{BrandConfig, Palette};
use crate::error::Result;
use crate::gradient::{self, Direction};
use crate::{encode, source, text};
use ab_glyph::FontVec;
use image::imageops::overlay;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use tracing::info;

pub const OG_WIDTH: u32 = 1200;
pub const OG_HEIGHT: u32 = 630;

/// Logo edge and left margin.
const LOGO_EDGE: u32 = 280;
const LOGO_X: i64 = 96;

/// Text column geometry.
const TEXT_X: i32 = 440;
const TEXT_MAX_WIDTH: u32 = OG_WIDTH - TEXT_X as u32 - 80;

const TITLE_START_PX: f32 = 72.0;
const TITLE_MIN_PX: f32 = 36.0;
const SUBTITLE_PX: f32 = 36.0;
const FOOTER_PX: f32 = 28.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct OgOptions {
    pub optimize: bool,
}

/// Generate the default card and every configured per-page card.
pub fn generate_all(
    master_path: &Path,
    out_dir: &Path,
    config: &BrandConfig,
    font: &FontVec,
    opts: OgOptions,
) -> Result<Vec<PathBuf>> {
    let palette = config.colors.parsed()?;
    let master = source::load_master(master_path)?;
    let logo = source::fit_square(&master, LOGO_EDGE);

    std::fs::create_dir_all(out_dir)?;
    let mut written = Vec::new();

    let footer = format!("{}  ·  {}", config.brand.name, config.brand.base_url);

    let card = compose(&logo, &palette, font, &config.og.title, &config.og.subtitle, &footer);
    let path = out_dir.join("og-default.png");
    encode::save_png(&card, &path, opts.optimize)?;
    info!(path = %path.display(), "wrote default OG card");
    written.push(path);

    for page in &config.og.pages {
        let card = compose(&logo, &palette, font, &page.title, &page.subtitle, &footer);
        let path = out_dir.join(format!("og-{}.png", page.slug));
        encode::save_png(&card, &path, opts.optimize)?;
        info!(path = %path.display(), slug = %page.slug, "wrote page OG card");
        written.push(path);
    }

    Ok(written)
}

/// Build one card.
fn compose(
    logo: &RgbaImage,
    palette: &Palette,
    font: &FontVec,
    title: &str,
    subtitle: &str,
    footer: &str,
) -> RgbaImage {
    let mut canvas = gradient::linear(
        OG_WIDTH,
        OG_HEIGHT,
        palette.background,
        palette.surface,
        Direction::Diagonal,
    );

    gradient::glow(&mut canvas, (360.0, 140.0), 420.0, palette.accent_cyan, 90);
    gradient::glow(&mut canvas, (980.0, 540.0), 460.0, palette.accent_magenta, 90);

    overlay(
        &mut canvas,
        logo,
        LOGO_X,
        i64::from((OG_HEIGHT - LOGO_EDGE) / 2),
    );

    let title_px = text::fit_px(title, TEXT_MAX_WIDTH, TITLE_START_PX, TITLE_MIN_PX, font);
    let (_, title_h) = text::measure(title, title_px, font);

    let mut y = 200i32;
    text::draw_line(
        &mut canvas,
        title,
        TEXT_X,
        y,
        title_px,
        palette.foreground.opaque(),
        font,
    );
    y += title_h as i32 + 24;

    if !subtitle.is_empty() {
        text::draw_line(
            &mut canvas,
            subtitle,
            TEXT_X,
            y,
            SUBTITLE_PX,
            palette.muted.opaque(),
            font,
        );
    }

    text::draw_line(
        &mut canvas,
        footer,
        TEXT_X,
        (OG_HEIGHT - 96) as i32,
        FOOTER_PX,
        palette.accent_cyan.opaque(),
        font,
    );

    canvas
}
