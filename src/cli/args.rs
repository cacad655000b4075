//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "brandkit",
    version,
    about = "Generate NeuroBreath brand assets from the master logo",
    propagate_version = true
)]
pub struct Cli {
    /// Path to brand.toml (default: ./brand.toml if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Master logo image (PNG/JPEG/WebP/SVG).
    #[arg(long, global = true, default_value = "assets/nb-mark.png")]
    pub logo: PathBuf,

    /// Output directory.
    #[arg(long, global = true, default_value = "public")]
    pub out: PathBuf,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Favicon set: 16/32/48 PNGs, apple-touch-icon, multi-size favicon.ico.
    Favicon {
        /// Auto-crop the neon mark out of the master first.
        #[arg(long)]
        auto_crop: bool,
        /// Run written PNGs through oxipng.
        #[arg(long)]
        optimize: bool,
    },

    /// PWA icons (192/512 + maskable) and site.webmanifest.
    Icons {
        #[arg(long)]
        auto_crop: bool,
        #[arg(long)]
        optimize: bool,
    },

    /// Open Graph cards: the default card plus one per configured page.
    Og {
        /// Override the default card's title.
        #[arg(long)]
        title: Option<String>,
        /// Override the default card's subtitle.
        #[arg(long)]
        subtitle: Option<String>,
        /// Explicit TTF font (otherwise system fonts are probed).
        #[arg(long)]
        font: Option<PathBuf>,
        #[arg(long)]
        optimize: bool,
    },

    /// Hero background gradients for every configured variant.
    Hero {
        /// Also write lossless WebP siblings.
        #[arg(long)]
        webp: bool,
    },

    /// Auto-crop the neon mark and write it as a standalone PNG.
    Mark {
        /// Bounding-box padding as a fraction of its longer edge.
        #[arg(long, default_value_t = crate::mark::DEFAULT_PAD_FRAC)]
        pad: f32,
        /// Resize the crop to this edge.
        #[arg(long)]
        size: Option<u32>,
        /// Output file.
        #[arg(short, long, default_value = "public/nb-mark.png")]
        output: PathBuf,
    },

    /// SVG logo embedding the mark as a base64 PNG.
    Svg {
        /// Rendered edge in pixels.
        #[arg(long, default_value_t = crate::svg::DEFAULT_EDGE)]
        edge: u32,
        /// Output file.
        #[arg(short, long, default_value = "public/logo.svg")]
        output: PathBuf,
    },

    /// Run every generator. OG cards are skipped with a warning when no
    /// font resolves.
    All {
        #[arg(long)]
        auto_crop: bool,
        #[arg(long)]
        optimize: bool,
        #[arg(long)]
        webp: bool,
        #[arg(long)]
        font: Option<PathBuf>,
    },
}
