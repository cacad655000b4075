//! Brand configuration.
//!
//! Reads `brand.toml`. Every field has a default carrying the NeuroBreath
//! brand values, so the tool works with no config file at all.

use crate::color::Rgb;
use crate::error::{BrandError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandConfig {
    #[serde(default)]
    pub brand: BrandInfo,

    #[serde(default)]
    pub colors: BrandColors,

    #[serde(default)]
    pub og: OgConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub font: FontConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandInfo {
    /// Site name, used in the manifest and the OG footer.
    #[serde(default = "default_name")]
    pub name: String,

    /// Short tagline, default OG subtitle.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Canonical site URL, shown in the OG footer.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Brand palette. All values are hex strings; parse with [`BrandColors::parsed`]
/// before rendering so a bad value fails once, up front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandColors {
    /// Page background (deep navy).
    #[serde(default = "default_background")]
    pub background: String,

    /// Card/surface tone layered above the background.
    #[serde(default = "default_surface")]
    pub surface: String,

    /// Neon cyan accent.
    #[serde(default = "default_accent_cyan")]
    pub accent_cyan: String,

    /// Neon magenta accent.
    #[serde(default = "default_accent_magenta")]
    pub accent_magenta: String,

    /// Primary text color.
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Secondary text color.
    #[serde(default = "default_muted")]
    pub muted: String,
}

/// The same palette with every value parsed.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgb,
    pub surface: Rgb,
    pub accent_cyan: Rgb,
    pub accent_magenta: Rgb,
    pub foreground: Rgb,
    pub muted: Rgb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OgConfig {
    /// Title on the default card.
    #[serde(default = "default_og_title")]
    pub title: String,

    /// Subtitle on the default card; empty string suppresses the line.
    #[serde(default = "default_og_subtitle")]
    pub subtitle: String,

    /// Extra per-route cards, written as `og-<slug>.png`.
    #[serde(default)]
    pub pages: Vec<OgPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OgPage {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default = "default_hero_variants")]
    pub variants: Vec<HeroVariant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroVariant {
    /// File stem: `hero-<name>.png`.
    pub name: String,
    /// Gradient start color (hex).
    pub from: String,
    /// Gradient end color (hex).
    pub to: String,
    /// `vertical`, `horizontal` or `diagonal`.
    #[serde(default = "default_direction")]
    pub direction: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontConfig {
    /// Explicit TTF path; when unset, conventional system locations are probed.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_name() -> String {
    "NeuroBreath".to_string()
}

fn default_tagline() -> String {
    "Breathe. Focus. Thrive.".to_string()
}

fn default_base_url() -> String {
    "neurobreath.app".to_string()
}

fn default_background() -> String {
    "#172554".to_string()
}

fn default_surface() -> String {
    "#3b0764".to_string()
}

fn default_accent_cyan() -> String {
    "#22d3ee".to_string()
}

fn default_accent_magenta() -> String {
    "#d946ef".to_string()
}

fn default_foreground() -> String {
    "#f8fafc".to_string()
}

fn default_muted() -> String {
    "#94a3b8".to_string()
}

fn default_og_title() -> String {
    "Breathing and focus tools for neurodivergent minds".to_string()
}

fn default_og_subtitle() -> String {
    "Evidence-based exercises for ADHD, autism and anxiety".to_string()
}

fn default_direction() -> String {
    "vertical".to_string()
}

fn default_hero_variants() -> Vec<HeroVariant> {
    vec![
        HeroVariant {
            name: "light".to_string(),
            from: "#eff6ff".to_string(),
            to: "#faf5ff".to_string(),
            direction: "diagonal".to_string(),
        },
        HeroVariant {
            name: "dark".to_string(),
            from: "#172554".to_string(),
            to: "#3b0764".to_string(),
            direction: "diagonal".to_string(),
        },
    ]
}

impl Default for BrandInfo {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            base_url: default_base_url(),
        }
    }
}

impl Default for BrandColors {
    fn default() -> Self {
        Self {
            background: default_background(),
            surface: default_surface(),
            accent_cyan: default_accent_cyan(),
            accent_magenta: default_accent_magenta(),
            foreground: default_foreground(),
            muted: default_muted(),
        }
    }
}

impl Default for OgConfig {
    fn default() -> Self {
        Self {
            title: default_og_title(),
            subtitle: default_og_subtitle(),
            pages: Vec::new(),
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            variants: default_hero_variants(),
        }
    }
}

impl BrandConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `./brand.toml` is used if
    /// present, else built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from_path(p),
            None => {
                let local = Path::new("brand.toml");
                if local.is_file() {
                    Self::load_from_path(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BrandError::file_io_with_source(path, "failed to read config", e)
        })?;
        let config: Self = toml::from_str(&content)?;
        // Surface bad palette values at load time, not mid-render.
        config.colors.parsed()?;
        Ok(config)
    }
}

impl BrandColors {
    /// Parse every hex field.
    pub fn parsed(&self) -> Result<Palette> {
        Ok(Palette {
            background: Rgb::from_hex(&self.background)?,
            surface: Rgb::from_hex(&self.surface)?,
            accent_cyan: Rgb::from_hex(&self.accent_cyan)?,
            accent_magenta: Rgb::from_hex(&self.accent_magenta)?,
            foreground: Rgb::from_hex(&self.foreground)?,
            muted: Rgb::from_hex(&self.muted)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let config = BrandConfig::default();
        assert_eq!(config.brand.name, "NeuroBreath");
        assert!(config.colors.parsed().is_ok());
        assert_eq!(config.hero.variants.len(), 2);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: BrandConfig = toml::from_str(
            r#"
            [brand]
            name = "Test Site"

            [[og.pages]]
            slug = "adhd"
            title = "ADHD breathing toolkit"
            "#,
        )
        .unwrap();
        assert_eq!(config.brand.name, "Test Site");
        assert_eq!(config.brand.tagline, "Breathe. Focus. Thrive.");
        assert_eq!(config.og.pages.len(), 1);
        assert_eq!(config.og.pages[0].subtitle, "");
    }

    #[test]
    fn bad_color_is_rejected_at_load() {
        let config: BrandConfig = toml::from_str(
            r#"
            [colors]
            background = "blue-ish"
            "#,
        )
        .unwrap();
        assert!(config.colors.parsed().is_err());
    }
}
