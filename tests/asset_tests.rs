//! Integration tests for the asset generators.
//!
//! Inputs are synthesized by the fixture; tests that depend on a system
//! TTF font are marked `#[ignore]` and can be run with `cargo test -- --ignored`.

mod common;

use common::TestFixture;
use nb_brandkit::appicon::{self, AppIconOptions};
use nb_brandkit::config::BrandConfig;
use nb_brandkit::favicon::{self, FaviconOptions};
use nb_brandkit::hero::{self, HeroOptions};
use nb_brandkit::og::{self, OgOptions};
use nb_brandkit::{source, svg, text};
use pretty_assertions::assert_eq;

// =============================================================================
// source - master logo loading
// =============================================================================

#[test]
fn test_load_master_png() {
    let fixture = TestFixture::new();
    let logo = fixture.create_master_logo("logo.png", 256);

    let img = source::load_master(&logo).unwrap();
    assert_eq!(img.dimensions(), (256, 256));
    assert_eq!(*img.get_pixel(128, 128), common::CYAN);
}

#[test]
fn test_load_master_svg_rasterizes() {
    let fixture = TestFixture::new();
    let logo = fixture.create_svg_logo("logo.svg");

    let img = source::load_master(&logo).unwrap();
    assert_eq!(img.dimensions(), (1024, 1024));
    // The rect fills the whole viewBox, so the center is the neon fill.
    assert_eq!(img.get_pixel(512, 512).0[0], 0xd9);
}

#[test]
fn test_load_master_missing_file() {
    let fixture = TestFixture::new();
    let result = source::load_master(&fixture.path("nope.png"));
    assert!(result.is_err());
}

// =============================================================================
// favicon - favicon set
// =============================================================================

#[test]
fn test_favicon_set() {
    let fixture = TestFixture::new();
    let logo = fixture.create_master_logo("logo.png", 512);
    let out = fixture.path("public");

    let report = favicon::generate(&logo, &out, FaviconOptions::default()).unwrap();
    assert_eq!(report.written.len(), 5);
    assert!(report.crop.is_none());

    for name in [
        "favicon-16x16.png",
        "favicon-32x32.png",
        "favicon-48x48.png",
        "apple-touch-icon.png",
        "favicon.ico",
    ] {
        assert!(out.join(name).is_file(), "{name} should exist");
    }

    let png32 = image::open(out.join("favicon-32x32.png")).unwrap();
    assert_eq!((png32.width(), png32.height()), (32, 32));

    let apple = image::open(out.join("apple-touch-icon.png")).unwrap();
    assert_eq!((apple.width(), apple.height()), (180, 180));

    // The ICO decodes to its largest frame.
    let ico = image::open(out.join("favicon.ico")).unwrap();
    assert_eq!((ico.width(), ico.height()), (48, 48));
}

#[test]
fn test_favicon_optimized_png_still_decodes() {
    let fixture = TestFixture::new();
    let logo = fixture.create_master_logo("logo.png", 512);
    let out = fixture.path("public");

    let opts = FaviconOptions {
        auto_crop: false,
        optimize: true,
    };
    favicon::generate(&logo, &out, opts).unwrap();

    let png = image::open(out.join("favicon-48x48.png")).unwrap();
    assert_eq!((png.width(), png.height()), (48, 48));
}

#[test]
fn test_favicon_rejects_non_square_master() {
    let fixture = TestFixture::new();
    let logo = fixture.create_plain_image("wide.png", 400, 200);
    let out = fixture.path("public");

    let result = favicon::generate(&logo, &out, FaviconOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_favicon_rejects_tiny_master() {
    let fixture = TestFixture::new();
    let logo = fixture.create_plain_image("tiny.png", 64, 64);
    let out = fixture.path("public");

    let result = favicon::generate(&logo, &out, FaviconOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_favicon_auto_crop_accepts_wide_poster() {
    let fixture = TestFixture::new();
    let logo = fixture.create_poster("poster.png");
    let out = fixture.path("public");

    let opts = FaviconOptions {
        auto_crop: true,
        optimize: false,
    };
    let report = favicon::generate(&logo, &out, opts).unwrap();
    let crop = report.crop.expect("auto-crop should report");
    assert!(!crop.fallback);
    assert!(crop.neon_pixels > 0);
    assert!(out.join("favicon.ico").is_file());
}

// =============================================================================
// appicon - PWA icons and manifest
// =============================================================================

#[test]
fn test_app_icon_set_and_manifest() {
    let fixture = TestFixture::new();
    let logo = fixture.create_master_logo("logo.png", 1024);
    let out = fixture.path("public");
    let config = BrandConfig::default();

    let written = appicon::generate(&logo, &out, &config, AppIconOptions::default()).unwrap();
    assert_eq!(written.len(), 5);

    let icon512 = image::open(out.join("icon-512.png")).unwrap();
    assert_eq!((icon512.width(), icon512.height()), (512, 512));

    // Maskable corners are safe-zone padding in the brand background.
    let maskable = image::open(out.join("icon-maskable-512.png")).unwrap().to_rgba8();
    assert_eq!(maskable.get_pixel(2, 2).0, [0x17, 0x25, 0x54, 255]);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.join("site.webmanifest")).unwrap())
            .unwrap();
    assert_eq!(manifest["name"], "NeuroBreath");
    assert_eq!(manifest["icons"].as_array().unwrap().len(), 4);
    assert_eq!(manifest["icons"][2]["purpose"], "maskable");
}

// =============================================================================
// og - Open Graph cards
// =============================================================================

#[test]
#[ignore = "requires a system TTF font"]
fn test_og_default_and_page_cards() {
    let fixture = TestFixture::new();
    let logo = fixture.create_master_logo("logo.png", 512);
    let out = fixture.path("public");

    let mut config = BrandConfig::default();
    config.og.pages.push(nb_brandkit::config::OgPage {
        slug: "adhd".to_string(),
        title: "ADHD breathing toolkit".to_string(),
        subtitle: "Short exercises for restless focus".to_string(),
    });

    let font = text::resolve_font(None).unwrap();
    let written =
        og::generate_all(&logo, &out, &config, &font, OgOptions::default()).unwrap();
    assert_eq!(written.len(), 2);

    let card = image::open(out.join("og-default.png")).unwrap();
    assert_eq!((card.width(), card.height()), (og::OG_WIDTH, og::OG_HEIGHT));
    assert!(out.join("og-adhd.png").is_file());
}

// =============================================================================
// hero - background gradients
// =============================================================================

#[test]
fn test_hero_variants() {
    let fixture = TestFixture::new();
    let out = fixture.path("public");
    let config = BrandConfig::default();

    let written = hero::generate(&out, &config.hero, HeroOptions::default()).unwrap();
    // Two default variants, desktop + portrait each.
    assert_eq!(written.len(), 4);

    let desktop = image::open(out.join("hero-dark.png")).unwrap();
    assert_eq!((desktop.width(), desktop.height()), (1920, 1080));

    let portrait = image::open(out.join("hero-light-portrait.png")).unwrap();
    assert_eq!((portrait.width(), portrait.height()), (1080, 1920));
}

#[test]
fn test_hero_webp_siblings() {
    let fixture = TestFixture::new();
    let out = fixture.path("public");
    let config = BrandConfig::default();

    let written = hero::generate(&out, &config.hero, HeroOptions { webp: true }).unwrap();
    assert_eq!(written.len(), 8);
    assert!(out.join("hero-dark.webp").is_file());

    let webp = image::open(out.join("hero-dark.webp")).unwrap();
    assert_eq!((webp.width(), webp.height()), (1920, 1080));
}

// =============================================================================
// svg - embedded-PNG logo
// =============================================================================

#[test]
fn test_logo_svg_embeds_decodable_png() {
    let fixture = TestFixture::new();
    let logo = fixture.create_master_logo("logo.png", 512);
    let out = fixture.path("logo.svg");

    svg::write_logo_svg(&logo, &out, 256).unwrap();

    let body = std::fs::read_to_string(&out).unwrap();
    assert!(body.starts_with("<svg"));
    assert!(body.contains(r#"viewBox="0 0 256 256""#));

    // Round-trip the embedded data URI back into pixels.
    let start = body.find("base64,").unwrap() + "base64,".len();
    let end = body[start..].find('"').unwrap() + start;
    use base64::Engine as _;
    let png = base64::engine::general_purpose::STANDARD
        .decode(&body[start..end])
        .unwrap();
    let img = image::load_from_memory(&png).unwrap();
    assert_eq!((img.width(), img.height()), (256, 256));
}
