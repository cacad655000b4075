//! Shared test fixtures.

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use tempfile::TempDir;

pub const NAVY: Rgba<u8> = Rgba([23, 37, 84, 255]);
pub const MAGENTA: Rgba<u8> = Rgba([217, 70, 239, 255]);
pub const CYAN: Rgba<u8> = Rgba([34, 211, 238, 255]);

/// A temp directory plus helpers that synthesize brand-ish input images.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Square master logo: navy field with a neon two-tone mark in the middle.
    pub fn create_master_logo(&self, name: &str, edge: u32) -> PathBuf {
        let mut img = RgbaImage::from_pixel(edge, edge, NAVY);
        let q = edge / 4;
        for y in q..(3 * q) {
            for x in q..(2 * q) {
                img.put_pixel(x, y, MAGENTA);
            }
            for x in (2 * q)..(3 * q) {
                img.put_pixel(x, y, CYAN);
            }
        }
        let path = self.path(name);
        img.save(&path).expect("failed to save master logo");
        path
    }

    /// Wide poster with the neon mark sitting off-center.
    pub fn create_poster(&self, name: &str) -> PathBuf {
        let mut img = RgbaImage::from_pixel(800, 400, NAVY);
        for y in 80..320 {
            for x in 500..620 {
                img.put_pixel(x, y, MAGENTA);
            }
            for x in 620..740 {
                img.put_pixel(x, y, CYAN);
            }
        }
        let path = self.path(name);
        img.save(&path).expect("failed to save poster");
        path
    }

    /// Non-square image with no neon content.
    pub fn create_plain_image(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 200, 200, 255]));
        let path = self.path(name);
        img.save(&path).expect("failed to save plain image");
        path
    }

    /// Minimal SVG document filling its viewBox with a neon rect.
    pub fn create_svg_logo(&self, name: &str) -> PathBuf {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100"><rect x="0" y="0" width="100" height="100" fill="#d946ef"/></svg>"##;
        let path = self.path(name);
        std::fs::write(&path, svg).expect("failed to save SVG logo");
        path
    }
}
