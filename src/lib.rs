//! nb-brandkit - brand asset generation for the NeuroBreath web project.
//!
//! Every derived asset starts from one master logo image: favicons, PWA
//! icons and manifest, Open Graph cards, hero background gradients, and an
//! SVG wrapper for surfaces that demand vector files. Each generator is a
//! short, linear pipeline: open, transform, write.

pub mod appicon;
pub mod cli;
pub mod color;
pub mod config;
pub mod encode;
pub mod error;
pub mod favicon;
pub mod gradient;
pub mod hero;
pub mod mark;
pub mod og;
pub mod source;
pub mod svg;
pub mod text;

pub use config::BrandConfig;
pub use error::{BrandError, Result};
