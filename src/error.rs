//! Error types for nb-brandkit.
//!
//! Every generator returns [`Result`]; the CLI boundary converts to
//! `anyhow` and prints the full cause chain.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`BrandError`].
pub type Result<T> = std::result::Result<T, BrandError>;

/// Main error type for brand asset generation.
#[derive(Error, Debug)]
pub enum BrandError {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    /// Configuration file not found or invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Error description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A color value could not be parsed.
    #[error("Invalid color '{value}': expected #rgb or #rrggbb hex")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },

    // ─────────────────────────────────────────────────────────────
    // File & Image Errors
    // ─────────────────────────────────────────────────────────────
    /// File I/O error.
    #[error("File operation failed for '{path}': {message}")]
    FileIo {
        /// File path.
        path: PathBuf,
        /// Error description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<std::io::Error>,
    },

    /// Image decode, encode or transform failed.
    #[error("Image operation failed: {message}")]
    Image {
        /// Error description.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<image::ImageError>,
    },

    /// The master logo does not meet a generator's requirements.
    #[error("Unsuitable source image '{path}': {message}")]
    SourceImage {
        /// Offending input path.
        path: PathBuf,
        /// What requirement was violated.
        message: String,
    },

    /// SVG parsing or rasterization failed.
    #[error("SVG error for '{path}': {message}")]
    Svg {
        /// SVG input path.
        path: PathBuf,
        /// Error description.
        message: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Font Errors
    // ─────────────────────────────────────────────────────────────
    /// No usable TTF font was found.
    #[error("No usable font: set [font] path in brand.toml or pass --font (searched {searched:?})")]
    FontNotFound {
        /// Every path that was probed.
        searched: Vec<PathBuf>,
    },

    /// A font file exists but could not be parsed.
    #[error("Failed to parse font '{path}'")]
    FontParse {
        /// Font file path.
        path: PathBuf,
    },
}

impl BrandError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a source.
    pub fn config_with_source<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a file I/O error.
    pub fn file_io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FileIo {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a file I/O error with a source.
    pub fn file_io_with_source(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::FileIo {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an image error without a library cause.
    pub fn image(message: impl Into<String>) -> Self {
        Self::Image {
            message: message.into(),
            source: None,
        }
    }

    /// Create a source-image requirement error.
    pub fn source_image(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SourceImage {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an SVG error.
    pub fn svg(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Svg {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// FROM IMPLEMENTATIONS
// ═══════════════════════════════════════════════════════════════

impl From<image::ImageError> for BrandError {
    fn from(err: image::ImageError) -> Self {
        Self::Image {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<std::io::Error> for BrandError {
    fn from(err: std::io::Error) -> Self {
        Self::FileIo {
            path: PathBuf::new(),
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<toml::de::Error> for BrandError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.message().to_string(),
            source: Some(Box::new(err)),
        }
    }
}
