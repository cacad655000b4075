//! SVG wrapper around the raster mark.
//!
//! Some site surfaces want an `.svg` asset even though the master art is
//! raster. We resize the mark and embed it as a base64 PNG data URI inside
//! a minimal SVG document.

use crate::error::{BrandError, Result};
use crate::{encode, source};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;
use tracing::info;

/// Default output edge.
pub const DEFAULT_EDGE: u32 = 512;

/// Write `out_path` as an SVG embedding the mark at `edge` pixels.
pub fn write_logo_svg(master_path: &Path, out_path: &Path, edge: u32) -> Result<()> {
    let master = source::load_master(master_path)?;
    let fitted = source::fit_square(&master, edge);
    let png = encode::encode_png(&fitted)?;
    let b64 = STANDARD.encode(&png);

    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{edge}" height="{edge}" viewBox="0 0 {edge} {edge}"><image width="{edge}" height="{edge}" href="data:image/png;base64,{b64}"/></svg>
"#
    );

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, svg)
        .map_err(|e| BrandError::file_io_with_source(out_path, "failed to write SVG", e))?;
    info!(path = %out_path.display(), edge, "wrote embedded-PNG SVG");
    Ok(())
}
