//! SVG → PNG rasterization.

use crate::chart::ChartImage;
use crate::chart::svg::UNITS_PER_INCH;
use crate::errors::{AppError, AppResult};
use png::{BitDepth, ColorType, Encoder};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree, fontdb};
use std::sync::{Arc, OnceLock};

/// System fonts are scanned once per process.
fn font_db() -> Arc<fontdb::Database> {
    static FONTS: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = fontdb::Database::new();
            db.load_system_fonts();
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG document at `dpi` and encode it as PNG.
pub(crate) fn svg_to_png(svg: &str, dpi: u32) -> AppResult<ChartImage> {
    let mut options = Options::default();
    options.fontdb = font_db();

    let tree = Tree::from_str(svg, &options)
        .map_err(|e| AppError::Chart(format!("SVG parse failed: {e}")))?;

    let scale = dpi as f32 / UNITS_PER_INCH as f32;
    let size = tree.size();
    let width = (size.width() * scale).round() as u32;
    let height = (size.height() * scale).round() as u32;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| AppError::Chart(format!("Pixmap allocation failed ({width}x{height})")))?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let png = encode_rgba_to_png_bytes(width, height, pixmap.data())
        .map_err(|e| AppError::Image(e.to_string()))?;

    Ok(ChartImage { png, width, height })
}

// The canvas is painted opaque, so premultiplied RGBA equals straight RGBA.
fn encode_rgba_to_png_bytes(
    width: u32,
    height: u32,
    rgba: &[u8],
) -> Result<Vec<u8>, png::EncodingError> {
    let mut buf = Vec::new();
    {
        let mut enc = Encoder::new(&mut buf, width, height);
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        let mut writer = enc.write_header()?;
        writer.write_image_data(rgba)?;
        writer.finish()?;
    }
    Ok(buf)
}
