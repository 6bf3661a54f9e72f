//! The star glyph and its intrinsic dimensions.
//!
//! The glyph ships as SVG; layout only needs its size, which is read from the
//! document without rasterizing it.

use crate::view::Size;

/// Five-point star, 48x48 logical units.
pub const STAR_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24">
  <path fill="#FFEB3B" d="M12,17.27L18.18,21l-1.64,-7.03L22,9.24l-7.19,-0.61L12,2 9.19,8.63 2,9.24l5.46,4.73L5.82,21z"/>
</svg>"##;

/// Size used when the glyph cannot be parsed.
pub const FALLBACK_STAR_SIZE: Size = Size::new(48.0, 48.0);

/// Get SVG dimensions from raw bytes.
///
/// Returns `None` if the document cannot be parsed.
pub fn svg_size(bytes: &[u8]) -> Option<Size> {
    let tree = resvg::usvg::Tree::from_data(bytes, &resvg::usvg::Options::default()).ok()?;
    let size = tree.size();
    Some(Size::new(size.width(), size.height()))
}

/// Intrinsic size of [`STAR_SVG`].
pub fn star_size() -> Size {
    svg_size(STAR_SVG.as_bytes()).unwrap_or_else(|| {
        log::warn!("star glyph failed to parse, using {:?}", FALLBACK_STAR_SIZE);
        FALLBACK_STAR_SIZE
    })
}
