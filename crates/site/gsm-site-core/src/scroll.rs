//! In-page anchor resolution and scroll target math.

/// Returns the element id an in-page link points at.
///
/// Only `#id` hrefs qualify; absolute URLs, other pages and a bare `#` yield
/// `None` so the browser's default navigation is left alone.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.trim().strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Vertical scroll position that puts a section just below the fixed header.
#[inline]
pub fn scroll_top_for(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}
