use crate::config::{PARALLAX_FACTOR, PARALLAX_MIN_VIEWPORT, SMOOTH_SCROLL_HEADER_OFFSET};

/// Element id an in-page link points at. `#` alone and non-fragment links
/// resolve to nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Window scroll position that puts a target just below the fixed header.
/// `rect_top` is the target's viewport-relative top edge.
pub fn scroll_destination(rect_top: f64, page_y_offset: f64) -> f64 {
    rect_top + page_y_offset - SMOOTH_SCROLL_HEADER_OFFSET
}

/// Vertical translation of the hero background, if the viewport is wide
/// enough for the parallax effect.
pub fn parallax_offset(scroll_y: f64, viewport_width: f64) -> Option<f64> {
    (viewport_width > PARALLAX_MIN_VIEWPORT).then(|| scroll_y * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#about", Some("about"))]
    #[case("#contact-form", Some("contact-form"))]
    #[case("#", None)]
    #[case("", None)]
    #[case("/faq#about", None)]
    #[case("https://example.com", None)]
    fn resolves_fragments(#[case] href: &str, #[case] expected: Option<&str>) {
        assert_eq!(fragment_id(href), expected);
    }

    #[test]
    fn destination_leaves_room_for_header() {
        assert_eq!(scroll_destination(400.0, 1000.0), 1320.0);
        assert_eq!(scroll_destination(-200.0, 1000.0), 720.0);
    }

    #[test]
    fn parallax_only_on_wide_viewports() {
        assert_eq!(parallax_offset(500.0, 1280.0), Some(200.0));
        assert_eq!(parallax_offset(500.0, 768.0), None);
        assert_eq!(parallax_offset(0.0, 1920.0), Some(0.0));
    }
}
