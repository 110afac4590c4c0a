use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::state::navbar::SectionExtent;
use crate::state::scroll::scroll_destination;

pub fn scroll_y() -> Option<f64> {
    window()?.scroll_y().ok()
}

pub fn viewport_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

/// Extents of every `section[id]` on the page, in document order.
pub fn section_extents() -> Vec<SectionExtent> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(sections) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..sections.length())
        .filter_map(|i| sections.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionExtent::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// Smoothly scrolls so the element with `id` sits under the fixed header.
/// Returns false when there is no such element.
pub fn smooth_scroll_to(id: &str) -> bool {
    let Some(window) = window() else {
        return false;
    };
    let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) else {
        return false;
    };
    let page_y = window.page_y_offset().unwrap_or_default();
    let top = scroll_destination(target.get_bounding_client_rect().top(), page_y);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Locks or releases page scrolling behind a modal.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let result = if locked {
        body.style().set_property("overflow", "hidden")
    } else {
        body.style().remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!("Failed to update body overflow: {:?}", e);
    }
}

/// Whether `document.readyState` says the `load` event has already fired.
#[cfg(any(test, feature = "preloader"))]
pub fn is_load_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("loading", false)]
    #[case("interactive", false)]
    #[case("complete", true)]
    fn only_complete_means_loaded(#[case] ready_state: &str, #[case] expected: bool) {
        assert_eq!(is_load_complete(ready_state), expected);
    }
}
