use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{window, Element};
use yew::prelude::*;

use crate::state::scroll::fragment_id;
use crate::utils::dom;

const IN_PAGE_LINK: &str = r##"a[href^="#"]"##;

/// Intercepts every in-page anchor click on the document and scrolls to the
/// target smoothly instead of jumping.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        |_| {
            let listener = window().and_then(|w| w.document()).map(|document| {
                EventListener::new_with_options(
                    &document,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    |event| {
                        let link = event
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .and_then(|el| el.closest(IN_PAGE_LINK).ok().flatten());
                        let Some(link) = link else {
                            return;
                        };
                        event.prevent_default();

                        let href = link.get_attribute("href").unwrap_or_default();
                        if let Some(id) = fragment_id(&href) {
                            if !dom::smooth_scroll_to(id) {
                                log::debug!("No scroll target for #{}", id);
                            }
                        }
                    },
                )
            });
            move || drop(listener)
        },
        (),
    );
}
