use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

use crate::config::{PRELOADER_FADE_MS, PRELOADER_HOLD_MS};
use crate::utils::dom::is_load_complete;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Showing,
    Fading,
    Gone,
}

/// Logo overlay that clears itself shortly after the window has loaded.
#[function_component]
pub fn Preloader() -> Html {
    let loaded = use_state_eq(|| false);
    let stage = use_state_eq(|| Stage::Showing);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |_| {
                let pending = |window: &web_sys::Window| {
                    window
                        .document()
                        .map(|d| !is_load_complete(&d.ready_state()))
                        .unwrap_or(false)
                };
                let listener = match window() {
                    Some(window) if pending(&window) => {
                        Some(EventListener::once(&window, "load", move |_| loaded.set(true)))
                    }
                    _ => {
                        loaded.set(true);
                        None
                    }
                };
                move || drop(listener)
            },
            (),
        );
    }

    {
        let deps = (*loaded, *stage);
        let stage = stage.clone();
        use_effect_with_deps(
            move |&(loaded, current): &(bool, Stage)| {
                let timeout = match current {
                    Stage::Showing if loaded => Some(Timeout::new(PRELOADER_HOLD_MS, move || {
                        stage.set(Stage::Fading)
                    })),
                    Stage::Fading => Some(Timeout::new(PRELOADER_FADE_MS, move || {
                        stage.set(Stage::Gone)
                    })),
                    _ => None,
                };
                move || drop(timeout)
            },
            deps,
        );
    }

    if *stage == Stage::Gone {
        return html! {};
    }
    let opacity = if *stage == Stage::Fading { 0 } else { 1 };

    html! {
        <div id="preloader" style={format!(
            "position: fixed; top: 0; left: 0; width: 100%; height: 100%; background: #1A2530; \
             display: flex; align-items: center; justify-content: center; z-index: 99999; \
             transition: opacity 0.5s ease; opacity: {};",
            opacity
        )}>
            <div class="preloader-content">
                <img src="assets/images/logo.png" alt="Loading..." />
                <div class="preloader-spinner"></div>
            </div>
        </div>
    }
}
