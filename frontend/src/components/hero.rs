use gloo_events::EventListener;
use web_sys::window;
use yew::prelude::*;

use crate::components::typing_text::TypingText;
use crate::state::scroll::parallax_offset;
use crate::utils::dom;

#[function_component]
pub fn Hero() -> Html {
    let shift = use_state_eq(|| None::<f64>);

    // Parallax on the background image, wide viewports only.
    {
        let shift = shift.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let (Some(scroll_y), Some(width)) = (dom::scroll_y(), dom::viewport_width()) {
                        shift.set(parallax_offset(scroll_y, width));
                    }
                };
                update();
                let listener = window()
                    .map(|window| EventListener::new(&window, "scroll", move |_| update()));
                move || drop(listener)
            },
            (),
        );
    }

    let background_style = shift
        .map(|y| format!("transform: translateY({}px);", y))
        .unwrap_or_default();

    html! {
        <section id="home" class="hero">
            <div class="hero-bg">
                <img src="assets/images/hero-bg.jpg" alt="Interior showcase" style={background_style} />
                <div class="hero-overlay"></div>
            </div>
            <div class="container hero-content">
                <span class="hero-badge">{"Interior & Architecture Studio"}</span>
                <h1 class="hero-title">
                    {"We Create "}<br />
                    <TypingText />
                    <span class="typing-cursor">{"|"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"CV. Gilput Design menghadirkan desain interior dan arsitektur yang fungsional, estetis, dan sesuai dengan karakter Anda."}
                </p>
                <div class="hero-cta-group">
                    <a href="#portfolio" class="btn btn-primary">{"Lihat Portfolio"}</a>
                    <a href="#contact" class="btn btn-outline">{"Hubungi Kami"}</a>
                </div>
            </div>
        </section>
    }
}
