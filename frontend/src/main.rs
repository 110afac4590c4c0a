use yew::prelude::*;

mod config;
mod content;
mod state {
    pub mod contact;
    pub mod counter;
    pub mod lightbox;
    pub mod navbar;
    pub mod notification;
    pub mod portfolio;
    pub mod scroll;
    pub mod typing;
}
mod utils {
    pub mod dom;
    pub mod observer;
}
mod components {
    pub mod contact_form;
    pub mod counter;
    pub mod hero;
    pub mod lightbox;
    pub mod navbar;
    pub mod notification;
    pub mod portfolio;
    #[cfg(feature = "preloader")]
    pub mod preloader;
    pub mod reveal;
    pub mod smooth_scroll;
    pub mod typing_text;
}
mod pages {
    pub mod home;
}

use components::notification::NotificationProvider;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    #[cfg(feature = "preloader")]
    let preloader = html! { <components::preloader::Preloader /> };
    #[cfg(not(feature = "preloader"))]
    let preloader = html! {};

    html! {
        <NotificationProvider>
            { preloader }
            <Home />
        </NotificationProvider>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting Gilput Design site");
    yew::Renderer::<App>::new().render();
}
