use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Node};
use yew::prelude::*;

use crate::content::NavLink;
use crate::state::navbar::{active_section, is_link_active, is_scrolled, MenuState};
use crate::utils::dom;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub links: &'static [NavLink],
}

#[function_component]
pub fn Navbar(props: &NavbarProps) -> Html {
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let menu = use_state_eq(MenuState::default);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    // Compact style and current-section highlight follow the scroll position.
    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    let Some(offset) = dom::scroll_y() else {
                        return;
                    };
                    scrolled.set(is_scrolled(offset));
                    let sections = dom::section_extents();
                    active.set(active_section(offset, &sections).map(str::to_string));
                };
                update();
                let listener = window()
                    .map(|window| EventListener::new(&window, "scroll", move |_| update()));
                move || drop(listener)
            },
            (),
        );
    }

    // Any click outside the menu and its toggle closes the menu.
    {
        let menu = menu.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().and_then(|w| w.document()).map(|document| {
                    EventListener::new(&document, "click", move |event| {
                        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                        let inside = |node_ref: &NodeRef| {
                            node_ref
                                .get()
                                .is_some_and(|node| node.contains(target.as_ref()))
                        };
                        if !inside(&menu_ref) && !inside(&toggle_ref) {
                            menu.set(menu.closed());
                        }
                    })
                });
                move || drop(listener)
            },
            (),
        );
    }

    let toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.closed()))
    };
    let open_class = menu.is_open().then_some("active");

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <div class="container nav-container">
                <a href="#home" class="nav-logo">
                    <img src="assets/images/logo.png" alt="Gilput Design" />
                    <span>{"GILPUT DESIGN"}</span>
                </a>
                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", open_class)}>
                    { for props.links.iter().map(|link| {
                        let current = is_link_active(link.href, active.as_deref());
                        html! {
                            <li>
                                <a href={link.href} class={classes!("nav-link", current.then_some("active"))} onclick={close_menu.clone()}>
                                    {link.label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button id="navToggle" ref={toggle_ref} class={classes!("nav-toggle", open_class)} onclick={toggle} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
