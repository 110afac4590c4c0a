use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::utils::observer::VisibilityObserver;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    Up,
    Left,
    Right,
}

impl RevealVariant {
    pub fn class(self) -> &'static str {
        match self {
            RevealVariant::Up => "reveal",
            RevealVariant::Left => "reveal-left",
            RevealVariant::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub variant: RevealVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that gains `active` once 15% of it scrolls into view. The
/// observer stays attached for the component's lifetime.
#[function_component]
pub fn Reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let active = use_state_eq(|| false);

    {
        let node = node.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    VisibilityObserver::observe(
                        &element,
                        REVEAL_THRESHOLD,
                        move |entry: &IntersectionObserverEntry, _: &IntersectionObserver| {
                            if entry.is_intersecting() {
                                active.set(true);
                            }
                        },
                    )
                });
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(props.variant.class(), props.class.clone(), (*active).then_some("active"))}>
            { for props.children.iter() }
        </div>
    }
}
