use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};
use yew::prelude::*;

use crate::config::LIGHTBOX_FADE_MS;
use crate::state::lightbox::LightboxState;
use crate::state::portfolio::GalleryItem;
use crate::utils::dom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Open { index: usize, len: usize },
    Close,
    Next(usize),
    Prev(usize),
    /// The published visible list changed to this length.
    Sync(usize),
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            LightboxAction::Open { index, len } => {
                if !next.open(index, len) {
                    log::debug!("Ignoring lightbox open at {} of {}", index, len);
                }
            }
            LightboxAction::Close => next.close(),
            LightboxAction::Next(len) => {
                next.next(len);
                log::debug!("Lightbox moved to {}", next.index());
            }
            LightboxAction::Prev(len) => {
                next.prev(len);
                log::debug!("Lightbox moved to {}", next.index());
            }
            LightboxAction::Sync(len) => next.sync(len),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub items: Rc<Vec<GalleryItem>>,
    /// Indices into `items` currently shown by the portfolio filter.
    pub visible: Rc<Vec<usize>>,
    pub state: LightboxState,
    pub dispatcher: UseReducerDispatcher<LightboxState>,
}

#[function_component]
pub fn Lightbox(props: &LightboxProps) -> Html {
    let node = use_node_ref();
    // Gallery item on screen; lags `state` by the fade.
    let shown = use_state_eq(|| None::<usize>);
    let fading = use_state_eq(|| false);
    let len = props.visible.len();
    let open = props.state.is_open();

    {
        let shown = shown.clone();
        let fading = fading.clone();
        use_effect_with_deps(
            move |current: &Option<usize>| {
                let mut pending = None;
                match *current {
                    None => {
                        shown.set(None);
                        fading.set(false);
                    }
                    Some(index) if shown.is_none() => shown.set(Some(index)),
                    Some(index) if *shown != Some(index) => {
                        fading.set(true);
                        pending = Some(Timeout::new(LIGHTBOX_FADE_MS, move || {
                            shown.set(Some(index));
                            fading.set(false);
                        }));
                    }
                    Some(_) => {}
                }
                move || drop(pending)
            },
            props.state.current_item(&props.visible),
        );
    }

    use_effect_with_deps(
        |&open: &bool| {
            dom::set_body_scroll_locked(open);
            move || {
                if open {
                    dom::set_body_scroll_locked(false);
                }
            }
        },
        open,
    );

    // Keyboard navigation only while open.
    {
        let dispatcher = props.dispatcher.clone();
        use_effect_with_deps(
            move |&(open, len): &(bool, usize)| {
                let listener = open
                    .then(|| window().and_then(|w| w.document()))
                    .flatten()
                    .map(|document| {
                        EventListener::new(&document, "keydown", move |event| {
                            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                                return;
                            };
                            match event.key().as_str() {
                                "Escape" => dispatcher.dispatch(LightboxAction::Close),
                                "ArrowLeft" => dispatcher.dispatch(LightboxAction::Prev(len)),
                                "ArrowRight" => dispatcher.dispatch(LightboxAction::Next(len)),
                                _ => {}
                            }
                        })
                    });
                move || drop(listener)
            },
            (open, len),
        );
    }

    let dispatch = |action: LightboxAction| {
        let dispatcher = props.dispatcher.clone();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    let on_backdrop = {
        let dispatcher = props.dispatcher.clone();
        let node = node.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            if target.is_some() && target == node.cast::<Element>() {
                dispatcher.dispatch(LightboxAction::Close);
            }
        })
    };

    let item = (*shown).and_then(|index| props.items.get(index));
    let (src, alt, title, category) = match item {
        Some(item) => (
            item.image_src.clone(),
            item.image_alt.clone(),
            item.title.clone(),
            item.category_label.clone(),
        ),
        None => Default::default(),
    };
    let image_style = format!("opacity: {}; transition: opacity 0.2s ease;", if *fading { 0 } else { 1 });

    html! {
        <div id="lightbox" ref={node} class={classes!("lightbox", open.then_some("active"))} onclick={on_backdrop}>
            <div class="lightbox-content">
                <button id="lightboxClose" class="lightbox-close" onclick={dispatch(LightboxAction::Close)}>
                    <i class="fas fa-times"></i>
                </button>
                <button id="lightboxPrev" class="lightbox-nav lightbox-prev" onclick={dispatch(LightboxAction::Prev(len))}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <img id="lightboxImage" src={src} alt={alt} style={image_style} />
                <div class="lightbox-info">
                    <h4 id="lightboxTitle">{title}</h4>
                    <span id="lightboxCategory">{category}</span>
                </div>
                <button id="lightboxNext" class="lightbox-nav lightbox-next" onclick={dispatch(LightboxAction::Next(len))}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
        </div>
    }
}
