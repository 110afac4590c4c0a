use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::config::COUNTER_THRESHOLD;
use crate::state::counter::{CounterAnimation, CounterText};
use crate::utils::observer::VisibilityObserver;

type TimeoutSlot = Rc<RefCell<Option<Timeout>>>;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Element id; by convention it ends in `Counter`.
    pub id: AttrValue,
    pub text: AttrValue,
}

/// Statistic that counts up from zero the first time half of it is on screen.
#[function_component]
pub fn Counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let display = use_state(|| props.text.to_string());

    {
        let node = node.clone();
        let display = display.clone();
        use_effect_with_deps(
            move |text: &AttrValue| {
                let pending_step: TimeoutSlot = Rc::new(RefCell::new(None));
                let observer = match (CounterText::parse(text), node.cast::<Element>()) {
                    (Some(parsed), Some(element)) => {
                        let pending_step = pending_step.clone();
                        let mut pending = Some(parsed);
                        VisibilityObserver::observe(
                            &element,
                            COUNTER_THRESHOLD,
                            move |entry: &IntersectionObserverEntry, observer: &IntersectionObserver| {
                                if !entry.is_intersecting() {
                                    return;
                                }
                                observer.unobserve(&entry.target());
                                if let Some(parsed) = pending.take() {
                                    let animation = CounterAnimation::new(parsed.target);
                                    log::debug!("Counting up to {}", parsed.target);
                                    schedule_step(parsed, animation, display.clone(), pending_step.clone());
                                }
                            },
                        )
                    }
                    _ => None,
                };
                move || {
                    drop(observer);
                    pending_step.borrow_mut().take();
                }
            },
            props.text.clone(),
        );
    }

    html! {
        <span id={props.id.clone()} ref={node}>{(*display).clone()}</span>
    }
}

fn schedule_step(
    text: CounterText,
    mut animation: CounterAnimation,
    display: UseStateHandle<String>,
    slot: TimeoutSlot,
) {
    if animation.is_finished() {
        return;
    }
    let next_slot = slot.clone();
    let timeout = Timeout::new(animation.next_delay_ms(), move || {
        if let Some(value) = animation.next() {
            display.set(text.render(value));
        }
        schedule_step(text, animation, display, next_slot);
    });
    *slot.borrow_mut() = Some(timeout);
}
