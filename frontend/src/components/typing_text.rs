use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{TYPING_START_DELAY_MS, TYPING_WORDS};
use crate::state::typing::TypingState;

type TimeoutSlot = Rc<RefCell<Option<Timeout>>>;

/// Hero headline that types and deletes the configured phrases forever.
/// The pending step is cancelled when the component unmounts.
#[function_component]
pub fn TypingText() -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let slot: TimeoutSlot = Rc::new(RefCell::new(None));
                schedule_step(
                    TYPING_START_DELAY_MS,
                    TypingState::new(TYPING_WORDS),
                    text,
                    slot.clone(),
                );
                move || {
                    slot.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <span id="typingText" class="typing-text">{(*text).clone()}</span>
    }
}

fn schedule_step(delay_ms: u32, mut state: TypingState, text: UseStateHandle<String>, slot: TimeoutSlot) {
    let next_slot = slot.clone();
    let timeout = Timeout::new(delay_ms, move || {
        let frame = state.tick();
        text.set(frame.text);
        schedule_step(frame.delay_ms, state, text, next_slot);
    });
    *slot.borrow_mut() = Some(timeout);
}
