use std::rc::Rc;

use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Notifier;
use crate::config::{self, CONTACT_EMAIL};
use crate::state::contact::{ContactForm, SUCCESS_MESSAGE};
use crate::state::notification::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

pub enum FormEdit {
    Set(Field, String),
    Reset,
}

impl Reducible for ContactForm {
    type Action = FormEdit;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormEdit::Set(field, value) => {
                let slot = match field {
                    Field::Name => &mut next.name,
                    Field::Email => &mut next.email,
                    Field::Phone => &mut next.phone,
                    Field::Subject => &mut next.subject,
                    Field::Message => &mut next.message,
                };
                *slot = value;
            }
            FormEdit::Reset => next = ContactForm::default(),
        }
        Rc::new(next)
    }
}

fn field_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn open_mail_client(link: &str) {
    if let Some(window) = window() {
        if let Err(e) = window.location().set_href(link) {
            log::warn!("Failed to open mail client: {:?}", e);
        }
    }
}

#[function_component]
pub fn ContactSection() -> Html {
    let form = use_reducer(ContactForm::default);
    let notifier = use_context::<Notifier>();

    let bind = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| form.dispatch(FormEdit::Set(field, field_value(&e))))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let data = (*form).clone();
            let notify = |message: String, severity: Severity| match &notifier {
                Some(notifier) => notifier.show(message, severity),
                None => log::warn!("No notification provider for: {}", message),
            };

            if let Err(err) = data.validate() {
                log::info!("Contact form rejected: {:?}", err);
                notify(err.to_string(), Severity::Error);
                return;
            }

            gloo_console::log!(
                "Form submitted:",
                serde_json::to_string(&data).unwrap_or_default()
            );
            notify(SUCCESS_MESSAGE.to_string(), Severity::Success);
            form.dispatch(FormEdit::Reset);

            if config::mailto_handoff_enabled() {
                open_mail_client(&data.mailto_link(CONTACT_EMAIL));
            }
        })
    };

    html! {
        <form id="contactForm" class="contact-form" novalidate=true onsubmit={onsubmit}>
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Nama Lengkap *"}</label>
                    <input type="text" id="name" name="name" value={form.name.clone()} oninput={bind(Field::Name)} />
                </div>
                <div class="form-group">
                    <label for="email">{"Email *"}</label>
                    <input type="email" id="email" name="email" value={form.email.clone()} oninput={bind(Field::Email)} />
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"Telepon"}</label>
                    <input type="tel" id="phone" name="phone" value={form.phone.clone()} oninput={bind(Field::Phone)} />
                </div>
                <div class="form-group">
                    <label for="subject">{"Subjek *"}</label>
                    <input type="text" id="subject" name="subject" value={form.subject.clone()} oninput={bind(Field::Subject)} />
                </div>
            </div>
            <div class="form-group">
                <label for="message">{"Pesan *"}</label>
                <textarea id="message" name="message" rows="5" value={form.message.clone()} oninput={bind(Field::Message)} />
            </div>
            <button type="submit" class="btn btn-primary">
                <i class="fas fa-paper-plane"></i>{" Kirim Pesan"}
            </button>
        </form>
    }
}
