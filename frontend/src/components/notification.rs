use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{NOTIFICATION_DISMISS_MS, NOTIFICATION_SLIDE_OUT_MS};
use crate::state::notification::{
    Notification, NotificationAction, NotificationSlot, Phase, Severity,
};

const NOTIFICATION_CSS: &str = r#"
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
    .notification {
        position: fixed;
        top: 100px;
        right: 20px;
        padding: 1rem 1.5rem;
        color: white;
        border-radius: 10px;
        display: flex;
        align-items: center;
        gap: 0.75rem;
        box-shadow: 0 10px 40px rgba(0,0,0,0.2);
        z-index: 9999;
        font-family: 'Inter', sans-serif;
    }
    .notification-close {
        background: none;
        border: none;
        color: white;
        cursor: pointer;
        padding: 0;
        margin-left: 0.5rem;
        opacity: 0.8;
        transition: opacity 0.2s;
    }
    .notification-close:hover { opacity: 1; }
"#;

impl Reducible for NotificationSlot {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

/// Handle for publishing a toast from anywhere under [`NotificationProvider`].
#[derive(Clone, PartialEq)]
pub struct Notifier(UseReducerDispatcher<NotificationSlot>);

impl Notifier {
    pub fn show(&self, message: impl Into<String>, severity: Severity) {
        self.0.dispatch(NotificationAction::Show {
            message: message.into(),
            severity,
        });
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    pub children: Children,
}

#[function_component]
pub fn NotificationProvider(props: &NotificationProviderProps) -> Html {
    let slot = use_reducer(NotificationSlot::default);
    let notifier = Notifier(slot.dispatcher());

    // One pending timer per (notification, phase); a change drops the old one.
    {
        let dispatcher = slot.dispatcher();
        let key = slot.current().map(|n| (n.id, n.phase));
        use_effect_with_deps(
            move |key| {
                let timeout = key.map(|(id, phase)| match phase {
                    Phase::Visible => Timeout::new(NOTIFICATION_DISMISS_MS, move || {
                        dispatcher.dispatch(NotificationAction::Dismiss(id))
                    }),
                    Phase::Leaving => Timeout::new(NOTIFICATION_SLIDE_OUT_MS, move || {
                        dispatcher.dispatch(NotificationAction::Remove(id))
                    }),
                });
                move || drop(timeout)
            },
            key,
        );
    }

    let toast = slot.current().map(|notification| {
        let on_close = {
            let dispatcher = slot.dispatcher();
            let id = notification.id;
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(NotificationAction::Dismiss(id)))
        };
        render_toast(notification, on_close)
    });

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            <style>{NOTIFICATION_CSS}</style>
            <>{ toast.unwrap_or_default() }</>
        </ContextProvider<Notifier>>
    }
}

fn render_toast(notification: &Notification, on_close: Callback<MouseEvent>) -> Html {
    let animation = match notification.phase {
        Phase::Visible => "slideIn",
        Phase::Leaving => "slideOut",
    };
    let style = format!(
        "background: {}; animation: {} 0.3s ease forwards;",
        notification.severity.background(),
        animation
    );
    html! {
        <div key={notification.id.to_string()} class={classes!("notification", notification.severity.class())} style={style}>
            <i class={classes!("fas", notification.severity.icon())}></i>
            <span>{&notification.message}</span>
            <button class="notification-close" onclick={on_close}>
                <i class="fas fa-times"></i>
            </button>
        </div>
    }
}
