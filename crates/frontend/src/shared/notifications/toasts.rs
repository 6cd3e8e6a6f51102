use super::{Notification, NotificationLevel};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TOAST_LIFETIME_MS: u32 = 4000;

fn intent(level: NotificationLevel) -> MessageBarIntent {
    match level {
        NotificationLevel::Success => MessageBarIntent::Success,
        NotificationLevel::Warning => MessageBarIntent::Warning,
        NotificationLevel::Error => MessageBarIntent::Error,
    }
}

/// Top-right toast stack; each toast expires on its own timer or on click.
#[component]
pub fn Toasts(
    #[prop(into)] items: Signal<Vec<Notification>>,
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    view! {
        <div class="toasts">
            <For
                each=move || items.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    spawn_local(async move {
                        TimeoutFuture::new(TOAST_LIFETIME_MS).await;
                        on_dismiss.run(id);
                    });
                    view! {
                        <div class="toasts__item" on:click=move |_| on_dismiss.run(id)>
                            <MessageBar intent=intent(n.level)>{n.text}</MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
