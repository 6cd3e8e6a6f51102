use super::view_model::ChatSessionVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Message input pinned to the bottom; Enter or the send icon submits.
#[component]
#[allow(non_snake_case)]
pub fn Composer(vm: ChatSessionVm) -> impl IntoView {
    let locked = vm.input_locked();

    view! {
        <div class="composer">
            <div class="composer__box">
                <input
                    class="composer__input"
                    placeholder="Send a message..."
                    autofocus=true
                    disabled=move || locked.get()
                    prop:value=move || vm.draft.get()
                    on:input=move |ev| vm.draft.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            vm.submit();
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Transparent
                    disabled=locked
                    on_click=move |_| vm.submit()
                >
                    {icon("send")}
                </Button>
            </div>
        </div>
    }
}
