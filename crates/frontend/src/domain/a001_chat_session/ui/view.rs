//! Chat Session - View Component

use super::composer::Composer;
use super::file_select::FileSelectPrompt;
use super::message_list::MessageList;
use super::view_model::ChatSessionVm;
use super::waiting_indicator::WaitingIndicator;
use crate::shared::notifications::Toasts;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatPage(vm: ChatSessionVm) -> impl IntoView {
    let chat_end = NodeRef::<leptos::html::Div>::new();

    // Files already known to the backend may need a choice
    Effect::new(move |_| {
        vm.refresh_files();
    });

    // Keep the last message in view
    Effect::new(move |_| {
        let count = vm.state.with(|s| s.messages().len());
        if let Some(end) = chat_end.get() {
            request_animation_frame(move || end.scroll_into_view());
        }
        count
    });

    let show_file_select = move || vm.state.with(|s| s.show_file_select());
    let show_waiting = move || vm.state.with(|s| s.is_waiting() && !s.show_file_select());

    view! {
        <div class="chat-page">
            <MessageList vm=vm />
            <div node_ref=chat_end />

            <Show when=show_file_select>
                <FileSelectPrompt vm=vm />
            </Show>
            <Show when=show_waiting>
                <WaitingIndicator />
            </Show>

            <div class="chat-page__spacer" />
            <Composer vm=vm />

            <Toasts
                items=Signal::derive(move || vm.state.with(|s| s.notifications().items().to_vec()))
                on_dismiss=Callback::new(move |id: u64| vm.dismiss(id))
            />
        </div>
    }
}
