use super::view_model::ChatSessionVm;
use crate::shared::icons::icon;
use contracts::domain::a001_chat_message::ChatMessage;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn MessageList(vm: ChatSessionVm) -> impl IntoView {
    view! {
        <div class="chat-messages">
            // append-only log: the position is a stable key
            <For
                each=move || {
                    vm.state
                        .with(|s| s.messages().iter().cloned().enumerate().collect::<Vec<_>>())
                }
                key=|(idx, _)| *idx
                children=move |(_, message)| view! { <ChatBubble message=message /> }
            />
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.is_user();
    let author = message.author().as_str();

    view! {
        <div class=if is_user { "chat-message chat-message--user" } else { "chat-message" }>
            <div class="chat-message__avatar" title=author>
                {if is_user { icon("user") } else { icon("bot") }}
            </div>
            <div class="chat-message__body">
                <div class="chat-message__author">{author}</div>
                <div class="chat-message__text" style="white-space: pre-wrap;">
                    {message.content().to_string()}
                </div>
            </div>
        </div>
    }
}
