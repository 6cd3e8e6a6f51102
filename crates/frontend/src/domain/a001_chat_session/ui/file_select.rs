use super::view_model::ChatSessionVm;
use crate::domain::a001_chat_session::state::FILE_SELECT_PROMPT;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Bot-styled prompt asking which of several uploaded files to use.
#[component]
#[allow(non_snake_case)]
pub fn FileSelectPrompt(vm: ChatSessionVm) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let toggle_dropdown = move |_| {
        is_open.update(|v| *v = !*v);
    };

    view! {
        <div class="chat-message chat-message--prompt">
            <div class="chat-message__avatar">{icon("bot")}</div>
            <div class="chat-message__body">
                <div class="chat-message__text">{FILE_SELECT_PROMPT}</div>
                <div class="file-select">
                    <button class="button button--ghost" on:click=toggle_dropdown>
                        "Select a file"
                        {icon("chevron-down")}
                    </button>

                    <Show when=move || is_open.get()>
                        <div class="file-select__dropdown">
                            <For
                                each=move || {
                                    vm.state.with(|s| {
                                        s.available_files().iter().cloned().enumerate().collect::<Vec<_>>()
                                    })
                                }
                                key=|(idx, name)| format!("{}:{}", idx, name)
                                children=move |(_, name): (usize, String)| {
                                    let picked = name.clone();
                                    view! {
                                        <button
                                            class="file-select__item"
                                            on:click=move |_| {
                                                is_open.set(false);
                                                vm.select_file(picked.clone());
                                            }
                                        >
                                            {name}
                                        </button>
                                    }
                                }
                            />
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
