//! Chat Session - View Model

use crate::domain::a001_chat_session::api::ChatApi;
use crate::domain::a001_chat_session::poller::{spawn_generation_poll, spawn_ingestion_poll};
use crate::domain::a001_chat_session::state::ChatSessionState;
use crate::shared::api_utils::resolve_api_base;
use crate::shared::config::ChatConfig;
use crate::usecases::u501_upload_file::api::upload_file;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ChatSessionVm {
    pub state: RwSignal<ChatSessionState>,
    pub draft: RwSignal<String>,
    pub api: StoredValue<ChatApi>,
    pub poll_interval_ms: u32,
}

impl ChatSessionVm {
    pub fn new(config: &ChatConfig) -> Self {
        let base_url = resolve_api_base(&config.api);
        log::info!("chat backend: {}", base_url);
        Self {
            state: RwSignal::new(ChatSessionState::new()),
            draft: RwSignal::new(String::new()),
            api: StoredValue::new(ChatApi::new(base_url)),
            poll_interval_ms: config.polling.interval_ms,
        }
    }

    /// Input stays disabled until the pending answer arrives.
    pub fn input_locked(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_awaiting_reply()))
    }

    pub fn submit(&self) {
        let text = self.draft.get_untracked();
        let Some(result) = self.state.try_update(|s| s.submit_question(&text)) else {
            return;
        };

        match result {
            Ok(submission) => {
                self.draft.set(String::new());
                let api = self.api.get_value();
                let vm = *self;
                spawn_local(async move {
                    match api.ask_question(&submission.request).await {
                        Ok(_) => {
                            log::info!("question accepted");
                            let lease = submission.lease;
                            if vm.state.try_update(|s| s.question_accepted(lease)) == Some(true) {
                                spawn_generation_poll(vm, api, lease);
                            }
                        }
                        Err(e) => {
                            vm.state.try_update(|s| s.ask_failed(submission.lease, &e));
                        }
                    }
                });
            }
            Err(rejection) => {
                log::debug!("question rejected: {:?}", rejection);
                if rejection.clears_input() {
                    self.draft.set(String::new());
                }
            }
        }
    }

    pub fn select_file(&self, name: String) {
        if let Some(lease) = self.state.try_update(|s| s.select_context_file(name)) {
            spawn_ingestion_poll(*self, self.api.get_value(), lease);
        }
    }

    pub fn refresh_files(&self) {
        list_files(*self, self.api.get_value());
    }

    pub fn upload(&self, file: web_sys::File) {
        let name = file.name();
        self.state.update(|s| s.upload_started(name.clone()));

        let vm = *self;
        let api = self.api.get_value();
        spawn_local(async move {
            match upload_file(&api, &file).await {
                Ok(()) => {
                    log::info!("uploaded {}", name);
                    if let Some(lease) = vm.state.try_update(|s| s.upload_succeeded(name)) {
                        spawn_ingestion_poll(vm, api.clone(), lease);
                        list_files(vm, api);
                    }
                }
                Err(e) => {
                    vm.state.try_update(|s| s.upload_failed(&e));
                }
            }
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.state.try_update(|s| s.dismiss_notification(id));
    }
}

fn list_files(vm: ChatSessionVm, api: ChatApi) {
    spawn_local(async move {
        match api.list_files().await {
            Ok(listing) => vm.state.try_update(|s| s.apply_file_list(listing)),
            Err(e) => vm.state.try_update(|s| s.file_list_failed(&e)),
        };
    });
}
