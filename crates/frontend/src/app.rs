use crate::domain::a001_chat_session::ui::{ChatPage, ChatSessionVm};
use crate::layout::Shell;
use crate::shared::config::load_config;
use crate::shared::storage::BrowserStorage;
use crate::system::session::SessionContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let store = BrowserStorage::local();
    let config = load_config(&store);

    // Provide the client identity to the whole app via context.
    let session = SessionContext::initialize(&store, &config.session.identity_key);
    log::info!(
        "session {} ({})",
        session.identity(),
        if session.is_new() { "new" } else { "restored" }
    );
    provide_context(session);

    let vm = ChatSessionVm::new(&config);

    view! {
        <Shell vm=vm upload_accept=config.upload.accept.clone()>
            <ChatPage vm=vm />
        </Shell>
    }
}
