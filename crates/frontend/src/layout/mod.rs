pub mod top_header;

use crate::domain::a001_chat_session::ui::ChatSessionVm;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |   TopHeader (brand, file badge, upload)  |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(
    vm: ChatSessionVm,
    #[prop(into)] upload_accept: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader vm=vm upload_accept=upload_accept />
            <main class="app-main">{children()}</main>
        </div>
    }
}
