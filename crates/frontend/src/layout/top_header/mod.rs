//! TopHeader component - application top navigation bar.
//!
//! Contains:
//! - Application title
//! - Badge of the uploaded file, colored by upload state
//! - Upload control

use crate::domain::a001_chat_session::ui::ChatSessionVm;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use crate::usecases::u501_upload_file::UploadButton;
use leptos::prelude::*;

#[component]
pub fn TopHeader(vm: ChatSessionVm, #[prop(into)] upload_accept: String) -> impl IntoView {
    let session = use_session();
    let color = move || vm.state.with(|s| s.upload_indicator().color());
    let shimmer = move || vm.state.with(|s| s.file_name_shimmers());

    view! {
        <nav class="top-header">
            <div class="top-header__brand" title=format!("Session {}", session.identity())>
                {icon("bot")}
                <span class="top-header__title">"ChatPDF"</span>
            </div>

            <div class="top-header__actions">
                {move || {
                    vm.state
                        .with(|s| s.uploaded_file().map(str::to_string))
                        .map(|name| {
                            view! {
                                <div class="file-badge">
                                    <div
                                        class="file-badge__icon"
                                        style=move || format!("border-color: {0}; color: {0};", color())
                                    >
                                        {icon("file")}
                                    </div>
                                    <span
                                        class=move || {
                                            if shimmer() { "file-badge__name shimmer" } else { "file-badge__name" }
                                        }
                                        style=move || {
                                            if shimmer() { String::new() } else { format!("color: {};", color()) }
                                        }
                                    >
                                        {name}
                                    </span>
                                </div>
                            }
                        })
                }}
                <UploadButton vm=vm accept=upload_accept />
            </div>
        </nav>
    }
}
