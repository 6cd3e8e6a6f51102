use crate::domain::a001_chat_session::state::UploadIndicator;
use crate::domain::a001_chat_session::ui::ChatSessionVm;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

const INPUT_ID: &str = "context-file-input";

/// Upload control in the header: a button driving a hidden file input.
#[component]
#[allow(non_snake_case)]
pub fn UploadButton(vm: ChatSessionVm, #[prop(into)] accept: String) -> impl IntoView {
    let uploading =
        Signal::derive(move || vm.state.with(|s| s.upload_indicator() == UploadIndicator::Uploading));

    view! {
        <input
            type="file"
            accept=accept
            style="display: none;"
            id=INPUT_ID
            on:change=move |ev| {
                let input: web_sys::HtmlInputElement = event_target(&ev);
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    vm.upload(file);
                }
                // same file can be picked again
                input.set_value("");
            }
        />
        <Button
            appearance=ButtonAppearance::Secondary
            disabled=uploading
            on_click=move |_| {
                let input = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id(INPUT_ID))
                    .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
                if let Some(input) = input {
                    input.click();
                }
            }
        >
            {icon("upload")}
            {move || if uploading.get() { " Uploading..." } else { " Upload PDF" }}
        </Button>
    }
}
