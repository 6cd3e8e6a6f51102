use leptos::prelude::*;

/// Skeleton lines shown while the bot is busy.
#[component]
#[allow(non_snake_case)]
pub fn WaitingIndicator() -> impl IntoView {
    view! {
        <div class="waiting-indicator" aria-busy="true">
            <div class="waiting-indicator__line" />
            <div class="waiting-indicator__line" />
            <div class="waiting-indicator__line waiting-indicator__line--short" />
        </div>
    }
}
