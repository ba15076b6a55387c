//! Floating notice banner.

use leptos::prelude::*;

use crate::state::notice::Notice;

/// Renders a notice with a kind-specific style and icon plus a close button.
#[component]
pub fn AlertBanner(notice: Notice, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class={notice.kind.class()} role="alert">
            <span class="alert__icon" aria-hidden="true">{notice.kind.icon()}</span>
            <p class="alert__message">{notice.message}</p>
            <button class="alert__close" on:click=move |_| on_close.run(()) aria-label="Close alert">
                "✕"
            </button>
        </div>
    }
}
