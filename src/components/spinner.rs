//! Spinner Component
//!
//! Loading indicator shown until the initial load resolves.

use leptos::prelude::*;

/// Full-width loading indicator
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner-label">"Loading..."</span>
        </div>
    }
}
