//! Header Component
//!
//! Top banner with the application title.

use leptos::prelude::*;

/// Application header
#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="app-header">
            <h1 class="app-title">{title}</h1>
        </header>
    }
}
