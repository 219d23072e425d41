//! Search Bar Component
//!
//! Form for searching a new image by term.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::store::{
    store_clear_word, store_prepend_image, use_gallery_store, GalleryStateStoreFields,
};

/// Search form; submitting fetches one new image for the current term
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_gallery_store();

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let word = store.word().get_untracked();
        if word.is_empty() {
            return;
        }

        spawn_local(async move {
            match commands::search_new_image(&word).await {
                Ok(image) => store_prepend_image(&store, image),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[search] \"{}\" failed: {}", word, e).into(),
                    );
                    ctx.notify(format!("Search for \"{}\" failed", word));
                }
            }
            // Cleared on success and failure alike.
            store_clear_word(&store);
        });
    };

    view! {
        <form class="search-bar" on:submit=on_search>
            <input
                type="text"
                class="search-input"
                placeholder="Search for an image..."
                prop:value=move || store.word().get()
                on:input=move |ev| store.word().set(event_target_value(&ev))
            />
            <button type="submit" class="search-btn">"Search"</button>
        </form>
    }
}
