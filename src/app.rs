//! Images Gallery Frontend App
//!
//! Root component: owns the store, runs the initial load, and lays out the
//! gallery.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{Header, ImageCard, NotificationBar, SearchBar, Spinner};
use crate::context::AppContext;
use crate::store::{store_finish_load, GalleryState, GalleryStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(GalleryState::new());
    provide_context(store);

    let (notices, set_notices) = signal(Vec::new());
    let (next_notice, set_next_notice) = signal(0u32);
    let ctx = AppContext::new((notices, set_notices), (next_notice, set_next_notice));
    provide_context(ctx);

    // Load previously saved images on mount. A failed load never clears
    // the loading flag, so the view stays on the spinner.
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_saved_images().await {
                Ok(images) => store_finish_load(&store, images),
                Err(e) => {
                    web_sys::console::error_1(&format!("[app] initial load failed: {}", e).into());
                    ctx.notify("Could not load saved images");
                }
            }
        });
    });

    // Duplicates are allowed in the sequence, so cards key on position as
    // well as content.
    let images = move || {
        store
            .images()
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="app-layout">
            <Header title="Images Gallery" />
            <NotificationBar />
            <Show
                when=move || !store.loading().get()
                fallback=|| view! { <Spinner /> }
            >
                <SearchBar />
                <div class="image-grid">
                    <For
                        each=images
                        key=|(i, image)| (*i, image.id.clone(), image.saved)
                        children=move |(_, image)| view! { <ImageCard image=image /> }
                    />
                </div>
            </Show>
        </div>
    }
}
