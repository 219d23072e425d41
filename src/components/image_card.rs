//! Image Card Component
//!
//! Single gallery entry with save and inline-confirmed delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::AppContext;
use crate::gallery;
use crate::models::Image;
use crate::store::{
    store_apply_delete, store_apply_save, use_gallery_store, GalleryStateStoreFields,
};

/// Card for one gallery image
///
/// Delete asks for an inline confirmation first. Save posts a flagged copy
/// and only marks the card once the server confirms the insert.
#[component]
pub fn ImageCard(image: Image) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_gallery_store();
    let (confirm_delete, set_confirm_delete) = signal(false);

    let saved = image.saved;
    let delete_id = image.id.clone();
    let save_id = image.id.clone();

    let on_delete = Callback::new(move |()| {
        set_confirm_delete.set(false);
        let id = delete_id.clone();
        spawn_local(async move {
            match commands::delete_image(&id).await {
                Ok(response) => {
                    if !response.confirmed() {
                        web_sys::console::warn_1(
                            &format!("[delete] {} not confirmed by server", id).into(),
                        );
                    }
                    store_apply_delete(&store, &id, &response);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[delete] {} failed: {}", id, e).into());
                    ctx.notify("Delete failed");
                }
            }
        });
    });

    let on_save = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let id = save_id.clone();
        spawn_local(async move {
            // Guarded lookup: the card may outlive its sequence entry.
            let Some(flagged) = gallery::flag_for_save(&store.images().get_untracked(), &id)
            else {
                web_sys::console::warn_1(&format!("[save] no image with id {}", id).into());
                ctx.notify("Image is no longer in the gallery");
                return;
            };
            match commands::save_image(&flagged).await {
                Ok(response) => store_apply_save(&store, &id, &response),
                Err(e) => {
                    web_sys::console::error_1(&format!("[save] {} failed: {}", id, e).into());
                    ctx.notify("Save failed");
                }
            }
        });
    };

    view! {
        <div class="image-card" class:saved=saved>
            <img class="image-card-picture" src=image.url.clone() alt=image.title.clone() />
            <div class="image-card-body">
                <div class="image-card-title" title=image.title.clone()>{image.title.clone()}</div>
                <div class="image-card-actions">
                    {if saved {
                        view! { <span class="saved-badge">"Saved"</span> }.into_any()
                    } else {
                        view! { <button class="save-btn" on:click=on_save>"Save"</button> }
                            .into_any()
                    }}

                    <Show when=move || !confirm_delete.get()>
                        <button
                            class="delete-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirm_delete.set(true);
                            }
                        >
                            "Delete"
                        </button>
                    </Show>
                    <Show when=move || confirm_delete.get()>
                        <span class="delete-confirm">
                            <span class="delete-confirm-text">"Delete?"</span>
                            <button
                                class="confirm-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    on_delete.run(());
                                }
                            >
                                "✓"
                            </button>
                            <button
                                class="cancel-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_confirm_delete.set(false);
                                }
                            >
                                "✗"
                            </button>
                        </span>
                    </Show>
                </div>
            </div>
        </div>
    }
}
