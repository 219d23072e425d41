//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::gallery;
use crate::models::{DeleteResponse, Image, SaveResponse};

/// View state owned by the gallery
#[derive(Clone, Debug, Default, Store)]
pub struct GalleryState {
    /// Image sequence, newest search hits first
    pub images: Vec<Image>,
    /// Current search term, cleared after every search attempt
    pub word: String,
    /// True until the initial load resolves
    pub loading: bool,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole sequence with the server's and leave the loading state.
/// Never called on a failed load, so the spinner stays up in that case.
pub fn store_finish_load(store: &GalleryStore, images: Vec<Image>) {
    store.images().set(images);
    store.loading().set(false);
}

/// Prepend a freshly searched image to the sequence
pub fn store_prepend_image(store: &GalleryStore, image: Image) {
    let next = gallery::prepend_image(&store.images().get_untracked(), image);
    store.images().set(next);
}

/// Apply a delete outcome to the sequence
pub fn store_apply_delete(store: &GalleryStore, id: &str, response: &DeleteResponse) {
    let next = gallery::reconcile_delete(&store.images().get_untracked(), id, response);
    store.images().set(next);
}

/// Apply a save outcome to the sequence
pub fn store_apply_save(store: &GalleryStore, id: &str, response: &SaveResponse) {
    let next = gallery::reconcile_save(&store.images().get_untracked(), id, response);
    store.images().set(next);
}

/// Clear the search term
pub fn store_clear_word(store: &GalleryStore) {
    store.word().set(String::new());
}
