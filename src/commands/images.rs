//! Image Commands
//!
//! Frontend bindings for the image endpoints.

use wasm_bindgen::JsValue;
use web_sys::{Headers, Request, RequestInit};

use super::{fetch_json, get_json, image_url, images_url, js_error, new_image_url};
use crate::models::{DeleteResponse, FoundImage, Image, SaveResponse};

/// List previously saved images. A null body counts as an empty gallery.
pub async fn list_saved_images() -> Result<Vec<Image>, String> {
    let body = get_json(&images_url()).await?;
    let images: Option<Vec<Image>> =
        serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())?;
    Ok(images.unwrap_or_default())
}

/// Fetch one new image for `term`; the term becomes the image title
pub async fn search_new_image(term: &str) -> Result<Image, String> {
    let body = get_json(&new_image_url(term)).await?;
    let found: FoundImage = serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())?;
    Ok(found.with_title(term))
}

/// Ask the backend to delete the image with `id`
pub async fn delete_image(id: &str) -> Result<DeleteResponse, String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    let request = Request::new_with_str_and_init(&image_url(id), &opts).map_err(js_error)?;
    let body = fetch_json(request).await?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

/// Post a saved-flagged image for persistence
pub async fn save_image(image: &Image) -> Result<SaveResponse, String> {
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let payload = serde_json::to_string(image).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(&images_url(), &opts).map_err(js_error)?;
    let body = fetch_json(request).await?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}
