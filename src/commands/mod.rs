//! REST Command Bindings
//!
//! Frontend bindings to the gallery backend, organized by resource. The
//! shared fetch plumbing lives here; every command resolves to
//! `Result<T, String>` and leaves error handling to the call site.

mod images;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

pub use images::*;

/// Fallback when no backend URL is baked in at build time
const DEFAULT_API_URL: &str = "http://127.0.0.1:5050";

/// Backend base URL, fixed at build time via `GALLERY_API_URL`
fn api_url() -> &'static str {
    option_env!("GALLERY_API_URL").unwrap_or(DEFAULT_API_URL)
}

fn images_url() -> String {
    format!("{}/images", api_url())
}

fn image_url(id: &str) -> String {
    format!("{}/images/{}", api_url(), id)
}

fn new_image_url(term: &str) -> String {
    format!("{}/new-image?query={}", api_url(), search_query(term))
}

/// Percent-encode a search term for use as a query value
fn search_query(term: &str) -> String {
    utf8_percent_encode(term, NON_ALPHANUMERIC).to_string()
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Run a request against the backend and hand back the decoded JSON body
async fn fetch_json(request: Request) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;
    if !response.ok() {
        return Err(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        ));
    }
    let body: js_sys::Promise = response.json().map_err(js_error)?;
    JsFuture::from(body).await.map_err(js_error)
}

async fn get_json(url: &str) -> Result<JsValue, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    fetch_json(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_terms_are_percent_encoded() {
        assert_eq!(search_query("cat"), "cat");
        assert_eq!(search_query("black cat"), "black%20cat");
        assert_eq!(search_query("c&t?"), "c%26t%3F");
    }

    #[test]
    fn endpoint_urls_follow_the_api_shape() {
        assert!(images_url().ends_with("/images"));
        assert!(image_url("abc").ends_with("/images/abc"));
        assert!(new_image_url("black cat").ends_with("/new-image?query=black%20cat"));
    }
}
