//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Gallery image (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Absent on the wire until the image has been persisted
    #[serde(default)]
    pub saved: bool,
}

/// Search hit as returned by the search endpoint. It carries no title;
/// the submitted term becomes the title when the hit enters the gallery.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FoundImage {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub saved: bool,
}

impl FoundImage {
    /// Promote a search hit to a gallery image titled with the term
    pub fn with_title(self, title: impl Into<String>) -> Image {
        Image {
            id: self.id,
            title: title.into(),
            url: self.url,
            saved: self.saved,
        }
    }
}

/// Response to a delete request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub deleted_id: Option<String>,
}

impl DeleteResponse {
    /// The server confirmed the deletion: `deleted_id` is present and non-empty
    pub fn confirmed(&self) -> bool {
        self.deleted_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

/// Response to a save request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub inserted_id: Option<String>,
}

impl SaveResponse {
    /// The server confirmed the insert: `inserted_id` is present and non-empty
    pub fn confirmed(&self) -> bool {
        self.inserted_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_without_saved_field_is_unsaved() {
        let image: Image =
            serde_json::from_str(r#"{"id":"1","title":"cat","url":"http://img/1"}"#).unwrap();
        assert!(!image.saved);
    }

    #[test]
    fn image_round_trips_saved_flag() {
        let image: Image = serde_json::from_str(
            r#"{"id":"1","title":"cat","url":"http://img/1","saved":true}"#,
        )
        .unwrap();
        assert!(image.saved);
    }

    #[test]
    fn null_image_list_means_empty_gallery() {
        let images: Option<Vec<Image>> = serde_json::from_str("null").unwrap();
        assert_eq!(images.unwrap_or_default(), Vec::new());
    }

    #[test]
    fn found_image_takes_term_as_title() {
        let found: FoundImage =
            serde_json::from_str(r#"{"id":"7","url":"http://img/7"}"#).unwrap();
        let image = found.with_title("black cat");
        assert_eq!(image.title, "black cat");
        assert_eq!(image.id, "7");
        assert!(!image.saved);
    }

    #[test]
    fn delete_confirmation_requires_non_empty_id() {
        let missing: DeleteResponse = serde_json::from_str("{}").unwrap();
        assert!(!missing.confirmed());

        let empty: DeleteResponse = serde_json::from_str(r#"{"deleted_id":""}"#).unwrap();
        assert!(!empty.confirmed());

        let confirmed: DeleteResponse =
            serde_json::from_str(r#"{"deleted_id":"abc"}"#).unwrap();
        assert!(confirmed.confirmed());
    }

    #[test]
    fn save_confirmation_requires_non_empty_id() {
        let missing: SaveResponse = serde_json::from_str("{}").unwrap();
        assert!(!missing.confirmed());

        let empty: SaveResponse = serde_json::from_str(r#"{"inserted_id":""}"#).unwrap();
        assert!(!empty.confirmed());

        let confirmed: SaveResponse =
            serde_json::from_str(r#"{"inserted_id":"abc"}"#).unwrap();
        assert!(confirmed.confirmed());
    }
}
