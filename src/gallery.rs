//! Gallery Reconciliation
//!
//! Pure snapshot functions over the image sequence. Each one reads a
//! sequence and returns a new one; shared state is only rewritten after
//! the server has confirmed the outcome, so an unconfirmed response or a
//! failed request leaves the gallery exactly as it was.

use crate::models::{DeleteResponse, Image, SaveResponse};

/// Prepend a freshly searched image. New hits always go to the front and
/// are never merged with existing entries, so searching the same term
/// twice yields duplicates.
pub fn prepend_image(images: &[Image], image: Image) -> Vec<Image> {
    let mut next = Vec::with_capacity(images.len() + 1);
    next.push(image);
    next.extend_from_slice(images);
    next
}

/// Remove every record matching `id`, but only on a confirmed deletion.
/// An unconfirmed response returns the sequence unchanged.
pub fn reconcile_delete(images: &[Image], id: &str, response: &DeleteResponse) -> Vec<Image> {
    if !response.confirmed() {
        return images.to_vec();
    }
    images
        .iter()
        .filter(|image| image.id != id)
        .cloned()
        .collect()
}

/// Flag the record matching `id` as saved, but only on a confirmed
/// insert. All other records pass through untouched.
pub fn reconcile_save(images: &[Image], id: &str, response: &SaveResponse) -> Vec<Image> {
    if !response.confirmed() {
        return images.to_vec();
    }
    images
        .iter()
        .map(|image| {
            if image.id == id {
                Image {
                    saved: true,
                    ..image.clone()
                }
            } else {
                image.clone()
            }
        })
        .collect()
}

/// Saved-flagged copy of the record matching `id`, or `None` when no such
/// record exists. The sequence element itself stays unmutated until the
/// server confirms the insert.
pub fn flag_for_save(images: &[Image], id: &str) -> Option<Image> {
    images.iter().find(|image| image.id == id).map(|image| Image {
        saved: true,
        ..image.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_image(id: &str, title: &str, saved: bool) -> Image {
        Image {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("http://img/{}", id),
            saved,
        }
    }

    fn confirmed_delete(id: &str) -> DeleteResponse {
        DeleteResponse {
            deleted_id: Some(id.to_string()),
        }
    }

    fn confirmed_save(id: &str) -> SaveResponse {
        SaveResponse {
            inserted_id: Some(id.to_string()),
        }
    }

    #[test]
    fn search_hit_lands_at_the_front() {
        let images = vec![make_image("1", "cat", true), make_image("2", "dog", false)];

        let next = prepend_image(&images, make_image("3", "owl", false));

        assert_eq!(next.len(), 3);
        assert_eq!(next[0].id, "3");
        assert_eq!(next[0].title, "owl");
        // The rest is unchanged and unreordered.
        assert_eq!(&next[1..], &images[..]);
    }

    #[test]
    fn duplicate_terms_coexist() {
        let images = vec![make_image("7", "cat", false)];

        let next = prepend_image(&images, make_image("7", "cat", false));

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, next[1].id);
    }

    #[test]
    fn confirmed_delete_removes_the_record() {
        let images = vec![make_image("1", "cat", false), make_image("2", "dog", false)];

        let next = reconcile_delete(&images, "1", &confirmed_delete("1"));

        assert_eq!(next, vec![make_image("2", "dog", false)]);
    }

    #[test]
    fn confirmed_delete_removes_all_duplicates() {
        let images = vec![
            make_image("1", "cat", false),
            make_image("2", "dog", false),
            make_image("1", "cat", false),
        ];

        let next = reconcile_delete(&images, "1", &confirmed_delete("1"));

        assert_eq!(next, vec![make_image("2", "dog", false)]);
    }

    #[test]
    fn unconfirmed_delete_changes_nothing() {
        let images = vec![make_image("1", "cat", false)];

        let missing = DeleteResponse { deleted_id: None };
        assert_eq!(reconcile_delete(&images, "1", &missing), images);

        let empty = DeleteResponse {
            deleted_id: Some(String::new()),
        };
        assert_eq!(reconcile_delete(&images, "1", &empty), images);
    }

    #[test]
    fn confirmed_delete_of_unknown_id_is_idempotent() {
        let images = vec![make_image("1", "cat", false)];

        let next = reconcile_delete(&images, "nope", &confirmed_delete("nope"));

        assert_eq!(next, images);
    }

    #[test]
    fn confirmed_save_flags_exactly_one_record() {
        let images = vec![make_image("1", "cat", false), make_image("2", "dog", false)];

        let next = reconcile_save(&images, "1", &confirmed_save("abc"));

        assert_eq!(
            next,
            vec![make_image("1", "cat", true), make_image("2", "dog", false)]
        );
    }

    #[test]
    fn unconfirmed_save_changes_nothing() {
        let images = vec![make_image("1", "cat", false)];

        let missing = SaveResponse { inserted_id: None };
        assert_eq!(reconcile_save(&images, "1", &missing), images);

        let empty = SaveResponse {
            inserted_id: Some(String::new()),
        };
        assert_eq!(reconcile_save(&images, "1", &empty), images);
    }

    #[test]
    fn save_confirmation_id_namespace_does_not_matter() {
        // The server may echo the record id or assign one from a different
        // namespace; either way the envelope id is only a confirmation
        // signal and is never merged into the record.
        let images = vec![make_image("1", "cat", false)];

        let echoed = reconcile_save(&images, "1", &confirmed_save("1"));
        let foreign = reconcile_save(&images, "1", &confirmed_save("abc"));

        assert_eq!(echoed, foreign);
        assert_eq!(echoed[0].id, "1");
        assert!(echoed[0].saved);
    }

    #[test]
    fn flag_for_save_returns_a_copy() {
        let images = vec![make_image("1", "cat", false)];

        let flagged = flag_for_save(&images, "1").unwrap();

        assert!(flagged.saved);
        assert_eq!(flagged.id, "1");
        // The original sequence element is untouched.
        assert!(!images[0].saved);
    }

    #[test]
    fn flag_for_save_misses_safely() {
        let images = vec![make_image("1", "cat", false)];

        assert_eq!(flag_for_save(&images, "2"), None);
        assert_eq!(flag_for_save(&[], "1"), None);
    }
}
