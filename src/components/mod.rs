//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod image_card;
mod notification_bar;
mod search_bar;
mod spinner;

pub use header::Header;
pub use image_card::ImageCard;
pub use notification_bar::NotificationBar;
pub use search_bar::SearchBar;
pub use spinner::Spinner;
