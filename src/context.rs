//! Application Context
//!
//! Transient failure notices shared via the Leptos Context API. Failures
//! never touch the image sequence; they are logged and surfaced here.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays visible, in milliseconds
const NOTICE_TIMEOUT_MS: u32 = 4_000;

/// A transient failure notice
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// App-wide notice queue provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently visible notices - read
    pub notices: ReadSignal<Vec<Notice>>,
    /// Currently visible notices - write
    set_notices: WriteSignal<Vec<Notice>>,
    /// Next notice id - read
    next_id: ReadSignal<u32>,
    /// Next notice id - write
    set_next_id: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        notices: (ReadSignal<Vec<Notice>>, WriteSignal<Vec<Notice>>),
        next_id: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            notices: notices.0,
            set_notices: notices.1,
            next_id: next_id.0,
            set_next_id: next_id.1,
        }
    }

    /// Show a notice and schedule its dismissal
    pub fn notify(&self, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id.wrapping_add(1));
        let message = message.into();
        self.set_notices
            .update(|notices| notices.push(Notice { id, message }));

        let set_notices = self.set_notices;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            set_notices.update(|notices| notices.retain(|notice| notice.id != id));
        });
    }

    /// Dismiss a notice before its timeout fires
    pub fn dismiss(&self, id: u32) {
        self.set_notices
            .update(|notices| notices.retain(|notice| notice.id != id));
    }
}
