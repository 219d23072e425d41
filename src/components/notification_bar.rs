//! Notification Bar Component
//!
//! Renders the transient failure notices queued on the app context.

use leptos::prelude::*;

use crate::context::AppContext;

/// Stack of auto-dismissing failure notices
#[component]
pub fn NotificationBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notification-bar">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class="notice">
                            <span class="notice-message">{notice.message.clone()}</span>
                            <button class="notice-dismiss" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
