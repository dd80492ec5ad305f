//! Toast stack rendering `NotificationsState`.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationsState};

/// Fixed-position stack of toasts, newest last.
#[component]
pub fn Toaster(notifications: RwSignal<NotificationsState>) -> impl IntoView {
    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || notifications.with(|n| n.items.clone())
                key=|note| note.id
                children=move |note: Notification| view! { <Toast note notifications/> }
            />
        </div>
    }
}

#[component]
fn Toast(note: Notification, notifications: RwSignal<NotificationsState>) -> impl IntoView {
    let id = note.id;

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(crate::state::notifications::TOAST_TTL).await;
            notifications.try_update(|n| n.dismiss(id));
        });
    }

    let class = match note.kind {
        NotificationKind::Success => "toast toast--success",
        NotificationKind::Error => "toast toast--error",
    };

    view! {
        <div class=class role="status">
            <div class="toast__body">
                <span class="toast__message">{note.message}</span>
                {note.description.map(|text| view! { <span class="toast__description">{text}</span> })}
            </div>
            <button
                class="toast__close"
                title="Dismiss"
                on:click=move |_| {
                    notifications.update(|n| {
                        n.dismiss(id);
                    });
                }
            >
                "✕"
            </button>
        </div>
    }
}
