//! Confirmation modal and the controller that drives it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one `ConfirmController` and passes it to any page that
//! needs to gate an action behind a confirmation. The controller owns the
//! `ConfirmState` signal; `ConfirmModal` only reads it and forwards clicks.
//!
//! TRADE-OFFS
//! ==========
//! The delayed close after a successful action is a timer task that
//! re-enters the state through `try_update`. A disposed signal (app torn
//! down) or a newer generation (operation replaced) turns it into a no-op,
//! so the scheduled close never acts on stale state.

#[cfg(test)]
#[path = "confirm_modal_test.rs"]
mod confirm_modal_test;

use leptos::prelude::*;

use crate::state::confirm::{ActionError, ConfirmOutcome, ConfirmState, PendingOperation};
use crate::state::notifications::NotificationsState;

/// Capability handed to UI that needs to request confirmations.
#[derive(Clone, Copy)]
pub struct ConfirmController {
    state: RwSignal<ConfirmState>,
    notifications: RwSignal<NotificationsState>,
}

impl ConfirmController {
    pub fn new(notifications: RwSignal<NotificationsState>) -> Self {
        Self { state: RwSignal::new(ConfirmState::default()), notifications }
    }

    /// Open the modal for `operation`, replacing any open one.
    pub fn request_confirmation(&self, operation: PendingOperation) {
        self.state.update(|s| s.request(operation));
    }

    /// Close without running the action. No-op when closed or loading.
    pub fn cancel(&self) {
        self.state.maybe_update(ConfirmState::cancel);
    }

    /// Run the pending action. No-op when nothing is pending or the action
    /// is already running.
    pub fn confirm(&self) {
        let Some(submission) = self.state.try_update(ConfirmState::begin).flatten() else {
            return;
        };
        let controller = *self;
        leptos::task::spawn_local(async move {
            let result = submission.future.await;
            controller.settle(submission.generation, result);
        });
    }

    pub fn is_open(&self) -> bool {
        self.state.with(ConfirmState::is_open)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(ConfirmState::is_loading)
    }

    /// Read a field of the pending operation, if any.
    pub fn with_pending<T>(&self, f: impl FnOnce(&PendingOperation) -> T) -> Option<T> {
        self.state.with(|s| s.pending().map(f))
    }

    fn settle(&self, generation: u64, result: Result<(), ActionError>) {
        let Some(outcome) = self.state.try_update(|s| s.finish(generation, result)).flatten() else {
            #[cfg(feature = "hydrate")]
            log::debug!("confirmation result for replaced operation ignored (generation {generation})");
            return;
        };
        match outcome {
            ConfirmOutcome::Succeeded { generation, message } => {
                self.notifications.try_update(|n| n.success(message));
                self.schedule_close(generation);
            }
            ConfirmOutcome::Failed { message } => {
                #[cfg(feature = "hydrate")]
                log::warn!("confirmed action failed: {message}");
                self.notifications.try_update(|n| n.error(message));
            }
        }
    }

    fn schedule_close(&self, generation: u64) {
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(crate::state::confirm::CLOSE_DELAY).await;
                state.try_update(|s| s.expire(generation));
            });
        }
        // Browser-only: without a timer the workflow stays loading until replaced.
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = generation;
        }
    }
}

/// Keys that dismiss the modal.
pub(crate) fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Modal asking the user to confirm the controller's pending operation.
#[component]
pub fn ConfirmModal(controller: ConfirmController) -> impl IntoView {
    let label = move || controller.with_pending(|op| op.label.clone()).unwrap_or_default();
    let identifier = move || controller.with_pending(|op| op.identifier.clone()).unwrap_or_default();
    let action_label = move || {
        controller
            .with_pending(|op| op.action_label().to_owned())
            .unwrap_or_default()
    };
    let loading = move || controller.is_loading();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        controller.confirm();
    };

    // Listen on the window so Escape works before anything in the dialog has focus.
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) && controller.state.with_untracked(ConfirmState::is_open) {
            ev.prevent_default();
            controller.cancel();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <Show when=move || controller.is_open()>
            <div class="dialog-backdrop" on:click=move |_| controller.cancel()>
                <form
                    class="dialog dialog--confirm"
                    on:click=move |ev| ev.stop_propagation()
                    on:submit=on_submit
                >
                    <div class="dialog__header">
                        <span class="dialog__title">{label}</span>
                        " "
                        <span class="dialog__subtitle">"(" {identifier} ")"</span>
                    </div>
                    <div class="dialog__actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=loading
                            on:click=move |_| controller.cancel()
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class=move || if loading() { "btn btn--danger btn--loading" } else { "btn btn--danger" }
                            disabled=loading
                        >
                            {action_label}
                        </button>
                    </div>
                    <button
                        type="button"
                        class="dialog__close"
                        aria-label="close"
                        on:click=move |_| controller.cancel()
                    >
                        "✕"
                    </button>
                </form>
            </div>
        </Show>
    }
}
