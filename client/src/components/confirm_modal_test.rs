#![cfg(not(feature = "hydrate"))]

use futures::executor::block_on;

use super::*;
use crate::state::notifications::NotificationKind;

fn controller() -> (ConfirmController, RwSignal<NotificationsState>) {
    let notifications = RwSignal::new(NotificationsState::default());
    (ConfirmController::new(notifications), notifications)
}

fn operation(identifier: &str, result: Result<(), ActionError>) -> PendingOperation {
    PendingOperation::new(identifier, "Delete Surcharge", move || {
        let result = result.clone();
        async move { result }
    })
}

/// Start the pending action, drive it to completion, and hand the result
/// back to the controller the way the spawned task does.
fn run_pending(controller: &ConfirmController) {
    let submission = controller
        .state
        .try_update(ConfirmState::begin)
        .flatten()
        .expect("an operation should be pending");
    let result = block_on(submission.future);
    controller.settle(submission.generation, result);
}

fn messages(notifications: RwSignal<NotificationsState>) -> Vec<(NotificationKind, String)> {
    notifications.with_untracked(|n| n.items.iter().map(|note| (note.kind, note.message.clone())).collect())
}

fn pending_identifier(controller: &ConfirmController) -> Option<String> {
    controller.with_pending(|op| op.identifier.clone())
}

#[test]
fn success_emits_success_toast_and_stays_loading_until_close() {
    let (controller, notifications) = controller();
    controller.request_confirmation(operation("42", Ok(())));

    run_pending(&controller);

    assert_eq!(
        messages(notifications),
        vec![(NotificationKind::Success, "Delete Surcharge successfully!...".to_string())]
    );
    assert!(controller.is_open());
    assert!(controller.is_loading());
    assert_eq!(pending_identifier(&controller), Some("42".into()));
}

#[test]
fn success_close_applies_to_its_own_generation() {
    let (controller, _notifications) = controller();
    controller.request_confirmation(operation("42", Ok(())));
    run_pending(&controller);

    let generation = controller.state.with_untracked(ConfirmState::generation);
    assert!(controller.state.try_update(|s| s.expire(generation)).unwrap_or(false));
    assert!(!controller.is_open());
    assert_eq!(pending_identifier(&controller), None);
}

#[test]
fn failure_emits_error_toast_and_keeps_operation_open() {
    let (controller, notifications) = controller();
    controller.request_confirmation(operation("7", Err(ActionError::new("network error"))));

    run_pending(&controller);

    assert_eq!(messages(notifications), vec![(NotificationKind::Error, "network error".to_string())]);
    assert!(controller.is_open());
    assert!(!controller.is_loading());
    assert_eq!(pending_identifier(&controller), Some("7".into()));
}

#[test]
fn failed_operation_can_be_retried() {
    let (controller, notifications) = controller();
    controller.request_confirmation(operation("7", Err(ActionError::new("network error"))));
    run_pending(&controller);
    run_pending(&controller);

    assert_eq!(messages(notifications).len(), 2);
    assert!(controller.is_open());
}

#[test]
fn confirm_without_pending_operation_does_nothing() {
    let (controller, notifications) = controller();

    controller.confirm();

    assert!(messages(notifications).is_empty());
    assert!(!controller.is_open());
    assert!(!controller.is_loading());
}

#[test]
fn cancel_closes_without_notifying() {
    let (controller, notifications) = controller();
    controller.request_confirmation(operation("42", Ok(())));

    controller.cancel();

    assert!(messages(notifications).is_empty());
    assert!(!controller.is_open());
    assert_eq!(pending_identifier(&controller), None);
}

#[test]
fn cancel_when_closed_is_idempotent() {
    let (controller, notifications) = controller();

    controller.cancel();
    controller.cancel();

    assert!(messages(notifications).is_empty());
    assert!(!controller.is_open());
}

#[test]
fn confirm_and_cancel_while_loading_are_ignored() {
    let (controller, notifications) = controller();
    controller.request_confirmation(operation("42", Ok(())));
    let submission = controller
        .state
        .try_update(ConfirmState::begin)
        .flatten()
        .expect("an operation should be pending");

    controller.confirm();
    controller.cancel();

    assert!(controller.is_loading());
    assert_eq!(pending_identifier(&controller), Some("42".into()));
    assert!(messages(notifications).is_empty());

    let result = block_on(submission.future);
    controller.settle(submission.generation, result);
    assert_eq!(messages(notifications).len(), 1);
}

#[test]
fn result_for_replaced_operation_is_not_notified() {
    let (controller, notifications) = controller();
    controller.request_confirmation(operation("1", Ok(())));
    let submission = controller
        .state
        .try_update(ConfirmState::begin)
        .flatten()
        .expect("an operation should be pending");

    controller.request_confirmation(operation("2", Ok(())));
    let result = block_on(submission.future);
    controller.settle(submission.generation, result);

    assert!(messages(notifications).is_empty());
    assert!(controller.is_open());
    assert!(!controller.is_loading());
    assert_eq!(pending_identifier(&controller), Some("2".into()));
}

#[test]
fn escape_keys_dismiss() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("e"));
}
