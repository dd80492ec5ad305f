//! Confirmation workflow state: one pending operation awaiting approval.
//!
//! DESIGN
//! ======
//! The workflow is `Closed`, `Open { loading: false }` or
//! `Open { loading: true }`. Every request bumps a generation counter, and
//! everything that happens asynchronously afterwards (the action's result,
//! the delayed close after success) carries the generation it was started
//! for. Results that arrive for a replaced operation are ignored.
//!
//! ERROR HANDLING
//! ==============
//! Actions return `Result<(), ActionError>`. A failure never leaves this
//! module as an error; it becomes a `ConfirmOutcome::Failed` that the
//! controller turns into a notification, and the operation stays open for
//! a retry or a cancel.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::net::api::ApiError;

/// Confirm-button text when the operation does not supply one.
pub const DEFAULT_ACTION_LABEL: &str = "Delete";

/// How long the surface stays up after a successful action.
pub const CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Failure reported by a confirmed action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ActionError {
    pub message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        Self::new(err.to_string())
    }
}

/// Future produced by a pending operation's action.
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ActionError>>>>;

type Execute = Arc<dyn Fn() -> ActionFuture + Send + Sync>;

/// An action waiting for the user to confirm it.
#[derive(Clone)]
pub struct PendingOperation {
    /// Subject of the operation (record id or name). Display only.
    pub identifier: String,
    pub label: String,
    pub action_label: Option<String>,
    execute: Execute,
}

impl PendingOperation {
    pub fn new<F, Fut>(identifier: impl Into<String>, label: impl Into<String>, execute: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ActionError>> + 'static,
    {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            action_label: None,
            execute: Arc::new(move || Box::pin(execute())),
        }
    }

    #[must_use]
    pub fn with_action_label(mut self, action_label: impl Into<String>) -> Self {
        self.action_label = Some(action_label.into());
        self
    }

    /// Text for the confirm button.
    pub fn action_label(&self) -> &str {
        self.action_label.as_deref().unwrap_or(DEFAULT_ACTION_LABEL)
    }

    /// Notification text shown after the action succeeds.
    pub fn success_message(&self) -> String {
        format!("{} successfully!...", self.label)
    }

    fn start(&self) -> ActionFuture {
        (self.execute)()
    }
}

impl fmt::Debug for PendingOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingOperation")
            .field("identifier", &self.identifier)
            .field("label", &self.label)
            .field("action_label", &self.action_label)
            .finish_non_exhaustive()
    }
}

/// Visible phase of the workflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmPhase {
    #[default]
    Closed,
    Open { loading: bool },
}

/// A started action, tagged with the generation it belongs to.
pub struct Submission {
    pub generation: u64,
    pub future: ActionFuture,
}

/// What the controller must do once an action settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Emit a success notification, then close after `CLOSE_DELAY`.
    Succeeded { generation: u64, message: String },
    /// Emit an error notification; the operation stays open.
    Failed { message: String },
}

#[derive(Clone, Debug, Default)]
pub struct ConfirmState {
    pending: Option<PendingOperation>,
    loading: bool,
    generation: u64,
    /// Generation whose delayed close is scheduled, if any.
    close_scheduled: Option<u64>,
}

impl ConfirmState {
    pub fn phase(&self) -> ConfirmPhase {
        match self.pending {
            Some(_) => ConfirmPhase::Open { loading: self.loading },
            None => ConfirmPhase::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn close_scheduled(&self) -> Option<u64> {
        self.close_scheduled
    }

    /// Make `operation` the current one, replacing whatever was open.
    pub fn request(&mut self, operation: PendingOperation) {
        self.generation += 1;
        self.pending = Some(operation);
        self.loading = false;
        self.close_scheduled = None;
    }

    /// Close without running the action. Returns `false` (and changes
    /// nothing) when already closed or while the action is running.
    pub fn cancel(&mut self) -> bool {
        if self.loading || self.pending.is_none() {
            return false;
        }
        self.close();
        true
    }

    /// Start the pending action. `None` when nothing is pending or an
    /// action is already running.
    pub fn begin(&mut self) -> Option<Submission> {
        if self.loading {
            return None;
        }
        let future = self.pending.as_ref()?.start();
        self.loading = true;
        Some(Submission { generation: self.generation, future })
    }

    /// Record the result of the action started for `generation`.
    ///
    /// On success the workflow stays loading until `expire` runs for the
    /// same generation. Returns `None` for stale generations.
    pub fn finish(&mut self, generation: u64, result: Result<(), ActionError>) -> Option<ConfirmOutcome> {
        if generation != self.generation || !self.loading {
            return None;
        }
        let operation = self.pending.as_ref()?;
        match result {
            Ok(()) => {
                self.close_scheduled = Some(generation);
                Some(ConfirmOutcome::Succeeded { generation, message: operation.success_message() })
            }
            Err(err) => {
                self.loading = false;
                Some(ConfirmOutcome::Failed { message: err.message })
            }
        }
    }

    /// Run the delayed close scheduled for `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.close_scheduled != Some(generation) || generation != self.generation {
            return false;
        }
        self.close();
        true
    }

    fn close(&mut self) {
        self.pending = None;
        self.loading = false;
        self.close_scheduled = None;
    }
}
