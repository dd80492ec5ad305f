//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard chrome, dialogs, and notification
//! surfaces. Shared state arrives as explicit props rather than context.

pub mod confirm_modal;
pub mod dashboard_layout;
pub mod surcharge_dialog;
pub mod toaster;
