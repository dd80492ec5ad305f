//! Reactive state containers shared through signals.
//!
//! DESIGN
//! ======
//! State types are plain structs with pure transition methods. Components
//! wrap them in `RwSignal`s, which keeps the transition rules testable
//! without a browser or a reactive owner.

pub mod confirm;
pub mod notifications;
pub mod surcharges;
