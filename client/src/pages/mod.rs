//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, API calls, toasts)
//! and delegates rendering details to `components`.

pub mod overview;
pub mod surcharges;
