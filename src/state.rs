//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Surcharges live in an in-memory map keyed by id; there is no backing
//! store, so the map is the source of truth for the process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

// =============================================================================
// SURCHARGE
// =============================================================================

/// How a surcharge amount is applied to a rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurchargeType {
    Amount,
    Percentage,
}

/// An extra fee applied on top of carrier rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surcharge {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub surcharge_type: SurchargeType,
    pub active: bool,
    pub carriers: Vec<String>,
    pub services: Vec<String>,
    pub carrier_accounts: Vec<String>,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub surcharges: Arc<RwLock<HashMap<Uuid, Surcharge>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
