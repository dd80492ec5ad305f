//! Surcharge service: list, lookup, create, partial update, delete.
//!
//! DESIGN
//! ======
//! Every operation takes `&AppState` and works on the in-memory map under a
//! single lock acquisition. Validation happens before the write lock is
//! taken so rejected input never touches the store.
//!
//! UPDATE SEMANTICS
//! ================
//! A patch only changes the fields it carries. `carrier_accounts` is the
//! exception: an empty list leaves the stored accounts untouched, matching
//! the create path where an empty list means "none linked".

#[cfg(test)]
#[path = "surcharge_test.rs"]
mod tests;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::state::{AppState, Surcharge, SurchargeType};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SurchargeError {
    #[error("surcharge not found: {0}")]
    NotFound(Uuid),
    #[error("invalid surcharge: {0}")]
    Invalid(&'static str),
}

/// Input for creating a surcharge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSurcharge {
    pub name: String,
    pub amount: f64,
    pub surcharge_type: SurchargeType,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub carriers: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub carrier_accounts: Vec<String>,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SurchargePatch {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub surcharge_type: Option<SurchargeType>,
    pub active: Option<bool>,
    pub carriers: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
    #[serde(default)]
    pub carrier_accounts: Vec<String>,
}

fn default_active() -> bool {
    true
}

// =============================================================================
// VALIDATION
// =============================================================================

fn validate_name(name: &str) -> Result<String, SurchargeError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(SurchargeError::Invalid("name is required"));
    }
    Ok(trimmed.to_owned())
}

fn validate_amount(amount: f64) -> Result<f64, SurchargeError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(SurchargeError::Invalid("amount must be a non-negative number"));
    }
    Ok(amount)
}

/// Trim entries and drop blanks.
fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect()
}

// =============================================================================
// CRUD
// =============================================================================

/// All surcharges, sorted by name (case-insensitive), then id.
pub async fn list_surcharges(state: &AppState) -> Vec<Surcharge> {
    let surcharges = state.surcharges.read().await;
    let mut items: Vec<Surcharge> = surcharges.values().cloned().collect();
    items.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });
    items
}

/// Fetch one surcharge.
///
/// # Errors
///
/// Returns `NotFound` if no surcharge has this id.
pub async fn get_surcharge(state: &AppState, id: Uuid) -> Result<Surcharge, SurchargeError> {
    state
        .surcharges
        .read()
        .await
        .get(&id)
        .cloned()
        .ok_or(SurchargeError::NotFound(id))
}

/// Create a surcharge.
///
/// # Errors
///
/// Returns `Invalid` for a blank name or a negative/non-finite amount.
pub async fn create_surcharge(state: &AppState, input: CreateSurcharge) -> Result<Surcharge, SurchargeError> {
    let surcharge = Surcharge {
        id: Uuid::new_v4(),
        name: validate_name(&input.name)?,
        amount: validate_amount(input.amount)?,
        surcharge_type: input.surcharge_type,
        active: input.active,
        carriers: clean_list(input.carriers),
        services: clean_list(input.services),
        carrier_accounts: clean_list(input.carrier_accounts),
    };

    state
        .surcharges
        .write()
        .await
        .insert(surcharge.id, surcharge.clone());
    info!(surcharge_id = %surcharge.id, name = %surcharge.name, "surcharge created");
    Ok(surcharge)
}

/// Apply a partial update.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id and `Invalid` when a provided field
/// fails validation. Nothing is written on error.
pub async fn update_surcharge(state: &AppState, id: Uuid, patch: SurchargePatch) -> Result<Surcharge, SurchargeError> {
    let name = patch.name.as_deref().map(validate_name).transpose()?;
    let amount = patch.amount.map(validate_amount).transpose()?;
    let carrier_accounts = clean_list(patch.carrier_accounts);

    let mut surcharges = state.surcharges.write().await;
    let surcharge = surcharges.get_mut(&id).ok_or(SurchargeError::NotFound(id))?;

    if let Some(name) = name {
        surcharge.name = name;
    }
    if let Some(amount) = amount {
        surcharge.amount = amount;
    }
    if let Some(kind) = patch.surcharge_type {
        surcharge.surcharge_type = kind;
    }
    if let Some(active) = patch.active {
        surcharge.active = active;
    }
    if let Some(carriers) = patch.carriers {
        surcharge.carriers = clean_list(carriers);
    }
    if let Some(services) = patch.services {
        surcharge.services = clean_list(services);
    }
    if !carrier_accounts.is_empty() {
        surcharge.carrier_accounts = carrier_accounts;
    }

    info!(surcharge_id = %id, "surcharge updated");
    Ok(surcharge.clone())
}

/// Delete a surcharge.
///
/// # Errors
///
/// Returns `NotFound` if no surcharge has this id.
pub async fn delete_surcharge(state: &AppState, id: Uuid) -> Result<(), SurchargeError> {
    let removed = state.surcharges.write().await.remove(&id);
    if removed.is_none() {
        return Err(SurchargeError::NotFound(id));
    }
    info!(surcharge_id = %id, "surcharge deleted");
    Ok(())
}

/// Insert a couple of demo surcharges for local development.
pub async fn seed_demo(state: &AppState) -> Vec<Surcharge> {
    let demo = [
        CreateSurcharge {
            name: "Fuel Surcharge".into(),
            amount: 12.5,
            surcharge_type: SurchargeType::Percentage,
            active: true,
            carriers: vec!["fedex".into(), "ups".into()],
            services: Vec::new(),
            carrier_accounts: Vec::new(),
        },
        CreateSurcharge {
            name: "Residential Delivery".into(),
            amount: 4.75,
            surcharge_type: SurchargeType::Amount,
            active: false,
            carriers: vec!["ups".into()],
            services: vec!["ups_ground".into()],
            carrier_accounts: Vec::new(),
        },
    ];

    let mut created = Vec::with_capacity(demo.len());
    for input in demo {
        match create_surcharge(state, input).await {
            Ok(surcharge) => created.push(surcharge),
            Err(e) => tracing::warn!(error = %e, "demo surcharge rejected"),
        }
    }
    created
}
