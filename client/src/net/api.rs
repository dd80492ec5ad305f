//! REST API helpers for the admin surcharge endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since these
//! endpoints are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError`. Its `Display` text is what ends up
//! in toast descriptions and in confirmation failure notifications.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Surcharge, SurchargeInput};

pub const SURCHARGES_ENDPOINT: &str = "/api/admin/surcharges";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{operation} failed: {status}")]
    Status { operation: &'static str, status: u16 },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn surcharge_endpoint(id: &str) -> String {
    format!("{SURCHARGES_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(operation: &'static str, ok: bool, status: u16) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::Status { operation, status }) }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn decode_error(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Fetch all surcharges from `GET /api/admin/surcharges`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_surcharges() -> Result<Vec<Surcharge>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SURCHARGES_ENDPOINT)
            .send()
            .await
            .map_err(network_error)?;
        check_status("list surcharges", resp.ok(), resp.status())?;
        resp.json::<Vec<Surcharge>>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a surcharge via `POST /api/admin/surcharges`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the input.
pub async fn create_surcharge(input: &SurchargeInput) -> Result<Surcharge, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(SURCHARGES_ENDPOINT)
            .json(input)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status("create surcharge", resp.ok(), resp.status())?;
        resp.json::<Surcharge>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(ApiError::Unavailable)
    }
}

/// Update a surcharge via `PATCH /api/admin/surcharges/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails, the surcharge does not exist, or
/// the server rejects the input.
pub async fn update_surcharge(id: &str, input: &SurchargeInput) -> Result<Surcharge, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = surcharge_endpoint(id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(input)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        check_status("update surcharge", resp.ok(), resp.status())?;
        resp.json::<Surcharge>().await.map_err(decode_error)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, input);
        Err(ApiError::Unavailable)
    }
}

/// Delete a surcharge via `DELETE /api/admin/surcharges/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the surcharge does not exist.
pub async fn delete_surcharge(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = surcharge_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(network_error)?;
        check_status("delete surcharge", resp.ok(), resp.status())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}
