//! Registry HTTP API module.
//!
//! # Purpose
//! Exposes route handler modules, the shared error helpers, and the OpenAPI
//! document for the `/api` surface.
pub mod animals;
pub mod cares;
pub mod error;
pub mod openapi;
pub mod system;
pub mod types;

use crate::api::error::{ApiError, api_not_found};

/// Parse a record id taken from the URL. Anything that is not a non-negative
/// integer names no record, so it answers with the resource's 404.
pub(crate) fn parse_record_id(raw: &str, not_found: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| api_not_found(not_found))
}
