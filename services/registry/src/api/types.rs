//! HTTP API request/response types.
//!
//! # Purpose
//! Defines the shared envelope shapes for the registry REST API and its
//! OpenAPI schema. Record bodies themselves live in `crate::model`.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub storage_backend: String,
    pub durable_storage: bool,
}
