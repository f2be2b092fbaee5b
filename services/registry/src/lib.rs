//! Zoo registry service library crate.
//!
//! # Purpose
//! Exposes the HTTP API surface, payload validation, list filtering,
//! configuration, and storage implementations for use by the binary and
//! tests.
//!
//! # Notes
//! Module boundaries mirror the HTTP API and storage backends for clarity.
pub mod api;
pub mod app;
pub mod config;
pub mod filter;
pub mod model;
pub mod observability;
pub mod store;
pub mod validation;
