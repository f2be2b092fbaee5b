//! Registry storage abstraction.
//!
//! # Purpose
//! Declares the `RegistryStore` trait the HTTP layer depends on, together with
//! the error type shared by every backend. The in-memory backend lives in
//! [`memory`]; its fixed startup records live in [`seed`].
use crate::filter::AnimalFilter;
use crate::model::{Animal, AnimalPatch, Cuidado, CuidadoPatch, NewAnimal, NewCuidado};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;
pub mod seed;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Owner of both collections and their id counters.
///
/// Ids are assigned by the backend, strictly increase per collection, and are
/// never reused after a delete. Listings come back in insertion order.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    async fn list_animals(&self, filter: &AnimalFilter) -> StoreResult<Vec<Animal>>;
    async fn get_animal(&self, id: u64) -> StoreResult<Animal>;
    async fn create_animal(&self, animal: NewAnimal) -> StoreResult<Animal>;
    async fn patch_animal(&self, id: u64, patch: AnimalPatch) -> StoreResult<Animal>;
    async fn delete_animal(&self, id: u64) -> StoreResult<()>;

    async fn list_cares(&self) -> StoreResult<Vec<Cuidado>>;
    async fn get_care(&self, id: u64) -> StoreResult<Cuidado>;
    async fn create_care(&self, care: NewCuidado) -> StoreResult<Cuidado>;
    async fn patch_care(&self, id: u64, patch: CuidadoPatch) -> StoreResult<Cuidado>;
    async fn delete_care(&self, id: u64) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn is_durable(&self) -> bool;
    fn backend_name(&self) -> &'static str;
}
