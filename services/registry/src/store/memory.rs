//! In-memory implementation of the registry store.
//!
//! # Purpose
//! Implements `RegistryStore` with one ordered map per collection, each paired
//! with its id counter behind a `tokio::sync::RwLock`. It serves local
//! development, tests, and any deployment that can afford to lose state.
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: id allocation and insertion happen under
//!   one write lock, so concurrent creates never share an id.
//!
//! # Ordering
//! Records are keyed by id in a `BTreeMap`. Ids only grow, so key order is
//! insertion order and listings need no extra bookkeeping.
//!
//! # Metrics
//! Collection sizes are published as gauges and mutations as counters.
use super::{RegistryStore, StoreError, StoreResult, seed};
use crate::filter::AnimalFilter;
use crate::model::{Animal, AnimalPatch, Cuidado, CuidadoPatch, NewAnimal, NewCuidado};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Records of one type plus the id the next insert will receive.
#[derive(Debug)]
struct Collection<T> {
    next_id: u64,
    items: BTreeMap<u64, T>,
}

impl<T> Collection<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            items: BTreeMap::new(),
        }
    }

    fn insert(&mut self, item: impl FnOnce(u64) -> T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(id, item(id));
        id
    }
}

pub struct InMemoryStore {
    animals: Arc<RwLock<Collection<Animal>>>,
    cares: Arc<RwLock<Collection<Cuidado>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Empty store; the first id of each collection is 1.
    pub fn new() -> Self {
        Self {
            animals: Arc::new(RwLock::new(Collection::new())),
            cares: Arc::new(RwLock::new(Collection::new())),
        }
    }

    /// Store pre-populated with the fixed startup records.
    pub fn with_seed_data() -> Self {
        let mut animals = Collection::new();
        for draft in seed::animals() {
            animals.insert(|id| draft.into_animal(id));
        }
        let mut cares = Collection::new();
        for draft in seed::cares() {
            cares.insert(|id| draft.into_care(id));
        }
        metrics::gauge!("zoo_animals_total").set(animals.items.len() as f64);
        metrics::gauge!("zoo_cares_total").set(cares.items.len() as f64);
        Self {
            animals: Arc::new(RwLock::new(animals)),
            cares: Arc::new(RwLock::new(cares)),
        }
    }
}

#[async_trait]
impl RegistryStore for InMemoryStore {
    async fn list_animals(&self, filter: &AnimalFilter) -> StoreResult<Vec<Animal>> {
        let animals = self.animals.read().await;
        if filter.is_empty() {
            return Ok(animals.items.values().cloned().collect());
        }
        Ok(animals
            .items
            .values()
            .filter(|animal| filter.matches(animal))
            .cloned()
            .collect())
    }

    async fn get_animal(&self, id: u64) -> StoreResult<Animal> {
        self.animals
            .read()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("animal {id}")))
    }

    async fn create_animal(&self, animal: NewAnimal) -> StoreResult<Animal> {
        let mut animals = self.animals.write().await;
        let id = animals.insert(|id| animal.into_animal(id));
        let created = animals.items[&id].clone();
        metrics::counter!("zoo_animal_changes_total", "op" => "created").increment(1);
        metrics::gauge!("zoo_animals_total").set(animals.items.len() as f64);
        tracing::debug!(id, "animal created");
        Ok(created)
    }

    async fn patch_animal(&self, id: u64, patch: AnimalPatch) -> StoreResult<Animal> {
        let mut animals = self.animals.write().await;
        let animal = animals
            .items
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("animal {id}")))?;
        animal.apply(patch);
        metrics::counter!("zoo_animal_changes_total", "op" => "updated").increment(1);
        Ok(animal.clone())
    }

    async fn delete_animal(&self, id: u64) -> StoreResult<()> {
        let mut animals = self.animals.write().await;
        if animals.items.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("animal {id}")));
        }
        metrics::counter!("zoo_animal_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("zoo_animals_total").set(animals.items.len() as f64);
        Ok(())
    }

    async fn list_cares(&self) -> StoreResult<Vec<Cuidado>> {
        Ok(self.cares.read().await.items.values().cloned().collect())
    }

    async fn get_care(&self, id: u64) -> StoreResult<Cuidado> {
        self.cares
            .read()
            .await
            .items
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("care {id}")))
    }

    async fn create_care(&self, care: NewCuidado) -> StoreResult<Cuidado> {
        let mut cares = self.cares.write().await;
        let id = cares.insert(|id| care.into_care(id));
        let created = cares.items[&id].clone();
        metrics::counter!("zoo_care_changes_total", "op" => "created").increment(1);
        metrics::gauge!("zoo_cares_total").set(cares.items.len() as f64);
        tracing::debug!(id, "care routine created");
        Ok(created)
    }

    async fn patch_care(&self, id: u64, patch: CuidadoPatch) -> StoreResult<Cuidado> {
        let mut cares = self.cares.write().await;
        let care = cares
            .items
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("care {id}")))?;
        care.apply(patch);
        metrics::counter!("zoo_care_changes_total", "op" => "updated").increment(1);
        Ok(care.clone())
    }

    async fn delete_care(&self, id: u64) -> StoreResult<()> {
        let mut cares = self.cares.write().await;
        if cares.items.remove(&id).is_none() {
            return Err(StoreError::NotFound(format!("care {id}")));
        }
        metrics::counter!("zoo_care_changes_total", "op" => "deleted").increment(1);
        metrics::gauge!("zoo_cares_total").set(cares.items.len() as f64);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        // Healthy when both collection locks can be taken.
        let _animals = self.animals.read().await;
        let _cares = self.cares.read().await;
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
