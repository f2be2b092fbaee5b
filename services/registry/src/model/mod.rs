//! Registry data model module.
//!
//! # Purpose
//! Re-exports the animal and care records together with the draft and patch
//! payloads used by the store and API layers.
mod animal;
mod care;

pub use animal::{Animal, AnimalPatch, NewAnimal};
pub use care::{Cuidado, CuidadoPatch, Frequencia, NewCuidado};

/// Raw JSON object received in a request body before validation.
pub type Payload = serde_json::Map<String, serde_json::Value>;
