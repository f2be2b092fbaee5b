//! Animal model definitions and patch payloads.
//!
//! # Purpose
//! Defines the stored animal record, the creation draft, and the partial
//! update applied by `PUT /api/animais/{id}`. Attributes outside the known
//! fields are kept verbatim in `extra`.
use super::Payload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: u64,
    pub nome: String,
    /// Birth date as submitted, `YYYY-MM-DD`.
    pub data_nascimento: String,
    pub especie: String,
    pub habitat: String,
    pub pais_origem: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Animal {
    /// Shallow merge: every field present in the patch overwrites the stored
    /// one, everything else is left untouched.
    pub fn apply(&mut self, patch: AnimalPatch) {
        if let Some(nome) = patch.nome {
            self.nome = nome;
        }
        if let Some(data_nascimento) = patch.data_nascimento {
            self.data_nascimento = data_nascimento;
        }
        if let Some(especie) = patch.especie {
            self.especie = especie;
        }
        if let Some(habitat) = patch.habitat {
            self.habitat = habitat;
        }
        if let Some(pais_origem) = patch.pais_origem {
            self.pais_origem = pais_origem;
        }
        self.extra.extend(patch.extra);
    }
}

/// Animal fields accepted by `POST /api/animais`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimal {
    pub nome: String,
    pub data_nascimento: String,
    pub especie: String,
    pub habitat: String,
    pub pais_origem: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl NewAnimal {
    /// Builds a draft from an already validated payload. A caller supplied
    /// `id` is discarded; ids are only ever assigned by the store.
    pub fn from_payload(mut payload: Payload) -> Result<Self, serde_json::Error> {
        payload.remove("id");
        serde_json::from_value(serde_json::Value::Object(payload))
    }

    pub fn into_animal(self, id: u64) -> Animal {
        Animal {
            id,
            nome: self.nome,
            data_nascimento: self.data_nascimento,
            especie: self.especie,
            habitat: self.habitat,
            pais_origem: self.pais_origem,
            extra: self.extra,
        }
    }
}

/// Partial animal update accepted by `PUT /api/animais/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnimalPatch {
    pub nome: Option<String>,
    pub data_nascimento: Option<String>,
    pub especie: Option<String>,
    pub habitat: Option<String>,
    pub pais_origem: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl AnimalPatch {
    /// Builds a patch from an already validated payload, dropping any `id`.
    pub fn from_payload(mut payload: Payload) -> Result<Self, serde_json::Error> {
        payload.remove("id");
        serde_json::from_value(serde_json::Value::Object(payload))
    }
}
