//! Care routine model definitions and patch payloads.
//!
//! # Purpose
//! Defines the stored care record (`Cuidado`), its fixed frequency set, and
//! the creation and patch payloads used by `/api/cuidados`.
use super::Payload;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;

/// How often a care routine repeats.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq)]
pub enum Frequencia {
    #[serde(rename = "Diária")]
    Diaria,
    Semanal,
    Quinzenal,
    Mensal,
    Trimestral,
    Semestral,
    Anual,
}

impl Frequencia {
    /// Accepted values, in the order they are listed to clients.
    pub const ALL: [Frequencia; 7] = [
        Frequencia::Diaria,
        Frequencia::Semanal,
        Frequencia::Quinzenal,
        Frequencia::Mensal,
        Frequencia::Trimestral,
        Frequencia::Semestral,
        Frequencia::Anual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Frequencia::Diaria => "Diária",
            Frequencia::Semanal => "Semanal",
            Frequencia::Quinzenal => "Quinzenal",
            Frequencia::Mensal => "Mensal",
            Frequencia::Trimestral => "Trimestral",
            Frequencia::Semestral => "Semestral",
            Frequencia::Anual => "Anual",
        }
    }

    /// Exact, case-sensitive lookup of a wire value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|freq| freq.as_str() == value)
    }
}

impl fmt::Display for Frequencia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cuidado {
    pub id: u64,
    pub nome_cuidado: String,
    pub frequencia: Frequencia,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Cuidado {
    pub fn apply(&mut self, patch: CuidadoPatch) {
        if let Some(nome_cuidado) = patch.nome_cuidado {
            self.nome_cuidado = nome_cuidado;
        }
        if let Some(frequencia) = patch.frequencia {
            self.frequencia = frequencia;
        }
        self.extra.extend(patch.extra);
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewCuidado {
    pub nome_cuidado: String,
    pub frequencia: Frequencia,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl NewCuidado {
    pub fn from_payload(mut payload: Payload) -> Result<Self, serde_json::Error> {
        payload.remove("id");
        serde_json::from_value(serde_json::Value::Object(payload))
    }

    pub fn into_care(self, id: u64) -> Cuidado {
        Cuidado {
            id,
            nome_cuidado: self.nome_cuidado,
            frequencia: self.frequencia,
            extra: self.extra,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CuidadoPatch {
    pub nome_cuidado: Option<String>,
    pub frequencia: Option<Frequencia>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CuidadoPatch {
    pub fn from_payload(mut payload: Payload) -> Result<Self, serde_json::Error> {
        payload.remove("id");
        serde_json::from_value(serde_json::Value::Object(payload))
    }
}
