//! Request payload validation.
//!
//! # Purpose
//! Checks raw JSON bodies for animals and care routines before they reach the
//! store, producing a single client-facing message for the first rule that
//! fails.
//!
//! # Key invariants and assumptions
//! - Validators are pure: they inspect the payload and never mutate it.
//! - On update, an absent field is accepted; a present but empty one is not.
//! - Messages are in Portuguese and name the offending field.
use crate::model::{Frequencia, Payload};
use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

const ANIMAL_REQUIRED_FIELDS: [&str; 5] =
    ["nome", "dataNascimento", "especie", "habitat", "paisOrigem"];
const ANIMAL_TEXT_FIELDS: [&str; 4] = ["nome", "especie", "habitat", "paisOrigem"];
const CARE_REQUIRED_FIELDS: [&str; 2] = ["nomeCuidado", "frequencia"];

/// First validation rule a payload broke, rendered for the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn message(&self) -> &str {
        &self.0
    }

    fn required(field: &str) -> Self {
        Self(format!("O campo '{field}' é obrigatório."))
    }

    fn not_text(field: &str) -> Self {
        Self(format!("O campo '{field}' deve ser um texto."))
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Validate an animal body; `is_update` relaxes presence for partial patches.
pub fn validate_animal_data(data: &Payload, is_update: bool) -> ValidationResult {
    check_required(data, &ANIMAL_REQUIRED_FIELDS, is_update)?;

    if let Some(value) = data.get("dataNascimento") {
        if value.as_str().and_then(parse_iso_date).is_none() {
            return Err(ValidationError(
                "O campo 'dataNascimento' deve estar no formato YYYY-MM-DD.".to_string(),
            ));
        }
    }

    for field in ANIMAL_TEXT_FIELDS {
        if data.get(field).is_some_and(|value| !value.is_string()) {
            return Err(ValidationError::not_text(field));
        }
    }
    Ok(())
}

/// Validate a care routine body; `is_update` relaxes presence for partial patches.
pub fn validate_care_data(data: &Payload, is_update: bool) -> ValidationResult {
    check_required(data, &CARE_REQUIRED_FIELDS, is_update)?;

    if let Some(value) = data.get("frequencia") {
        if value.as_str().and_then(Frequencia::parse).is_none() {
            let allowed = Frequencia::ALL
                .iter()
                .map(|freq| freq.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ValidationError(format!(
                "O campo 'frequencia' deve ser um dos seguintes: {allowed}."
            )));
        }
    }

    if data.get("nomeCuidado").is_some_and(|value| !value.is_string()) {
        return Err(ValidationError::not_text("nomeCuidado"));
    }
    Ok(())
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    // chrono accepts unpadded and signed years; pin the shape first.
    let bytes = text.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn check_required(data: &Payload, fields: &[&str], is_update: bool) -> ValidationResult {
    for field in fields {
        match data.get(*field) {
            None if is_update => {}
            None => return Err(ValidationError::required(field)),
            Some(value) if is_blank(value) => return Err(ValidationError::required(field)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Values a client could send that carry no content.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
