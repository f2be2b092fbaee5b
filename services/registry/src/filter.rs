//! Animal list filtering.
//!
//! # Purpose
//! Implements the query filters accepted by `GET /api/animais` and the
//! accent-folding helper they share.
//!
//! # Notes
//! String filters compare normalized text on both sides, so `savana` matches
//! `Savana Africana` and `leao` matches `Leão`. The birth-date filter also
//! accepts the Brazilian short form `DD/MM/YY`.
use crate::model::Animal;
use crate::validation::parse_iso_date;
use serde::Deserialize;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use utoipa::IntoParams;

/// Fold `text` for loose comparison: NFD, drop combining marks, lower-case.
pub fn normalize_string(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>()
        .to_lowercase()
}

/// Query filters for listing animals. Absent or empty values do not filter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AnimalFilter {
    /// Substring of the habitat, case and accent insensitive.
    pub habitat: Option<String>,
    /// Substring of the species, case and accent insensitive.
    pub especie: Option<String>,
    /// Substring of the country of origin, case and accent insensitive.
    pub pais_origem: Option<String>,
    /// Substring of the birth date as `YYYY-MM-DD` or `DD/MM/YY`.
    pub data_nascimento: Option<String>,
}

impl AnimalFilter {
    /// Build a filter from raw query pairs. The first non-empty value of a
    /// repeated key wins and unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "habitat" => &mut filter.habitat,
                "especie" => &mut filter.especie,
                "paisOrigem" => &mut filter.pais_origem,
                "dataNascimento" => &mut filter.data_nascimento,
                _ => continue,
            };
            if active(slot).is_some() {
                continue;
            }
            let value = value.into();
            if !value.is_empty() {
                *slot = Some(value);
            }
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        [
            &self.habitat,
            &self.especie,
            &self.pais_origem,
            &self.data_nascimento,
        ]
        .into_iter()
        .all(|value| active(value).is_none())
    }

    /// All active filters must match (logical AND).
    pub fn matches(&self, animal: &Animal) -> bool {
        text_matches(active(&self.habitat), &animal.habitat)
            && text_matches(active(&self.especie), &animal.especie)
            && text_matches(active(&self.pais_origem), &animal.pais_origem)
            && active(&self.data_nascimento)
                .is_none_or(|needle| date_matches(needle, &animal.data_nascimento))
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn text_matches(needle: Option<&str>, haystack: &str) -> bool {
    needle.is_none_or(|needle| normalize_string(haystack).contains(&normalize_string(needle)))
}

fn date_matches(needle: &str, stored: &str) -> bool {
    if stored.is_empty() {
        return false;
    }
    let needle = needle.to_lowercase();
    if stored.to_lowercase().contains(&needle) {
        return true;
    }
    parse_iso_date(stored)
        .map(|date| date.format("%d/%m/%y").to_string().contains(&needle))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn animal(habitat: &str, especie: &str, pais: &str, nascimento: &str) -> Animal {
        Animal {
            id: 1,
            nome: "Teste".to_string(),
            data_nascimento: nascimento.to_string(),
            especie: especie.to_string(),
            habitat: habitat.to_string(),
            pais_origem: pais.to_string(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn normalize_strips_accents_and_case() {
        assert_eq!(normalize_string("Leão"), "leao");
        assert_eq!(normalize_string("QUÊNIA"), "quenia");
        assert_eq!(normalize_string("Savana Africana"), "savana africana");
        assert_eq!(normalize_string(""), "");
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = AnimalFilter {
            habitat: Some(String::new()),
            ..AnimalFilter::default()
        };
        assert!(filter.is_empty());
        assert!(filter.matches(&animal("Savana", "Leão", "Quênia", "2015-06-20")));
    }

    #[test]
    fn query_pairs_keep_first_non_empty_value_per_key() {
        let filter = AnimalFilter::from_pairs([
            ("habitat", ""),
            ("habitat", "savana"),
            ("habitat", "floresta"),
            ("paisOrigem", "Brasil"),
            ("ordem", "nome"),
        ]);
        assert_eq!(filter.habitat.as_deref(), Some("savana"));
        assert_eq!(filter.pais_origem.as_deref(), Some("Brasil"));
        assert!(filter.especie.is_none());
        assert!(filter.data_nascimento.is_none());

        assert!(AnimalFilter::from_pairs([("habitat", ""), ("extra", "x")]).is_empty());
    }

    #[test]
    fn text_filters_fold_accents_on_both_sides() {
        let lion = animal("Savana Africana", "Leão", "Quênia", "2015-06-20");
        let by_species = AnimalFilter {
            especie: Some("leao".to_string()),
            ..AnimalFilter::default()
        };
        assert!(by_species.matches(&lion));

        let by_country = AnimalFilter {
            pais_origem: Some("QUÊN".to_string()),
            ..AnimalFilter::default()
        };
        assert!(by_country.matches(&lion));

        let by_habitat = AnimalFilter {
            habitat: Some("floresta".to_string()),
            ..AnimalFilter::default()
        };
        assert!(!by_habitat.matches(&lion));
    }

    #[test]
    fn filters_compose_with_and() {
        let lion = animal("Savana", "Leão", "Quênia", "2015-06-20");
        let filter = AnimalFilter {
            habitat: Some("savana".to_string()),
            especie: Some("tigre".to_string()),
            ..AnimalFilter::default()
        };
        assert!(!filter.is_empty());
        assert!(!filter.matches(&lion));
    }

    #[test]
    fn date_filter_accepts_iso_and_short_brazilian_form() {
        let elephant = animal("Savana", "Elefante", "Tanzânia", "1999-03-15");
        for needle in ["15/03/99", "03/99", "1999-03", "15/03"] {
            let filter = AnimalFilter {
                data_nascimento: Some(needle.to_string()),
                ..AnimalFilter::default()
            };
            assert!(filter.matches(&elephant), "{needle} should match");
        }

        let filter = AnimalFilter {
            data_nascimento: Some("15/03/1999".to_string()),
            ..AnimalFilter::default()
        };
        assert!(!filter.matches(&elephant));
    }

    #[test]
    fn unparsable_stored_date_only_matches_raw_text() {
        let odd = animal("Savana", "Elefante", "Tanzânia", "março de 1999");
        assert!(date_matches("1999", &odd.data_nascimento));
        assert!(!date_matches("15/03/99", &odd.data_nascimento));
        assert!(!date_matches("1999", ""));
    }
}
