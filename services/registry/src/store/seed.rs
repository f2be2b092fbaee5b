//! Fixed records loaded into a fresh store at startup.
use crate::model::{Frequencia, NewAnimal, NewCuidado};
use serde_json::json;
use std::collections::BTreeMap;

pub fn animals() -> Vec<NewAnimal> {
    vec![
        NewAnimal {
            nome: "Simba".to_string(),
            data_nascimento: "2015-06-20".to_string(),
            especie: "Leão".to_string(),
            habitat: "Savana Africana".to_string(),
            pais_origem: "Quênia".to_string(),
            extra: BTreeMap::from([(
                "descricao".to_string(),
                json!("Macho adulto, líder do grupo."),
            )]),
        },
        NewAnimal {
            nome: "Dumbo".to_string(),
            data_nascimento: "1999-03-15".to_string(),
            especie: "Elefante".to_string(),
            habitat: "Savana".to_string(),
            pais_origem: "Tanzânia".to_string(),
            extra: BTreeMap::new(),
        },
        NewAnimal {
            nome: "Kiko".to_string(),
            data_nascimento: "2018-11-02".to_string(),
            especie: "Macaco".to_string(),
            habitat: "Floresta Tropical".to_string(),
            pais_origem: "Brasil".to_string(),
            extra: BTreeMap::from([("descricao".to_string(), json!("Muito curioso."))]),
        },
    ]
}

pub fn cares() -> Vec<NewCuidado> {
    vec![
        NewCuidado {
            nome_cuidado: "Alimentação".to_string(),
            frequencia: Frequencia::Diaria,
            extra: BTreeMap::from([(
                "descricao".to_string(),
                json!("Ração balanceada e frutas frescas."),
            )]),
        },
        NewCuidado {
            nome_cuidado: "Exame Veterinário".to_string(),
            frequencia: Frequencia::Mensal,
            extra: BTreeMap::new(),
        },
        NewCuidado {
            nome_cuidado: "Vacinação".to_string(),
            frequencia: Frequencia::Anual,
            extra: BTreeMap::new(),
        },
    ]
}
