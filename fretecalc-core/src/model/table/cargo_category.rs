use serde::{Deserialize, Serialize};

/// ANTT cargo categories from the minimum-freight coefficient table
/// (Resolução ANTT nº 5.867/2020, Tabela A — transporte lotação).
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CargoCategory {
    #[default]
    CargaGeral,
    GranelSolido,
    GranelLiquido,
    Frigorificada,
    Conteineirizada,
    PerigosaGeral,
    Neogranel,
}

impl std::fmt::Display for CargoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self)
            .unwrap_or(String::from(""))
            .replace('\"', "");
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_codes() {
        let parsed: CargoCategory =
            serde_json::from_str("\"carga_geral\"").expect("known category code");
        assert_eq!(parsed, CargoCategory::CargaGeral);
        assert_eq!(CargoCategory::GranelSolido.to_string(), "granel_solido");
    }

    #[test]
    fn test_default_is_general_cargo() {
        assert_eq!(CargoCategory::default(), CargoCategory::CargaGeral);
    }
}
