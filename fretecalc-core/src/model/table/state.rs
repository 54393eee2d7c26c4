use serde::{Deserialize, Serialize};

/// IBGE macro-region of a federative unit. the ICMS interstate rate rule
/// is keyed on this partition, so the assignment is carried as static
/// reference data rather than inferred at the calculation site.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Norte,
    Nordeste,
    CentroOeste,
    Sudeste,
    Sul,
}

/// the 27 Brazilian federative units, by two-letter code.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum State {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl State {
    /// parses a state code as typed into a form field: comparison is
    /// case-insensitive and whitespace-trimmed. unknown or empty codes
    /// return None so the caller can surface an explicit unknown
    /// classification instead of guessing a tax regime.
    pub fn from_code(code: &str) -> Option<State> {
        let normalized = code.trim().to_uppercase();
        match normalized.as_str() {
            "AC" => Some(State::AC),
            "AL" => Some(State::AL),
            "AP" => Some(State::AP),
            "AM" => Some(State::AM),
            "BA" => Some(State::BA),
            "CE" => Some(State::CE),
            "DF" => Some(State::DF),
            "ES" => Some(State::ES),
            "GO" => Some(State::GO),
            "MA" => Some(State::MA),
            "MT" => Some(State::MT),
            "MS" => Some(State::MS),
            "MG" => Some(State::MG),
            "PA" => Some(State::PA),
            "PB" => Some(State::PB),
            "PR" => Some(State::PR),
            "PE" => Some(State::PE),
            "PI" => Some(State::PI),
            "RJ" => Some(State::RJ),
            "RN" => Some(State::RN),
            "RS" => Some(State::RS),
            "RO" => Some(State::RO),
            "RR" => Some(State::RR),
            "SC" => Some(State::SC),
            "SP" => Some(State::SP),
            "SE" => Some(State::SE),
            "TO" => Some(State::TO),
            _ => None,
        }
    }

    /// the IBGE macro-region this unit belongs to.
    pub fn region(&self) -> Region {
        match self {
            State::AC | State::AP | State::AM | State::PA | State::RO | State::RR | State::TO => {
                Region::Norte
            }
            State::AL
            | State::BA
            | State::CE
            | State::MA
            | State::PB
            | State::PE
            | State::PI
            | State::RN
            | State::SE => Region::Nordeste,
            State::DF | State::GO | State::MT | State::MS => Region::CentroOeste,
            State::ES | State::MG | State::RJ | State::SP => Region::Sudeste,
            State::PR | State::RS | State::SC => Region::Sul,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::fmt::Display for Region {
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
    fn test_from_code_case_insensitive_and_trimmed() {
        assert_eq!(State::from_code(" pr "), Some(State::PR));
        assert_eq!(State::from_code("Sp"), Some(State::SP));
    }

    #[test]
    fn test_from_code_unknown_is_none() {
        assert_eq!(State::from_code(""), None);
        assert_eq!(State::from_code("XX"), None);
    }

    #[test]
    fn test_region_partition_samples() {
        assert_eq!(State::PA.region(), Region::Norte);
        assert_eq!(State::BA.region(), Region::Nordeste);
        assert_eq!(State::GO.region(), Region::CentroOeste);
        assert_eq!(State::SP.region(), Region::Sudeste);
        assert_eq!(State::PR.region(), Region::Sul);
    }

    #[test]
    fn test_every_unit_has_a_region() {
        // 7 + 9 + 4 + 4 + 3 federative units
        let all = [
            State::AC,
            State::AL,
            State::AP,
            State::AM,
            State::BA,
            State::CE,
            State::DF,
            State::ES,
            State::GO,
            State::MA,
            State::MT,
            State::MS,
            State::MG,
            State::PA,
            State::PB,
            State::PR,
            State::PE,
            State::PI,
            State::RJ,
            State::RN,
            State::RS,
            State::RO,
            State::RR,
            State::SC,
            State::SP,
            State::SE,
            State::TO,
        ];
        assert_eq!(all.len(), 27);
        for state in all {
            // region() is total; this pins the match against new variants
            let _ = state.region();
        }
    }
}
