use crate::validation::ValidationError;
use sea_orm::{DeriveActiveEnum, EnumIter};
use std::str::FromStr;
use strum::VariantArray;

/// How strongly a hero wields a power.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
    serde::Serialize,
    serde::Deserialize,
    utoipa::ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
// When adding a new variant, also extend the length of the "strength" column if required.
pub enum Strength {
    #[sea_orm(string_value = "Strong")]
    Strong,
    #[sea_orm(string_value = "Weak")]
    Weak,
    #[sea_orm(string_value = "Average")]
    Average,
}

impl Strength {
    /// The allowed values, in their wire representation, separated by a comma.
    pub fn allowed() -> String {
        Self::VARIANTS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse and check a strength value.
pub fn validate_strength(strength: &str) -> Result<Strength, ValidationError> {
    Strength::from_str(strength).map_err(|_| ValidationError::Strength {
        allowed: Strength::allowed(),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(Strength::Strong.to_string(), "Strong");
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(Strength::Average.to_string(), "Average");
    }

    #[test]
    fn only_known_values() {
        assert_eq!(validate_strength("Average"), Ok(Strength::Average));
        assert_eq!(
            validate_strength("strong").map_err(|err| err.to_string()),
            Err("Strength must be one of: Strong, Weak, Average".to_string())
        );
        assert!(validate_strength("").is_err());
        assert!(validate_strength("Mighty").is_err());
    }
}
