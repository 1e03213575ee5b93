use crate::validation::ValidationError;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

/// The minimum number of characters a power description must have.
pub const MIN_DESCRIPTION_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "powers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::hero_power::Entity")]
    HeroPowers,
}

impl Related<super::hero_power::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HeroPowers.def()
    }
}

impl Related<super::hero::Entity> for Entity {
    fn to() -> RelationDef {
        super::hero_power::Relation::Hero.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::hero_power::Relation::Power.def().rev())
    }
}

/// Check a power description.
///
/// The description must be present and at least [`MIN_DESCRIPTION_LEN`] characters long.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.is_empty() {
        return Err(ValidationError::DescriptionMissing);
    }
    if description.chars().count() < MIN_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooShort);
    }
    Ok(())
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(description) = &self.description {
            validate_description(description).map_err(|err| DbErr::Custom(err.to_string()))?;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn description_rules() {
        assert_eq!(
            validate_description(""),
            Err(ValidationError::DescriptionMissing)
        );
        assert_eq!(
            validate_description("too short"),
            Err(ValidationError::DescriptionTooShort)
        );
        assert_eq!(
            validate_description("nineteen characters"),
            Err(ValidationError::DescriptionTooShort)
        );
        assert_eq!(validate_description("twenty characters!!!"), Ok(()));
        assert_eq!(validate_description("Valid Updated Description"), Ok(()));
    }

    #[test]
    fn description_counts_characters() {
        // 20 characters, but more than 20 bytes
        assert_eq!(validate_description("ééééééééééééééééééé!"), Ok(()));
        // fewer than 20 characters, even though it has more than 20 bytes
        assert_eq!(
            validate_description("éééééééééééé"),
            Err(ValidationError::DescriptionTooShort)
        );
    }
}
