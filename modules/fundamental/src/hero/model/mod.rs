use serde::{Deserialize, Serialize};
use superheroes_entity::hero;
use utoipa::ToSchema;

mod details;

pub use details::*;

/// A hero, without any of the powers.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroHead {
    /// The ID of the hero.
    pub id: i32,

    /// The real name of the hero.
    pub name: String,

    /// The name the hero is known by.
    pub super_name: String,
}

impl HeroHead {
    pub fn from_entity(hero: &hero::Model) -> Self {
        HeroHead {
            id: hero.id,
            name: hero.name.clone(),
            super_name: hero.super_name.clone(),
        }
    }

    pub fn from_entities(heroes: &[hero::Model]) -> Vec<Self> {
        heroes.iter().map(Self::from_entity).collect()
    }
}
