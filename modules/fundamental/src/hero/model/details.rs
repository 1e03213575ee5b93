use crate::hero::model::HeroHead;
use crate::hero_power::model::HeroPowerSummary;
use serde::{Deserialize, Serialize};
use superheroes_entity::{hero, hero_power, power};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroDetails {
    #[serde(flatten)]
    pub head: HeroHead,

    /// The powers of the hero, in the order they were assigned.
    pub hero_powers: Vec<HeroPowerSummary>,
}

impl HeroDetails {
    pub fn from_entities(
        hero: &hero::Model,
        hero_powers: &[(hero_power::Model, power::Model)],
    ) -> Self {
        HeroDetails {
            head: HeroHead::from_entity(hero),
            hero_powers: hero_powers
                .iter()
                .map(|(hero_power, power)| HeroPowerSummary::from_entities(hero_power, power))
                .collect(),
        }
    }
}
