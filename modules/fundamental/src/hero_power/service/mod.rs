use crate::{
    hero_power::model::{HeroPowerDetails, HeroPowerSummary, NewHeroPower},
    Error,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use superheroes_entity::{hero, hero_power, power, strength::validate_strength};
use tracing::instrument;

#[derive(Default)]
pub struct HeroPowerService {}

impl HeroPowerService {
    pub fn new() -> Self {
        Self {}
    }

    /// Load the hero powers of a hero, together with their powers, in the order they were created.
    pub(crate) async fn fetch_entities_for_hero<C: ConnectionTrait>(
        &self,
        hero_id: i32,
        connection: &C,
    ) -> Result<Vec<(hero_power::Model, power::Model)>, Error> {
        let rows = hero_power::Entity::find()
            .filter(hero_power::Column::HeroId.eq(hero_id))
            .find_also_related(power::Entity)
            .order_by_asc(hero_power::Column::Id)
            .all(connection)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(hero_power, power)| match power {
                Some(power) => Some((hero_power, power)),
                None => {
                    log::warn!("hero power {} without power", hero_power.id);
                    None
                }
            })
            .collect())
    }

    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_hero_powers_for_hero<C: ConnectionTrait>(
        &self,
        hero_id: i32,
        connection: &C,
    ) -> Result<Vec<HeroPowerSummary>, Error> {
        Ok(self
            .fetch_entities_for_hero(hero_id, connection)
            .await?
            .iter()
            .map(|(hero_power, power)| HeroPowerSummary::from_entities(hero_power, power))
            .collect())
    }

    /// Give a hero a power.
    ///
    /// Both hero and power must exist, and the strength must be valid. Nothing is written
    /// otherwise.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn create_hero_power<C: ConnectionTrait>(
        &self,
        new: NewHeroPower,
        connection: &C,
    ) -> Result<HeroPowerDetails, Error> {
        // ids which don't fit the id column can't reference anything
        let hero = match i32::try_from(new.hero_id) {
            Ok(id) => hero::Entity::find_by_id(id).one(connection).await?,
            Err(_) => None,
        }
        .ok_or_else(|| Error::ReferenceNotFound("Hero not found".into()))?;

        let power = match i32::try_from(new.power_id) {
            Ok(id) => power::Entity::find_by_id(id).one(connection).await?,
            Err(_) => None,
        }
        .ok_or_else(|| Error::ReferenceNotFound("Power not found".into()))?;

        let strength = validate_strength(new.strength.as_str().unwrap_or_default())?;

        let hero_power = hero_power::ActiveModel {
            strength: Set(strength),
            hero_id: Set(hero.id),
            power_id: Set(power.id),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        log::debug!(
            "created hero power {} ({} -> {})",
            hero_power.id,
            hero.id,
            power.id
        );

        Ok(HeroPowerDetails::from_entities(&hero_power, &hero, &power))
    }
}

#[cfg(test)]
mod test;
