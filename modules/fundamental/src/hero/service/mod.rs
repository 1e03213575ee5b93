use crate::{
    hero::model::{HeroDetails, HeroHead},
    hero_power::service::HeroPowerService,
    Error,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};
use superheroes_entity::hero;
use tracing::instrument;

#[derive(Default)]
pub struct HeroService {
    hero_powers: HeroPowerService,
}

impl HeroService {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_heroes<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<HeroHead>, Error> {
        let heroes = hero::Entity::find()
            .order_by_asc(hero::Column::Id)
            .all(connection)
            .await?;

        Ok(HeroHead::from_entities(&heroes))
    }

    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_hero<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<HeroDetails>, Error> {
        let Some(hero) = hero::Entity::find_by_id(id).one(connection).await? else {
            return Ok(None);
        };

        let hero_powers = self
            .hero_powers
            .fetch_entities_for_hero(hero.id, connection)
            .await?;

        Ok(Some(HeroDetails::from_entities(&hero, &hero_powers)))
    }

    /// Create a new hero. Name and super name must not be empty.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn create_hero<C: ConnectionTrait>(
        &self,
        name: &str,
        super_name: &str,
        connection: &C,
    ) -> Result<HeroHead, Error> {
        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push("Name must be present".to_string());
        }
        if super_name.is_empty() {
            errors.push("Super name must be present".to_string());
        }
        if !errors.is_empty() {
            return Err(Error::Validation(errors));
        }

        let hero = hero::ActiveModel {
            name: Set(name.to_string()),
            super_name: Set(super_name.to_string()),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        log::debug!("created hero {}", hero.id);

        Ok(HeroHead::from_entity(&hero))
    }

    /// Delete a hero, including all of its hero powers.
    ///
    /// Returns `false` if there was no such hero.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn delete_hero<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<bool, Error> {
        let result = hero::Entity::delete_by_id(id).exec(connection).await?;
        Ok(result.rows_affected > 0)
    }
}
