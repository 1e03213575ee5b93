use crate::{power::model::PowerHead, Error};
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, QueryOrder, Set};
use superheroes_entity::power::{self, validate_description};
use tracing::instrument;

#[derive(Default)]
pub struct PowerService {}

impl PowerService {
    pub fn new() -> Self {
        Self {}
    }

    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_powers<C: ConnectionTrait>(
        &self,
        connection: &C,
    ) -> Result<Vec<PowerHead>, Error> {
        let powers = power::Entity::find()
            .order_by_asc(power::Column::Id)
            .all(connection)
            .await?;

        Ok(PowerHead::from_entities(&powers))
    }

    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn fetch_power<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<Option<PowerHead>, Error> {
        Ok(power::Entity::find_by_id(id)
            .one(connection)
            .await?
            .as_ref()
            .map(PowerHead::from_entity))
    }

    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn create_power<C: ConnectionTrait>(
        &self,
        name: &str,
        description: &str,
        connection: &C,
    ) -> Result<PowerHead, Error> {
        validate_description(description)?;

        let power = power::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(connection)
        .await?;

        log::debug!("created power {}", power.id);

        Ok(PowerHead::from_entity(&power))
    }

    /// Replace the description of a power.
    ///
    /// Returns `None` if there was no such power. A rejected description leaves the power
    /// unchanged.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn update_description<C: ConnectionTrait>(
        &self,
        id: i32,
        description: &str,
        connection: &C,
    ) -> Result<Option<PowerHead>, Error> {
        let Some(power) = power::Entity::find_by_id(id).one(connection).await? else {
            return Ok(None);
        };

        validate_description(description)?;

        let mut power = power.into_active_model();
        power.description = Set(description.to_string());
        let power = power.update(connection).await?;

        Ok(Some(PowerHead::from_entity(&power)))
    }

    /// Delete a power, including all of its hero powers.
    ///
    /// Returns `false` if there was no such power.
    #[instrument(skip(self, connection), err(level=tracing::Level::INFO))]
    pub async fn delete_power<C: ConnectionTrait>(
        &self,
        id: i32,
        connection: &C,
    ) -> Result<bool, Error> {
        let result = power::Entity::delete_by_id(id).exec(connection).await?;
        Ok(result.rows_affected > 0)
    }
}
