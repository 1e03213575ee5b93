use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use superheroes_entity::{power, validation::ValidationError};
use utoipa::ToSchema;

/// A power, which heroes may have.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct PowerHead {
    /// The ID of the power.
    pub id: i32,

    /// The name of the power.
    pub name: String,

    /// What the power does, at least 20 characters long.
    pub description: String,
}

impl PowerHead {
    pub fn from_entity(power: &power::Model) -> Self {
        PowerHead {
            id: power.id,
            name: power.name.clone(),
            description: power.description.clone(),
        }
    }

    pub fn from_entities(powers: &[power::Model]) -> Vec<Self> {
        powers.iter().map(Self::from_entity).collect()
    }
}

/// An update of a power's description.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct PowerUpdate {
    /// The new description.
    pub description: String,
}

impl PowerUpdate {
    /// Parse a raw request body.
    ///
    /// A body which is missing, or has no `description`, is a bad request. A body which isn't
    /// JSON, or a description which isn't a string, is rejected.
    pub fn from_body(body: &[u8]) -> Result<Self, Error> {
        let required = || Error::BadRequest("Description is required".into());

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(required());
        }

        let mut data = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(data)) => data,
            Ok(_) => return Err(required()),
            Err(err) => return Err(Error::Validation(vec![err.to_string()])),
        };

        match data.remove("description") {
            None => Err(required()),
            Some(Value::String(description)) => Ok(Self { description }),
            Some(Value::Null) => Err(ValidationError::DescriptionMissing.into()),
            Some(_) => Err(Error::Validation(vec![
                "Description must be a string".to_string(),
            ])),
        }
    }
}
