use crate::hero::model::HeroHead;
use crate::power::model::PowerHead;
use crate::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use superheroes_entity::{hero, hero_power, power, strength::Strength};
use utoipa::ToSchema;

/// The fields a new hero power must have, in the order they are reported when missing.
const REQUIRED_FIELDS: [&str; 3] = ["strength", "power_id", "hero_id"];

/// The association of a hero with one of their powers.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroPowerHead {
    pub id: i32,
    pub hero_id: i32,
    pub power_id: i32,
    pub strength: Strength,
}

impl HeroPowerHead {
    pub fn from_entity(hero_power: &hero_power::Model) -> Self {
        HeroPowerHead {
            id: hero_power.id,
            hero_id: hero_power.hero_id,
            power_id: hero_power.power_id,
            strength: hero_power.strength,
        }
    }
}

/// A hero power, as seen from its hero.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroPowerSummary {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub power: PowerHead,
}

impl HeroPowerSummary {
    pub fn from_entities(hero_power: &hero_power::Model, power: &power::Model) -> Self {
        HeroPowerSummary {
            head: HeroPowerHead::from_entity(hero_power),
            power: PowerHead::from_entity(power),
        }
    }
}

/// A hero power, including both sides of the association.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq, Eq)]
pub struct HeroPowerDetails {
    #[serde(flatten)]
    pub head: HeroPowerHead,

    pub hero: HeroHead,
    pub power: PowerHead,
}

impl HeroPowerDetails {
    pub fn from_entities(
        hero_power: &hero_power::Model,
        hero: &hero::Model,
        power: &power::Model,
    ) -> Self {
        HeroPowerDetails {
            head: HeroPowerHead::from_entity(hero_power),
            hero: HeroHead::from_entity(hero),
            power: PowerHead::from_entity(power),
        }
    }
}

/// A request to give a hero a power.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema, PartialEq)]
pub struct NewHeroPower {
    /// One of `Strong`, `Weak`, or `Average`.
    ///
    /// Checked only once hero and power are known to exist.
    #[schema(value_type = Strength)]
    pub strength: Value,
    pub power_id: i64,
    pub hero_id: i64,
}

impl NewHeroPower {
    /// Parse a raw request body, reporting every missing field.
    pub fn from_body(body: &[u8]) -> Result<Self, Error> {
        let no_data = || Error::Validation(vec!["No data provided".to_string()]);

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(no_data());
        }

        let data = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(data)) if !data.is_empty() => data,
            Ok(value) if is_empty(&value) => return Err(no_data()),
            Ok(_) => {
                return Err(Error::Validation(vec![
                    "Request body must be a JSON object".to_string(),
                ]))
            }
            Err(err) => return Err(Error::Validation(vec![err.to_string()])),
        };

        let missing = REQUIRED_FIELDS
            .iter()
            .filter(|field| !data.contains_key(**field))
            .map(|field| format!("{field} is required"))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(Error::Validation(missing));
        }

        serde_json::from_value(Value::Object(data))
            .map_err(|err| Error::Validation(vec![err.to_string()]))
    }
}

/// A value which counts as no data at all: `null`, `false`, zero, or an empty string, array, or
/// object.
fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(value) => !value,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(value) => value.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(data) => data.is_empty(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn errors(body: &str) -> Vec<String> {
        match NewHeroPower::from_body(body.as_bytes()) {
            Err(Error::Validation(errors)) => errors,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn complete() {
        let new = NewHeroPower::from_body(
            br#"{"strength": "Average", "power_id": 1, "hero_id": 3, "extra": true}"#,
        )
        .expect("must parse");
        assert_eq!(
            new,
            NewHeroPower {
                strength: json!("Average"),
                power_id: 1,
                hero_id: 3,
            }
        );
    }

    #[test]
    fn no_data() {
        for body in ["", "  ", "{}", "null", "[]", "0", "0.0", "false", r#""""#] {
            assert_eq!(errors(body), ["No data provided"], "body: {body:?}");
        }
    }

    #[test]
    fn large_ids() {
        let new = NewHeroPower::from_body(
            br#"{"strength": "Strong", "power_id": 1, "hero_id": 3000000000}"#,
        )
        .expect("must parse");
        assert_eq!(new.hero_id, 3_000_000_000);
    }

    #[test]
    fn missing_fields_in_order() {
        assert_eq!(
            errors(r#"{"other": 1}"#),
            ["strength is required", "power_id is required", "hero_id is required"]
        );
        assert_eq!(
            errors(r#"{"strength": "Weak", "power_id": 1}"#),
            ["hero_id is required"]
        );
    }

    #[test]
    fn wrong_types() {
        assert_eq!(errors(r#"[1, 2]"#), ["Request body must be a JSON object"]);
        assert_eq!(errors("1"), ["Request body must be a JSON object"]);
        assert_eq!(errors("true"), ["Request body must be a JSON object"]);
        assert_eq!(
            errors(r#"{"strength": "Weak", "power_id": "one", "hero_id": 1}"#).len(),
            1
        );
    }

    #[test]
    fn flattened_output() {
        let details = HeroPowerDetails {
            head: HeroPowerHead {
                id: 1,
                hero_id: 2,
                power_id: 3,
                strength: Strength::Strong,
            },
            hero: HeroHead {
                id: 2,
                name: "Kamala Khan".into(),
                super_name: "Ms. Marvel".into(),
            },
            power: PowerHead {
                id: 3,
                name: "flight".into(),
                description: "gives the wielder the ability to fly through the skies at supersonic speed".into(),
            },
        };

        assert_eq!(
            serde_json::to_value(details).expect("must serialize"),
            json!({
                "id": 1,
                "hero_id": 2,
                "power_id": 3,
                "strength": "Strong",
                "hero": {"id": 2, "name": "Kamala Khan", "super_name": "Ms. Marvel"},
                "power": {
                    "id": 3,
                    "name": "flight",
                    "description": "gives the wielder the ability to fly through the skies at supersonic speed",
                },
            })
        );
    }
}
