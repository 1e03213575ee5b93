use crate::{
    hero_power::{model::NewHeroPower, service::HeroPowerService},
    test::fixture,
    Error,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;
use superheroes_entity::{hero_power, strength::Strength};
use superheroes_test_context::SuperheroesContext;
use test_context::test_context;
use test_log::test;

#[test_context(SuperheroesContext)]
#[test(tokio::test)]
async fn create(ctx: &SuperheroesContext) -> Result<(), anyhow::Error> {
    let fixture = fixture(ctx).await?;
    let service = HeroPowerService::new();

    let created = service
        .create_hero_power(
            NewHeroPower {
                strength: json!("Average"),
                power_id: fixture.powers[1].id.into(),
                hero_id: fixture.heroes[0].id.into(),
            },
            &ctx.db,
        )
        .await?;

    assert_eq!(created.head.strength, Strength::Average);
    assert_eq!(created.head.hero_id, fixture.heroes[0].id);
    assert_eq!(created.head.power_id, fixture.powers[1].id);
    assert_eq!(created.hero, fixture.heroes[0]);
    assert_eq!(created.power, fixture.powers[1]);

    assert_eq!(hero_power::Entity::find().count(&ctx.db).await?, 1);

    let for_hero = service
        .fetch_hero_powers_for_hero(fixture.heroes[0].id, &ctx.db)
        .await?;
    assert_eq!(for_hero.len(), 1);
    assert_eq!(for_hero[0].head, created.head);
    assert_eq!(for_hero[0].power, created.power);

    Ok(())
}

#[test_context(SuperheroesContext)]
#[test(tokio::test)]
async fn reject_invalid_strength(ctx: &SuperheroesContext) -> Result<(), anyhow::Error> {
    let fixture = fixture(ctx).await?;
    let service = HeroPowerService::new();

    for strength in [json!("Mighty"), json!("strong"), json!(""), json!(3), json!(null)] {
        let result = service
            .create_hero_power(
                NewHeroPower {
                    strength: strength.clone(),
                    power_id: fixture.powers[0].id.into(),
                    hero_id: fixture.heroes[0].id.into(),
                },
                &ctx.db,
            )
            .await;

        assert!(
            matches!(
                &result,
                Err(Error::Validation(errors)) if errors == &["Strength must be one of: Strong, Weak, Average"]
            ),
            "strength: {strength}, result: {result:?}"
        );
    }

    assert_eq!(hero_power::Entity::find().count(&ctx.db).await?, 0);

    Ok(())
}

#[test_context(SuperheroesContext)]
#[test(tokio::test)]
async fn reject_missing_references(ctx: &SuperheroesContext) -> Result<(), anyhow::Error> {
    let fixture = fixture(ctx).await?;
    let service = HeroPowerService::new();

    let result = service
        .create_hero_power(
            NewHeroPower {
                strength: json!("Strong"),
                power_id: fixture.powers[0].id.into(),
                hero_id: 42,
            },
            &ctx.db,
        )
        .await;
    assert!(matches!(result, Err(Error::ReferenceNotFound(msg)) if msg == "Hero not found"));

    let result = service
        .create_hero_power(
            NewHeroPower {
                strength: json!("Strong"),
                power_id: 42,
                hero_id: fixture.heroes[0].id.into(),
            },
            &ctx.db,
        )
        .await;
    assert!(matches!(result, Err(Error::ReferenceNotFound(msg)) if msg == "Power not found"));

    // existence is checked before the strength
    let result = service
        .create_hero_power(
            NewHeroPower {
                strength: json!("Mighty"),
                power_id: 42,
                hero_id: 42,
            },
            &ctx.db,
        )
        .await;
    assert!(matches!(result, Err(Error::ReferenceNotFound(msg)) if msg == "Hero not found"));

    // larger than any id the database can hold
    let result = service
        .create_hero_power(
            NewHeroPower {
                strength: json!("Strong"),
                power_id: 3_000_000_000,
                hero_id: fixture.heroes[0].id.into(),
            },
            &ctx.db,
        )
        .await;
    assert!(matches!(result, Err(Error::ReferenceNotFound(msg)) if msg == "Power not found"));

    assert_eq!(hero_power::Entity::find().count(&ctx.db).await?, 0);

    Ok(())
}
