use sea_orm::{EntityTrait, TransactionTrait};
use serde_json::json;
use superheroes_common::db::Database;
use superheroes_entity::{hero, hero_power, power};
use superheroes_module_fundamental::{
    hero::service::HeroService,
    hero_power::{model::NewHeroPower, service::HeroPowerService},
    power::service::PowerService,
};

/// Name and super name
const HEROES: [(&str, &str); 10] = [
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

/// Name and description
const POWERS: [(&str, &str); 4] = [
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    (
        "elasticity",
        "can stretch the human body to extreme lengths",
    ),
];

/// Hero and power, as index into the lists above, and strength
const HERO_POWERS: [(usize, usize, &str); 10] = [
    (0, 1, "Strong"),
    (1, 0, "Average"),
    (2, 2, "Average"),
    (3, 3, "Weak"),
    (4, 1, "Strong"),
    (5, 0, "Average"),
    (6, 2, "Weak"),
    (7, 3, "Average"),
    (8, 1, "Strong"),
    (9, 0, "Weak"),
];

/// Replace all content of the database with a well known set of heroes and powers.
pub async fn sample_data(db: &Database) -> anyhow::Result<()> {
    let hero_service = HeroService::new();
    let power_service = PowerService::new();
    let hero_power_service = HeroPowerService::new();

    let tx = db.begin().await?;

    log::info!("Clearing existing data");

    hero_power::Entity::delete_many().exec(&tx).await?;
    hero::Entity::delete_many().exec(&tx).await?;
    power::Entity::delete_many().exec(&tx).await?;

    let mut heroes = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        heroes.push(hero_service.create_hero(name, super_name, &tx).await?);
    }

    let mut powers = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        powers.push(power_service.create_power(name, description, &tx).await?);
    }

    for (hero, power, strength) in HERO_POWERS {
        hero_power_service
            .create_hero_power(
                NewHeroPower {
                    strength: json!(strength),
                    power_id: powers[power].id.into(),
                    hero_id: heroes[hero].id.into(),
                },
                &tx,
            )
            .await?;
    }

    tx.commit().await?;

    log::info!(
        "Seeded {} heroes, {} powers, and {} hero powers",
        HEROES.len(),
        POWERS.len(),
        HERO_POWERS.len()
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::PaginatorTrait;
    use superheroes_entity::strength::Strength;
    use superheroes_test_context::SuperheroesContext;
    use test_context::test_context;
    use test_log::test;

    #[test_context(SuperheroesContext)]
    #[test(tokio::test)]
    async fn seed(ctx: &SuperheroesContext) -> Result<(), anyhow::Error> {
        sample_data(&ctx.db).await?;

        assert_eq!(hero::Entity::find().count(&ctx.db).await?, 10);
        assert_eq!(power::Entity::find().count(&ctx.db).await?, 4);
        assert_eq!(hero_power::Entity::find().count(&ctx.db).await?, 10);

        let heroes = HeroService::new().fetch_heroes(&ctx.db).await?;
        assert_eq!(heroes[0].name, "Kamala Khan");
        assert_eq!(heroes[0].super_name, "Ms. Marvel");

        let kamala = HeroService::new()
            .fetch_hero(heroes[0].id, &ctx.db)
            .await?
            .ok_or_else(|| anyhow::anyhow!("hero must exist"))?;
        assert_eq!(kamala.hero_powers.len(), 1);
        assert_eq!(kamala.hero_powers[0].head.strength, Strength::Strong);
        assert_eq!(kamala.hero_powers[0].power.name, "flight");

        Ok(())
    }

    #[test_context(SuperheroesContext)]
    #[test(tokio::test)]
    async fn seed_replaces_existing(ctx: &SuperheroesContext) -> Result<(), anyhow::Error> {
        HeroService::new()
            .create_hero("Peter Parker", "Spider-Man", &ctx.db)
            .await?;

        sample_data(&ctx.db).await?;
        sample_data(&ctx.db).await?;

        assert_eq!(hero::Entity::find().count(&ctx.db).await?, 10);
        assert_eq!(power::Entity::find().count(&ctx.db).await?, 4);
        assert_eq!(hero_power::Entity::find().count(&ctx.db).await?, 10);

        let heroes = HeroService::new().fetch_heroes(&ctx.db).await?;
        assert!(heroes.iter().all(|hero| hero.name != "Peter Parker"));

        Ok(())
    }
}
