use crate::configure;
use superheroes_test_context::{
    call::{self, CallService},
    SuperheroesContext,
};

pub async fn caller(ctx: &SuperheroesContext) -> anyhow::Result<impl CallService + '_> {
    call::caller(|svc| configure(svc, ctx.db.clone())).await
}

use crate::{
    hero::{model::HeroHead, service::HeroService},
    power::{model::PowerHead, service::PowerService},
};

/// A small set of heroes and powers, without any associations.
pub struct Fixture {
    pub heroes: Vec<HeroHead>,
    pub powers: Vec<PowerHead>,
}

pub async fn fixture(ctx: &SuperheroesContext) -> anyhow::Result<Fixture> {
    let heroes = HeroService::new();
    let powers = PowerService::new();

    Ok(Fixture {
        heroes: vec![
            heroes
                .create_hero("Kamala Khan", "Ms. Marvel", &ctx.db)
                .await?,
            heroes
                .create_hero("Doreen Green", "Squirrel Girl", &ctx.db)
                .await?,
        ],
        powers: vec![
            powers
                .create_power(
                    "super strength",
                    "gives the wielder super-human strengths",
                    &ctx.db,
                )
                .await?,
            powers
                .create_power(
                    "flight",
                    "gives the wielder the ability to fly through the skies at supersonic speed",
                    &ctx.db,
                )
                .await?,
        ],
    })
}
