pub use sea_orm_migration::prelude::*;

mod m0000010_create_heroes;
mod m0000020_create_powers;
mod m0000030_create_hero_powers;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m0000010_create_heroes::Migration),
            Box::new(m0000020_create_powers::Migration),
            Box::new(m0000030_create_hero_powers::Migration),
        ]
    }
}

/// Name a foreign key constraint: `fk_<table>_<column>_<referred_table>`.
pub fn foreign_key_name(table: impl Iden, column: impl Iden, referred_table: impl Iden) -> String {
    format!(
        "fk_{}_{}_{}",
        table.to_string(),
        column.to_string(),
        referred_table.to_string()
    )
}
