use crate::foreign_key_name;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite can't add constraints to an existing table, so the foreign keys are part of the
        // table definition. Its schema builder drops the constraint names, so that table is
        // created from plain SQL.
        if manager.get_database_backend() == DatabaseBackend::Sqlite {
            manager
                .get_connection()
                .execute_unprepared(include_str!("m0000030_create_hero_powers.sqlite.sql"))
                .await?;
        } else {
            manager
                .create_table(
                    Table::create()
                        .table(HeroPowers::Table)
                        .col(
                            ColumnDef::new(HeroPowers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(HeroPowers::Strength)
                                .string_len(50)
                                .not_null(),
                        )
                        .col(ColumnDef::new(HeroPowers::HeroId).integer().not_null())
                        .col(ColumnDef::new(HeroPowers::PowerId).integer().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name(foreign_key_name(
                                    HeroPowers::Table,
                                    HeroPowers::HeroId,
                                    Heroes::Table,
                                ))
                                .from(HeroPowers::Table, HeroPowers::HeroId)
                                .to(Heroes::Table, Heroes::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name(foreign_key_name(
                                    HeroPowers::Table,
                                    HeroPowers::PowerId,
                                    Powers::Table,
                                ))
                                .from(HeroPowers::Table, HeroPowers::PowerId)
                                .to(Powers::Table, Powers::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_index(
                Index::create()
                    .table(HeroPowers::Table)
                    .name(INDEX_HERO_ID)
                    .col(HeroPowers::HeroId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(HeroPowers::Table)
                    .name(INDEX_POWER_ID)
                    .col(HeroPowers::PowerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .if_exists()
                    .table(HeroPowers::Table)
                    .to_owned(),
            )
            .await
    }
}

const INDEX_HERO_ID: &str = "hero_powers_hero_id_idx";
const INDEX_POWER_ID: &str = "hero_powers_power_id_idx";

#[derive(DeriveIden)]
enum HeroPowers {
    Table,
    Id,
    Strength,
    HeroId,
    PowerId,
}

#[derive(DeriveIden)]
enum Heroes {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Powers {
    Table,
    Id,
}
