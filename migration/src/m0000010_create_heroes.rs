use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Heroes::Table)
                    .col(
                        ColumnDef::new(Heroes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Heroes::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Heroes::SuperName).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().if_exists().table(Heroes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Heroes {
    Table,
    Id,
    Name,
    SuperName,
}
