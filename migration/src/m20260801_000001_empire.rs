use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Empire::Table)
                    .if_not_exists()
                    .col(pk_auto(Empire::Id))
                    .col(string(Empire::Name))
                    .col(double(Empire::Cash))
                    .col(timestamp(Empire::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Empire::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Empire {
    Table,
    Id,
    Name,
    Cash,
    CreatedAt,
}
