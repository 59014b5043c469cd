use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_empire::Empire, m20260801_000002_star::Star};

static FK_COLONY_STAR_ID: &str = "fk-colony-star_id";
static FK_COLONY_EMPIRE_ID: &str = "fk-colony-empire_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Colony::Table)
                    .if_not_exists()
                    .col(pk_auto(Colony::Id))
                    .col(integer(Colony::StarId))
                    .col(integer(Colony::PlanetIndex))
                    .col(integer(Colony::EmpireId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COLONY_STAR_ID)
                    .from_tbl(Colony::Table)
                    .from_col(Colony::StarId)
                    .to_tbl(Star::Table)
                    .to_col(Star::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COLONY_EMPIRE_ID)
                    .from_tbl(Colony::Table)
                    .from_col(Colony::EmpireId)
                    .to_tbl(Empire::Table)
                    .to_col(Empire::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COLONY_STAR_ID)
                    .table(Colony::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COLONY_EMPIRE_ID)
                    .table(Colony::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Colony::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Colony {
    Table,
    Id,
    StarId,
    PlanetIndex,
    EmpireId,
}
