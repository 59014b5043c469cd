use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_empire::Empire, m20260801_000003_colony::Colony};

static IDX_BUILDING_EMPIRE_DESIGN: &str = "idx-building-empire_id-design_id";
static FK_BUILDING_COLONY_ID: &str = "fk-building-colony_id";
static FK_BUILDING_EMPIRE_ID: &str = "fk-building-empire_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Building::Table)
                    .if_not_exists()
                    .col(pk_auto(Building::Id))
                    .col(integer(Building::ColonyId))
                    .col(integer(Building::EmpireId))
                    .col(string(Building::DesignId))
                    .col(integer(Building::Level))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILDING_COLONY_ID)
                    .from_tbl(Building::Table)
                    .from_col(Building::ColonyId)
                    .to_tbl(Colony::Table)
                    .to_col(Colony::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILDING_EMPIRE_ID)
                    .from_tbl(Building::Table)
                    .from_col(Building::EmpireId)
                    .to_tbl(Empire::Table)
                    .to_col(Empire::Id)
                    .to_owned(),
            )
            .await?;

        // The per-empire cap check counts by (empire_id, design_id)
        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILDING_EMPIRE_DESIGN)
                    .table(Building::Table)
                    .col(Building::EmpireId)
                    .col(Building::DesignId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILDING_EMPIRE_DESIGN)
                    .table(Building::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUILDING_COLONY_ID)
                    .table(Building::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BUILDING_EMPIRE_ID)
                    .table(Building::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Building::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Building {
    Table,
    Id,
    ColonyId,
    EmpireId,
    DesignId,
    Level,
}
