use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_empire::Empire, m20260801_000002_star::Star, m20260801_000003_colony::Colony,
    m20260801_000004_building::Building,
};

static IDX_BUILD_REQUEST_EMPIRE_DESIGN: &str = "idx-build_request-empire_id-design_id";
static IDX_BUILD_REQUEST_STAR_ID: &str = "idx-build_request-star_id";
static FK_BUILD_REQUEST_STAR_ID: &str = "fk-build_request-star_id";
static FK_BUILD_REQUEST_COLONY_ID: &str = "fk-build_request-colony_id";
static FK_BUILD_REQUEST_EMPIRE_ID: &str = "fk-build_request-empire_id";
static FK_BUILD_REQUEST_EXISTING_BUILDING_ID: &str = "fk-build_request-existing_building_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BuildRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(BuildRequest::Id))
                    .col(integer(BuildRequest::StarId))
                    .col(integer(BuildRequest::PlanetIndex))
                    .col(integer(BuildRequest::ColonyId))
                    .col(integer(BuildRequest::EmpireId))
                    .col(integer_null(BuildRequest::ExistingBuildingId))
                    .col(integer(BuildRequest::DesignKind))
                    .col(string(BuildRequest::DesignId))
                    .col(integer(BuildRequest::Count))
                    .col(double(BuildRequest::Progress))
                    .col(timestamp(BuildRequest::StartTime))
                    .col(timestamp(BuildRequest::EndTime))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_REQUEST_STAR_ID)
                    .from_tbl(BuildRequest::Table)
                    .from_col(BuildRequest::StarId)
                    .to_tbl(Star::Table)
                    .to_col(Star::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_REQUEST_COLONY_ID)
                    .from_tbl(BuildRequest::Table)
                    .from_col(BuildRequest::ColonyId)
                    .to_tbl(Colony::Table)
                    .to_col(Colony::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_REQUEST_EMPIRE_ID)
                    .from_tbl(BuildRequest::Table)
                    .from_col(BuildRequest::EmpireId)
                    .to_tbl(Empire::Table)
                    .to_col(Empire::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BUILD_REQUEST_EXISTING_BUILDING_ID)
                    .from_tbl(BuildRequest::Table)
                    .from_col(BuildRequest::ExistingBuildingId)
                    .to_tbl(Building::Table)
                    .to_col(Building::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_REQUEST_EMPIRE_DESIGN)
                    .table(BuildRequest::Table)
                    .col(BuildRequest::EmpireId)
                    .col(BuildRequest::DesignId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_REQUEST_STAR_ID)
                    .table(BuildRequest::Table)
                    .col(BuildRequest::StarId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_REQUEST_EMPIRE_DESIGN)
                    .table(BuildRequest::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_REQUEST_STAR_ID)
                    .table(BuildRequest::Table)
                    .to_owned(),
            )
            .await?;

        for fk in [
            FK_BUILD_REQUEST_STAR_ID,
            FK_BUILD_REQUEST_COLONY_ID,
            FK_BUILD_REQUEST_EMPIRE_ID,
            FK_BUILD_REQUEST_EXISTING_BUILDING_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(BuildRequest::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(BuildRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BuildRequest {
    Table,
    Id,
    StarId,
    PlanetIndex,
    ColonyId,
    EmpireId,
    ExistingBuildingId,
    DesignKind,
    DesignId,
    Count,
    Progress,
    StartTime,
    EndTime,
}
