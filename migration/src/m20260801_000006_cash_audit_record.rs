use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_empire::Empire;

static FK_CASH_AUDIT_EMPIRE_ID: &str = "fk-cash_audit_record-empire_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CashAuditRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(CashAuditRecord::Id))
                    .col(integer(CashAuditRecord::EmpireId))
                    .col(string(CashAuditRecord::DesignId))
                    .col(integer(CashAuditRecord::BuildCount))
                    .col(double(CashAuditRecord::AccelerateAmount))
                    .col(double(CashAuditRecord::Amount))
                    .col(timestamp(CashAuditRecord::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CASH_AUDIT_EMPIRE_ID)
                    .from_tbl(CashAuditRecord::Table)
                    .from_col(CashAuditRecord::EmpireId)
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
                    .name(FK_CASH_AUDIT_EMPIRE_ID)
                    .table(CashAuditRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CashAuditRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CashAuditRecord {
    Table,
    Id,
    EmpireId,
    DesignId,
    BuildCount,
    AccelerateAmount,
    Amount,
    CreatedAt,
}
