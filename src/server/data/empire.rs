use chrono::Utc;
use entity::{cash_audit_record, empire};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter,
};

/// What a cash withdrawal was for, recorded alongside the amount in the
/// append-only audit trail.
pub struct CashAudit {
    pub design_id: String,
    pub build_count: i32,
    pub accelerate_amount: f64,
}

pub struct EmpireRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EmpireRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, empire_id: i32) -> Result<Option<empire::Model>, DbErr> {
        entity::prelude::Empire::find_by_id(empire_id)
            .one(self.db)
            .await
    }

    /// Withdraws cash from an empire, appending an audit record on success.
    ///
    /// Returns `Ok(false)` when the balance is insufficient, leaving both the
    /// balance and the audit trail untouched. The debit is a single
    /// conditional UPDATE (`cash = cash - amount WHERE cash >= amount`), so
    /// concurrent withdrawals against the same empire can never drive the
    /// balance below zero regardless of transaction isolation.
    pub async fn withdraw(
        &self,
        empire_id: i32,
        amount: f64,
        audit: CashAudit,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Empire::update_many()
            .col_expr(
                empire::Column::Cash,
                Expr::col(empire::Column::Cash).sub(amount),
            )
            .filter(empire::Column::Id.eq(empire_id))
            .filter(empire::Column::Cash.gte(amount))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        let record = cash_audit_record::ActiveModel {
            empire_id: ActiveValue::Set(empire_id),
            design_id: ActiveValue::Set(audit.design_id),
            build_count: ActiveValue::Set(audit.build_count),
            accelerate_amount: ActiveValue::Set(audit.accelerate_amount),
            amount: ActiveValue::Set(amount),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        record.insert(self.db).await?;

        Ok(true)
    }
}
