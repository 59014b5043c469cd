use sea_orm::entity::prelude::*;

/// Append-only log of cash withdrawn to accelerate a build.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cash_audit_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub empire_id: i32,
    pub design_id: String,
    pub build_count: i32,
    pub accelerate_amount: f64,
    pub amount: f64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::empire::Entity",
        from = "Column::EmpireId",
        to = "super::empire::Column::Id"
    )]
    Empire,
}

impl Related<super::empire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Empire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
