use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "empire")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub cash: f64,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::colony::Entity")]
    Colony,
    #[sea_orm(has_many = "super::build_request::Entity")]
    BuildRequest,
    #[sea_orm(has_many = "super::cash_audit_record::Entity")]
    CashAuditRecord,
}

impl Related<super::colony::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colony.def()
    }
}

impl Related<super::build_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BuildRequest.def()
    }
}

impl Related<super::cash_audit_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CashAuditRecord.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
