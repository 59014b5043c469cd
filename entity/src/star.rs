use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "star")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::colony::Entity")]
    Colony,
    #[sea_orm(has_many = "super::build_request::Entity")]
    BuildRequest,
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

impl ActiveModelBehavior for ActiveModel {}
