use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "building")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub colony_id: i32,
    pub empire_id: i32,
    pub design_id: String,
    pub level: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::colony::Entity",
        from = "Column::ColonyId",
        to = "super::colony::Column::Id"
    )]
    Colony,
    #[sea_orm(
        belongs_to = "super::empire::Entity",
        from = "Column::EmpireId",
        to = "super::empire::Column::Id"
    )]
    Empire,
}

impl Related<super::colony::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Colony.def()
    }
}

impl Related<super::empire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Empire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
