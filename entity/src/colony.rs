use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "colony")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub star_id: i32,
    pub planet_index: i32,
    pub empire_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::star::Entity",
        from = "Column::StarId",
        to = "super::star::Column::Id"
    )]
    Star,
    #[sea_orm(
        belongs_to = "super::empire::Entity",
        from = "Column::EmpireId",
        to = "super::empire::Column::Id"
    )]
    Empire,
    #[sea_orm(has_many = "super::building::Entity")]
    Building,
}

impl Related<super::star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Star.def()
    }
}

impl Related<super::empire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Empire.def()
    }
}

impl Related<super::building::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
