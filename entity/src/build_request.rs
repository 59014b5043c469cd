use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// What kind of entity a design describes. Stored as an integer column on
/// `build_request` rows and used as half of the design catalog key.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "lowercase")]
pub enum DesignKind {
    #[sea_orm(num_value = 1)]
    Building,
    #[sea_orm(num_value = 2)]
    Ship,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "build_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub star_id: i32,
    pub planet_index: i32,
    pub colony_id: i32,
    pub empire_id: i32,
    /// Set when this request upgrades an existing building rather than
    /// constructing a new one.
    pub existing_building_id: Option<i32>,
    pub design_kind: DesignKind,
    pub design_id: String,
    pub count: i32,
    pub progress: f64,
    pub start_time: DateTime,
    pub end_time: DateTime,
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
    #[sea_orm(
        belongs_to = "super::building::Entity",
        from = "Column::ExistingBuildingId",
        to = "super::building::Column::Id"
    )]
    Building,
}

impl Related<super::star::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Star.def()
    }
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

impl Related<super::building::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Building.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
