use chrono::NaiveDateTime;
use entity::build_request::DesignKind;
use serde::{Deserialize, Serialize};

/// Payload for queueing a new build request on a colony.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewBuildRequestDto {
    /// Empire issuing the request
    pub empire_id: i32,
    /// Whether the design is a building or a ship
    #[schema(value_type = String, example = "building")]
    pub design_kind: DesignKind,
    /// Design catalog identifier
    pub design_id: String,
    /// Quantity to build in this batch, silently clamped to at most 5000
    pub count: i32,
    /// Set when upgrading an existing building instead of constructing a new one
    pub existing_building_id: Option<i32>,
}

/// A queued or in-progress construction order.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BuildRequestDto {
    pub id: i32,
    pub star_id: i32,
    pub planet_index: i32,
    pub colony_id: i32,
    pub empire_id: i32,
    pub existing_building_id: Option<i32>,
    #[schema(value_type = String, example = "building")]
    pub design_kind: DesignKind,
    pub design_id: String,
    pub count: i32,
    /// Fraction of the batch completed, in [0, 1]
    pub progress: f64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl From<entity::build_request::Model> for BuildRequestDto {
    fn from(model: entity::build_request::Model) -> Self {
        Self {
            id: model.id,
            star_id: model.star_id,
            planet_index: model.planet_index,
            colony_id: model.colony_id,
            empire_id: model.empire_id,
            existing_building_id: model.existing_building_id,
            design_kind: model.design_kind,
            design_id: model.design_id,
            count: model.count,
            progress: model.progress,
            start_time: model.start_time,
            end_time: model.end_time,
        }
    }
}

/// Payload for paying cash to instantly complete a fraction of remaining progress.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct AccelerateDto {
    /// Fraction of the *remaining* progress to complete, in [0, 1]
    pub amount: f64,
}
