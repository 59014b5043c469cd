use serde::{Deserialize, Serialize};

/// An empire account with its current cash balance.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EmpireDto {
    pub id: i32,
    pub name: String,
    pub cash: f64,
}

impl From<entity::empire::Model> for EmpireDto {
    fn from(model: entity::empire::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cash: model.cash,
        }
    }
}
