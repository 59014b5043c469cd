use chrono::{Duration, Utc};
use entity::{
    build_request::{self, DesignKind},
    building, colony, empire, star,
};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};

use crate::error::TestError;

/// Seeds game rows for tests. Each insert returns the stored model so its
/// generated id can feed later inserts.
pub struct GameBuilder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameBuilder<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert_empire(&self, name: &str, cash: f64) -> Result<empire::Model, TestError> {
        let empire = empire::ActiveModel {
            name: Set(name.to_string()),
            cash: Set(cash),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(empire)
    }

    pub async fn insert_star(&self, name: &str) -> Result<star::Model, TestError> {
        let star = star::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(star)
    }

    pub async fn insert_colony(
        &self,
        star_id: i32,
        planet_index: i32,
        empire_id: i32,
    ) -> Result<colony::Model, TestError> {
        let colony = colony::ActiveModel {
            star_id: Set(star_id),
            planet_index: Set(planet_index),
            empire_id: Set(empire_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(colony)
    }

    pub async fn insert_building(
        &self,
        colony_id: i32,
        empire_id: i32,
        design_id: &str,
        level: i32,
    ) -> Result<building::Model, TestError> {
        let building = building::ActiveModel {
            colony_id: Set(colony_id),
            empire_id: Set(empire_id),
            design_id: Set(design_id.to_string()),
            level: Set(level),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(building)
    }

    /// Inserts an outstanding build request targeting `colony`, with a
    /// placeholder end time an hour out.
    pub async fn insert_build_request(
        &self,
        colony: &colony::Model,
        design_kind: DesignKind,
        design_id: &str,
        count: i32,
        progress: f64,
    ) -> Result<build_request::Model, TestError> {
        let now = Utc::now().naive_utc();

        let build_request = build_request::ActiveModel {
            star_id: Set(colony.star_id),
            planet_index: Set(colony.planet_index),
            colony_id: Set(colony.id),
            empire_id: Set(colony.empire_id),
            existing_building_id: Set(None),
            design_kind: Set(design_kind),
            design_id: Set(design_id.to_string()),
            count: Set(count),
            progress: Set(progress),
            start_time: Set(now),
            end_time: Set(now + Duration::hours(1)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(build_request)
    }
}
