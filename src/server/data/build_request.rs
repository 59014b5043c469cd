use chrono::NaiveDateTime;
use entity::{build_request, build_request::DesignKind, building};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Column values for a new `build_request` row. The id is generated by the
/// store and assigned on insert.
pub struct NewBuildRequestRow {
    pub star_id: i32,
    pub planet_index: i32,
    pub colony_id: i32,
    pub empire_id: i32,
    pub existing_building_id: Option<i32>,
    pub design_kind: DesignKind,
    pub design_id: String,
    pub count: i32,
    pub progress: f64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

pub struct BuildRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildRequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, build_request_id: i32) -> Result<Option<build_request::Model>, DbErr> {
        entity::prelude::BuildRequest::find_by_id(build_request_id)
            .one(self.db)
            .await
    }

    /// Inserts a new build request, returning the persisted row with its
    /// generated identifier.
    pub async fn create(&self, row: NewBuildRequestRow) -> Result<build_request::Model, DbErr> {
        let request = build_request::ActiveModel {
            star_id: ActiveValue::Set(row.star_id),
            planet_index: ActiveValue::Set(row.planet_index),
            colony_id: ActiveValue::Set(row.colony_id),
            empire_id: ActiveValue::Set(row.empire_id),
            existing_building_id: ActiveValue::Set(row.existing_building_id),
            design_kind: ActiveValue::Set(row.design_kind),
            design_id: ActiveValue::Set(row.design_id),
            count: ActiveValue::Set(row.count),
            progress: ActiveValue::Set(row.progress),
            start_time: ActiveValue::Set(row.start_time),
            end_time: ActiveValue::Set(row.end_time),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    /// Deletes a build request by id.
    ///
    /// Returns Ok regardless of the row existing; check
    /// [`DeleteResult::rows_affected`] to distinguish.
    pub async fn delete(&self, build_request_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BuildRequest::delete_by_id(build_request_id)
            .exec(self.db)
            .await
    }

    /// Updates a request's progress and completion time.
    pub async fn update_progress(
        &self,
        request: build_request::Model,
        progress: f64,
        end_time: NaiveDateTime,
    ) -> Result<build_request::Model, DbErr> {
        let mut request: build_request::ActiveModel = request.into();
        request.progress = ActiveValue::Set(progress);
        request.end_time = ActiveValue::Set(end_time);

        request.update(self.db).await
    }

    /// Counts buildings plus outstanding build requests of a design across
    /// the whole empire.
    ///
    /// This spans stars outside any loaded aggregate, so it is an explicit
    /// store query rather than an in-memory walk.
    pub async fn count_design_across_empire(
        &self,
        empire_id: i32,
        design_id: &str,
    ) -> Result<u64, DbErr> {
        let buildings = entity::prelude::Building::find()
            .filter(building::Column::EmpireId.eq(empire_id))
            .filter(building::Column::DesignId.eq(design_id))
            .count(self.db)
            .await?;

        let requests = entity::prelude::BuildRequest::find()
            .filter(build_request::Column::EmpireId.eq(empire_id))
            .filter(build_request::Column::DesignId.eq(design_id))
            .count(self.db)
            .await?;

        Ok(buildings + requests)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use entity::build_request::DesignKind;

    use crate::server::data::build_request::NewBuildRequestRow;

    fn row(colony: &entity::colony::Model, design_id: &str, count: i32) -> NewBuildRequestRow {
        let now = Utc::now().naive_utc();

        NewBuildRequestRow {
            star_id: colony.star_id,
            planet_index: colony.planet_index,
            colony_id: colony.id,
            empire_id: colony.empire_id,
            existing_building_id: None,
            design_kind: DesignKind::Building,
            design_id: design_id.to_string(),
            count,
            progress: 0.0,
            start_time: now,
            end_time: now,
        }
    }

    mod create {
        use sea_orm::EntityTrait;
        use starhold_test_utils::prelude::*;

        use super::row;
        use crate::server::data::build_request::BuildRequestRepository;

        /// Expect the generated id to be assigned on insert
        #[tokio::test]
        async fn assigns_generated_id() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;
            let empire = test.game().insert_empire("Terran", 0.0).await?;
            let star = test.game().insert_star("Alpha").await?;
            let colony = test.game().insert_colony(star.id, 0, empire.id).await?;

            let build_request_repository = BuildRequestRepository::new(&test.state.db);
            let model = build_request_repository
                .create(row(&colony, fixtures::MINE, 3))
                .await?;

            assert!(model.id > 0);

            let persisted = entity::prelude::BuildRequest::find_by_id(model.id)
                .one(&test.state.db)
                .await?
                .unwrap();
            assert_eq!(persisted.design_id, fixtures::MINE);
            assert_eq!(persisted.count, 3);

            Ok(())
        }
    }

    mod delete {
        use starhold_test_utils::prelude::*;

        use super::row;
        use crate::server::data::build_request::BuildRequestRepository;

        /// Expect one row affected when deleting an existing request
        #[tokio::test]
        async fn deletes_existing_request() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;
            let empire = test.game().insert_empire("Terran", 0.0).await?;
            let star = test.game().insert_star("Alpha").await?;
            let colony = test.game().insert_colony(star.id, 0, empire.id).await?;

            let build_request_repository = BuildRequestRepository::new(&test.state.db);
            let model = build_request_repository
                .create(row(&colony, fixtures::MINE, 1))
                .await?;

            let result = build_request_repository.delete(model.id).await?;

            assert_eq!(result.rows_affected, 1);

            Ok(())
        }

        /// Expect zero rows affected, not an error, for an absent id
        #[tokio::test]
        async fn is_idempotent_for_missing_request() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;

            let build_request_repository = BuildRequestRepository::new(&test.state.db);
            let result = build_request_repository.delete(999).await?;

            assert_eq!(result.rows_affected, 0);

            Ok(())
        }
    }

    mod count_design_across_empire {
        use entity::build_request::DesignKind;
        use starhold_test_utils::prelude::*;

        use crate::server::data::build_request::BuildRequestRepository;

        /// Expect buildings and outstanding requests from every star to count
        #[tokio::test]
        async fn spans_stars_and_requests() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;
            let empire = test.game().insert_empire("Terran", 0.0).await?;
            let other_empire = test.game().insert_empire("Krell", 0.0).await?;
            let alpha = test.game().insert_star("Alpha").await?;
            let beta = test.game().insert_star("Beta").await?;
            let home = test.game().insert_colony(alpha.id, 0, empire.id).await?;
            let frontier = test.game().insert_colony(beta.id, 0, empire.id).await?;
            let foreign = test.game().insert_colony(beta.id, 1, other_empire.id).await?;

            test.game()
                .insert_building(home.id, empire.id, fixtures::SENSOR_ARRAY, 1)
                .await?;
            test.game()
                .insert_build_request(&frontier, DesignKind::Building, fixtures::SENSOR_ARRAY, 1, 0.0)
                .await?;
            // Another empire's assets must not count
            test.game()
                .insert_building(foreign.id, other_empire.id, fixtures::SENSOR_ARRAY, 1)
                .await?;

            let build_request_repository = BuildRequestRepository::new(&test.state.db);
            let count = build_request_repository
                .count_design_across_empire(empire.id, fixtures::SENSOR_ARRAY)
                .await?;

            assert_eq!(count, 2);

            Ok(())
        }

        /// Expect zero for a design the empire has never built
        #[tokio::test]
        async fn returns_zero_when_absent() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;
            let empire = test.game().insert_empire("Terran", 0.0).await?;

            let build_request_repository = BuildRequestRepository::new(&test.state.db);
            let count = build_request_repository
                .count_design_across_empire(empire.id, fixtures::SHIPYARD)
                .await?;

            assert_eq!(count, 0);

            Ok(())
        }
    }
}
