use entity::{build_request, building, colony};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::star::{Colony, Star};

pub struct StarRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads a star with its colonies, their buildings, and every
    /// outstanding build request for the star, ordered by completion time.
    pub async fn get_star(&self, star_id: i32) -> Result<Option<Star>, DbErr> {
        let Some(star) = entity::prelude::Star::find_by_id(star_id).one(self.db).await? else {
            return Ok(None);
        };

        let colony_models = entity::prelude::Colony::find()
            .filter(colony::Column::StarId.eq(star_id))
            .all(self.db)
            .await?;

        let colony_ids: Vec<i32> = colony_models.iter().map(|c| c.id).collect();
        let mut buildings = entity::prelude::Building::find()
            .filter(building::Column::ColonyId.is_in(colony_ids))
            .all(self.db)
            .await?;

        let build_requests = entity::prelude::BuildRequest::find()
            .filter(build_request::Column::StarId.eq(star_id))
            .order_by_asc(build_request::Column::EndTime)
            .all(self.db)
            .await?;

        let colonies = colony_models
            .into_iter()
            .map(|model| {
                let (mine, rest): (Vec<_>, Vec<_>) =
                    buildings.drain(..).partition(|b| b.colony_id == model.id);
                buildings = rest;

                Colony {
                    model,
                    buildings: mine,
                }
            })
            .collect();

        Ok(Some(Star {
            model: star,
            colonies,
            build_requests,
        }))
    }
}

#[cfg(test)]
mod tests {

    mod get_star {
        use entity::build_request::DesignKind;
        use starhold_test_utils::prelude::*;

        use crate::server::data::star::StarRepository;

        /// Expect the full aggregate with buildings attached to their colony
        #[tokio::test]
        async fn assembles_colonies_and_requests() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;
            let empire = test.game().insert_empire("Terran", 1000.0).await?;
            let star = test.game().insert_star("Alpha").await?;
            let first = test.game().insert_colony(star.id, 0, empire.id).await?;
            let second = test.game().insert_colony(star.id, 1, empire.id).await?;
            test.game()
                .insert_building(first.id, empire.id, fixtures::MINE, 1)
                .await?;
            test.game()
                .insert_building(second.id, empire.id, fixtures::SHIPYARD, 2)
                .await?;
            test.game()
                .insert_build_request(&first, DesignKind::Building, fixtures::MINE, 1, 0.0)
                .await?;

            let star_repository = StarRepository::new(&test.state.db);
            let loaded = star_repository.get_star(star.id).await?.unwrap();

            assert_eq!(loaded.id(), star.id);
            assert_eq!(loaded.colonies.len(), 2);
            assert_eq!(loaded.build_requests.len(), 1);

            let first_colony = loaded.colony(first.id).unwrap();
            assert_eq!(first_colony.count_buildings(fixtures::MINE), 1);
            assert_eq!(first_colony.count_buildings(fixtures::SHIPYARD), 0);

            let second_colony = loaded.colony(second.id).unwrap();
            assert!(second_colony.has_building(fixtures::SHIPYARD, 2));
            assert!(!second_colony.has_building(fixtures::SHIPYARD, 3));

            Ok(())
        }

        /// Expect None for a star that does not exist
        #[tokio::test]
        async fn returns_none_for_unknown_star() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;

            let star_repository = StarRepository::new(&test.state.db);
            let loaded = star_repository.get_star(42).await?;

            assert!(loaded.is_none());

            Ok(())
        }

        /// Expect build requests from another star to stay out of the aggregate
        #[tokio::test]
        async fn excludes_other_stars() -> Result<(), TestError> {
            let test = test_setup_with_game_tables!()?;
            let empire = test.game().insert_empire("Terran", 1000.0).await?;
            let star = test.game().insert_star("Alpha").await?;
            let other_star = test.game().insert_star("Beta").await?;
            test.game().insert_colony(star.id, 0, empire.id).await?;
            let other_colony = test.game().insert_colony(other_star.id, 0, empire.id).await?;
            test.game()
                .insert_build_request(&other_colony, DesignKind::Building, fixtures::MINE, 1, 0.0)
                .await?;

            let star_repository = StarRepository::new(&test.state.db);
            let loaded = star_repository.get_star(star.id).await?.unwrap();

            assert!(loaded.build_requests.is_empty());

            Ok(())
        }
    }
}
