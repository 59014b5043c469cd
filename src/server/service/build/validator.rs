use entity::build_request::DesignKind;
use sea_orm::ConnectionTrait;

use crate::server::{
    catalog::{Design, DesignCatalog},
    data::build_request::BuildRequestRepository,
    error::{build::BuildError, Error},
    model::star::{Colony, Star},
};

/// Decides whether a new build request is admissible given the colony's
/// current buildings and the star's outstanding requests.
///
/// Runs inside the submit transaction so the counts it reads and the insert
/// that follows form one atomic unit.
pub struct BuildValidator<'a, C: ConnectionTrait> {
    db: &'a C,
    catalog: &'a DesignCatalog,
}

impl<'a, C: ConnectionTrait> BuildValidator<'a, C> {
    pub fn new(db: &'a C, catalog: &'a DesignCatalog) -> Self {
        Self { db, catalog }
    }

    /// Checks dependencies and quantity caps for a request targeting
    /// `colony`, reporting the first violation found.
    ///
    /// Quantity caps apply only to brand-new building construction: ships
    /// and upgrades of an existing building (`existing_building_id` set) are
    /// exempt from both.
    pub async fn check(
        &self,
        design: &Design,
        star: &Star,
        colony: &Colony,
        empire_id: i32,
        existing_building_id: Option<i32>,
    ) -> Result<(), Error> {
        for dependency in &design.data().dependencies {
            if !colony.has_building(&dependency.design_id, dependency.level) {
                let required_design = self
                    .catalog
                    .get(DesignKind::Building, &dependency.design_id)
                    .map(|d| d.display_name().to_string())
                    .unwrap_or_else(|| dependency.design_id.clone());

                return Err(BuildError::DependencyNotMet {
                    design: design.display_name().to_string(),
                    required_design,
                    level: dependency.level,
                }
                .into());
            }
        }

        let Some(building_design) = design.as_building() else {
            return Ok(());
        };
        if existing_building_id.is_some() {
            return Ok(());
        }

        if building_design.max_per_colony > 0 {
            let in_colony = colony.count_buildings(&building_design.data.id)
                + star.count_build_requests(colony.id(), &building_design.data.id);

            if in_colony as i64 >= building_design.max_per_colony {
                return Err(BuildError::MaxPerColonyReached {
                    design: design.display_name().to_string(),
                }
                .into());
            }
        }

        if building_design.max_per_empire > 0 {
            let across_empire = BuildRequestRepository::new(self.db)
                .count_design_across_empire(empire_id, &building_design.data.id)
                .await?;

            if across_empire as i64 >= building_design.max_per_empire {
                return Err(BuildError::MaxPerEmpireReached {
                    design: design.display_name().to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
