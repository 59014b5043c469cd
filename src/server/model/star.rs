//! In-memory aggregate of a star, its colonies, and their outstanding build
//! requests. Loaded per-transaction by
//! [`crate::server::data::star::StarRepository`]; a star is the unit of
//! transactional locking, so every build queue mutation for a colony goes
//! through its star.

use entity::{build_request, building, colony, star};

/// A colony together with its buildings.
pub struct Colony {
    pub model: colony::Model,
    pub buildings: Vec<building::Model>,
}

impl Colony {
    pub fn id(&self) -> i32 {
        self.model.id
    }

    /// Whether the colony has a building of the given design at or above the
    /// given level. This is the dependency predicate.
    pub fn has_building(&self, design_id: &str, min_level: i32) -> bool {
        self.buildings
            .iter()
            .any(|b| b.design_id == design_id && b.level >= min_level)
    }

    /// Number of buildings of the given design in this colony.
    pub fn count_buildings(&self, design_id: &str) -> usize {
        self.buildings
            .iter()
            .filter(|b| b.design_id == design_id)
            .count()
    }
}

/// A star with its colonies and every outstanding build request for them.
pub struct Star {
    pub model: star::Model,
    pub colonies: Vec<Colony>,
    pub build_requests: Vec<build_request::Model>,
}

impl Star {
    pub fn id(&self) -> i32 {
        self.model.id
    }

    pub fn colony(&self, colony_id: i32) -> Option<&Colony> {
        self.colonies.iter().find(|c| c.id() == colony_id)
    }

    /// Number of outstanding build requests for the given design targeting
    /// the given colony.
    pub fn count_build_requests(&self, colony_id: i32, design_id: &str) -> usize {
        self.build_requests
            .iter()
            .filter(|r| r.colony_id == colony_id && r.design_id == design_id)
            .count()
    }

    /// Removes a build request from the outstanding set. A no-op when the
    /// request is not present.
    pub fn remove_build_request(&mut self, build_request_id: i32) {
        self.build_requests.retain(|r| r.id != build_request_id);
    }
}
