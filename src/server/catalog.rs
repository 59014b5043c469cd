//! The immutable design catalog.
//!
//! Designs describe everything buildable in the game: their resource cost,
//! the buildings a colony must already have before construction can start,
//! and (for buildings) per-colony and per-empire quantity caps. The catalog
//! is loaded once at startup from a JSON file and shared read-only through
//! [`crate::server::model::app::AppState`]; it is never mutated afterwards.

use std::collections::HashMap;

use entity::build_request::DesignKind;
use serde::Deserialize;

/// Resource cost of building one unit of a design.
#[derive(Clone, Debug, Deserialize)]
pub struct BuildCost {
    pub minerals: f64,
    /// Wall-clock seconds to build one unit at the normal rate
    pub build_seconds: f64,
}

/// A building the colony must already have before this design can be built.
#[derive(Clone, Debug, Deserialize)]
pub struct Dependency {
    pub design_id: String,
    /// Minimum level of the required building
    pub level: i32,
}

/// Payload common to every design kind.
#[derive(Clone, Debug, Deserialize)]
pub struct DesignData {
    pub id: String,
    pub display_name: String,
    pub cost: BuildCost,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

/// A buildable building, with the quantity caps ships don't have.
#[derive(Clone, Debug, Deserialize)]
pub struct BuildingDesign {
    #[serde(flatten)]
    pub data: DesignData,
    /// Maximum per colony, 0 = unlimited
    #[serde(default)]
    pub max_per_colony: i64,
    /// Maximum across the whole empire, 0 = unlimited
    #[serde(default)]
    pub max_per_empire: i64,
}

/// A buildable ship.
#[derive(Clone, Debug, Deserialize)]
pub struct ShipDesign {
    #[serde(flatten)]
    pub data: DesignData,
}

/// A catalog entry, tagged by kind so building-only fields stay on buildings.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Design {
    Building(BuildingDesign),
    Ship(ShipDesign),
}

impl Design {
    pub fn kind(&self) -> DesignKind {
        match self {
            Self::Building(_) => DesignKind::Building,
            Self::Ship(_) => DesignKind::Ship,
        }
    }

    pub fn data(&self) -> &DesignData {
        match self {
            Self::Building(building) => &building.data,
            Self::Ship(ship) => &ship.data,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.data().display_name
    }

    /// Returns the building payload when this design is a building.
    pub fn as_building(&self) -> Option<&BuildingDesign> {
        match self {
            Self::Building(building) => Some(building),
            Self::Ship(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    designs: Vec<Design>,
}

/// Read-only lookup of every buildable design, keyed by (kind, id).
pub struct DesignCatalog {
    designs: HashMap<(DesignKind, String), Design>,
}

impl DesignCatalog {
    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let designs = file
            .designs
            .into_iter()
            .map(|design| ((design.kind(), design.data().id.clone()), design))
            .collect();

        Ok(Self { designs })
    }

    pub fn get(&self, kind: DesignKind, design_id: &str) -> Option<&Design> {
        self.designs.get(&(kind, design_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}
