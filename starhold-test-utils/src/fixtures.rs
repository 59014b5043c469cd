//! Design ids and the catalog JSON the tests run against.

pub const MINE: &str = "mine";
pub const REFINERY: &str = "refinery";
pub const SHIPYARD: &str = "shipyard";
pub const SENSOR_ARRAY: &str = "sensor_array";
pub const FIGHTER: &str = "fighter";
pub const COLONY_SHIP: &str = "colony_ship";

/// A small catalog covering the interesting cases: an uncapped building, a
/// per-colony cap, a per-empire cap, a leveled dependency, and ships with
/// and without dependencies.
pub const TEST_CATALOG_JSON: &str = r#"{
    "designs": [
        {
            "kind": "building",
            "id": "mine",
            "display_name": "Mine",
            "cost": { "minerals": 20.0, "build_seconds": 300.0 }
        },
        {
            "kind": "building",
            "id": "refinery",
            "display_name": "Refinery",
            "cost": { "minerals": 50.0, "build_seconds": 450.0 },
            "dependencies": [
                { "design_id": "mine", "level": 2 }
            ]
        },
        {
            "kind": "building",
            "id": "shipyard",
            "display_name": "Shipyard",
            "cost": { "minerals": 100.0, "build_seconds": 600.0 },
            "max_per_colony": 1
        },
        {
            "kind": "building",
            "id": "sensor_array",
            "display_name": "Sensor Array",
            "cost": { "minerals": 75.0, "build_seconds": 300.0 },
            "max_per_empire": 2
        },
        {
            "kind": "ship",
            "id": "fighter",
            "display_name": "Fighter",
            "cost": { "minerals": 20.0, "build_seconds": 60.0 }
        },
        {
            "kind": "ship",
            "id": "colony_ship",
            "display_name": "Colony Ship",
            "cost": { "minerals": 400.0, "build_seconds": 900.0 },
            "dependencies": [
                { "design_id": "shipyard", "level": 1 }
            ]
        }
    ]
}"#;
