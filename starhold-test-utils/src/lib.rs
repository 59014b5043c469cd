//! Shared helpers for starhold's unit and integration tests: an in-memory
//! SQLite setup, a builder for seeding game state, and the fixture design
//! catalog the tests run against.

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::GameBuilder;
pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures, test_setup_with_game_tables, test_setup_with_tables, GameBuilder, TestError,
        TestSetup,
    };
}
