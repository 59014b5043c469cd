use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{builder::GameBuilder, error::TestError};

/// Application state as the database-facing tests see it.
pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    /// Connects to a fresh in-memory SQLite database with no tables created.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns a [`GameBuilder`] for seeding rows into this setup's database.
    pub fn game(&self) -> GameBuilder<'_> {
        GameBuilder::new(&self.state.db)
    }
}

/// Creates a [`TestSetup`], with tables for any listed entities.
#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::setup::TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::setup::TestSetup::new().await?;

            let schema = ::sea_orm::Schema::new(::sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestSetup`] with every game table.
#[macro_export]
macro_rules! test_setup_with_game_tables {
    () => {
        $crate::test_setup_with_tables!(
            ::entity::prelude::Empire,
            ::entity::prelude::Star,
            ::entity::prelude::Colony,
            ::entity::prelude::Building,
            ::entity::prelude::BuildRequest,
            ::entity::prelude::CashAuditRecord,
        )
    };
}
