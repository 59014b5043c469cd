pub use sea_orm_migration::prelude::*;

mod m20260801_000001_empire;
mod m20260801_000002_star;
mod m20260801_000003_colony;
mod m20260801_000004_building;
mod m20260801_000005_build_request;
mod m20260801_000006_cash_audit_record;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_empire::Migration),
            Box::new(m20260801_000002_star::Migration),
            Box::new(m20260801_000003_colony::Migration),
            Box::new(m20260801_000004_building::Migration),
            Box::new(m20260801_000005_build_request::Migration),
            Box::new(m20260801_000006_cash_audit_record::Migration),
        ]
    }
}
