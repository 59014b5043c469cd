use chrono::Utc;
use entity::{build_request, build_request::DesignKind};
use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, IsolationLevel, TransactionTrait,
};

use crate::server::{
    catalog::DesignCatalog,
    data::{
        build_request::{BuildRequestRepository, NewBuildRequestRow},
        empire::{CashAudit, EmpireRepository},
        star::StarRepository,
    },
    error::{build::BuildError, Error},
    model::star::Star,
    service::build::{progress, validator::BuildValidator},
};

/// A build order as submitted by a player, before validation and persistence.
pub struct NewBuildRequest {
    pub star_id: i32,
    pub colony_id: i32,
    pub empire_id: i32,
    pub design_kind: DesignKind,
    pub design_id: String,
    pub count: i32,
    /// Set when upgrading an existing building; exempts the request from
    /// quantity caps.
    pub existing_building_id: Option<i32>,
}

/// Orchestrates validation, persistence, cancellation, and acceleration of
/// build requests. Every operation is one atomic transaction; no partial
/// state is ever committed.
pub struct BuildQueueService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a DesignCatalog,
}

impl<'a> BuildQueueService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a DesignCatalog) -> Self {
        Self { db, catalog }
    }

    /// Validates and persists a new build request, returning the stored row
    /// with its generated identifier.
    ///
    /// The count is clamped to [1, 5000] silently. Validation failures abort
    /// the transaction and carry a specific error code naming the offending
    /// design or limit.
    pub async fn submit(&self, request: NewBuildRequest) -> Result<build_request::Model, Error> {
        let txn = self.begin_submit().await?;

        let star = StarRepository::new(&txn)
            .get_star(request.star_id)
            .await?
            .ok_or(BuildError::StarNotFound(request.star_id))?;
        let colony = star
            .colony(request.colony_id)
            .ok_or(BuildError::ColonyNotFound(request.colony_id))?;

        let design = self
            .catalog
            .get(request.design_kind, &request.design_id)
            .ok_or_else(|| BuildError::DesignNotFound(request.design_id.clone()))?;

        BuildValidator::new(&txn, self.catalog)
            .check(
                design,
                &star,
                colony,
                request.empire_id,
                request.existing_building_id,
            )
            .await?;

        let count = progress::clamp_count(request.count);
        let now = Utc::now().naive_utc();
        let end_time = progress::completion_time(now, design.data().cost.build_seconds, count, 0.0);

        let model = BuildRequestRepository::new(&txn)
            .create(NewBuildRequestRow {
                star_id: star.id(),
                planet_index: colony.model.planet_index,
                colony_id: colony.id(),
                empire_id: request.empire_id,
                existing_building_id: request.existing_building_id,
                design_kind: request.design_kind,
                design_id: request.design_id,
                count,
                progress: 0.0,
                start_time: now,
                end_time,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            build_request_id = model.id,
            colony_id = model.colony_id,
            design_id = %model.design_id,
            count = model.count,
            "queued build request"
        );

        Ok(model)
    }

    /// Removes a build request from the star's outstanding set and deletes
    /// its row. Idempotent: stopping an already-removed request is a no-op.
    pub async fn stop(&self, star: &mut Star, build_request_id: i32) -> Result<(), Error> {
        star.remove_build_request(build_request_id);

        let result = BuildRequestRepository::new(self.db)
            .delete(build_request_id)
            .await?;

        if result.rows_affected == 0 {
            tracing::debug!(build_request_id, "stop for an already-removed build request");
        } else {
            tracing::info!(build_request_id, "stopped build request");
        }

        Ok(())
    }

    /// Instantly completes `amount` (a fraction in [0, 1]) of the request's
    /// *remaining* progress, charging the empire's cash ledger.
    ///
    /// The withdrawal and the progress mutation are all-or-nothing: on
    /// insufficient funds the transaction rolls back, progress is unchanged,
    /// and no audit record is appended.
    pub async fn accelerate(
        &self,
        build_request_id: i32,
        amount: f64,
    ) -> Result<build_request::Model, Error> {
        let amount = amount.clamp(0.0, 1.0);

        let txn = self.db.begin().await?;

        let request = BuildRequestRepository::new(&txn)
            .get(build_request_id)
            .await?
            .ok_or(BuildError::BuildRequestNotFound(build_request_id))?;

        let design = self
            .catalog
            .get(request.design_kind, &request.design_id)
            .ok_or_else(|| BuildError::DesignNotFound(request.design_id.clone()))?;

        let delta = progress::acceleration_delta(request.progress, amount);
        let cost = progress::acceleration_cost(
            design.data().cost.minerals,
            request.count,
            request.progress,
            amount,
        );

        let withdrawn = EmpireRepository::new(&txn)
            .withdraw(
                request.empire_id,
                cost,
                CashAudit {
                    design_id: request.design_id.clone(),
                    build_count: request.count,
                    accelerate_amount: amount,
                },
            )
            .await?;

        if !withdrawn {
            return Err(BuildError::InsufficientCash { required: cost }.into());
        }

        let new_progress = request.progress + delta;
        let end_time = progress::completion_time(
            Utc::now().naive_utc(),
            design.data().cost.build_seconds,
            request.count,
            new_progress,
        );

        let updated = BuildRequestRepository::new(&txn)
            .update_progress(request, new_progress, end_time)
            .await?;

        txn.commit().await?;

        tracing::info!(
            build_request_id = updated.id,
            progress = updated.progress,
            cost,
            "accelerated build request"
        );

        Ok(updated)
    }

    /// Opens the submit transaction.
    ///
    /// The cap checks are count-then-insert, so on Postgres they need
    /// serializable isolation to keep two concurrent submissions from both
    /// passing a cap check and jointly exceeding it. SQLite writers are
    /// already serialized.
    async fn begin_submit(&self) -> Result<DatabaseTransaction, DbErr> {
        match self.db.get_database_backend() {
            DbBackend::Postgres => {
                self.db
                    .begin_with_config(Some(IsolationLevel::Serializable), None)
                    .await
            }
            _ => self.db.begin().await,
        }
    }
}
