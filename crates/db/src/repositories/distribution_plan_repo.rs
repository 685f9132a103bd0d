//! Repository for the `distribution_plans` table.

use assist_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::distribution_plan::{DistributionPlan, SaveDistributionPlan};

/// Column list for distribution_plans queries.
const COLUMNS: &str = "id, beneficiary_id, basket_type, periodicity, start_date, \
    assistance_analysis, created_at, updated_at";

/// Provides read and upsert operations for distribution plans.
pub struct DistributionPlanRepo;

impl DistributionPlanRepo {
    /// Find the plan for a beneficiary, if one has been configured.
    pub async fn find_by_beneficiary(
        executor: impl PgExecutor<'_>,
        beneficiary_id: DbId,
    ) -> Result<Option<DistributionPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM distribution_plans WHERE beneficiary_id = $1");
        sqlx::query_as::<_, DistributionPlan>(&query)
            .bind(beneficiary_id)
            .fetch_optional(executor)
            .await
    }

    /// Plans for a set of beneficiaries. Beneficiaries without a plan are
    /// simply absent from the result.
    pub async fn list_for_beneficiaries(
        pool: &PgPool,
        beneficiary_ids: &[DbId],
    ) -> Result<Vec<DistributionPlan>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM distribution_plans WHERE beneficiary_id = ANY($1)"
        );
        sqlx::query_as::<_, DistributionPlan>(&query)
            .bind(beneficiary_ids)
            .fetch_all(pool)
            .await
    }

    /// Create or replace a beneficiary's plan.
    ///
    /// Uses `ON CONFLICT (beneficiary_id) DO UPDATE` to guarantee one row per
    /// beneficiary. `periodicity` must already be in its storage form.
    pub async fn upsert(
        pool: &PgPool,
        beneficiary_id: DbId,
        input: &SaveDistributionPlan,
    ) -> Result<DistributionPlan, sqlx::Error> {
        let query = format!(
            "INSERT INTO distribution_plans
                (beneficiary_id, basket_type, periodicity, start_date, assistance_analysis)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (beneficiary_id) DO UPDATE
             SET basket_type = EXCLUDED.basket_type,
                 periodicity = EXCLUDED.periodicity,
                 start_date = EXCLUDED.start_date,
                 assistance_analysis = EXCLUDED.assistance_analysis,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DistributionPlan>(&query)
            .bind(beneficiary_id)
            .bind(&input.basket_type)
            .bind(&input.periodicity)
            .bind(input.start_date)
            .bind(&input.assistance_analysis)
            .fetch_one(pool)
            .await
    }
}
