//! Distribution plan ("acompanhamento assistencial") model.

use assist_core::eligibility;
use assist_core::periodicity::Periodicity;
use assist_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `distribution_plans` table.
///
/// `periodicity` is stored as free text; it is parsed permissively only
/// when the plan is evaluated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DistributionPlan {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub basket_type: Option<String>,
    pub periodicity: Option<String>,
    pub start_date: Option<Date>,
    pub assistance_analysis: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DistributionPlan {
    /// The subset of the plan the eligibility rule reads.
    pub fn to_eligibility_plan(&self) -> eligibility::DistributionPlan {
        eligibility::DistributionPlan {
            basket_type: self.basket_type.clone(),
            periodicity: Periodicity::parse(self.periodicity.as_deref()),
            start_date: self.start_date,
        }
    }
}

/// DTO for creating or replacing a beneficiary's plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaveDistributionPlan {
    pub basket_type: Option<String>,
    pub periodicity: Option<String>,
    pub start_date: Option<Date>,
    pub assistance_analysis: Option<String>,
}
