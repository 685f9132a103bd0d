//! Loads plans and withdrawal history and runs the eligibility rule.
//!
//! Fetching is async and may fail; evaluation itself is the pure
//! [`assist_core::eligibility::evaluate`].

use std::collections::HashMap;

use assist_core::eligibility::{self, EligibilityResult, WithdrawalEvent};
use assist_core::types::{Date, DbId};
use assist_db::models::distribution_plan::DistributionPlan;
use assist_db::repositories::{DistributionPlanRepo, WithdrawalRepo};
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

/// Eligibility of one beneficiary, with the plan details shown alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEligibility {
    pub basket_type: Option<String>,
    pub periodicity: Option<String>,
    pub last_withdrawal_date: Option<Date>,
    #[serde(flatten)]
    pub eligibility: EligibilityResult,
}

/// Evaluate one beneficiary from already-loaded data.
pub fn assess(
    plan: Option<&DistributionPlan>,
    history: &[WithdrawalEvent],
    today: Date,
) -> PlanEligibility {
    let eligibility_plan = plan.map(DistributionPlan::to_eligibility_plan);
    PlanEligibility {
        basket_type: plan.and_then(|p| p.basket_type.clone()),
        periodicity: plan.and_then(|p| p.periodicity.clone()),
        last_withdrawal_date: eligibility::most_recent(history).map(|w| w.date),
        eligibility: eligibility::evaluate(eligibility_plan.as_ref(), history, today),
    }
}

/// Load and evaluate a single beneficiary.
///
/// Both reads run on `conn`, so inside a transaction they see the same
/// snapshot as any write that follows.
pub async fn evaluate_one(
    conn: &mut PgConnection,
    beneficiary_id: DbId,
    today: Date,
) -> Result<PlanEligibility, sqlx::Error> {
    let plan = DistributionPlanRepo::find_by_beneficiary(&mut *conn, beneficiary_id).await?;
    let history: Vec<WithdrawalEvent> = WithdrawalRepo::list_for_beneficiary(&mut *conn, beneficiary_id)
        .await?
        .iter()
        .map(|w| w.to_event())
        .collect();
    Ok(assess(plan.as_ref(), &history, today))
}

/// Load and evaluate several beneficiaries with two queries.
///
/// Every requested id gets an entry; ids without a plan or history come
/// back eligible.
pub async fn evaluate_many(
    pool: &PgPool,
    beneficiary_ids: &[DbId],
    today: Date,
) -> Result<HashMap<DbId, PlanEligibility>, sqlx::Error> {
    if beneficiary_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let plans: HashMap<DbId, DistributionPlan> =
        DistributionPlanRepo::list_for_beneficiaries(pool, beneficiary_ids)
            .await?
            .into_iter()
            .map(|p| (p.beneficiary_id, p))
            .collect();

    let mut histories: HashMap<DbId, Vec<WithdrawalEvent>> = HashMap::new();
    for w in WithdrawalRepo::list_for_beneficiaries(pool, beneficiary_ids).await? {
        histories
            .entry(w.beneficiary_id)
            .or_default()
            .push(w.to_event());
    }

    Ok(beneficiary_ids
        .iter()
        .map(|id| {
            let history = histories.get(id).map(Vec::as_slice).unwrap_or_default();
            (*id, assess(plans.get(id), history, today))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn date(y: i32, m: u32, d: u32) -> Date {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan_row(periodicity: Option<&str>) -> DistributionPlan {
        DistributionPlan {
            id: 1,
            beneficiary_id: 10,
            basket_type: Some("basica".to_string()),
            periodicity: periodicity.map(str::to_string),
            start_date: None,
            assistance_analysis: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn no_plan_reports_last_withdrawal_but_stays_eligible() {
        let history = [WithdrawalEvent::on(date(2024, 3, 14))];
        let result = assess(None, &history, date(2024, 3, 15));
        assert!(result.eligibility.eligible);
        assert_eq!(result.last_withdrawal_date, Some(date(2024, 3, 14)));
        assert_eq!(result.periodicity, None);
    }

    #[test]
    fn stored_text_is_parsed_for_evaluation() {
        let plan = plan_row(Some("Mensal"));
        let history = [WithdrawalEvent::on(date(2024, 3, 5))];
        let result = assess(Some(&plan), &history, date(2024, 3, 15));
        assert!(!result.eligibility.eligible);
        assert_eq!(result.eligibility.next_eligible_date, Some(date(2024, 4, 5)));
        assert_eq!(result.periodicity.as_deref(), Some("Mensal"));
        assert_eq!(result.basket_type.as_deref(), Some("basica"));
    }

    #[test]
    fn legacy_garbage_periodicity_is_eligible() {
        let plan = plan_row(Some("de vez em quando"));
        let history = [WithdrawalEvent::on(date(2024, 3, 14))];
        assert!(assess(Some(&plan), &history, date(2024, 3, 15)).eligibility.eligible);
    }

    #[test]
    fn flattened_serialization() {
        let result = assess(None, &[], date(2024, 3, 15));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["eligible"], true);
        assert!(json["next_eligible_date"].is_null());
        assert!(json.get("eligibility").is_none());
    }
}
