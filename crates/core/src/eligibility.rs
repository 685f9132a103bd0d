//! Basket withdrawal eligibility.
//!
//! Decides whether a beneficiary may withdraw another basket today, given
//! their distribution plan and withdrawal history. The rule fails open:
//! a missing plan, a missing or unknown periodicity and an empty history
//! all resolve to "eligible". Nothing here returns an error.
//!
//! When a withdrawal is blocked, the reported next date is always one
//! calendar month after the last withdrawal, whatever the tier that caused
//! the block. A weekly plan is therefore blocked for 7 days but told to
//! come back in a month, and a bimonthly plan is told to come back in a
//! month while staying blocked for 60 days. Product has not yet decided
//! between this and "last withdrawal + gap".

use chrono::Months;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::periodicity::Periodicity;
use crate::types::Date;

/// Display format for dates surfaced in the block reason.
pub const REASON_DATE_FORMAT: &str = "%d/%m/%Y";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A beneficiary's distribution plan, as needed for evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionPlan {
    /// Free-text basket category (e.g. "basica", "especial").
    pub basket_type: Option<String>,
    pub periodicity: Periodicity,
    /// Date distribution began. Informational only.
    pub start_date: Option<Date>,
}

/// A basket handed to a beneficiary on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalEvent {
    pub date: Date,
    pub note: Option<String>,
}

impl WithdrawalEvent {
    pub fn on(date: Date) -> Self {
        Self { date, note: None }
    }
}

/// Outcome of an eligibility check. Computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityResult {
    pub eligible: bool,
    pub next_eligible_date: Option<Date>,
    /// Empty when eligible; names `next_eligible_date` when blocked.
    pub reason: String,
}

impl EligibilityResult {
    fn eligible() -> Self {
        Self {
            eligible: true,
            next_eligible_date: None,
            reason: String::new(),
        }
    }

    fn blocked_until(next: Date) -> Self {
        Self {
            eligible: false,
            next_eligible_date: Some(next),
            reason: blocked_reason(next),
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate whether a new withdrawal is permitted on `today`.
///
/// `withdrawals` is the full history for one beneficiary, in any order.
pub fn evaluate(
    plan: Option<&DistributionPlan>,
    withdrawals: &[WithdrawalEvent],
    today: Date,
) -> EligibilityResult {
    let Some(required_gap) = plan.and_then(|p| p.periodicity.required_gap_days()) else {
        return EligibilityResult::eligible();
    };

    let Some(last) = most_recent(withdrawals) else {
        return EligibilityResult::eligible();
    };

    let days_since_last = today.signed_duration_since(last.date).num_days();
    if days_since_last >= required_gap {
        EligibilityResult::eligible()
    } else {
        EligibilityResult::blocked_until(next_eligible_date(last.date))
    }
}

/// [`evaluate`] against the date supplied by `clock`.
pub fn evaluate_at(
    plan: Option<&DistributionPlan>,
    withdrawals: &[WithdrawalEvent],
    clock: &dyn Clock,
) -> EligibilityResult {
    evaluate(plan, withdrawals, clock.today())
}

/// The withdrawal with the latest date. Any one of several same-day
/// entries may be returned.
pub fn most_recent(withdrawals: &[WithdrawalEvent]) -> Option<&WithdrawalEvent> {
    withdrawals.iter().max_by_key(|w| w.date)
}

/// One calendar month after `last`, clamped to the end of shorter months
/// (31 January becomes 28 or 29 February).
pub fn next_eligible_date(last: Date) -> Date {
    last.checked_add_months(Months::new(1)).unwrap_or(Date::MAX)
}

/// Message shown when a withdrawal is blocked.
pub fn blocked_reason(next: Date) -> String {
    format!(
        "Próxima retirada permitida em {}",
        next.format(REASON_DATE_FORMAT)
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
