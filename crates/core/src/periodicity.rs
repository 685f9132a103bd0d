//! Basket distribution periodicity.
//!
//! Plans store periodicity as free text. Parsing is total: any value that is
//! not one of the known tiers (including a missing or blank one) collapses to
//! [`Periodicity::Unconstrained`], so callers never have to handle a parse
//! failure when deciding eligibility.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Stored values, as written by the plan form.
pub const PERIODICITY_WEEKLY: &str = "semanal";
pub const PERIODICITY_BIWEEKLY: &str = "quinzenal";
pub const PERIODICITY_MONTHLY: &str = "mensal";
pub const PERIODICITY_BIMONTHLY: &str = "bimestral";
pub const PERIODICITY_SPORADIC: &str = "esporadica";

/// All values accepted when a plan is written.
pub const VALID_PERIODICITIES: &[&str] = &[
    PERIODICITY_WEEKLY,
    PERIODICITY_BIWEEKLY,
    PERIODICITY_MONTHLY,
    PERIODICITY_BIMONTHLY,
    PERIODICITY_SPORADIC,
];

/// Minimum gap, in whole days, between two withdrawals for each tier.
pub const WEEKLY_GAP_DAYS: i64 = 7;
pub const BIWEEKLY_GAP_DAYS: i64 = 15;
pub const MONTHLY_GAP_DAYS: i64 = 30;
pub const BIMONTHLY_GAP_DAYS: i64 = 60;

// ---------------------------------------------------------------------------
// Enum
// ---------------------------------------------------------------------------

/// How often a beneficiary may withdraw a basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    Weekly,
    Biweekly,
    Monthly,
    Bimonthly,
    /// Sporadic, unset or unrecognized. Never blocks a withdrawal.
    #[default]
    Unconstrained,
}

impl Periodicity {
    /// Parse a stored periodicity value.
    ///
    /// Case is ignored and both the stored Portuguese values and their
    /// English names are recognized. Whitespace is not trimmed: a legacy
    /// value such as `" mensal "` is unrecognized and therefore never blocks.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::Unconstrained;
        };
        match raw.to_lowercase().as_str() {
            "semanal" | "weekly" => Self::Weekly,
            "quinzenal" | "biweekly" => Self::Biweekly,
            "mensal" | "monthly" => Self::Monthly,
            "bimestral" | "bimonthly" => Self::Bimonthly,
            _ => Self::Unconstrained,
        }
    }

    /// Minimum number of days between withdrawals, or `None` when unconstrained.
    pub fn required_gap_days(&self) -> Option<i64> {
        match self {
            Self::Weekly => Some(WEEKLY_GAP_DAYS),
            Self::Biweekly => Some(BIWEEKLY_GAP_DAYS),
            Self::Monthly => Some(MONTHLY_GAP_DAYS),
            Self::Bimonthly => Some(BIMONTHLY_GAP_DAYS),
            Self::Unconstrained => None,
        }
    }

    /// Canonical storage value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => PERIODICITY_WEEKLY,
            Self::Biweekly => PERIODICITY_BIWEEKLY,
            Self::Monthly => PERIODICITY_MONTHLY,
            Self::Bimonthly => PERIODICITY_BIMONTHLY,
            Self::Unconstrained => PERIODICITY_SPORADIC,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a periodicity submitted for a new or updated plan and return
/// its storage form.
///
/// Reading is permissive, writing is not: legacy rows with unknown values
/// still evaluate as unconstrained, but new ones must name a known tier.
/// A blank value means "no periodicity" and yields `None`.
pub fn canonicalize(value: &str) -> Result<Option<&'static str>, String> {
    let normalized = normalize(value);
    if normalized.is_empty() {
        return Ok(None);
    }
    if normalized == PERIODICITY_SPORADIC || normalized == "sporadic" {
        return Ok(Some(PERIODICITY_SPORADIC));
    }
    match Periodicity::parse(Some(&normalized)) {
        Periodicity::Unconstrained => Err(format!(
            "Invalid periodicity '{value}'. Must be one of: {}",
            VALID_PERIODICITIES.join(", ")
        )),
        known => Ok(Some(known.as_str())),
    }
}

/// Lowercase, trim and drop the accent in "esporádica".
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase().replace('á', "a")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
