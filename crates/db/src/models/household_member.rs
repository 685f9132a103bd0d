//! Household member ("familiar") model.

use assist_core::text::validate_not_blank_field;
use assist_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `household_members` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HouseholdMember {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub full_name: String,
    pub birth_date: Option<Date>,
    pub relationship: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub has_disability: bool,
    pub disability_type: Option<String>,
    pub needs_diapers: bool,
    pub diaper_size: Option<String>,
    pub created_at: Timestamp,
}

/// One member in a household replacement.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct HouseholdMemberInput {
    #[validate(length(max = 200), custom(function = "validate_not_blank_field"))]
    pub full_name: String,
    pub birth_date: Option<Date>,
    pub relationship: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    #[serde(default)]
    pub has_disability: bool,
    /// Ignored unless `has_disability` is set.
    pub disability_type: Option<String>,
    #[serde(default)]
    pub needs_diapers: bool,
    /// Ignored unless `needs_diapers` is set.
    pub diaper_size: Option<String>,
}

/// DTO replacing a beneficiary's whole household.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReplaceHousehold {
    #[validate(nested)]
    pub members: Vec<HouseholdMemberInput>,
}
