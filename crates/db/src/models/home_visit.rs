//! Home visit ("visita domiciliar") model.

use assist_core::text::validate_not_blank_field;
use assist_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `home_visits` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HomeVisit {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub visit_date: Date,
    pub visitor_name: String,
    pub received_by: Option<String>,
    pub report: Option<String>,
    pub created_at: Timestamp,
}

/// A visit joined with the visited beneficiary's name.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HomeVisitWithBeneficiary {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub beneficiary_name: String,
    pub visit_date: Date,
    pub visitor_name: String,
    pub received_by: Option<String>,
    pub report: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording a visit.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHomeVisit {
    pub beneficiary_id: DbId,
    pub visit_date: Date,
    #[validate(length(max = 200), custom(function = "validate_not_blank_field"))]
    pub visitor_name: String,
    pub received_by: Option<String>,
    pub report: Option<String>,
}

/// Query parameters for listing visits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisitListParams {
    pub beneficiary_id: Option<DbId>,
    /// Case-insensitive substring of the beneficiary's or the visitor's name.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
