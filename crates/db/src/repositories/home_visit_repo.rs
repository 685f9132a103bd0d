//! Repository for the `home_visits` table.

use assist_core::pagination::{clamp_limit, clamp_offset, contains_pattern, DEFAULT_LIMIT, MAX_LIMIT};
use assist_core::text::non_blank;
use assist_core::types::DbId;
use sqlx::PgPool;

use crate::models::home_visit::{
    CreateHomeVisit, HomeVisit, HomeVisitWithBeneficiary, VisitListParams,
};

/// Column list for home_visits queries.
const COLUMNS: &str = "id, beneficiary_id, visit_date, visitor_name, received_by, report, created_at";

/// Column list for visits joined with `beneficiaries` as `b`.
const JOINED_COLUMNS: &str = "v.id, v.beneficiary_id, b.full_name AS beneficiary_name, \
    v.visit_date, v.visitor_name, v.received_by, v.report, v.created_at";

/// Provides insert and read operations for home visits.
pub struct HomeVisitRepo;

impl HomeVisitRepo {
    /// Record a visit, returning the created row. Optional text is trimmed
    /// and blanks stored as NULL.
    pub async fn create(pool: &PgPool, input: &CreateHomeVisit) -> Result<HomeVisit, sqlx::Error> {
        let query = format!(
            "INSERT INTO home_visits (beneficiary_id, visit_date, visitor_name, received_by, report)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HomeVisit>(&query)
            .bind(input.beneficiary_id)
            .bind(input.visit_date)
            .bind(input.visitor_name.trim())
            .bind(non_blank(input.received_by.as_deref()))
            .bind(non_blank(input.report.as_deref()))
            .fetch_one(pool)
            .await
    }

    /// Find a visit by ID, with the beneficiary's name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<HomeVisitWithBeneficiary>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM home_visits v
             JOIN beneficiaries b ON b.id = v.beneficiary_id
             WHERE v.id = $1"
        );
        sqlx::query_as::<_, HomeVisitWithBeneficiary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List visits, newest first. `q` matches either the beneficiary's or
    /// the visitor's name.
    pub async fn list(
        pool: &PgPool,
        params: &VisitListParams,
    ) -> Result<Vec<HomeVisitWithBeneficiary>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
        let offset = clamp_offset(params.offset);
        let pattern = params
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(contains_pattern);
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM home_visits v
             JOIN beneficiaries b ON b.id = v.beneficiary_id
             WHERE ($1::BIGINT IS NULL OR v.beneficiary_id = $1)
               AND ($2::TEXT IS NULL OR b.full_name ILIKE $2 OR v.visitor_name ILIKE $2)
             ORDER BY v.visit_date DESC, v.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, HomeVisitWithBeneficiary>(&query)
            .bind(params.beneficiary_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All visits to one beneficiary, newest first.
    pub async fn list_for_beneficiary(
        pool: &PgPool,
        beneficiary_id: DbId,
    ) -> Result<Vec<HomeVisit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM home_visits
             WHERE beneficiary_id = $1
             ORDER BY visit_date DESC, id DESC"
        );
        sqlx::query_as::<_, HomeVisit>(&query)
            .bind(beneficiary_id)
            .fetch_all(pool)
            .await
    }
}
