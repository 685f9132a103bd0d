//! Repository for the `beneficiaries` table.

use assist_core::beneficiary::STATUS_ACTIVE;
use assist_core::documents::digits_only;
use assist_core::pagination::{clamp_limit, clamp_offset, contains_pattern, DEFAULT_LIMIT, MAX_LIMIT};
use assist_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::beneficiary::{
    Beneficiary, BeneficiaryListParams, BeneficiarySummary, CreateBeneficiary, UpdateBeneficiary,
};

/// Column list for beneficiaries queries.
const COLUMNS: &str = "id, full_name, cpf, rg, birth_date, phone, mobile, postal_code, \
    street, number, district, city, state, status, created_at, updated_at";

/// Provides CRUD operations for beneficiaries.
pub struct BeneficiaryRepo;

impl BeneficiaryRepo {
    /// Insert a new beneficiary, returning the created row.
    ///
    /// The CPF is stored as digits only; `status` defaults to `Ativo`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBeneficiary,
    ) -> Result<Beneficiary, sqlx::Error> {
        let query = format!(
            "INSERT INTO beneficiaries
                (full_name, cpf, rg, birth_date, phone, mobile, postal_code,
                 street, number, district, city, state, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beneficiary>(&query)
            .bind(input.full_name.trim())
            .bind(digits_only(&input.cpf))
            .bind(&input.rg)
            .bind(input.birth_date)
            .bind(&input.phone)
            .bind(&input.mobile)
            .bind(&input.postal_code)
            .bind(&input.street)
            .bind(&input.number)
            .bind(&input.district)
            .bind(&input.city)
            .bind(&input.state)
            .bind(input.status.as_deref().unwrap_or(STATUS_ACTIVE))
            .fetch_one(pool)
            .await
    }

    /// Find a beneficiary by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Beneficiary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM beneficiaries WHERE id = $1");
        sqlx::query_as::<_, Beneficiary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check that a beneficiary exists without loading the row.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM beneficiaries WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Lock a beneficiary's row until the surrounding transaction ends.
    ///
    /// Writes that must see a stable history for one beneficiary (the
    /// withdrawal gate, household replacement) take this lock first, so
    /// concurrent requests for the same beneficiary run one at a time.
    /// Returns `false` when the beneficiary does not exist.
    pub async fn lock_for_update(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM beneficiaries WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// List beneficiaries ordered by name, optionally filtered by status and
    /// a name substring.
    pub async fn list(
        pool: &PgPool,
        params: &BeneficiaryListParams,
    ) -> Result<Vec<Beneficiary>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
        let offset = clamp_offset(params.offset);
        let pattern = params
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(contains_pattern);
        let query = format!(
            "SELECT {COLUMNS} FROM beneficiaries
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::TEXT IS NULL OR full_name ILIKE $2)
             ORDER BY full_name ASC, id ASC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Beneficiary>(&query)
            .bind(&params.status)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All active beneficiaries (id and name), ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<BeneficiarySummary>, sqlx::Error> {
        sqlx::query_as::<_, BeneficiarySummary>(
            "SELECT id, full_name FROM beneficiaries
             WHERE status = $1
             ORDER BY full_name ASC, id ASC",
        )
        .bind(STATUS_ACTIVE)
        .fetch_all(pool)
        .await
    }

    /// Update a beneficiary by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBeneficiary,
    ) -> Result<Option<Beneficiary>, sqlx::Error> {
        let query = format!(
            "UPDATE beneficiaries SET
                full_name = COALESCE($2, full_name),
                cpf = COALESCE($3, cpf),
                rg = COALESCE($4, rg),
                birth_date = COALESCE($5, birth_date),
                phone = COALESCE($6, phone),
                mobile = COALESCE($7, mobile),
                postal_code = COALESCE($8, postal_code),
                street = COALESCE($9, street),
                number = COALESCE($10, number),
                district = COALESCE($11, district),
                city = COALESCE($12, city),
                state = COALESCE($13, state),
                status = COALESCE($14, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Beneficiary>(&query)
            .bind(id)
            .bind(input.full_name.as_deref().map(str::trim))
            .bind(input.cpf.as_deref().map(digits_only))
            .bind(&input.rg)
            .bind(input.birth_date)
            .bind(&input.phone)
            .bind(&input.mobile)
            .bind(&input.postal_code)
            .bind(&input.street)
            .bind(&input.number)
            .bind(&input.district)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }
}
