//! Repository for the `basket_withdrawals` table.
//!
//! Withdrawals are insert-only: there is no update or delete.

use assist_core::pagination::{clamp_limit, clamp_offset, contains_pattern, DEFAULT_LIMIT, MAX_LIMIT};
use assist_core::types::{Date, DbId};
use sqlx::{PgExecutor, PgPool};

use crate::models::withdrawal::{
    BasketWithdrawal, CreateWithdrawal, WithdrawalListParams, WithdrawalStats,
    WithdrawalWithBeneficiary,
};

/// Column list for basket_withdrawals queries.
const COLUMNS: &str = "id, beneficiary_id, withdrawal_date, note, created_at";

/// Column list for withdrawals joined with `beneficiaries` as `b`.
const JOINED_COLUMNS: &str = "w.id, w.beneficiary_id, b.full_name AS beneficiary_name, \
    w.withdrawal_date, w.note, w.created_at";

/// Provides insert and read operations for basket withdrawals.
pub struct WithdrawalRepo;

impl WithdrawalRepo {
    /// Record a withdrawal, returning the created row.
    ///
    /// Takes any executor so the insert can share a transaction with the
    /// eligibility check that admitted it.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        input: &CreateWithdrawal,
    ) -> Result<BasketWithdrawal, sqlx::Error> {
        let note = input
            .note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty());
        let query = format!(
            "INSERT INTO basket_withdrawals (beneficiary_id, withdrawal_date, note)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BasketWithdrawal>(&query)
            .bind(input.beneficiary_id)
            .bind(input.withdrawal_date)
            .bind(note)
            .fetch_one(executor)
            .await
    }

    /// Find a withdrawal by ID, with the beneficiary's name.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WithdrawalWithBeneficiary>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM basket_withdrawals w
             JOIN beneficiaries b ON b.id = w.beneficiary_id
             WHERE w.id = $1"
        );
        sqlx::query_as::<_, WithdrawalWithBeneficiary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List withdrawals, newest first, optionally filtered by beneficiary and
    /// by a substring of the beneficiary's name.
    pub async fn list(
        pool: &PgPool,
        params: &WithdrawalListParams,
    ) -> Result<Vec<WithdrawalWithBeneficiary>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);
        let offset = clamp_offset(params.offset);
        let pattern = params
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(contains_pattern);
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM basket_withdrawals w
             JOIN beneficiaries b ON b.id = w.beneficiary_id
             WHERE ($1::BIGINT IS NULL OR w.beneficiary_id = $1)
               AND ($2::TEXT IS NULL OR b.full_name ILIKE $2)
             ORDER BY w.withdrawal_date DESC, w.id DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, WithdrawalWithBeneficiary>(&query)
            .bind(params.beneficiary_id)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Full history for one beneficiary, newest first.
    pub async fn list_for_beneficiary(
        executor: impl PgExecutor<'_>,
        beneficiary_id: DbId,
    ) -> Result<Vec<BasketWithdrawal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM basket_withdrawals
             WHERE beneficiary_id = $1
             ORDER BY withdrawal_date DESC, id DESC"
        );
        sqlx::query_as::<_, BasketWithdrawal>(&query)
            .bind(beneficiary_id)
            .fetch_all(executor)
            .await
    }

    /// Full history for a set of beneficiaries, in no particular order.
    pub async fn list_for_beneficiaries(
        pool: &PgPool,
        beneficiary_ids: &[DbId],
    ) -> Result<Vec<BasketWithdrawal>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM basket_withdrawals WHERE beneficiary_id = ANY($1)"
        );
        sqlx::query_as::<_, BasketWithdrawal>(&query)
            .bind(beneficiary_ids)
            .fetch_all(pool)
            .await
    }

    /// Withdrawals dated within `[from, to]`, oldest first.
    pub async fn list_in_range(
        pool: &PgPool,
        from: Date,
        to: Date,
    ) -> Result<Vec<WithdrawalWithBeneficiary>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM basket_withdrawals w
             JOIN beneficiaries b ON b.id = w.beneficiary_id
             WHERE w.withdrawal_date BETWEEN $1 AND $2
             ORDER BY w.withdrawal_date ASC, w.id ASC"
        );
        sqlx::query_as::<_, WithdrawalWithBeneficiary>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }

    /// Dashboard counters as of `today`, computed in a single aggregate.
    pub async fn stats(pool: &PgPool, today: Date) -> Result<WithdrawalStats, sqlx::Error> {
        sqlx::query_as::<_, WithdrawalStats>(
            "SELECT COUNT(*) AS total_withdrawals,
                    COUNT(*) FILTER (WHERE withdrawal_date = $1) AS withdrawals_today,
                    COUNT(DISTINCT beneficiary_id) AS unique_beneficiaries
             FROM basket_withdrawals",
        )
        .bind(today)
        .fetch_one(pool)
        .await
    }
}
