//! Basket withdrawal ("retirada de cesta") model.

use assist_core::eligibility::WithdrawalEvent;
use assist_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `basket_withdrawals` table. Rows are never updated.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BasketWithdrawal {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub withdrawal_date: Date,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

impl BasketWithdrawal {
    pub fn to_event(&self) -> WithdrawalEvent {
        WithdrawalEvent {
            date: self.withdrawal_date,
            note: self.note.clone(),
        }
    }
}

/// A withdrawal joined with the beneficiary's name, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct WithdrawalWithBeneficiary {
    pub id: DbId,
    pub beneficiary_id: DbId,
    pub beneficiary_name: String,
    pub withdrawal_date: Date,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for recording a withdrawal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWithdrawal {
    pub beneficiary_id: DbId,
    pub withdrawal_date: Date,
    pub note: Option<String>,
}

/// Query parameters for listing withdrawals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WithdrawalListParams {
    pub beneficiary_id: Option<DbId>,
    /// Case-insensitive substring of the beneficiary's name.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Headline numbers shown above the withdrawal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRow)]
pub struct WithdrawalStats {
    pub total_withdrawals: i64,
    pub withdrawals_today: i64,
    pub unique_beneficiaries: i64,
}

/// Inclusive date range for reports.
#[derive(Debug, Clone, Deserialize)]
pub struct DateRangeParams {
    pub from: Date,
    pub to: Date,
}
