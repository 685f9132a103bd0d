//! Beneficiary ("assistido") model.

use assist_core::beneficiary::{
    validate_cpf_field, validate_phone_field, validate_postal_code_field, validate_rg_field,
    validate_status_field,
};
use assist_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `beneficiaries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Beneficiary {
    pub id: DbId,
    pub full_name: String,
    pub cpf: String,
    pub rg: Option<String>,
    pub birth_date: Option<Date>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a beneficiary.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBeneficiary {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(custom(function = "validate_cpf_field"))]
    pub cpf: String,
    #[validate(custom(function = "validate_rg_field"))]
    pub rg: Option<String>,
    pub birth_date: Option<Date>,
    #[validate(custom(function = "validate_phone_field"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_phone_field"))]
    pub mobile: Option<String>,
    #[validate(custom(function = "validate_postal_code_field"))]
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(custom(function = "validate_status_field"))]
    pub status: Option<String>,
}

/// DTO for updating a beneficiary. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBeneficiary {
    #[validate(length(min = 1, max = 200))]
    pub full_name: Option<String>,
    #[validate(custom(function = "validate_cpf_field"))]
    pub cpf: Option<String>,
    #[validate(custom(function = "validate_rg_field"))]
    pub rg: Option<String>,
    pub birth_date: Option<Date>,
    #[validate(custom(function = "validate_phone_field"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_phone_field"))]
    pub mobile: Option<String>,
    #[validate(custom(function = "validate_postal_code_field"))]
    pub postal_code: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(custom(function = "validate_status_field"))]
    pub status: Option<String>,
}

/// Query parameters for listing beneficiaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BeneficiaryListParams {
    pub status: Option<String>,
    /// Case-insensitive substring of the full name.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Id and name only, for selection lists.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BeneficiarySummary {
    pub id: DbId,
    pub full_name: String,
}
