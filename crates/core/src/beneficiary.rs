//! Beneficiary status values and field validators.
//!
//! The `validate_*_field` functions plug into `#[validate(custom(...))]`
//! attributes on the create/update DTOs in the `db` crate.

use std::borrow::Cow;

use validator::ValidationError;

use crate::documents::{validate_cpf, validate_phone, validate_rg, POSTAL_CODE_LENGTH};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "Ativo";
pub const STATUS_INACTIVE: &str = "Inativo";

pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE];

/// Validate that `status` is one of the known beneficiary statuses.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

// ---------------------------------------------------------------------------
// Field validators
// ---------------------------------------------------------------------------

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_cpf_field(cpf: &str) -> Result<(), ValidationError> {
    if validate_cpf(cpf) {
        Ok(())
    } else {
        Err(field_error("cpf", "CPF inválido"))
    }
}

pub fn validate_rg_field(rg: &str) -> Result<(), ValidationError> {
    if validate_rg(rg) {
        Ok(())
    } else {
        Err(field_error("rg", "RG deve ter entre 7 e 9 caracteres"))
    }
}

pub fn validate_phone_field(phone: &str) -> Result<(), ValidationError> {
    if validate_phone(phone) {
        Ok(())
    } else {
        Err(field_error("phone", "Telefone deve ter 10 ou 11 dígitos"))
    }
}

pub fn validate_postal_code_field(postal_code: &str) -> Result<(), ValidationError> {
    if crate::documents::digits_only(postal_code).len() == POSTAL_CODE_LENGTH {
        Ok(())
    } else {
        Err(field_error("postal_code", "CEP deve ter 8 dígitos"))
    }
}

pub fn validate_status_field(status: &str) -> Result<(), ValidationError> {
    validate_status(status).map_err(|_| field_error("status", "Status deve ser Ativo ou Inativo"))
}
