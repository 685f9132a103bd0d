//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update, save or replace DTO where the entity is mutable

pub mod beneficiary;
pub mod distribution_plan;
pub mod home_visit;
pub mod household_member;
pub mod withdrawal;
