//! Domain logic for the cesta distribution service.
//!
//! Everything in this crate is pure: no database, no HTTP, no system clock
//! reads outside of [`clock::SystemClock`]. The `db` and `api` crates load
//! data and hand it to the functions defined here.

pub mod beneficiary;
pub mod clock;
pub mod documents;
pub mod eligibility;
pub mod error;
pub mod household;
pub mod pagination;
pub mod periodicity;
pub mod text;
pub mod types;
