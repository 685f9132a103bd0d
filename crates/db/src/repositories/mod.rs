//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Methods that take part in a
//! transaction accept any `PgExecutor` (or `&mut PgConnection` when they run
//! several statements) instead.

pub mod beneficiary_repo;
pub mod distribution_plan_repo;
pub mod home_visit_repo;
pub mod household_repo;
pub mod withdrawal_repo;

pub use beneficiary_repo::BeneficiaryRepo;
pub use distribution_plan_repo::DistributionPlanRepo;
pub use home_visit_repo::HomeVisitRepo;
pub use household_repo::HouseholdRepo;
pub use withdrawal_repo::WithdrawalRepo;
