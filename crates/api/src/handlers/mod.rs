pub mod beneficiaries;
pub mod distribution_plans;
pub mod household;
pub mod visits;
pub mod withdrawals;
