pub mod person_ops;
pub mod job_ops;
pub mod account_ops;
