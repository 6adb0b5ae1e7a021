pub mod schema;
pub mod person_repo;
pub mod job_repo;
pub mod account_repo;
pub mod storage;
