pub mod dashboard;
pub mod export;
pub mod reports;
