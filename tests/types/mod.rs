pub mod foreign_error;
pub mod report;
