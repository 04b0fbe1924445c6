pub mod into_cause;
pub mod with_cause;
