pub mod aggregate;
pub mod analyze;
pub mod conditions;
pub mod opening;
pub mod scoring;
