pub mod report;
pub mod snapshot;
