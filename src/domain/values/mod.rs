pub mod opening;
pub mod profile;
pub mod qualitative;
pub mod rules;
pub mod scenario;
pub mod sentiment;
