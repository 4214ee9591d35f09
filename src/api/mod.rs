pub mod client;
pub mod models;
pub mod profile;

pub use client::ProfileClient;
pub use models::{FallbackReason, LookupOutcome, MappingRecord};
