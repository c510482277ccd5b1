mod client;
pub mod models;
mod schema;

pub use client::ExtractionClient;
pub use models::{ExtractedEvent, ExtractedSchedule};
