// External service clients
pub mod extraction;
pub mod google_calendar;

pub use extraction::ExtractionClient;
pub use google_calendar::CalendarClient;
