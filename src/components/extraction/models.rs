use crate::components::google_calendar::Attendee;
use serde::Deserialize;

/// One event as emitted by the model's structured function call
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedEvent {
    pub summary: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

/// Result of a schedule-creation extraction: zero or more events
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractedSchedule {
    #[serde(default)]
    pub events: Vec<ExtractedEvent>,
}
