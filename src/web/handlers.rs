use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::components::extraction::ExtractedEvent;
use crate::components::google_calendar::{Attendee, CalendarEvent, EventDateTime};
use crate::error::extraction_error;
use crate::utils::email::extract_emails;
use crate::utils::time::is_parseable_datetime;

#[derive(Debug, Deserialize)]
pub struct GenerateScheduleRequest {
    #[serde(default)]
    pub prompt: String,
    /// Attendees pre-parsed from the prompt by the client (redundant with the
    /// server-side pattern match, kept for wire compatibility)
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

#[derive(Debug, Serialize)]
pub struct GenerateScheduleResponse {
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Deserialize)]
pub struct ModifyEventRequest {
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteEventResponse {
    pub message: String,
}

/// `GET /api/events` - the calendar's 30-day window, verbatim
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<CalendarEvent>>, ApiError> {
    let events = state
        .calendar
        .list_events()
        .await
        .map_err(|e| ApiError::from_error("Failed to fetch events", e))?;

    Ok(Json(events))
}

/// `POST /api/generate-schedule` - extract events from a prompt and insert
/// them sequentially
pub async fn generate_schedule(
    State(state): State<AppState>,
    Json(body): Json<GenerateScheduleRequest>,
) -> Result<Json<GenerateScheduleResponse>, ApiError> {
    if body.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("A non-empty prompt is required"));
    }

    // Union of client-supplied attendees and emails pattern-matched from the
    // raw prompt; every produced event must carry at least these
    let mut required_attendees = body.attendees;
    for email in extract_emails(&body.prompt) {
        if !required_attendees
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&email))
        {
            required_attendees.push(Attendee::new(email));
        }
    }

    let schedule = state
        .extractor
        .generate_schedule(&body.prompt)
        .await
        .map_err(|e| ApiError::from_error("Failed to generate schedule", e))?;

    let mut created_events = Vec::with_capacity(schedule.events.len());
    for extracted in schedule.events {
        let event = build_insert_event(extracted, &required_attendees);

        // Best effort: a failed insert stops the batch, earlier inserts stay
        let created = state
            .calendar
            .insert_event(&event)
            .await
            .map_err(|e| ApiError::from_error("Failed to generate schedule", e))?;
        created_events.push(created);
    }

    info!(created = created_events.len(), "Generated schedule from prompt");
    Ok(Json(GenerateScheduleResponse {
        events: created_events,
    }))
}

/// Build the insert payload for one extracted event, folding in the
/// attendees parsed from the prompt
fn build_insert_event(extracted: ExtractedEvent, required_attendees: &[Attendee]) -> CalendarEvent {
    let mut attendees = extracted.attendees;
    for required in required_attendees {
        if !attendees
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&required.email))
        {
            attendees.push(required.clone());
        }
    }

    CalendarEvent {
        summary: Some(extracted.summary),
        description: extracted.description,
        start: Some(EventDateTime::new(
            extracted.start,
            extracted.time_zone.clone(),
        )),
        end: Some(EventDateTime::new(extracted.end, extracted.time_zone)),
        attendees: Some(attendees),
        guests_can_modify: Some(true),
        guests_can_see_other_guests: Some(true),
        ..Default::default()
    }
}

/// `PUT /api/events/{event_id}` - replace an event with a model-produced
/// version of it
pub async fn modify_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Json(body): Json<ModifyEventRequest>,
) -> Result<Json<CalendarEvent>, ApiError> {
    if body.prompt.trim().is_empty() {
        return Err(ApiError::bad_request(
            "Both eventId and prompt are required",
        ));
    }

    info!(event_id = %event_id, "Modifying event");

    let existing = state
        .calendar
        .get_event(&event_id)
        .await
        .map_err(|e| ApiError::from_error("Failed to update event", e))?;

    let extracted = state
        .extractor
        .modify_event(&existing, &body.prompt)
        .await
        .map_err(|e| ApiError::from_error("Failed to update event", e))?;

    // Reject unparseable timestamps before anything is written back
    if !is_parseable_datetime(&extracted.start) || !is_parseable_datetime(&extracted.end) {
        return Err(ApiError::from_error(
            "Failed to update event",
            extraction_error("Invalid date format received from the model"),
        ));
    }

    let update = build_replacement_event(extracted, &existing);

    let updated = state
        .calendar
        .update_event(&event_id, &update)
        .await
        .map_err(|e| ApiError::from_error("Failed to update event", e))?;

    Ok(Json(updated))
}

/// Full-replacement payload: time zone and attendees fall back to the
/// existing event when the extraction omits them
fn build_replacement_event(extracted: ExtractedEvent, existing: &CalendarEvent) -> CalendarEvent {
    let existing_start_tz = existing.start.as_ref().and_then(|s| s.time_zone.clone());
    let existing_end_tz = existing.end.as_ref().and_then(|e| e.time_zone.clone());

    let attendees = if extracted.attendees.is_empty() {
        existing.attendees.clone().unwrap_or_default()
    } else {
        extracted.attendees
    };

    CalendarEvent {
        summary: Some(extracted.summary),
        description: extracted.description,
        start: Some(EventDateTime::new(
            extracted.start,
            extracted.time_zone.clone().or(existing_start_tz),
        )),
        end: Some(EventDateTime::new(
            extracted.end,
            extracted.time_zone.or(existing_end_tz),
        )),
        attendees: Some(attendees),
        ..Default::default()
    }
}

/// `DELETE /api/events/{event_id}`
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<DeleteEventResponse>, ApiError> {
    state
        .calendar
        .delete_event(&event_id)
        .await
        .map_err(|e| ApiError::from_error("Failed to delete event", e))?;

    Ok(Json(DeleteEventResponse {
        message: "Event deleted successfully".to_string(),
    }))
}
