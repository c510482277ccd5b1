use serde_json::{json, Value};

/// JSON schema of a single event, shared by both function declarations
fn event_properties() -> Value {
    json!({
        "summary": { "type": "string" },
        "description": { "type": "string" },
        "start": { "type": "string", "format": "date-time" },
        "end": { "type": "string", "format": "date-time" },
        "timeZone": { "type": "string" },
        "attendees": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "email": { "type": "string" }
                }
            }
        }
    })
}

/// Function declaration the model must call when creating a schedule
pub fn create_schedule_function() -> Value {
    json!({
        "name": "create_schedule",
        "description": "Create a schedule of events with detailed descriptions and attendees",
        "parameters": {
            "type": "object",
            "properties": {
                "events": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": event_properties(),
                        "required": ["summary", "start", "end", "timeZone", "description"]
                    }
                }
            },
            "required": ["events"]
        }
    })
}

/// Function declaration the model must call when modifying an event
pub fn modify_event_function() -> Value {
    json!({
        "name": "modify_event",
        "description": "Modify an existing event with updated details",
        "parameters": {
            "type": "object",
            "properties": event_properties(),
            "required": ["summary", "description", "start", "end", "timeZone"]
        }
    })
}
