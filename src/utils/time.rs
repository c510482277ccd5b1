use chrono::{DateTime, NaiveDateTime};

/// Formats accepted for timestamps without an offset
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Check that a model-produced timestamp parses as a date
pub fn is_parseable_datetime(value: &str) -> bool {
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return true;
    }
    NAIVE_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(value, format).is_ok())
}
