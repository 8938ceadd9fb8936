//! Display helpers for appointment times.
//!
//! Appointment times are kept as the text the form produced, either
//! `YYYY-MM-DD HH:MM` (seed data) or `YYYY-MM-DDTHH:MM` (`datetime-local`).

use chrono::NaiveDateTime;

const FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Parse either stored appointment shape.
pub fn parse_appointment(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

/// Format as "Aug 1, 2024 9:00 AM"; unparseable text is shown as-is and an
/// empty value as "Not scheduled".
pub fn format_appointment(text: &str) -> String {
    if text.trim().is_empty() {
        return "Not scheduled".to_string();
    }
    match parse_appointment(text) {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => text.to_string(),
    }
}

/// Value for a `datetime-local` input, which needs the `T` separator.
pub fn to_datetime_local(text: &str) -> String {
    text.replacen(' ', "T", 1)
}
