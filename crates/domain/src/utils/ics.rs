//! Calendar-interchange (ICS) text parsing.
//!
//! A deliberately small line scanner, not a full RFC 5545 implementation:
//! it extracts the handful of properties the appointment import needs.
//! Property parameters (`DTSTART;VALUE=DATE:...`) are stripped from the
//! key. Timezone suffixes on date-time values are ignored: a trailing `Z`
//! is dropped without conversion, which is a documented limitation of the
//! import.

use serde::{Deserialize, Serialize};

const BEGIN_EVENT: &str = "BEGIN:VEVENT";
const END_EVENT: &str = "END:VEVENT";

/// One event extracted from an ICS document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEvent {
    pub subject: String,
    pub location: String,
    pub description: String,
    /// Local ISO-like timestamp, `YYYY-MM-DDTHH:MM:SS`; empty when the
    /// block carried no parseable DTSTART.
    pub start: String,
    pub end: String,
    pub all_day: bool,
}

/// Scan `text` for `VEVENT` blocks and extract one record per block.
///
/// Blocks without a matching end marker are dropped: no event is emitted
/// for them.
pub fn parse_ics(text: &str) -> Vec<ParsedEvent> {
    let mut events = Vec::new();
    let mut current: Option<ParsedEvent> = None;

    for line in text.lines() {
        let line = line.trim_end_matches('\r');

        if line.starts_with(BEGIN_EVENT) {
            // A nested/unterminated begin discards the previous open block.
            current = Some(ParsedEvent::default());
        } else if line.starts_with(END_EVENT) {
            if let Some(event) = current.take() {
                events.push(event);
            }
        } else if let Some(event) = current.as_mut() {
            apply_property(event, line);
        }
    }

    events
}

fn apply_property(event: &mut ParsedEvent, line: &str) {
    let Some((raw_key, value)) = line.split_once(':') else {
        return;
    };

    // Strip parameter suffixes: "DTSTART;VALUE=DATE" -> "DTSTART".
    let key = raw_key.split(';').next().unwrap_or(raw_key);

    match key {
        "SUMMARY" => event.subject = value.to_string(),
        "LOCATION" => event.location = value.to_string(),
        "DESCRIPTION" => event.description = value.to_string(),
        "DTSTART" => {
            if let Some(normalised) = normalise_ics_date(value) {
                event.start = normalised;
            }
            if value.len() == 8 {
                event.all_day = true;
            }
        }
        "DTEND" => {
            if let Some(normalised) = normalise_ics_date(value) {
                event.end = normalised;
            }
        }
        _ => {}
    }
}

/// Normalise an ICS date or date-time value to `YYYY-MM-DDTHH:MM:SS`.
///
/// An 8-character value (`YYYYMMDD`) is date-only and maps to midnight. A
/// date-time (`YYYYMMDDTHHMMSS`, optionally suffixed `Z`) is reassembled
/// without any timezone conversion.
fn normalise_ics_date(value: &str) -> Option<String> {
    if value.len() < 8 || !value.is_char_boundary(8) {
        return None;
    }

    let (date, rest) = value.split_at(8);
    if !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (year, month_day) = date.split_at(4);
    let (month, day) = month_day.split_at(2);

    let time = match rest.strip_prefix('T') {
        Some(t) if t.len() >= 6 => &t[..6],
        _ => "000000",
    };
    if !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(format!("{year}-{month}-{day}T{}:{}:{}", &time[..2], &time[2..4], &time[4..6]))
}
