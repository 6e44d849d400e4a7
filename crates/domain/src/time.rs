//! Time and timestamp helpers.
//!
//! Records carry their timestamps as the raw strings received on the wire.
//! They are only parsed when rendered, so a malformed value never prevents
//! a record from being displayed.

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, Utc};

/// UTC timestamp.
pub type Timestamp = DateTime<Utc>;

/// Display format for timestamps, e.g. `1/1/2024, 12:00:00 AM`.
const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Parse a wire timestamp.
///
/// Accepts RFC 3339. A timestamp without an offset is taken as UTC, which is
/// how the upstream API serializes its naive datetimes.
#[must_use]
pub fn parse(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
        .map(|naive| naive.and_utc())
}

/// Zone timestamps are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// Host time zone, resolved for each timestamp so DST shifts apply.
    Local,
    /// A fixed UTC offset.
    Fixed(FixedOffset),
}

impl DisplayZone {
    #[must_use]
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }
}

/// Render a wire timestamp for humans in the given zone.
///
/// Unparseable input is returned verbatim.
#[must_use]
pub fn display(raw: &str, zone: &DisplayZone) -> String {
    match parse(raw) {
        Some(ts) => match zone {
            DisplayZone::Local => ts.with_timezone(&Local).format(DISPLAY_FORMAT).to_string(),
            DisplayZone::Fixed(offset) => ts.with_timezone(offset).format(DISPLAY_FORMAT).to_string(),
        },
        None => raw.to_string(),
    }
}
