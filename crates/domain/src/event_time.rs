// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event end-time derivation.
//!
//! An event's end is derived from exactly one of:
//! - the all-day flag (end is exactly 24 hours after start)
//! - an `HH:mm` end time overlaid on the start's calendar date
//! - an explicit end instant
//!
//! ## Invariants
//!
//! - Instants are stored and compared in UTC
//! - Calendar-day and wall-clock computations use one declared scheduling zone
//! - `end > start`
//! - Unless all-day: start and end share a calendar date in the scheduling
//!   zone, and `end - start <= 24h`
//!
//! The scheduling zone is always passed in explicitly; nothing here reads the
//! process-local time zone.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDateTime, NaiveTime, SubsecRound, Timelike, Utc,
};
use chrono_tz::Tz;

use crate::error::DomainError;
use crate::types::EventTiming;

/// Display end time used for all-day events.
pub const ALL_DAY_END_TIME: &str = "23:59";

/// Maximum duration of a timed event, in hours.
pub const MAX_EVENT_HOURS: i64 = 24;

/// Fractional-second digits kept on parsed instants, matching storage.
pub const INSTANT_SUBSEC_DIGITS: u16 = 3;

/// Offset-less formats accepted for local wall-clock date-times.
const LOCAL_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// The end information supplied with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndSpec<'a> {
    /// An `HH:mm` end time on the start's calendar date.
    pub end_time_of_day: Option<&'a str>,
    /// An explicit end instant.
    pub explicit_end: Option<&'a str>,
    /// Whether the event spans the whole day.
    pub is_all_day: bool,
}

/// Parses a scheduling zone from an IANA time zone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is not a known zone.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Parses a date-time string into a UTC instant.
///
/// Accepts RFC 3339 strings with an offset, and offset-less
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]` strings interpreted as wall-clock time in
/// `zone`. Sub-millisecond digits are truncated.
///
/// # Arguments
///
/// * `field` - The request field the value came from (for error reporting)
/// * `value` - The string to parse
/// * `zone` - The scheduling zone for offset-less values
///
/// # Errors
///
/// Returns `DomainError::InvalidDate` if the value cannot be parsed or names
/// a wall-clock time that does not exist in `zone`.
pub fn parse_instant(field: &str, value: &str, zone: Tz) -> Result<DateTime<Utc>, DomainError> {
    let trimmed: &str = value.trim();
    let invalid = || DomainError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc).trunc_subsecs(INSTANT_SUBSEC_DIGITS));
    }

    let naive: NaiveDateTime = LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(invalid)?;

    local_to_utc(naive, zone)
        .map(|instant| instant.trunc_subsecs(INSTANT_SUBSEC_DIGITS))
        .ok_or_else(invalid)
}

/// Parses a strict `HH:mm` time of day.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeOfDay` unless the value is two digits,
/// a colon, and two digits, with hours 00-23 and minutes 00-59.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, DomainError> {
    let invalid = || DomainError::InvalidTimeOfDay(value.to_string());
    let bytes: &[u8] = value.as_bytes();

    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let digits: [u8; 4] = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }

    let hours: u32 = u32::from(digits[0] - b'0') * 10 + u32::from(digits[1] - b'0');
    let minutes: u32 = u32::from(digits[2] - b'0') * 10 + u32::from(digits[3] - b'0');

    NaiveTime::from_hms_opt(hours, minutes, 0).ok_or_else(invalid)
}

/// Derives the end instant of an event.
///
/// # Arguments
///
/// * `start` - The start instant
/// * `spec` - The end information supplied with the event
/// * `zone` - The scheduling zone
///
/// # Errors
///
/// Returns an error if:
/// - The end time or end instant cannot be parsed
/// - The end is not after the start
/// - The end falls on a different calendar day in `zone`
/// - The event would last longer than 24 hours
/// - No end information was supplied and the event is not all-day
pub fn derive_end(
    start: DateTime<Utc>,
    spec: &EndSpec<'_>,
    zone: Tz,
) -> Result<DateTime<Utc>, DomainError> {
    if spec.is_all_day {
        return Ok(start + Duration::hours(MAX_EVENT_HOURS));
    }

    if let Some(raw) = non_blank(spec.end_time_of_day) {
        let time_of_day: NaiveTime = parse_time_of_day(raw)?;
        let local_start: DateTime<Tz> = start.with_timezone(&zone);
        let overlay: NaiveDateTime = local_start.date_naive().and_time(time_of_day);
        let end: DateTime<Utc> =
            overlay_after(overlay, zone, start).ok_or_else(|| DomainError::InvalidDate {
                field: String::from("endTime"),
                value: raw.to_string(),
            })?;

        // Same wall-clock minute as the start: zero-length event.
        if local_start.hour() == time_of_day.hour() && local_start.minute() == time_of_day.minute()
        {
            return Err(DomainError::EndBeforeStart);
        }
        // An earlier wall-clock time only occurs again on the next day.
        if end < start {
            return Err(DomainError::CrossesDayBoundary);
        }
        check_same_day_window(start, end, zone)?;
        return Ok(end);
    }

    if let Some(raw) = non_blank(spec.explicit_end) {
        let end: DateTime<Utc> = parse_instant("endDateTime", raw, zone)?;
        if end <= start {
            return Err(DomainError::EndBeforeStart);
        }
        check_same_day_window(start, end, zone)?;
        return Ok(end);
    }

    Err(DomainError::EndTimeRequired)
}

/// Formats the display end time of an event.
///
/// Returns the all-day sentinel for all-day events, the zero-padded `HH:mm`
/// of `end` in `zone` when start and end share a calendar date there, and
/// `None` otherwise.
#[must_use]
pub fn format_display_end_time(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    is_all_day: bool,
    zone: Tz,
) -> Option<String> {
    if is_all_day {
        return Some(String::from(ALL_DAY_END_TIME));
    }

    let local_start: DateTime<Tz> = start.with_timezone(&zone);
    let local_end: DateTime<Tz> = end.with_timezone(&zone);
    if local_start.date_naive() != local_end.date_naive() {
        return None;
    }
    Some(format!("{:02}:{:02}", local_end.hour(), local_end.minute()))
}

/// Parses the start and derives the complete timing of an event.
///
/// # Arguments
///
/// * `start` - The raw start date-time
/// * `spec` - The end information supplied with the event
/// * `zone` - The scheduling zone
///
/// # Errors
///
/// Returns an error if the start cannot be parsed or end derivation fails.
pub fn derive_timing(start: &str, spec: &EndSpec<'_>, zone: Tz) -> Result<EventTiming, DomainError> {
    let start: DateTime<Utc> = parse_instant("startDateTime", start, zone)?;
    let end: DateTime<Utc> = derive_end(start, spec, zone)?;
    let end_time: Option<String> = format_display_end_time(start, end, spec.is_all_day, zone);

    Ok(EventTiming {
        start,
        end,
        end_time,
        is_all_day: spec.is_all_day,
    })
}

fn check_same_day_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    zone: Tz,
) -> Result<(), DomainError> {
    if start.with_timezone(&zone).date_naive() != end.with_timezone(&zone).date_naive() {
        return Err(DomainError::CrossesDayBoundary);
    }
    if end - start > Duration::hours(MAX_EVENT_HOURS) {
        return Err(DomainError::DurationTooLong);
    }
    Ok(())
}

/// Resolves an overlaid wall-clock time in `zone` to UTC.
///
/// On a DST fold the first occurrence after `start` wins, so an end in the
/// repeated hour stays on the start's side of the fold.
fn overlay_after(naive: NaiveDateTime, zone: Tz, start: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match naive.and_local_timezone(zone) {
        LocalResult::Single(local) => Some(local.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, later) => {
            let earlier: DateTime<Utc> = earlier.with_timezone(&Utc);
            if earlier > start {
                Some(earlier)
            } else {
                Some(later.with_timezone(&Utc))
            }
        }
        LocalResult::None => None,
    }
}

/// Resolves a wall-clock time in `zone` to UTC.
///
/// Ambiguous times (DST fold) resolve to the earlier instant; nonexistent
/// times (DST gap) yield `None`.
fn local_to_utc(naive: NaiveDateTime, zone: Tz) -> Option<DateTime<Utc>> {
    naive
        .and_local_timezone(zone)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
