//! Date recognition for string values and the date accessors.
//!
//! Two textual forms are recognized: ISO 8601 (`2000-01-02T03:04:05.678Z`,
//! offset or naive, or a bare date) and the legacy `/Date(<millis>[±hhmm])/`
//! wire format.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::options::DateParseHandling;
use crate::token::JsonValue;

/// Cheap shape check before attempting a real parse.
fn looks_like_date(text: &str) -> bool {
    let b = text.as_bytes();
    (b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[7] == b'-')
        || (text.starts_with("/Date(") && text.ends_with(")/"))
}

/// Attempts to interpret a string value as a date under `handling`.
///
/// Returns `None` both when handling is off and when the text is not a date,
/// leaving the string token untouched.
pub(crate) fn try_parse_date(text: &str, handling: DateParseHandling) -> Option<JsonValue> {
    if handling == DateParseHandling::None || !looks_like_date(text) {
        return None;
    }
    let parsed = parse_offset(text)?;
    Some(match handling {
        DateParseHandling::DateTime => JsonValue::DateTime(parsed.naive_local()),
        DateParseHandling::DateTimeOffset => JsonValue::DateTimeOffset(parsed),
        DateParseHandling::None => unreachable!(),
    })
}

/// Parses either supported form into an offset date-time; naive inputs are
/// taken as UTC.
pub(crate) fn parse_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Some(inner) = text
        .strip_prefix("/Date(")
        .and_then(|t| t.strip_suffix(")/"))
    {
        return parse_ms_date(inner);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().fixed_offset());
    }
    None
}

fn parse_ms_date(inner: &str) -> Option<DateTime<FixedOffset>> {
    if inner.is_empty() || !inner.is_ascii() {
        return None;
    }
    // Millis, optionally followed by a +hhmm / -hhmm display offset.
    let offset_at = inner[1..]
        .find(['+', '-'])
        .map(|i| i + 1);
    let (millis_text, offset_text) = match offset_at {
        Some(i) => (&inner[..i], Some(&inner[i..])),
        None => (inner, None),
    };
    let millis: i64 = millis_text.parse().ok()?;
    let utc = DateTime::<Utc>::from_timestamp_millis(millis)?;

    let offset = match offset_text {
        Some(o) if o.len() == 5 => {
            let sign: i32 = if o.starts_with('-') { -1 } else { 1 };
            let hours: i32 = o[1..3].parse().ok()?;
            let minutes: i32 = o[3..5].parse().ok()?;
            FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?
        }
        Some(_) => return None,
        None => FixedOffset::east_opt(0)?,
    };
    Some(offset.from_utc_datetime(&utc.naive_utc()))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::{parse_offset, try_parse_date};
    use crate::options::DateParseHandling;
    use crate::token::JsonValue;

    #[test]
    fn iso_with_offset() {
        let dt = parse_offset("2000-01-02T03:04:05+02:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn iso_naive_is_utc() {
        let dt = parse_offset("2000-01-02T03:04:05.5").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.nanosecond(), 500_000_000);
    }

    #[test]
    fn bare_date() {
        let dt = parse_offset("2014-06-04").unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2014, 6, 4).unwrap());
    }

    #[test]
    fn ms_date_format() {
        let dt = parse_offset("/Date(976918263055)/").unwrap();
        assert_eq!(dt.timestamp_millis(), 976_918_263_055);
    }

    #[test]
    fn ms_date_with_offset() {
        let dt = parse_offset("/Date(0+0530)/").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 5 * 3600 + 1800);
        assert_eq!(dt.timestamp_millis(), 0);
    }

    #[test]
    fn non_dates_stay_strings() {
        assert_eq!(try_parse_date("hello", DateParseHandling::DateTime), None);
        assert_eq!(parse_offset("/Date()/"), None);
        assert_eq!(
            try_parse_date("2000-01-02T03:04:05", DateParseHandling::None),
            None
        );
    }

    #[test]
    fn handling_picks_the_subtype() {
        match try_parse_date("2000-01-02T03:04:05Z", DateParseHandling::DateTime) {
            Some(JsonValue::DateTime(_)) => {}
            other => panic!("expected DateTime, got {other:?}"),
        }
        match try_parse_date("2000-01-02T03:04:05Z", DateParseHandling::DateTimeOffset) {
            Some(JsonValue::DateTimeOffset(_)) => {}
            other => panic!("expected DateTimeOffset, got {other:?}"),
        }
    }
}
