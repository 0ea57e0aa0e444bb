// ABOUTME: Format-pattern tables and single-pattern matching for feed dates.
// ABOUTME: Handles numeric offsets, named timezone abbreviations, and zone-less UTC forms.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

/// How the trailing zone token of a pattern is interpreted.
#[derive(Debug, Clone, Copy)]
pub(crate) enum ZoneSpec {
    /// Named zone abbreviation (GMT, EST, ...) or a signed numeric offset.
    NamedOrOffset,
    /// Signed numeric offset only (+0000, -0730).
    Offset,
    /// No zone token; the datetime is taken as UTC.
    AssumeUtc,
}

/// One template in a pattern list: a strftime base without the zone token,
/// plus the zone handling for that position.
pub(crate) struct DateFormat {
    pub base: &'static str,
    pub zone: ZoneSpec,
}

// Month names use %B rather than %b: chrono's %B accepts both full names and
// 3-letter abbreviations when parsing, while %b rejects full names. Weekdays
// stay %a (strict 3 letters); non-standard forms like "Tues" are handled by
// the prefix strip in date_parse instead.

/// Strict RFC822/RFC3339-like variants, tried first.
pub(crate) const PRIMARY_FORMATS: &[DateFormat] = &[
    // "Mon, 2 Jan 2006 15:04:05 GMT"
    DateFormat {
        base: "%a, %e %B %Y %H:%M:%S",
        zone: ZoneSpec::NamedOrOffset,
    },
    // Without seconds: "Mon, 2 Jan 2006 15:04 GMT"
    DateFormat {
        base: "%a, %e %B %Y %H:%M",
        zone: ZoneSpec::NamedOrOffset,
    },
    // Without weekday: "2 Jan 2006 15:04:05 +0000"
    DateFormat {
        base: "%e %B %Y %H:%M:%S",
        zone: ZoneSpec::Offset,
    },
    // ISO-like with offset: "2006-01-02 15:04:05 +0000"
    DateFormat {
        base: "%Y-%m-%d %H:%M:%S",
        zone: ZoneSpec::Offset,
    },
];

/// Looser variants, tried only after locale cleanup or weekday stripping.
pub(crate) const BACKUP_FORMATS: &[DateFormat] = &[
    // Without weekday: "2 Jan 2006 15:04:05 GMT"
    DateFormat {
        base: "%e %B %Y %H:%M:%S",
        zone: ZoneSpec::NamedOrOffset,
    },
    // Without weekday or seconds: "2 Jan 2006 15:04 GMT"
    DateFormat {
        base: "%e %B %Y %H:%M",
        zone: ZoneSpec::NamedOrOffset,
    },
    // Comma after year, two-digit day: "Mon, 02 Jan 2006, 15:04:05 GMT"
    DateFormat {
        base: "%a, %d %B %Y, %H:%M:%S",
        zone: ZoneSpec::NamedOrOffset,
    },
    // Comma after year, single-digit day: "Mon, 2 Jan 2006, 15:04:05 GMT"
    DateFormat {
        base: "%a, %e %B %Y, %H:%M:%S",
        zone: ZoneSpec::NamedOrOffset,
    },
    // No zone at all: "Mon, 2 Jan 2006 15:04:05" (assumed UTC)
    DateFormat {
        base: "%a, %e %B %Y %H:%M:%S",
        zone: ZoneSpec::AssumeUtc,
    },
];

/// Fixed offsets for zone abbreviations (in seconds from UTC). Covers the
/// RFC822 named zones plus common European abbreviations seen in real feeds.
/// This is a lookup table for zone tokens, not a timezone database.
const ZONE_OFFSETS: &[(&str, i32)] = &[
    ("GMT", 0),
    ("UT", 0),
    ("UTC", 0),
    ("EST", -5 * 3600),
    ("EDT", -4 * 3600),
    ("CST", -6 * 3600),
    ("CDT", -5 * 3600),
    ("MST", -7 * 3600),
    ("MDT", -6 * 3600),
    ("PST", -8 * 3600),
    ("PDT", -7 * 3600),
    ("WET", 0),
    ("WEST", 3600),
    ("CET", 3600),
    ("CEST", 2 * 3600),
    ("EET", 2 * 3600),
    ("EEST", 3 * 3600),
    ("BST", 3600),
];

/// Attempts one format against the whole string.
/// The pattern is a parameter rather than shared mutable state, so concurrent
/// callers never race on the matching machinery.
pub(crate) fn try_format(s: &str, format: &DateFormat) -> Option<DateTime<Utc>> {
    match format.zone {
        ZoneSpec::Offset => parse_with_offset(s, format.base),
        ZoneSpec::NamedOrOffset => {
            parse_with_offset(s, format.base).or_else(|| parse_with_named_zone(s, format.base))
        }
        ZoneSpec::AssumeUtc => NaiveDateTime::parse_from_str(s, format.base)
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive)),
    }
}

fn parse_with_offset(s: &str, base: &str) -> Option<DateTime<Utc>> {
    let format = format!("{base} %z");
    DateTime::parse_from_str(s, &format)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Parses strings ending in a named zone abbreviation (GMT, EST, ...).
/// chrono's %Z doesn't parse these, so the abbreviation is stripped and its
/// fixed offset applied to the naive datetime that remains.
fn parse_with_named_zone(s: &str, base: &str) -> Option<DateTime<Utc>> {
    for (name, offset_secs) in ZONE_OFFSETS {
        if let Some(rest) = s.strip_suffix(name) {
            let rest = rest.trim_end();
            if let Ok(naive) = NaiveDateTime::parse_from_str(rest, base) {
                let offset = FixedOffset::east_opt(*offset_secs)?;
                let dt = offset.from_local_datetime(&naive).single()?;
                return Some(dt.with_timezone(&Utc));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_offset() {
        let format = &PRIMARY_FORMATS[2];
        let result = try_format("02 Jan 2006 15:04:05 +0000", format);
        assert_eq!(
            result,
            Some(Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap())
        );
    }

    #[test]
    fn test_named_zone_applies_offset() {
        // EST is UTC-5, so 15:04:05 EST = 20:04:05 UTC
        let format = &PRIMARY_FORMATS[0];
        let result = try_format("Mon, 02 Jan 2006 15:04:05 EST", format);
        assert_eq!(
            result,
            Some(Utc.with_ymd_and_hms(2006, 1, 2, 20, 4, 5).unwrap())
        );
    }

    #[test]
    fn test_assume_utc() {
        let format = &BACKUP_FORMATS[4];
        let result = try_format("Mon, 2 Jan 2006 15:04:05", format);
        assert_eq!(
            result,
            Some(Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap())
        );
    }

    #[test]
    fn test_full_month_name_accepted() {
        let format = &BACKUP_FORMATS[0];
        let result = try_format("6 November 2007 12:00:00 GMT", format);
        assert_eq!(
            result,
            Some(Utc.with_ymd_and_hms(2007, 11, 6, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_whole_string_match_required() {
        let format = &PRIMARY_FORMATS[2];
        assert!(try_format("02 Jan 2006 15:04:05 +0000 trailing", format).is_none());
    }

    #[test]
    fn test_unknown_zone_rejected() {
        let format = &PRIMARY_FORMATS[0];
        assert!(try_format("Mon, 02 Jan 2006 15:04:05 XYZ", format).is_none());
    }
}
