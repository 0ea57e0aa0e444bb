// ABOUTME: Four-tier fallback parsing for RFC822-family feed dates.
// ABOUTME: Tries strict patterns, locale cleanup, backup patterns, then weekday-prefix stripping.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::formats::{try_format, DateFormat, BACKUP_FORMATS, PRIMARY_FORMATS};
use crate::locale::clean_date;

// A leading alphabetic token plus ", ". Deliberately broader than the known
// weekday names: feeds write "Tues," or "Thurs,", which the pattern engine
// rejects even when the rest of the date is fine.
static WEEKDAY_PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+, (.+)$").unwrap());

/// Parses a loosely-formatted RFC822-family date string into a UTC datetime.
/// Returns None when no format matches; unparsable input is a normal outcome,
/// not an error.
///
/// Attempts escalate through four tiers, each short-circuiting on the first
/// pattern that consumes the whole string:
/// 1. primary patterns against the trimmed input
/// 2. primary patterns after rewriting Italian weekday/month tokens
/// 3. backup patterns against the same rewritten string
/// 4. backup patterns after dropping a leading "<word>, " weekday prefix
pub fn parse_rfc822_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(dt) = attempt_parsing(s, PRIMARY_FORMATS) {
        return Some(dt);
    }

    // Fix for some Italian feeds
    let cleaned = clean_date(s);
    if let Some(dt) = attempt_parsing(&cleaned, PRIMARY_FORMATS) {
        return Some(dt);
    }
    if let Some(dt) = attempt_parsing(&cleaned, BACKUP_FORMATS) {
        return Some(dt);
    }

    // The strip works on the original trimmed string, not the cleaned one.
    let stripped = strip_weekday_prefix(s);
    attempt_parsing(&stripped, BACKUP_FORMATS)
}

fn attempt_parsing(s: &str, formats: &[DateFormat]) -> Option<DateTime<Utc>> {
    formats.iter().find_map(|format| try_format(s, format))
}

/// Drops a leading alphabetic token followed by ", ", whether or not it is a
/// recognized weekday name. Strings without that shape pass through unchanged.
fn strip_weekday_prefix(s: &str) -> Cow<'_, str> {
    WEEKDAY_PREFIX_RE.replace(s, "$1")
}
