// ABOUTME: Best-effort date parsing library for syndication feed timestamps.
// ABOUTME: Converts loosely-formatted RFC822-family date strings into UTC datetimes.

pub mod date_parse;
mod formats;
mod locale;

pub use date_parse::parse_rfc822_date;
