// ABOUTME: Locale cleanup for non-English feed dates.
// ABOUTME: Rewrites Italian weekday/month tokens to English so the format patterns can match.

use once_cell::sync::Lazy;
use regex::Regex;

// Applied strictly in order, each pass scanning the output of the previous
// one. Weekday entries keep the trailing comma so "mar," (martedì) does not
// collide with the month "mar". The nov->nov entry is a no-op kept so the
// month table stays one-to-one with the Italian calendar tokens.
const REWRITES: &[(&str, &str)] = &[
    ("lun,", "mon,"),
    ("mar,", "tue,"),
    ("mer,", "wed,"),
    ("gio,", "thu,"),
    ("ven,", "fri,"),
    ("sab,", "sat,"),
    ("dom,", "sun,"),
    ("gen", "jan"),
    ("mag", "may"),
    ("giu", "jun"),
    ("lug", "jul"),
    ("ago", "aug"),
    ("set", "sep"),
    ("ott", "oct"),
    ("nov", "nov"),
    ("dic", "dec"),
];

static COMPILED_REWRITES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    REWRITES
        .iter()
        .map(|&(from, to)| (Regex::new(&format!("(?i){from}")).unwrap(), to))
        .collect()
});

/// Rewrites Italian date tokens to their English equivalents,
/// case-insensitively, replacing every occurrence.
pub(crate) fn clean_date(s: &str) -> String {
    let mut cleaned = s.to_string();
    for (re, replacement) in COMPILED_REWRITES.iter() {
        cleaned = re.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_and_month_rewritten() {
        assert_eq!(
            clean_date("dom, 6 gen 2008 12:00:00 GMT"),
            "sun, 6 jan 2008 12:00:00 GMT"
        );
        assert_eq!(
            clean_date("ven, 15 ago 2008 09:30:00 +0200"),
            "fri, 15 aug 2008 09:30:00 +0200"
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(clean_date("Dom, 6 Gen 2008"), "sun, 6 jan 2008");
        assert_eq!(clean_date("SAB, 22 DIC 2007"), "sat, 22 dec 2007");
    }

    #[test]
    fn test_nov_passes_through() {
        assert_eq!(
            clean_date("sab, 22 nov 2008 12:00:00 GMT"),
            "sat, 22 nov 2008 12:00:00 GMT"
        );
    }

    #[test]
    fn test_english_input_unchanged() {
        assert_eq!(
            clean_date("Mon, 02 Jan 2006 15:04:05 GMT"),
            "Mon, 02 Jan 2006 15:04:05 GMT"
        );
    }

    #[test]
    fn test_bare_weekday_without_comma_unchanged() {
        // Weekday rewrites require the trailing comma.
        assert_eq!(clean_date("dom 6 jan 2008"), "dom 6 jan 2008");
    }
}
