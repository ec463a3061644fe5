//! Date/time extraction for UPI receipts.
//!
//! Receipts carry timestamps in several shapes ("15 Mar 2024, 10:22 AM",
//! "10:22 AM on 15 Mar 2024", "15/03/2024 14:59"). Formats are tried in a
//! fixed priority order and the first valid calendar date wins; a date is
//! never guessed from an unparseable string.

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Captures;

use super::patterns::{DATETIME_TEXTUAL, DATETIME_TIME_ON_DATE, DATE_NUMERIC, DATE_TEXTUAL};
use super::{FieldRule, MatchScope, Variant};
use crate::models::config::ExtractionConfig;

lazy_static! {
    pub static ref TXN_TIME: FieldRule<NaiveDateTime> = FieldRule::new(
        "txn_time",
        vec![
            Variant::new("textual-datetime", MatchScope::Window, &DATETIME_TEXTUAL, parse_textual),
            Variant::new(
                "time-on-date",
                MatchScope::Window,
                &DATETIME_TIME_ON_DATE,
                parse_time_on_date,
            ),
            Variant::new("numeric-date", MatchScope::Line, &DATE_NUMERIC, parse_numeric)
                .fallback(),
            Variant::new("textual-date", MatchScope::Line, &DATE_TEXTUAL, parse_textual_date)
                .fallback(),
        ],
    );
}

const TEXTUAL_FORMATS: &[&str] = &["%d %b %Y %I:%M %p", "%d %B %Y %I:%M %p"];
const TIME_ON_DATE_FORMATS: &[&str] = &["%I:%M %p on %d %b %Y", "%I:%M %p on %d %B %Y"];
const DATE_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y"];

fn parse_textual(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<NaiveDateTime> {
    first_format(&tidy(&caps[1]), TEXTUAL_FORMATS)
}

fn parse_time_on_date(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<NaiveDateTime> {
    first_format(&tidy(&caps[1]), TIME_ON_DATE_FORMATS)
}

fn parse_textual_date(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<NaiveDateTime> {
    let s = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&s, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parse_numeric(caps: &Captures<'_>, _config: &ExtractionConfig) -> Option<NaiveDateTime> {
    let a: u32 = caps[1].parse().ok()?;
    let b: u32 = caps[2].parse().ok()?;
    let year = widen_year(caps[3].parse().ok()?);

    // Day-month-year first, month/day/year only as a fallback.
    let date = NaiveDate::from_ymd_opt(year, b, a)
        .or_else(|| NaiveDate::from_ymd_opt(year, a, b))?;

    let (hour, minute) = match (caps.get(4), caps.get(5)) {
        (Some(hour), Some(minute)) => {
            let mut hour: u32 = hour.as_str().parse().ok()?;
            let minute: u32 = minute.as_str().parse().ok()?;
            if let Some(meridiem) = caps.get(6) {
                let pm = meridiem.as_str().eq_ignore_ascii_case("p");
                if pm && hour < 12 {
                    hour += 12;
                }
                if !pm && hour == 12 {
                    hour = 0;
                }
            }
            (hour, minute)
        }
        _ => (0, 0),
    };

    date.and_hms_opt(hour, minute, 0)
}

/// Clean a captured timestamp for strptime: drop commas and filler "at",
/// turn OCR-mangled "10.22" times into "10:22", re-collapse whitespace
/// (window captures may span a line break).
fn tidy(s: &str) -> String {
    s.replace(',', "")
        .replace('.', ":")
        .split_whitespace()
        .filter(|word| !word.eq_ignore_ascii_case("at"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn first_format(s: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
}

/// Widen a two-digit year: 00-50 is 2000s, 51-99 is 1900s.
fn widen_year(year: i32) -> i32 {
    if year < 100 {
        if year <= 50 {
            2000 + year
        } else {
            1900 + year
        }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::FieldOutcome;
    use crate::normalize::normalize;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_textual_datetime() {
        let text = normalize("15 Mar 2024, 10:22 AM");
        assert_eq!(
            TXN_TIME.apply(&text),
            FieldOutcome::Found {
                value: datetime(2024, 3, 15, 10, 22),
                variant: 0,
            }
        );
    }

    #[test]
    fn test_textual_datetime_with_full_month_and_pm() {
        let text = normalize("5 March 2024 at 7.45 pm");
        assert_eq!(TXN_TIME.apply(&text).value(), Some(&datetime(2024, 3, 5, 19, 45)));
    }

    #[test]
    fn test_time_on_date() {
        let text = normalize("Paid at 10:22 AM on 15 Mar 2024");
        assert_eq!(
            TXN_TIME.apply(&text),
            FieldOutcome::Found {
                value: datetime(2024, 3, 15, 10, 22),
                variant: 1,
            }
        );
    }

    #[test]
    fn test_numeric_day_month_year() {
        let text = normalize("15/03/2024 14:59");
        assert_eq!(
            TXN_TIME.apply(&text),
            FieldOutcome::Found {
                value: datetime(2024, 3, 15, 14, 59),
                variant: 2,
            }
        );
    }

    #[test]
    fn test_numeric_month_day_year_fallback() {
        // Day-month reading is impossible here, so month/day/year applies.
        let text = normalize("03/25/2024");
        assert_eq!(TXN_TIME.apply(&text).value(), Some(&datetime(2024, 3, 25, 0, 0)));
    }

    #[test]
    fn test_numeric_with_two_digit_year() {
        let text = normalize("15.01.24");
        assert_eq!(TXN_TIME.apply(&text).value(), Some(&datetime(2024, 1, 15, 0, 0)));
    }

    #[test]
    fn test_numeric_pm_time() {
        let text = normalize("15-03-2024 at 4:30 PM");
        assert_eq!(TXN_TIME.apply(&text).value(), Some(&datetime(2024, 3, 15, 16, 30)));
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        assert_eq!(TXN_TIME.apply(&normalize("31/02/2024")), FieldOutcome::NotFound);
    }

    #[test]
    fn test_full_datetime_preferred_over_bare_date() {
        // Both the textual-datetime and textual-date variants match this
        // line; the earlier-declared one must supply the value.
        let text = normalize("15 Mar 2024, 10:22 AM");
        match TXN_TIME.apply(&text) {
            FieldOutcome::Found { value, variant } => {
                assert_eq!(variant, 0);
                assert_eq!(value, datetime(2024, 3, 15, 10, 22));
            }
            other => panic!("expected found outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_textual_date_without_time_is_midnight() {
        let text = normalize("15 Mar 2024");
        assert_eq!(
            TXN_TIME.apply(&text),
            FieldOutcome::Found {
                value: datetime(2024, 3, 15, 0, 0),
                variant: 3,
            }
        );
    }

    #[test]
    fn test_no_date_is_not_found() {
        assert_eq!(TXN_TIME.apply(&normalize("Paid to John Doe")), FieldOutcome::NotFound);
    }
}
