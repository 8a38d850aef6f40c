// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Race-time text (`M:S`) to time-of-day values and back.

use chrono::{NaiveDate, NaiveTime, Timelike};

/// Parses a strict `minutes:seconds` race time.
///
/// Accepts one or two ASCII digits on each side of a single `:`, with both parts in `0..=59`.
/// Anything else (whitespace, signs, hours, extra separators) yields `None`.
pub fn parse_race_time(text: &str) -> Option<NaiveTime> {
    let (minutes, seconds) = text.split_once(':')?;
    let minutes = parse_part(minutes)?;
    let seconds = parse_part(seconds)?;
    NaiveTime::from_hms_opt(0, minutes, seconds)
}

fn parse_part(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u32 = part.parse().ok()?;
    (value <= 59).then_some(value)
}

/// Formats a time-of-day as zero-padded `MM:SS`.
pub fn format_race_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.minute(), time.second())
}

/// Formats a time-of-day as an ISO 8601 UTC timestamp on 1900-01-01, with milliseconds.
///
/// `36:55` becomes `1900-01-01T00:36:55.000Z`.
pub fn iso_timestamp(time: NaiveTime) -> String {
    let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default();
    date.and_time(time)
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

/// Seconds since midnight, as the temporal scale's domain unit.
pub fn seconds_of_day(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_times() {
        let t = parse_race_time("36:55").unwrap();
        assert_eq!((t.minute(), t.second()), (36, 55));
        assert_eq!(seconds_of_day(t), 2215.0);
    }

    #[test]
    fn single_digit_parts_are_accepted() {
        let t = parse_race_time("1:5").unwrap();
        assert_eq!(format_race_time(t), "01:05");
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in [
            "", ":", "36:", ":55", "3655", "36:60", "60:00", "-1:30", " 36:55", "36:55 ", "1:02:03",
            "123:45", "36:5a", "+3:04",
        ] {
            assert_eq!(parse_race_time(bad), None, "{bad:?} should be rejected");
        }
    }

    #[test]
    fn parse_then_format_is_zero_padded_identity_for_two_digit_input() {
        for m in 0..60 {
            for s in [0, 9, 10, 59] {
                let text = format!("{m:02}:{s:02}");
                let t = parse_race_time(&text).unwrap();
                assert_eq!(format_race_time(t), text);
            }
        }
    }

    #[test]
    fn iso_timestamp_uses_reference_date() {
        let t = parse_race_time("36:28").unwrap();
        assert_eq!(iso_timestamp(t), "1900-01-01T00:36:28.000Z");
    }
}
