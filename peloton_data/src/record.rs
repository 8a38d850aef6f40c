// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::time::{format_race_time, iso_timestamp, parse_race_time, seconds_of_day};

/// One rider's result as it appears on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Race time as `M:S` text. `None` when missing or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Finishing place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<u32>,
    /// Race time in seconds, as supplied by the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
    /// Rider name.
    #[serde(default)]
    pub name: String,
    /// Race year. `None` when missing or `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Country code.
    #[serde(default)]
    pub nationality: String,
    /// Doping allegation text; empty when there is none.
    #[serde(default)]
    pub doping: String,
    /// Source link for the allegation.
    #[serde(default, rename = "URL", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A [`Record`] with its race time parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedRecord {
    /// The record as received.
    pub record: Record,
    /// Parsed time-of-day, `None` when [`Record::time`] is missing or malformed.
    pub time: Option<NaiveTime>,
}

impl ParsedRecord {
    /// Parses `record.time`.
    pub fn new(record: Record) -> Self {
        let time = record.time.as_deref().and_then(parse_race_time);
        Self { record, time }
    }

    /// Whether the record can be plotted: it needs both a year and a parseable time.
    pub fn is_valid(&self) -> bool {
        self.record.year.is_some() && self.time.is_some()
    }

    /// Race year.
    pub fn year(&self) -> Option<i32> {
        self.record.year
    }

    /// Time as seconds since midnight.
    pub fn seconds(&self) -> Option<f64> {
        self.time.map(seconds_of_day)
    }

    /// Time as an ISO 8601 timestamp.
    pub fn iso_time(&self) -> Option<String> {
        self.time.map(iso_timestamp)
    }

    /// Time as zero-padded `MM:SS`.
    pub fn display_time(&self) -> Option<String> {
        self.time.map(format_race_time)
    }
}

impl From<Record> for ParsedRecord {
    fn from(record: Record) -> Self {
        Self::new(record)
    }
}

/// Parses every record's time. Order is preserved; records that cannot be plotted are kept
/// and logged.
pub fn parse_records(records: Vec<Record>) -> Vec<ParsedRecord> {
    let parsed: Vec<ParsedRecord> = records.into_iter().map(ParsedRecord::new).collect();
    for p in parsed.iter().filter(|p| !p.is_valid()) {
        log::warn!(
            "skipping record for {:?}: year {:?}, time {:?}",
            p.record.name,
            p.record.year,
            p.record.time
        );
    }
    parsed
}
