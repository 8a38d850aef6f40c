// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclist race records for the peloton scatterplot.
//!
//! - [`Record`] is the wire model, decoded verbatim from the published JSON array.
//! - [`ParsedRecord`] pairs a record with its race time parsed into a time-of-day.
//! - [`DataSource`] abstracts the one-shot fetch; [`HttpSource`] is the network implementation.

mod error;
mod record;
mod source;
mod time;

pub use error::LoadError;
pub use record::{ParsedRecord, Record, parse_records};
pub use source::{
    DATASET_URL, DataSource, FailingSource, HttpSource, StaticSource, decode_records,
    load_records,
};
pub use time::{format_race_time, iso_timestamp, parse_race_time, seconds_of_day};
