// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where the dataset bytes come from.

use std::future::Future;
use std::time::Duration;

use crate::error::LoadError;
use crate::record::Record;

/// The published cyclist dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// A one-shot provider of the raw dataset body.
pub trait DataSource {
    /// Fetches the whole body.
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send;
}

/// Fetches the dataset with a single HTTP GET. No retries.
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DATASET_URL)
    }
}

impl HttpSource {
    /// Creates a source for `url` with a 15 second request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The requested URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new())
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send {
        let client = self.client();
        let url = self.url.clone();
        async move {
            log::debug!("GET {url}");
            let resp = client.get(url.as_str()).send().await?;
            let status = resp.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }
            Ok(resp.bytes().await?.to_vec())
        }
    }
}

/// An in-memory body, for offline runs and tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    body: Vec<u8>,
}

impl StaticSource {
    /// Serves `body` verbatim.
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }

    /// Serves `records` encoded as a JSON array.
    pub fn from_records(records: &[Record]) -> Result<Self, LoadError> {
        Ok(Self::new(serde_json::to_vec(records)?))
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send {
        let body = self.body.clone();
        async move { Ok(body) }
    }
}

/// A source whose fetch always fails with the given HTTP status.
#[derive(Clone, Copy, Debug)]
pub struct FailingSource {
    status: u16,
}

impl FailingSource {
    /// Fails with `status`.
    pub fn new(status: u16) -> Self {
        Self { status }
    }
}

impl Default for FailingSource {
    fn default() -> Self {
        Self::new(503)
    }
}

impl DataSource for FailingSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<u8>, LoadError>> + Send {
        let status = self.status;
        async move { Err(LoadError::Status(status)) }
    }
}

/// Decodes a JSON array of records.
///
/// The body must be an array. Elements that do not decode as a [`Record`] are logged and
/// skipped, so one bad entry never empties the chart.
pub fn decode_records(body: &[u8]) -> Result<Vec<Record>, LoadError> {
    let elements: Vec<serde_json::Value> = serde_json::from_slice(body)?;
    let mut records = Vec::with_capacity(elements.len());
    for (i, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Record>(element) {
            Ok(record) => records.push(record),
            Err(e) => log::warn!("skipping dataset entry {i}: {e}"),
        }
    }
    Ok(records)
}

/// Fetches and decodes the dataset once.
///
/// Failures are logged at `error` level and returned.
pub async fn load_records(source: &impl DataSource) -> Result<Vec<Record>, LoadError> {
    let result = match source.fetch().await {
        Ok(body) => decode_records(&body),
        Err(e) => Err(e),
    };
    match &result {
        Ok(records) => log::debug!("loaded {} records", records.len()),
        Err(e) => log::error!("failed to load dataset: {e}"),
    }
    result
}
