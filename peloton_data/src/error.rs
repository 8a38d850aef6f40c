// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Why the dataset could not be loaded.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request could not be sent or its body could not be read.
    #[error("dataset request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("dataset request returned status {0}")]
    Status(u16),
    /// The body is not a JSON array of records.
    #[error("dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
