// Copyright 2025 the Peloton Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peloton_core::SurfaceError;
use peloton_data::LoadError;
use thiserror::Error;

/// Errors surfaced by [`crate::ScatterplotView`].
#[derive(Error, Debug)]
pub enum ViewError {
    /// The dataset could not be fetched or decoded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The surface rejected an update.
    #[error("surface update failed: {0}")]
    Surface(#[from] SurfaceError),
}
