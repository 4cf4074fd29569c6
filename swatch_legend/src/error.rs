// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend errors.

extern crate alloc;

use alloc::string::String;

/// Errors returned by [`crate::render_legend`].
///
/// Every error is reported before anything is appended to the target surface.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LegendError {
    /// The scale type tag is not one of `linear`, `quantile` or `ordinal`.
    #[error("unsupported scale type: {0:?}")]
    UnsupportedScaleType(String),

    /// The target selector does not name a surface known to the host.
    #[error("no surface found for selector {0:?}")]
    MissingTarget(String),
}
