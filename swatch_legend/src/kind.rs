// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale kinds understood by the legend.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::LegendError;
use crate::marks::TextAnchor;

/// Which sampling and labeling policy a legend uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Continuous scale, resampled into a fixed number of boxes. Labels on the ends only.
    Linear,
    /// Quantile scale, one box per range color. Labels on the ends only.
    Quantile,
    /// Ordinal scale, one box per domain entry, each labeled.
    Ordinal,
}

impl ScaleKind {
    /// Horizontal gap between adjacent swatches.
    pub fn box_spacing(self) -> f64 {
        match self {
            Self::Ordinal => 3.0,
            Self::Linear | Self::Quantile => 0.0,
        }
    }

    /// Anchor used for swatch labels.
    pub fn label_anchor(self) -> TextAnchor {
        match self {
            Self::Ordinal => TextAnchor::Start,
            Self::Linear | Self::Quantile => TextAnchor::Middle,
        }
    }

    /// The lowercase tag for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quantile => "quantile",
            Self::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleKind {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "quantile" => Ok(Self::Quantile),
            "ordinal" => Ok(Self::Ordinal),
            other => Err(LegendError::UnsupportedScaleType(other.to_string())),
        }
    }
}
