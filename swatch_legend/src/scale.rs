// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color scales as seen by the legend.
//!
//! The legend does not construct or configure scales; it only reads them through [`ColorScale`].
//! The three implementations here cover the common cases and are what the tests and demos use.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A single domain entry: a number or a category label.
#[derive(Clone, Debug, PartialEq)]
pub enum DomainValue {
    /// Numeric domain value.
    Number(f64),
    /// Categorical domain value.
    Category(String),
}

impl DomainValue {
    /// Returns the numeric value, if there is one.
    ///
    /// Categories that parse as a float (`"12.5"`) are treated as numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            Self::Category(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Category(s) => f.write_str(s),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_string())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

/// The read-only view of a color scale that legends need.
pub trait ColorScale {
    /// Domain values, in scale order.
    fn domain(&self) -> &[DomainValue];

    /// Range colors, in scale order.
    fn range(&self) -> &[Color];

    /// Maps a domain value to a color.
    ///
    /// Linear legends resample the scale through this method.
    fn color_at(&self, value: f64) -> Color;
}

/// A continuous color scale interpolating between color stops.
///
/// Domain and range are paired positionally; extra entries on the longer side are ignored for
/// interpolation. Inputs outside the domain clamp to the end colors.
#[derive(Clone, Debug)]
pub struct LinearColorScale {
    domain: Vec<DomainValue>,
    range: Vec<Color>,
    stops: Vec<(f64, Color)>,
}

impl LinearColorScale {
    /// Creates a scale over a numeric domain.
    pub fn new(
        domain: impl IntoIterator<Item = f64>,
        range: impl IntoIterator<Item = Color>,
    ) -> Self {
        let domain: Vec<f64> = domain.into_iter().collect();
        let range: Vec<Color> = range.into_iter().collect();
        let mut stops: Vec<(f64, Color)> = domain
            .iter()
            .copied()
            .zip(range.iter().copied())
            .filter(|(d, _)| !d.is_nan())
            .collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            domain: domain.into_iter().map(DomainValue::Number).collect(),
            range,
            stops,
        }
    }
}

impl ColorScale for LinearColorScale {
    fn domain(&self) -> &[DomainValue] {
        &self.domain
    }

    fn range(&self) -> &[Color] {
        &self.range
    }

    fn color_at(&self, value: f64) -> Color {
        let (Some(&(d0, c0)), Some(&(d1, c1))) = (self.stops.first(), self.stops.last()) else {
            return Color::TRANSPARENT;
        };
        if value.is_nan() {
            return Color::TRANSPARENT;
        }
        if value <= d0 {
            return c0;
        }
        if value >= d1 {
            return c1;
        }
        let hi = self.stops.partition_point(|(d, _)| *d <= value);
        let (lo_d, lo_c) = self.stops[hi - 1];
        let (hi_d, hi_c) = self.stops[hi];
        let span = hi_d - lo_d;
        if span == 0.0 {
            return lo_c;
        }
        lerp_color(lo_c, hi_c, ((value - lo_d) / span) as f32)
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let mut components = [0.0_f32; 4];
    for (i, c) in components.iter_mut().enumerate() {
        *c = a.components[i] + (b.components[i] - a.components[i]) * t;
    }
    Color::new(components)
}

/// A quantile color scale: sorted samples split into one bucket per range color.
#[derive(Clone, Debug)]
pub struct QuantileColorScale {
    domain: Vec<DomainValue>,
    range: Vec<Color>,
    thresholds: Vec<f64>,
}

impl QuantileColorScale {
    /// Creates a scale from sample values and bucket colors.
    ///
    /// `NaN` samples are dropped; the rest are sorted ascending.
    pub fn new(
        samples: impl IntoIterator<Item = f64>,
        range: impl IntoIterator<Item = Color>,
    ) -> Self {
        let mut sorted: Vec<f64> = samples.into_iter().filter(|v| !v.is_nan()).collect();
        sorted.sort_by(f64::total_cmp);
        let range: Vec<Color> = range.into_iter().collect();
        let buckets = range.len();
        let thresholds = (1..buckets)
            .map(|i| quantile_sorted(&sorted, i as f64 / buckets as f64))
            .collect();
        Self {
            domain: sorted.into_iter().map(DomainValue::Number).collect(),
            range,
            thresholds,
        }
    }

    /// Bucket boundaries (one fewer than the number of range colors).
    pub fn quantiles(&self) -> &[f64] {
        &self.thresholds
    }
}

/// Interpolated quantile of an ascending slice (R-7 / linear between closest ranks).
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let Some(&first) = sorted.first() else {
        return f64::NAN;
    };
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor();
    let i = lo as usize;
    match sorted.get(i + 1) {
        Some(&next) => sorted[i] + (next - sorted[i]) * (h - lo),
        None => sorted.get(i).copied().unwrap_or(first),
    }
}

impl ColorScale for QuantileColorScale {
    fn domain(&self) -> &[DomainValue] {
        &self.domain
    }

    fn range(&self) -> &[Color] {
        &self.range
    }

    fn color_at(&self, value: f64) -> Color {
        if value.is_nan() {
            return Color::TRANSPARENT;
        }
        let bucket = self.thresholds.partition_point(|t| *t <= value);
        self.range
            .get(bucket)
            .copied()
            .unwrap_or(Color::TRANSPARENT)
    }
}

/// An ordinal color scale: one color per category, recycled when the range is shorter.
#[derive(Clone, Debug)]
pub struct OrdinalColorScale {
    domain: Vec<DomainValue>,
    range: Vec<Color>,
}

impl OrdinalColorScale {
    /// Creates a scale from categories and colors.
    pub fn new<D: Into<DomainValue>>(
        domain: impl IntoIterator<Item = D>,
        range: impl IntoIterator<Item = Color>,
    ) -> Self {
        Self {
            domain: domain.into_iter().map(Into::into).collect(),
            range: range.into_iter().collect(),
        }
    }

    /// Returns the color assigned to a category, if it is in the domain.
    pub fn color_for(&self, category: &str) -> Option<Color> {
        let index = self
            .domain
            .iter()
            .position(|d| matches!(d, DomainValue::Category(c) if c == category))?;
        self.nth_color(index)
    }

    fn nth_color(&self, index: usize) -> Option<Color> {
        if self.range.is_empty() {
            return None;
        }
        Some(self.range[index % self.range.len()])
    }
}

impl ColorScale for OrdinalColorScale {
    fn domain(&self) -> &[DomainValue] {
        &self.domain
    }

    fn range(&self) -> &[Color] {
        &self.range
    }

    /// Treats `value` as a domain index.
    fn color_at(&self, value: f64) -> Color {
        if value.is_nan() || value < 0.0 {
            return Color::TRANSPARENT;
        }
        self.nth_color(value as usize).unwrap_or(Color::TRANSPARENT)
    }
}
