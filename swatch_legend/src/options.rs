// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend options and their defaults.
//!
//! [`LegendOptions`] is what callers fill in; unset fields fall back to defaults when the options
//! are resolved. Zero and `NaN` sizes, a zero box count and an empty title all count as unset.

extern crate alloc;

use alloc::string::String;

/// Default swatch width.
pub const DEFAULT_BOX_WIDTH: f64 = 20.0;
/// Default swatch height.
pub const DEFAULT_BOX_HEIGHT: f64 = 20.0;
/// Default number of boxes a linear scale is resampled into.
pub const DEFAULT_LINEAR_BOXES: usize = 9;

/// Caller-facing legend options.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegendOptions {
    /// Requested swatch width.
    pub box_width: Option<f64>,
    /// Requested swatch height.
    pub box_height: Option<f64>,
    /// Title shown under the swatches.
    pub title: Option<String>,
    /// Stretch swatches to fill the whole target regardless of the requested size.
    pub fill: Option<bool>,
    /// Number of boxes for linear scales.
    pub linear_boxes: Option<usize>,
}

impl LegendOptions {
    /// Creates options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested swatch width.
    pub fn with_box_width(mut self, box_width: f64) -> Self {
        self.box_width = Some(box_width);
        self
    }

    /// Sets the requested swatch height.
    pub fn with_box_height(mut self, box_height: f64) -> Self {
        self.box_height = Some(box_height);
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets fill mode.
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the number of boxes used for linear scales.
    pub fn with_linear_boxes(mut self, linear_boxes: usize) -> Self {
        self.linear_boxes = Some(linear_boxes);
        self
    }

    /// Merges defaults into the unset fields.
    pub fn resolve(&self) -> ResolvedOptions {
        ResolvedOptions {
            box_width: size_or(self.box_width, DEFAULT_BOX_WIDTH),
            box_height: size_or(self.box_height, DEFAULT_BOX_HEIGHT),
            title: self.title.clone().filter(|t| !t.is_empty()),
            fill: self.fill.unwrap_or(false),
            linear_boxes: self
                .linear_boxes
                .filter(|&n| n != 0)
                .unwrap_or(DEFAULT_LINEAR_BOXES),
        }
    }
}

fn size_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => default,
    }
}

/// Options with every default applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedOptions {
    /// Requested swatch width.
    pub box_width: f64,
    /// Requested swatch height.
    pub box_height: f64,
    /// Non-empty title, if any.
    pub title: Option<String>,
    /// Fill mode.
    pub fill: bool,
    /// Number of boxes for linear scales (never zero).
    pub linear_boxes: usize,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        LegendOptions::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn unset_fields_take_defaults() {
        let opts = LegendOptions::new().resolve();
        assert_eq!(opts.box_width, DEFAULT_BOX_WIDTH);
        assert_eq!(opts.box_height, DEFAULT_BOX_HEIGHT);
        assert_eq!(opts.title, None);
        assert!(!opts.fill);
        assert_eq!(opts.linear_boxes, DEFAULT_LINEAR_BOXES);
    }

    #[test]
    fn set_fields_override() {
        let opts = LegendOptions::new()
            .with_box_width(12.0)
            .with_box_height(8.0)
            .with_title("Rainfall")
            .with_fill(true)
            .with_linear_boxes(4)
            .resolve();
        assert_eq!(opts.box_width, 12.0);
        assert_eq!(opts.box_height, 8.0);
        assert_eq!(opts.title.as_deref(), Some("Rainfall"));
        assert!(opts.fill);
        assert_eq!(opts.linear_boxes, 4);
    }

    #[test]
    fn zero_and_empty_fall_back_to_defaults() {
        let opts = LegendOptions::new()
            .with_box_width(0.0)
            .with_box_height(f64::NAN)
            .with_title("")
            .with_linear_boxes(0)
            .resolve();
        assert_eq!(opts.box_width, DEFAULT_BOX_WIDTH);
        assert_eq!(opts.box_height, DEFAULT_BOX_HEIGHT);
        assert_eq!(opts.title, None);
        assert_eq!(opts.linear_boxes, DEFAULT_LINEAR_BOXES);
    }

    #[test]
    fn negative_sizes_are_kept() {
        let opts = LegendOptions::new().with_box_width(-5.0).resolve();
        assert_eq!(opts.box_width, -5.0);
    }
}
