// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend geometry.
//!
//! Swatches are laid out left to right starting at the group origin. The requested box size is
//! used as-is when it fits the target; otherwise (or in fill mode) each dimension is recomputed so
//! the legend spans the target exactly. Width and height are fitted independently.

use kurbo::{Point, Rect};

use crate::kind::ScaleKind;
use crate::options::ResolvedOptions;
use crate::surface::Size;

/// Extra vertical space reserved below the labels when a title is present.
pub const TITLE_PADDING: f64 = 11.0;

/// Space kept clear around the swatch strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding (room for labels).
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 2.0,
            right: 4.0,
            bottom: 10.0,
            left: 4.0,
        }
    }
}

/// Effective geometry of one legend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendLayout {
    /// Scale kind the layout was computed for.
    pub kind: ScaleKind,
    /// Number of swatches.
    pub count: usize,
    /// Padding around the strip.
    pub padding: Padding,
    /// Gap after each swatch.
    pub spacing: f64,
    /// Vertical space reserved for the title (zero without one).
    pub title_padding: f64,
    /// Effective swatch width.
    pub box_width: f64,
    /// Effective swatch height.
    pub box_height: f64,
    /// Whether the width was recomputed to fit the target.
    pub fitted_width: bool,
    /// Whether the height was recomputed to fit the target.
    pub fitted_height: bool,
}

impl LegendLayout {
    /// Computes the layout for `count` swatches in a target of the given size.
    pub fn compute(
        kind: ScaleKind,
        count: usize,
        options: &ResolvedOptions,
        target: Size,
    ) -> Self {
        let padding = Padding::default();
        let spacing = kind.box_spacing();
        let title_padding = if options.title.is_some() {
            TITLE_PADDING
        } else {
            0.0
        };
        let n = count as f64;

        let mut box_width = options.box_width;
        let required_width = (box_width + spacing) * n + padding.right + padding.left;
        let fitted_width = count > 0 && (options.fill || required_width > target.width);
        if fitted_width {
            box_width = (target.width - padding.left - padding.right - spacing * n) / n;
        }

        let mut box_height = options.box_height;
        let required_height = box_height + padding.top + padding.bottom + title_padding;
        let fitted_height = options.fill || required_height > target.height;
        if fitted_height {
            box_height = target.height - padding.top - padding.bottom - title_padding;
        }

        Self {
            kind,
            count,
            padding,
            spacing,
            title_padding,
            box_width,
            box_height,
            fitted_width,
            fitted_height,
        }
    }

    /// Where the legend group is anchored within the target.
    pub fn group_origin(&self) -> Point {
        Point::new(self.padding.left, self.padding.top)
    }

    /// Horizontal distance between the left edges of adjacent swatches.
    pub fn stride(&self) -> f64 {
        self.box_width + self.spacing
    }

    /// Width covered by all swatches and their gaps.
    pub fn strip_width(&self) -> f64 {
        self.stride() * self.count as f64
    }

    /// Swatch `i` in group coordinates.
    pub fn swatch_rect(&self, i: usize) -> Rect {
        let x = i as f64 * self.stride();
        Rect::new(x, 0.0, x + self.box_width, self.box_height)
    }

    /// Anchor point of the label under swatch `i`.
    ///
    /// Ordinal labels start at the swatch's left edge; others are centered on the swatch.
    pub fn label_pos(&self, i: usize) -> Point {
        let offset = match self.kind {
            ScaleKind::Ordinal => 0.0,
            ScaleKind::Linear | ScaleKind::Quantile => self.box_width / 2.0,
        };
        Point::new(i as f64 * self.stride() + offset, self.box_height + 2.0)
    }

    /// Anchor point of the title.
    ///
    /// `count * box_width / 2`: swatch gaps are not included.
    pub fn title_pos(&self) -> Point {
        Point::new(
            self.count as f64 * self.box_width / 2.0,
            self.box_height + self.title_padding,
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::options::LegendOptions;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn requested_size_is_kept_when_it_fits() {
        let opts = LegendOptions::new().resolve();
        let layout = LegendLayout::compute(ScaleKind::Ordinal, 3, &opts, Size::new(100.0, 40.0));
        assert!(!layout.fitted_width);
        assert!(!layout.fitted_height);
        assert_eq!(layout.box_width, 20.0);
        assert_eq!(layout.box_height, 20.0);
        assert_eq!(layout.spacing, 3.0);
    }

    #[test]
    fn width_shrinks_when_strip_overflows() {
        let opts = LegendOptions::new().resolve();
        // (20 + 3) * 5 + 8 = 123 > 100
        let layout = LegendLayout::compute(ScaleKind::Ordinal, 5, &opts, Size::new(100.0, 40.0));
        assert!(layout.fitted_width);
        assert!(close(layout.box_width, (100.0 - 4.0 - 4.0 - 15.0) / 5.0));
        assert!(close(layout.strip_width(), 92.0));
    }

    #[test]
    fn height_shrinks_independently_of_count() {
        let opts = LegendOptions::new().with_title("t").resolve();
        // 20 + 2 + 10 + 11 = 43 > 40
        let layout = LegendLayout::compute(ScaleKind::Linear, 9, &opts, Size::new(400.0, 40.0));
        assert!(!layout.fitted_width);
        assert!(layout.fitted_height);
        assert!(close(layout.box_height, 40.0 - 2.0 - 10.0 - 11.0));
    }

    #[test]
    fn exact_fit_is_not_refitted() {
        let opts = LegendOptions::new().resolve();
        // 20 * 4 + 8 = 88 and 20 + 12 = 32.
        let layout = LegendLayout::compute(ScaleKind::Quantile, 4, &opts, Size::new(88.0, 32.0));
        assert!(!layout.fitted_width);
        assert!(!layout.fitted_height);
    }

    #[test]
    fn fill_spans_target() {
        let opts = LegendOptions::new().with_fill(true).with_title("t").resolve();
        let layout =
            LegendLayout::compute(ScaleKind::Ordinal, 4, &opts, Size::new(300.0, 120.0));
        assert!(close(layout.strip_width(), 300.0 - 8.0));
        assert!(close(layout.box_height, 120.0 - 2.0 - 10.0 - 11.0));
    }

    #[test]
    fn zero_count_skips_width_fit() {
        let opts = LegendOptions::new().with_fill(true).resolve();
        let layout = LegendLayout::compute(ScaleKind::Ordinal, 0, &opts, Size::new(50.0, 50.0));
        assert!(!layout.fitted_width);
        assert_eq!(layout.box_width, 20.0);
    }

    #[test]
    fn positions_follow_kind() {
        let opts = LegendOptions::new().with_title("t").resolve();
        let size = Size::new(500.0, 100.0);
        let ordinal = LegendLayout::compute(ScaleKind::Ordinal, 3, &opts, size);
        assert_eq!(ordinal.swatch_rect(2), Rect::new(46.0, 0.0, 66.0, 20.0));
        assert_eq!(ordinal.label_pos(2), Point::new(46.0, 22.0));
        assert_eq!(ordinal.title_pos(), Point::new(30.0, 31.0));

        let linear = LegendLayout::compute(ScaleKind::Linear, 3, &opts, size);
        assert_eq!(linear.swatch_rect(2), Rect::new(40.0, 0.0, 60.0, 20.0));
        assert_eq!(linear.label_pos(2), Point::new(50.0, 22.0));
        assert_eq!(linear.group_origin(), Point::new(4.0, 2.0));
    }
}
