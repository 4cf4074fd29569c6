// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphical primitives emitted by a legend.
//!
//! A legend only ever produces two kinds of marks: filled swatch rectangles and text labels.
//! Positions are relative to the legend group origin.

extern crate alloc;

use alloc::string::String;

use kurbo::{Point, Rect};
use peniko::Color;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The anchor point is at the start of the text.
    Start,
    /// The anchor point is at the horizontal center of the text.
    Middle,
    /// The anchor point is at the end of the text.
    End,
}

/// A filled swatch rectangle.
#[derive(Clone, Debug)]
pub struct SwatchMark {
    /// Rectangle geometry in group coordinates.
    pub rect: Rect,
    /// Fill color.
    pub fill: Color,
}

impl SwatchMark {
    /// Creates a swatch.
    pub fn new(rect: Rect, fill: Color) -> Self {
        Self { rect, fill }
    }
}

/// A text label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelMark {
    /// Anchor position in group coordinates.
    pub pos: Point,
    /// Text content (unshaped). May be empty.
    pub text: String,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Whether the text should receive pointer events.
    pub pointer_events: bool,
}

impl LabelMark {
    /// Creates a start-anchored label that ignores pointer events.
    pub fn new(pos: Point, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
            anchor: TextAnchor::Start,
            pointer_events: false,
        }
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Any mark a legend emits.
#[derive(Clone, Debug)]
pub enum LegendMark {
    /// Swatch rectangle.
    Swatch(SwatchMark),
    /// Text label (swatch label or title).
    Label(LabelMark),
}

impl LegendMark {
    /// Returns the swatch, if this is one.
    pub fn as_swatch(&self) -> Option<&SwatchMark> {
        match self {
            Self::Swatch(s) => Some(s),
            Self::Label(_) => None,
        }
    }

    /// Returns the label, if this is one.
    pub fn as_label(&self) -> Option<&LabelMark> {
        match self {
            Self::Label(l) => Some(l),
            Self::Swatch(_) => None,
        }
    }
}

impl From<SwatchMark> for LegendMark {
    fn from(value: SwatchMark) -> Self {
        Self::Swatch(value)
    }
}

impl From<LabelMark> for LegendMark {
    fn from(value: LabelMark) -> Self {
        Self::Label(value)
    }
}
