// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color legends for color scales.
//!
//! A legend here is a single horizontal strip of color swatches with labels underneath and an
//! optional centered title. It is built from three inputs:
//! - a [`ColorScale`] (domain values, range colors, and a sampling function),
//! - a [`ScaleKind`] tag that picks the sampling and labeling policy,
//! - [`LegendOptions`] for box size, title, fill mode and linear sample count.
//!
//! The legend is emitted into any [`Surface`]: the retained-mode [`MarkScene`] kept in this crate,
//! or a downstream backend (the demo crate writes SVG). Layout math lives in [`LegendLayout`] and
//! never touches a surface, so it can be inspected on its own.
//!
//! ```
//! use peniko::color::palette::css;
//! use swatch_legend::{LegendOptions, OrdinalColorScale, SceneDocument, render_legend};
//!
//! let scale = OrdinalColorScale::new(["A", "B", "C"], [css::RED, css::GREEN, css::BLUE]);
//! let mut doc = SceneDocument::new();
//! doc.insert("legend", 100.0, 40.0);
//!
//! render_legend(&mut doc, "#legend", &scale, "ordinal", &LegendOptions::new()).unwrap();
//! assert_eq!(doc.get("legend").unwrap().swatches().count(), 3);
//! ```

#![no_std]

extern crate alloc;

mod error;
#[cfg(not(feature = "std"))]
mod float;
mod kind;
mod layout;
mod legend;
mod marks;
mod options;
mod scale;
mod scene;
mod surface;

pub use error::LegendError;
pub use kind::ScaleKind;
pub use layout::{LegendLayout, Padding, TITLE_PADDING};
pub use legend::{LegendRenderer, SwatchColors, render_legend};
pub use marks::{LabelMark, LegendMark, SwatchMark, TextAnchor};
pub use options::{
    DEFAULT_BOX_HEIGHT, DEFAULT_BOX_WIDTH, DEFAULT_LINEAR_BOXES, LegendOptions, ResolvedOptions,
};
pub use scale::{ColorScale, DomainValue, LinearColorScale, OrdinalColorScale, QuantileColorScale};
pub use scene::{MarkGroup, MarkScene, SceneDocument};
pub use surface::{GroupId, Size, Surface, SurfaceHost, resolve_selector};
