// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing capabilities a legend needs from its target.
//!
//! Backends implement [`Surface`]; documents holding several named surfaces implement
//! [`SurfaceHost`]. Layout code never sees either.

use kurbo::Point;

use crate::marks::LegendMark;

/// A width/height pair in surface units (pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Identifies a group previously appended to a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub usize);

/// A drawing target with a fixed size that accepts appended groups of marks.
///
/// Surfaces are append-only from the legend's point of view: existing content is never touched.
pub trait Surface {
    /// Size of the drawable region.
    fn size(&self) -> Size;

    /// Appends an empty group translated to `origin` and sized to `size`.
    fn append_group(&mut self, origin: Point, size: Size) -> GroupId;

    /// Appends a mark to a group. Marks paint in append order.
    fn append_mark(&mut self, group: GroupId, mark: LegendMark);
}

/// Something that can look up surfaces by identifier.
pub trait SurfaceHost {
    /// Returns the surface for a selector (see [`resolve_selector`]), if it exists.
    fn surface_mut(&mut self, selector: &str) -> Option<&mut dyn Surface>;
}

/// Strips the `#` id prefix from a selector.
///
/// `"#legend"` and `"legend"` both name the surface `legend`. No other selector syntax exists.
pub fn resolve_selector(selector: &str) -> &str {
    selector.strip_prefix('#').unwrap_or(selector)
}
