// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation.
//!
//! A legend is a horizontal strip of swatches, one label under each swatch and an optional title.
//! How many swatches there are and which of them are labeled depends on the [`ScaleKind`]:
//! - ordinal: one swatch per domain entry, every swatch labeled;
//! - quantile: one swatch per range color, only the ends labeled;
//! - linear: the scale is resampled into `linear_boxes` swatches, only the ends labeled.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use peniko::Color;
use smallvec::SmallVec;

use crate::error::LegendError;
use crate::kind::ScaleKind;
use crate::layout::LegendLayout;
use crate::marks::{LabelMark, LegendMark, SwatchMark, TextAnchor};
use crate::options::{LegendOptions, ResolvedOptions};
use crate::scale::{ColorScale, DomainValue};
use crate::surface::{GroupId, Size, Surface, SurfaceHost};

/// Swatch colors for one legend. Nine inline matches the default linear box count.
pub type SwatchColors = SmallVec<[Color; 9]>;

/// Renders legends of one kind with one set of options.
#[derive(Clone, Debug)]
pub struct LegendRenderer {
    kind: ScaleKind,
    options: ResolvedOptions,
}

impl LegendRenderer {
    /// Creates a renderer, applying option defaults.
    pub fn new(kind: ScaleKind, options: &LegendOptions) -> Self {
        Self {
            kind,
            options: options.resolve(),
        }
    }

    /// The scale kind.
    pub fn kind(&self) -> ScaleKind {
        self.kind
    }

    /// The resolved options.
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Computes one color per swatch.
    ///
    /// Linear scales are sampled at `i * (max - min) / n` for `i` in `0..n`, where `min`/`max`
    /// are the first/last domain values. The offsets start at zero rather than at `min`.
    pub fn sample_colors<S: ColorScale + ?Sized>(&self, scale: &S) -> SwatchColors {
        match self.kind {
            ScaleKind::Quantile => scale.range().iter().copied().collect(),
            ScaleKind::Ordinal => {
                let range = scale.range();
                (0..scale.domain().len())
                    .map(|i| range.get(i).copied().unwrap_or(Color::TRANSPARENT))
                    .collect()
            }
            ScaleKind::Linear => {
                let domain = scale.domain();
                let min = numeric_endpoint(domain.first());
                let max = numeric_endpoint(domain.last());
                let n = self.options.linear_boxes;
                (0..n)
                    .map(|i| scale.color_at(i as f64 * (max - min) / n as f64))
                    .collect()
            }
        }
    }

    /// Computes the layout for `count` swatches on a target of the given size.
    pub fn layout(&self, count: usize, target: Size) -> LegendLayout {
        LegendLayout::compute(self.kind, count, &self.options, target)
    }

    /// Label text under swatch `i` of `count`.
    fn label_text(&self, domain: &[DomainValue], i: usize, count: usize) -> String {
        let value = match self.kind {
            ScaleKind::Ordinal => domain.get(i),
            ScaleKind::Linear | ScaleKind::Quantile => {
                if i == 0 {
                    domain.first()
                } else if i + 1 == count {
                    domain.last()
                } else {
                    None
                }
            }
        };
        value.map(ToString::to_string).unwrap_or_default()
    }

    /// Generates the legend's marks, in paint order, without touching any surface.
    ///
    /// Each swatch contributes its label followed by its rectangle; the title, if any, comes last.
    pub fn marks<S: ColorScale + ?Sized>(
        &self,
        scale: &S,
        target: Size,
    ) -> (LegendLayout, Vec<LegendMark>) {
        let colors = self.sample_colors(scale);
        let layout = self.layout(colors.len(), target);
        let domain = scale.domain();
        let anchor = self.kind.label_anchor();

        let mut out = Vec::with_capacity(colors.len() * 2 + 1);
        for (i, color) in colors.iter().enumerate() {
            out.push(
                LabelMark::new(layout.label_pos(i), self.label_text(domain, i, colors.len()))
                    .with_anchor(anchor)
                    .into(),
            );
            out.push(SwatchMark::new(layout.swatch_rect(i), *color).into());
        }

        if let Some(title) = &self.options.title {
            out.push(
                LabelMark::new(layout.title_pos(), title.clone())
                    .with_anchor(TextAnchor::Middle)
                    .into(),
            );
        }
        (layout, out)
    }

    /// Appends the legend to `surface` as one new group and returns that group.
    pub fn render<T, S>(&self, surface: &mut T, scale: &S) -> GroupId
    where
        T: Surface + ?Sized,
        S: ColorScale + ?Sized,
    {
        let size = surface.size();
        let (layout, marks) = self.marks(scale, size);
        log::debug!(
            "{} legend: {} boxes of {}x{} (fitted width: {}, fitted height: {})",
            self.kind,
            layout.count,
            layout.box_width,
            layout.box_height,
            layout.fitted_width,
            layout.fitted_height,
        );

        let group = surface.append_group(layout.group_origin(), size);
        log::trace!("appending {} marks to group {}", marks.len(), group.0);
        for mark in marks {
            surface.append_mark(group, mark);
        }
        group
    }
}

fn numeric_endpoint(value: Option<&DomainValue>) -> f64 {
    match value.and_then(DomainValue::as_f64) {
        Some(v) => v,
        None => {
            log::warn!("linear legend domain endpoint {value:?} is not numeric");
            f64::NAN
        }
    }
}

/// Renders a legend into the surface named by `selector`.
///
/// `kind` must be `"linear"`, `"quantile"` or `"ordinal"`. The kind is checked first and the
/// selector second; on either error nothing is appended anywhere.
pub fn render_legend<H, S>(
    host: &mut H,
    selector: &str,
    scale: &S,
    kind: &str,
    options: &LegendOptions,
) -> Result<GroupId, LegendError>
where
    H: SurfaceHost + ?Sized,
    S: ColorScale + ?Sized,
{
    let kind: ScaleKind = kind.parse()?;
    let Some(surface) = host.surface_mut(selector) else {
        return Err(LegendError::MissingTarget(selector.to_string()));
    };
    Ok(LegendRenderer::new(kind, options).render(surface, scale))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;
    use crate::scale::{LinearColorScale, OrdinalColorScale, QuantileColorScale};

    /// Records every value it is sampled at.
    #[derive(Debug)]
    struct RecordingScale {
        domain: Vec<DomainValue>,
        samples: core::cell::RefCell<Vec<f64>>,
    }

    impl RecordingScale {
        fn new(min: f64, max: f64) -> Self {
            Self {
                domain: vec![DomainValue::Number(min), DomainValue::Number(max)],
                samples: core::cell::RefCell::new(Vec::new()),
            }
        }
    }

    impl ColorScale for RecordingScale {
        fn domain(&self) -> &[DomainValue] {
            &self.domain
        }

        fn range(&self) -> &[Color] {
            &[]
        }

        fn color_at(&self, value: f64) -> Color {
            self.samples.borrow_mut().push(value);
            css::BLACK
        }
    }

    #[test]
    fn linear_samples_from_zero_not_min() {
        let scale = RecordingScale::new(10.0, 50.0);
        let renderer = LegendRenderer::new(
            ScaleKind::Linear,
            &LegendOptions::new().with_linear_boxes(4),
        );
        let colors = renderer.sample_colors(&scale);
        assert_eq!(colors.len(), 4);
        assert_eq!(*scale.samples.borrow(), vec![0.0, 10.0, 20.0, 30.0]);
    }

    #[test]
    fn linear_defaults_to_nine_boxes() {
        let scale = LinearColorScale::new([0.0, 1.0], [css::WHITE, css::BLACK]);
        let renderer = LegendRenderer::new(ScaleKind::Linear, &LegendOptions::new());
        assert_eq!(renderer.sample_colors(&scale).len(), 9);
    }

    #[test]
    fn quantile_uses_range_verbatim() {
        let scale = QuantileColorScale::new(
            [1.0, 2.0, 3.0],
            [css::RED, css::GREEN, css::BLUE, css::GOLD],
        );
        let renderer = LegendRenderer::new(ScaleKind::Quantile, &LegendOptions::new());
        let colors = renderer.sample_colors(&scale);
        let expected = [css::RED, css::GREEN, css::BLUE, css::GOLD];
        assert_eq!(colors.len(), expected.len());
        for (c, e) in colors.iter().zip(expected) {
            assert_eq!(c.to_rgba8(), e.to_rgba8());
        }
    }

    #[test]
    fn ordinal_has_one_color_per_domain_entry() {
        let scale = OrdinalColorScale::new(["a", "b", "c"], [css::RED, css::BLUE]);
        let renderer = LegendRenderer::new(ScaleKind::Ordinal, &LegendOptions::new());
        let colors = renderer.sample_colors(&scale);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1].to_rgba8(), css::BLUE.to_rgba8());
        assert_eq!(colors[2].to_rgba8(), Color::TRANSPARENT.to_rgba8());
    }

    #[test]
    fn single_box_gets_first_domain_label() {
        let scale = QuantileColorScale::new([1.0, 9.0], [css::RED]);
        let renderer = LegendRenderer::new(ScaleKind::Quantile, &LegendOptions::new());
        let (_, marks) = renderer.marks(&scale, Size::new(100.0, 40.0));
        let label = marks[0].as_label().unwrap();
        assert_eq!(label.text, "1");
    }

    #[test]
    fn non_numeric_linear_domain_does_not_panic() {
        let scale = OrdinalColorScale::new(["lo", "hi"], [css::RED, css::BLUE]);
        let renderer = LegendRenderer::new(ScaleKind::Linear, &LegendOptions::new());
        let (layout, marks) = renderer.marks(&scale, Size::new(400.0, 40.0));
        assert_eq!(layout.count, 9);
        assert_eq!(marks.len(), 18);
    }
}
