// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG surfaces for `swatch_legend_demo`.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Point;
use peniko::Color;
use swatch_legend::{
    GroupId, LegendMark, Size, Surface, SurfaceHost, TextAnchor, resolve_selector,
};

#[derive(Debug)]
struct SvgGroup {
    origin: Point,
    size: Size,
    marks: Vec<LegendMark>,
}

/// A fixed-size SVG canvas that legends can be appended to.
#[derive(Debug)]
pub(crate) struct SvgSurface {
    size: Size,
    groups: Vec<SvgGroup>,
}

impl SvgSurface {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            groups: Vec::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.size.width,
            h = self.size.height,
        );
        for group in &self.groups {
            let _ = writeln!(
                out,
                r#"<g transform="translate({} {})" width="{}" height="{}">"#,
                group.origin.x, group.origin.y, group.size.width, group.size.height,
            );
            for mark in &group.marks {
                match mark {
                    LegendMark::Swatch(s) => {
                        let _ = write!(
                            out,
                            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                            s.rect.x0,
                            s.rect.y0,
                            s.rect.width(),
                            s.rect.height(),
                        );
                        write_paint_attr(&mut out, "fill", s.fill);
                        out.push_str("/>\n");
                    }
                    LegendMark::Label(l) => {
                        let anchor = match l.anchor {
                            TextAnchor::Start => "start",
                            TextAnchor::Middle => "middle",
                            TextAnchor::End => "end",
                        };
                        let _ = write!(
                            out,
                            r#"<text x="{}" y="{}" font-size="10" text-anchor="{anchor}""#,
                            l.pos.x, l.pos.y,
                        );
                        if !l.pointer_events {
                            out.push_str(r#" pointer-events="none""#);
                        }
                        out.push('>');
                        out.push_str(&escape_xml(&l.text));
                        out.push_str("</text>\n");
                    }
                }
            }
            out.push_str("</g>\n");
        }
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn append_group(&mut self, origin: Point, size: Size) -> GroupId {
        self.groups.push(SvgGroup {
            origin,
            size,
            marks: Vec::new(),
        });
        GroupId(self.groups.len() - 1)
    }

    fn append_mark(&mut self, group: GroupId, mark: LegendMark) {
        if let Some(g) = self.groups.get_mut(group.0) {
            g.marks.push(mark);
        }
    }
}

/// Named SVG surfaces, in insertion order.
#[derive(Debug, Default)]
pub(crate) struct SvgDocument {
    order: Vec<String>,
    surfaces: HashMap<String, SvgSurface>,
}

impl SvgDocument {
    pub(crate) fn add(&mut self, id: &str, width: f64, height: f64) {
        if self
            .surfaces
            .insert(id.to_string(), SvgSurface::new(width, height))
            .is_none()
        {
            self.order.push(id.to_string());
        }
    }

    /// `(id, svg)` pairs in insertion order.
    pub(crate) fn render(&self) -> Vec<(&str, String)> {
        self.order
            .iter()
            .filter_map(|id| Some((id.as_str(), self.surfaces.get(id)?.to_svg_string())))
            .collect()
    }
}

impl SurfaceHost for SvgDocument {
    fn surface_mut(&mut self, selector: &str) -> Option<&mut dyn Surface> {
        self.surfaces
            .get_mut(resolve_selector(selector))
            .map(|s| s as &mut dyn Surface)
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;
    use swatch_legend::{LegendOptions, OrdinalColorScale, render_legend};

    use super::*;

    #[test]
    fn writes_rects_and_labels() {
        let mut doc = SvgDocument::default();
        doc.add("fruit", 120.0, 40.0);
        let scale = OrdinalColorScale::new(["A&B", "C"], [css::RED, css::BLUE]);
        render_legend(&mut doc, "#fruit", &scale, "ordinal", &LegendOptions::new()).unwrap();

        let rendered = doc.render();
        assert_eq!(rendered.len(), 1);
        let svg = &rendered[0].1;
        assert!(svg.contains(r#"<g transform="translate(4 2)""#));
        assert!(svg.contains(r##"<rect x="23" y="0" width="20" height="20" fill="#0000ff"/>"##));
        assert!(svg.contains(r#"text-anchor="start" pointer-events="none">A&amp;B</text>"#));
    }

    #[test]
    fn translucent_fill_gets_opacity() {
        let (fill, opacity) = svg_paint(css::RED.with_alpha(0.5));
        assert_eq!(fill, "#ff0000");
        assert!(opacity.is_some());
    }
}
