// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained-mode in-memory surfaces.
//!
//! [`MarkScene`] keeps every appended group and mark so the result can be inspected or handed to
//! a renderer later. [`SceneDocument`] maps ids to scenes, which is what selector lookup needs.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use kurbo::Point;

use crate::marks::{LabelMark, LegendMark, SwatchMark};
use crate::surface::{GroupId, Size, Surface, SurfaceHost, resolve_selector};

/// A translated group of marks.
#[derive(Clone, Debug)]
pub struct MarkGroup {
    /// Translation applied to every mark in the group.
    pub origin: Point,
    /// Nominal group size.
    pub size: Size,
    /// Marks in paint order.
    pub marks: Vec<LegendMark>,
}

/// An in-memory surface of a fixed size.
#[derive(Clone, Debug)]
pub struct MarkScene {
    size: Size,
    groups: Vec<MarkGroup>,
}

impl MarkScene {
    /// Creates an empty scene.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            groups: Vec::new(),
        }
    }

    /// Groups in append order.
    pub fn groups(&self) -> &[MarkGroup] {
        &self.groups
    }

    /// Looks up a group by id.
    pub fn group(&self, id: GroupId) -> Option<&MarkGroup> {
        self.groups.get(id.0)
    }

    /// All marks across all groups, in paint order.
    pub fn marks(&self) -> impl Iterator<Item = &LegendMark> {
        self.groups.iter().flat_map(|g| g.marks.iter())
    }

    /// All swatches, in paint order.
    pub fn swatches(&self) -> impl Iterator<Item = &SwatchMark> {
        self.marks().filter_map(LegendMark::as_swatch)
    }

    /// All labels (including titles), in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &LabelMark> {
        self.marks().filter_map(LegendMark::as_label)
    }

    /// Returns `true` if nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Removes every group.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

impl Surface for MarkScene {
    fn size(&self) -> Size {
        self.size
    }

    fn append_group(&mut self, origin: Point, size: Size) -> GroupId {
        self.groups.push(MarkGroup {
            origin,
            size,
            marks: Vec::new(),
        });
        GroupId(self.groups.len() - 1)
    }

    fn append_mark(&mut self, group: GroupId, mark: LegendMark) {
        if let Some(g) = self.groups.get_mut(group.0) {
            g.marks.push(mark);
        } else {
            log::warn!("dropping mark for unknown group {}", group.0);
        }
    }
}

/// A set of named [`MarkScene`]s.
#[derive(Clone, Debug, Default)]
pub struct SceneDocument {
    scenes: HashMap<String, MarkScene>,
}

impl SceneDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an empty scene under `id` and returns it.
    pub fn insert(&mut self, id: impl Into<String>, width: f64, height: f64) -> &mut MarkScene {
        let scene = MarkScene::new(width, height);
        match self.scenes.entry(id.into()) {
            Entry::Occupied(mut entry) => {
                entry.insert(scene);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(scene),
        }
    }

    /// Looks up a scene by selector.
    pub fn get(&self, selector: &str) -> Option<&MarkScene> {
        self.scenes.get(resolve_selector(selector))
    }

    /// Looks up a scene by selector, mutably.
    pub fn get_mut(&mut self, selector: &str) -> Option<&mut MarkScene> {
        self.scenes.get_mut(resolve_selector(selector))
    }

    /// Scene ids, in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }
}

impl SurfaceHost for SceneDocument {
    fn surface_mut(&mut self, selector: &str) -> Option<&mut dyn Surface> {
        self.get_mut(selector).map(|s| s as &mut dyn Surface)
    }
}

impl FromIterator<(String, MarkScene)> for SceneDocument {
    fn from_iter<T: IntoIterator<Item = (String, MarkScene)>>(iter: T) -> Self {
        Self {
            scenes: iter.into_iter().collect(),
        }
    }
}

impl From<(&str, MarkScene)> for SceneDocument {
    fn from((id, scene): (&str, MarkScene)) -> Self {
        core::iter::once((id.to_string(), scene)).collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;
    use crate::marks::TextAnchor;

    #[test]
    fn groups_collect_marks_in_order() {
        let mut scene = MarkScene::new(50.0, 20.0);
        let g = scene.append_group(Point::new(4.0, 2.0), scene.size());
        scene.append_mark(g, LabelMark::new(Point::new(0.0, 12.0), "a").into());
        scene.append_mark(
            g,
            SwatchMark::new(Rect::new(0.0, 0.0, 10.0, 10.0), css::RED).into(),
        );

        let group = scene.group(g).unwrap();
        assert_eq!(group.origin, Point::new(4.0, 2.0));
        assert_eq!(group.size, Size::new(50.0, 20.0));
        assert!(group.marks[0].as_label().is_some());
        assert!(group.marks[1].as_swatch().is_some());
        assert_eq!(scene.labels().next().unwrap().anchor, TextAnchor::Start);
    }

    #[test]
    fn unknown_group_is_ignored() {
        let mut scene = MarkScene::new(50.0, 20.0);
        scene.append_mark(GroupId(3), LabelMark::new(Point::ZERO, "x").into());
        assert!(scene.is_empty());
    }

    #[test]
    fn document_resolves_hash_selectors() {
        let mut doc = SceneDocument::new();
        doc.insert("key", 10.0, 10.0);
        assert!(doc.get("#key").is_some());
        assert!(doc.get("key").is_some());
        assert!(doc.surface_mut("#missing").is_none());
        let size = doc.surface_mut("#key").map(|s| s.size());
        assert_eq!(size, Some(Size::new(10.0, 10.0)));
    }
}
