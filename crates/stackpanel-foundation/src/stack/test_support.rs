//! Scripted provider shared by the unit tests.

use std::cell::RefCell;

use stackpanel_ui_graphics::{Point, Size};

use super::index_path::IndexPath;
use super::item_provider::ItemGeometryProvider;

/// Provider answering from fixed per-item sizes and logging every query.
#[derive(Debug, Default)]
pub(crate) struct ScriptedProvider {
    pub groups: Vec<Vec<Size>>,
    pub headers: Vec<Option<Size>>,
    pub footer: Option<Size>,
    pub viewport_offset: Point,
    pub queries: RefCell<Vec<(IndexPath, bool)>>,
}

impl ScriptedProvider {
    /// `counts[g]` items per group, all of `size`.
    pub fn uniform(counts: &[usize], size: Size) -> Self {
        Self {
            groups: counts.iter().map(|&count| vec![size; count]).collect(),
            headers: vec![None; counts.len()],
            ..Self::default()
        }
    }

    pub fn with_headers(mut self, size: Size) -> Self {
        self.headers = vec![Some(size); self.groups.len()];
        self
    }

    pub fn with_footer(mut self, size: Size) -> Self {
        self.footer = Some(size);
        self
    }

    pub fn with_viewport_offset(mut self, offset: Point) -> Self {
        self.viewport_offset = offset;
        self
    }

    pub fn queried(&self, path: IndexPath) -> bool {
        self.queries.borrow().iter().any(|(queried, _)| *queried == path)
    }

    pub fn in_view_flag(&self, path: IndexPath) -> Option<bool> {
        self.queries
            .borrow()
            .iter()
            .find(|(queried, _)| *queried == path)
            .map(|(_, in_view)| *in_view)
    }
}

impl ItemGeometryProvider for ScriptedProvider {
    fn group_count(&self) -> usize {
        self.groups.len()
    }

    fn item_count(&self, group: usize) -> usize {
        self.groups[group].len()
    }

    fn size_for_item(&self, path: IndexPath, is_in_view: bool, _available_breadth: f32) -> Size {
        self.queries.borrow_mut().push((path, is_in_view));
        self.groups[path.group][path.row]
    }

    fn viewport_offset(&self) -> Point {
        self.viewport_offset
    }

    fn header_size(&self, group: usize, _available_breadth: f32) -> Option<Size> {
        self.headers.get(group).copied().flatten()
    }

    fn footer_size(&self, _available_breadth: f32) -> Option<Size> {
        self.footer
    }
}
