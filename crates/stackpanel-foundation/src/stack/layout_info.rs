//! Store of the layout records produced by a pass.
//!
//! Lookups return `None` for elements that were never laid out; that is a
//! normal state (end of a group, a group without header, no footer).

use rustc_hash::FxHashMap;
use stackpanel_ui_graphics::Rect;
use stackpanel_ui_layout::AxisGeometry;

use super::index_path::{ElementId, IndexPath};
use super::layout_attributes::{HeaderPlacement, LayoutAttributes, RepresentedKind};
use super::propagator::MovedElements;
use super::section_end::SectionEndTable;

#[derive(Clone, Debug, Default)]
pub struct LayoutInfo {
    items: FxHashMap<IndexPath, LayoutAttributes>,
    headers: FxHashMap<usize, LayoutAttributes>,
    /// In-flow position of each header, kept even while the header floats.
    inline_header_frames: FxHashMap<usize, Rect>,
    footer: Option<LayoutAttributes>,
    /// One past the highest group holding an item or header record.
    group_bound: usize,
}

impl LayoutInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(&self, path: IndexPath) -> Option<&LayoutAttributes> {
        self.items.get(&path)
    }

    pub fn header(&self, group: usize) -> Option<&LayoutAttributes> {
        self.headers.get(&group)
    }

    pub fn inline_header_frame(&self, group: usize) -> Option<Rect> {
        self.inline_header_frames.get(&group).copied()
    }

    pub fn footer(&self) -> Option<&LayoutAttributes> {
        self.footer.as_ref()
    }

    pub fn get(&self, element: ElementId) -> Option<&LayoutAttributes> {
        match element {
            ElementId::Item(path) => self.item(path),
            ElementId::GroupHeader(group) => self.header(group),
            ElementId::Footer => self.footer(),
        }
    }

    /// Number of records of every kind.
    pub fn len(&self) -> usize {
        self.items.len() + self.headers.len() + usize::from(self.footer.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// One past the highest group that has an item or header record.
    ///
    /// Groups at or past the bound have no records.
    pub fn group_bound(&self) -> usize {
        self.group_bound
    }

    /// Whether `group` has a header or any item record.
    pub fn has_group_records(&self, group: usize) -> bool {
        self.headers.contains_key(&group) || self.items.contains_key(&IndexPath::new(group, 0))
    }

    /// All records, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &LayoutAttributes> {
        self.headers
            .values()
            .chain(self.items.values())
            .chain(self.footer.iter())
    }

    /// Records whose frame intersects `rect`, in extent order.
    pub fn elements_in_rect(&self, rect: &Rect, axis: &dyn AxisGeometry) -> Vec<&LayoutAttributes> {
        let mut found: Vec<&LayoutAttributes> = self
            .iter()
            .filter(|attributes| attributes.frame.intersects(rect))
            .collect();
        found.sort_by(|a, b| {
            axis.extent_start(&a.frame)
                .total_cmp(&axis.extent_start(&b.frame))
        });
        found
    }

    pub(crate) fn item_mut(&mut self, path: IndexPath) -> Option<&mut LayoutAttributes> {
        self.items.get_mut(&path)
    }

    pub(crate) fn footer_mut(&mut self) -> Option<&mut LayoutAttributes> {
        self.footer.as_mut()
    }

    pub(crate) fn insert_item(&mut self, path: IndexPath, frame: Rect) {
        self.items.insert(path, LayoutAttributes::item(path, frame));
        self.group_bound = self.group_bound.max(path.group + 1);
    }

    pub(crate) fn insert_header(&mut self, group: usize, frame: Rect) {
        self.headers
            .insert(group, LayoutAttributes::group_header(group, frame));
        self.inline_header_frames.insert(group, frame);
        self.group_bound = self.group_bound.max(group + 1);
    }

    pub(crate) fn set_footer(&mut self, frame: Rect) {
        self.footer = Some(LayoutAttributes::footer(frame));
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.headers.clear();
        self.inline_header_frames.clear();
        self.footer = None;
        self.group_bound = 0;
    }

    /// Moves a group header by `delta` along the extent axis.
    ///
    /// The inline frame always moves. The visible frame moves when the header
    /// is inline, or when `move_floating_frame` is set.
    pub(crate) fn shift_header(
        &mut self,
        group: usize,
        delta: f32,
        move_floating_frame: bool,
        axis: &dyn AxisGeometry,
        moved: &mut MovedElements,
    ) {
        if let Some(inline) = self.inline_header_frames.get_mut(&group) {
            axis.translate_extent(inline, delta);
        }
        if let Some(header) = self.headers.get_mut(&group) {
            if header.kind.is_inline_header() || move_floating_frame {
                axis.translate_extent(&mut header.frame, delta);
                moved.push(header.element);
            }
        }
    }

    /// Moves everything laid out after the header of `group` by `delta`:
    /// items of `group` and later groups, later headers, and the footer.
    pub(crate) fn shift_after_header(
        &mut self,
        group: usize,
        delta: f32,
        axis: &dyn AxisGeometry,
        moved: &mut MovedElements,
    ) {
        for (path, attributes) in self.items.iter_mut() {
            if path.group >= group {
                axis.translate_extent(&mut attributes.frame, delta);
                moved.push(attributes.element);
            }
        }
        let later_headers: Vec<usize> = self
            .inline_header_frames
            .keys()
            .copied()
            .filter(|&g| g > group)
            .collect();
        for later in later_headers {
            self.shift_header(later, delta, false, axis, moved);
        }
        if let Some(footer) = self.footer.as_mut() {
            axis.translate_extent(&mut footer.frame, delta);
            moved.push(ElementId::Footer);
        }
    }

    /// Re-pins every header against `viewport_offset` and returns how many float.
    ///
    /// A header floats between its inline start and the end of its group minus
    /// its own extent, so the next group pushes it out of the way.
    pub(crate) fn pin_headers(
        &mut self,
        viewport_offset: f32,
        section_ends: &SectionEndTable,
        axis: &dyn AxisGeometry,
    ) -> usize {
        let mut floating = 0;
        for (group, header) in self.headers.iter_mut() {
            let Some(inline) = self.inline_header_frames.get(group) else {
                continue;
            };
            let inline_start = axis.extent_start(inline);
            let group_end = section_ends
                .get(*group)
                .unwrap_or_else(|| axis.extent_end(inline));
            let pinned = viewport_offset
                .min(group_end - axis.extent_length(inline))
                .max(inline_start);

            header.frame = *inline;
            if pinned != inline_start {
                axis.set_extent_start(&mut header.frame, pinned);
                header.kind = RepresentedKind::GroupHeader(HeaderPlacement::Floating);
                floating += 1;
            } else {
                header.kind = RepresentedKind::GroupHeader(HeaderPlacement::Inline);
            }
        }
        floating
    }

    /// Drops every header back into normal flow.
    pub(crate) fn unpin_headers(&mut self) {
        for (group, header) in self.headers.iter_mut() {
            if let Some(inline) = self.inline_header_frames.get(group) {
                header.frame = *inline;
            }
            header.kind = RepresentedKind::GroupHeader(HeaderPlacement::Inline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackpanel_ui_layout::Axis;

    fn stacked() -> LayoutInfo {
        let mut info = LayoutInfo::new();
        info.insert_header(0, Rect::new(0.0, 0.0, 100.0, 5.0));
        info.insert_item(IndexPath::new(0, 0), Rect::new(0.0, 5.0, 100.0, 10.0));
        info.insert_item(IndexPath::new(0, 1), Rect::new(0.0, 15.0, 100.0, 10.0));
        info.set_footer(Rect::new(0.0, 25.0, 100.0, 5.0));
        info
    }

    #[test]
    fn lookups_return_none_for_missing_elements() {
        let info = stacked();
        assert_eq!(info.len(), 4);
        assert!(info.item(IndexPath::new(0, 2)).is_none());
        assert!(info.header(1).is_none());
        assert!(info.footer().is_some());
        assert_eq!(
            info.get(ElementId::GroupHeader(0)).map(|a| a.kind()),
            Some(RepresentedKind::GroupHeader(HeaderPlacement::Inline))
        );
    }

    #[test]
    fn elements_in_rect_are_in_extent_order() {
        let info = stacked();
        let axis = Axis::Vertical.geometry();
        let found: Vec<ElementId> = info
            .elements_in_rect(&Rect::new(0.0, 4.0, 100.0, 12.0), axis)
            .iter()
            .map(|a| a.element())
            .collect();
        assert_eq!(
            found,
            vec![
                ElementId::GroupHeader(0),
                ElementId::Item(IndexPath::new(0, 0)),
                ElementId::Item(IndexPath::new(0, 1)),
            ]
        );
    }

    #[test]
    fn group_bound_tracks_highest_recorded_group() {
        let mut info = stacked();
        assert_eq!(info.group_bound(), 1);
        info.insert_item(IndexPath::new(3, 0), Rect::new(0.0, 30.0, 100.0, 10.0));
        assert_eq!(info.group_bound(), 4);
        assert!(info.has_group_records(3));
        assert!(!info.has_group_records(2));
    }

    #[test]
    fn clear_removes_everything() {
        let mut info = stacked();
        info.clear();
        assert!(info.is_empty());
        assert!(info.inline_header_frame(0).is_none());
        assert_eq!(info.group_bound(), 0);
    }
}
