//! Single-pass layout of one group.
//!
//! Items are stacked contiguously along the extent axis starting at the
//! caller's cursor. Sizes come from the size cache when known, otherwise
//! from the provider, which is told whether the item is in view so it can
//! estimate off-screen items cheaply.

use stackpanel_ui_graphics::Rect;
use stackpanel_ui_layout::AxisGeometry;

use super::config::StackPanelConfig;
use super::index_path::IndexPath;
use super::item_provider::ItemGeometryProvider;
use super::layout_info::LayoutInfo;
use super::section_end::SectionEndTable;
use super::size_cache::SizeCache;
use super::viewport::ViewportWindow;

/// Lays out the items of a group into a [`LayoutInfo`].
pub struct GroupLayout<'a, P: ?Sized> {
    provider: &'a P,
    config: &'a StackPanelConfig,
    axis: &'static dyn AxisGeometry,
    layout_info: &'a mut LayoutInfo,
    section_ends: &'a mut SectionEndTable,
}

impl<'a, P> GroupLayout<'a, P>
where
    P: ItemGeometryProvider + ?Sized,
{
    pub fn new(
        provider: &'a P,
        config: &'a StackPanelConfig,
        layout_info: &'a mut LayoutInfo,
        section_ends: &'a mut SectionEndTable,
    ) -> Self {
        Self {
            provider,
            config,
            axis: config.axis(),
            layout_info,
            section_ends,
        }
    }

    /// Positions every item of `group` and returns the widest breadth used.
    ///
    /// `cursor` is the running frame: on entry its extent-start is the first
    /// free position, on return it has advanced past the last item. The
    /// group's section end is kept current after every item, and equals the
    /// entry position when the group is empty.
    ///
    /// With `should_record_layout` unset nothing is written to the layout
    /// info; sizes and section ends are still computed.
    pub fn layout_group(
        &mut self,
        group: usize,
        available_breadth: f32,
        available_extent: f32,
        cursor: &mut Rect,
        should_record_layout: bool,
        size_cache: Option<&SizeCache>,
    ) -> f32 {
        debug_assert!(
            group < self.provider.group_count(),
            "group {} out of range ({} groups)",
            group,
            self.provider.group_count()
        );

        let axis = self.axis;
        let item_count = self.provider.item_count(group);
        let viewport = ViewportWindow::new(
            axis.extent_of_point(self.provider.viewport_offset()),
            available_extent,
        );

        self.section_ends.set(group, axis.extent_start(cursor));

        let mut measured_breadth: f32 = 0.0;
        for row in 0..item_count {
            let path = IndexPath::new(group, row);
            let is_in_view = viewport.contains(axis.extent_start(cursor));
            let size = size_cache
                .and_then(|cache| cache.get(path))
                .unwrap_or_else(|| {
                    self.provider
                        .size_for_item(path, is_in_view, available_breadth)
                });
            cursor.set_size(size);

            if self.config.breadth_stretch {
                axis.set_breadth(cursor, available_breadth);
            }

            if should_record_layout {
                self.layout_info.insert_item(path, *cursor);
            }

            self.section_ends.set(group, axis.extent_end(cursor));

            measured_breadth = measured_breadth.max(axis.breadth(cursor));
            axis.advance(cursor);
        }

        log::trace!(
            "Stack layout: group {} placed {} items, ends at {}",
            group,
            item_count,
            axis.extent_start(cursor)
        );

        measured_breadth
    }
}

#[cfg(test)]
#[path = "tests/group_layout_tests.rs"]
mod tests;
