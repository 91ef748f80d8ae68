//! Session-level driver: full layout passes, size updates and sticky headers.

use stackpanel_ui_graphics::{Rect, Size};
use web_time::{Duration, Instant};

use super::config::StackPanelConfig;
use super::group_layout::GroupLayout;
use super::index_path::IndexPath;
use super::item_provider::ItemGeometryProvider;
use super::layout_attributes::LayoutAttributes;
use super::layout_info::LayoutInfo;
use super::propagator::{PropagationOutcome, UpdatePropagator};
use super::section_end::SectionEndTable;
use super::size_cache::SizeCache;

/// Passes slower than this are reported; roughly one 60Hz frame.
const FRAME_BUDGET: Duration = Duration::from_millis(16);

/// Layout state of one stack for the lifetime of a data snapshot.
///
/// Owns the records, the section-end table and the last computed content
/// size. Call [`reset`](Self::reset) when the data source changes.
#[derive(Debug, Default)]
pub struct StackPanelLayout {
    config: StackPanelConfig,
    layout_info: LayoutInfo,
    section_ends: SectionEndTable,
    content_size: Size,
    pinned_offset: Option<f32>,
}

impl StackPanelLayout {
    pub fn new(config: StackPanelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StackPanelConfig {
        &self.config
    }

    pub fn layout_info(&self) -> &LayoutInfo {
        &self.layout_info
    }

    pub fn section_ends(&self) -> &SectionEndTable {
        &self.section_ends
    }

    /// Content size computed by the last pass.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Records intersecting `rect`, in extent order.
    pub fn elements_in_rect(&self, rect: &Rect) -> Vec<&LayoutAttributes> {
        self.layout_info.elements_in_rect(rect, self.config.axis())
    }

    /// Sizes of every laid-out item, for reuse by the next pass.
    pub fn capture_size_cache(&self) -> SizeCache {
        SizeCache::from_layout_info(&self.layout_info)
    }

    /// Lays out every header, item and the footer, replacing all records.
    ///
    /// Returns the content size: total extent by the widest item breadth.
    pub fn prepare_layout<P>(
        &mut self,
        provider: &P,
        available: Size,
        size_cache: Option<&SizeCache>,
    ) -> Size
    where
        P: ItemGeometryProvider + ?Sized,
    {
        self.layout_info.clear();
        self.content_size = self.run_pass(provider, available, true, size_cache);
        if self.config.sticky_headers {
            if let Some(offset) = self.pinned_offset {
                self.pin_sticky_headers(offset);
            }
        }
        self.content_size
    }

    /// Computes the content size without recording any layout.
    ///
    /// Section ends are still refreshed.
    pub fn estimate_content_size<P>(
        &mut self,
        provider: &P,
        available: Size,
        size_cache: Option<&SizeCache>,
    ) -> Size
    where
        P: ItemGeometryProvider + ?Sized,
    {
        self.run_pass(provider, available, false, size_cache)
    }

    fn run_pass<P>(
        &mut self,
        provider: &P,
        available: Size,
        should_record_layout: bool,
        size_cache: Option<&SizeCache>,
    ) -> Size
    where
        P: ItemGeometryProvider + ?Sized,
    {
        let start_time = Instant::now();
        let axis = self.config.axis();
        let available_breadth = axis.breadth_of_size(available);
        let available_extent = axis.extent_of_size(available);
        if !available_extent.is_finite() {
            log::warn!(
                "Stack layout: unbounded viewport extent ({}), every item past the offset \
                 will be measured. Consider placing the stack in a constrained container.",
                available_extent
            );
        }

        let group_count = provider.group_count();
        let mut cursor = Rect::ZERO;
        let mut measured_breadth: f32 = 0.0;

        for group in 0..group_count {
            if let Some(size) = provider.header_size(group, available_breadth) {
                cursor.set_size(size);
                axis.set_breadth(&mut cursor, available_breadth);
                if should_record_layout {
                    self.layout_info.insert_header(group, cursor);
                }
                axis.advance(&mut cursor);
            }

            let group_breadth = GroupLayout::new(
                provider,
                &self.config,
                &mut self.layout_info,
                &mut self.section_ends,
            )
            .layout_group(
                group,
                available_breadth,
                available_extent,
                &mut cursor,
                should_record_layout,
                size_cache,
            );
            measured_breadth = measured_breadth.max(group_breadth);
        }

        if let Some(size) = provider.footer_size(available_breadth) {
            cursor.set_size(size);
            axis.set_breadth(&mut cursor, available_breadth);
            if should_record_layout {
                self.layout_info.set_footer(cursor);
            }
            axis.advance(&mut cursor);
        }

        self.section_ends.retain_groups(group_count);

        let elapsed = start_time.elapsed();
        if elapsed > FRAME_BUDGET {
            log::warn!(
                "Stack layout pass over {} groups took {:?} (budget {:?})",
                group_count,
                elapsed,
                FRAME_BUDGET
            );
        } else {
            log::trace!(
                "Stack layout pass over {} groups took {:?}",
                group_count,
                elapsed
            );
        }

        axis.make_size(axis.extent_start(&cursor), measured_breadth)
    }

    /// Applies a fresh measurement for the item at `path` and fixes up what follows.
    ///
    /// Headers are re-pinned against the last pinned offset afterwards.
    pub fn update_item_size(
        &mut self,
        path: IndexPath,
        size: Size,
        should_recurse: bool,
    ) -> PropagationOutcome {
        let outcome =
            UpdatePropagator::new(&self.config, &mut self.layout_info, &mut self.section_ends)
                .update_item_size(path, size, should_recurse);
        self.after_propagation(path, &outcome);
        outcome
    }

    /// Propagates from an item whose frame already changed.
    pub fn propagate(&mut self, path: IndexPath, should_recurse: bool) -> PropagationOutcome {
        let outcome =
            UpdatePropagator::new(&self.config, &mut self.layout_info, &mut self.section_ends)
                .propagate(path, should_recurse);
        self.after_propagation(path, &outcome);
        outcome
    }

    fn after_propagation(&mut self, changed: IndexPath, outcome: &PropagationOutcome) {
        let axis = self.config.axis();
        let mut breadth = axis.breadth_of_size(self.content_size);
        if !self.config.breadth_stretch {
            if let Some(item) = self.layout_info.item(changed) {
                breadth = breadth.max(axis.breadth(&item.frame()));
            }
        }
        let content_end = self
            .layout_info
            .footer()
            .map(|footer| axis.extent_end(&footer.frame()))
            .or_else(|| self.section_ends.iter().map(|(_, end)| end).reduce(f32::max));
        let end = content_end.unwrap_or_else(|| axis.extent_of_size(self.content_size));
        self.content_size = axis.make_size(end, breadth);
        if !outcome.moved.is_empty() && self.config.sticky_headers {
            if let Some(offset) = self.pinned_offset {
                self.pin_sticky_headers(offset);
            }
        }
    }

    /// Pins headers for a scroll position; returns how many are floating.
    ///
    /// Does nothing when sticky headers are disabled.
    pub fn pin_sticky_headers(&mut self, viewport_offset: f32) -> usize {
        if !self.config.sticky_headers {
            return 0;
        }
        self.pinned_offset = Some(viewport_offset);
        self.layout_info
            .pin_headers(viewport_offset, &self.section_ends, self.config.axis())
    }

    /// Returns every header to normal flow and forgets the pinned offset.
    pub fn unpin_sticky_headers(&mut self) {
        self.pinned_offset = None;
        self.layout_info.unpin_headers();
    }

    /// Drops all state tied to the current data snapshot.
    pub fn reset(&mut self) {
        self.layout_info.clear();
        self.section_ends.clear();
        self.content_size = Size::ZERO;
        self.pinned_offset = None;
    }
}

#[cfg(test)]
#[path = "tests/stack_layout_tests.rs"]
mod tests;
