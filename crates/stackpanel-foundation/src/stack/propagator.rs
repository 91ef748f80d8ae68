//! Forward propagation of an item's size change.
//!
//! After an item's frame changes post-layout, only elements after it can be
//! out of place. The propagator walks forward from the changed item: the
//! next row of the same group, else the next group's header, else the
//! footer. Nothing before the changed item is ever touched.

use smallvec::SmallVec;
use stackpanel_ui_graphics::Size;
use stackpanel_ui_layout::AxisGeometry;

use super::config::StackPanelConfig;
use super::index_path::{ElementId, IndexPath};
use super::layout_info::LayoutInfo;
use super::section_end::SectionEndTable;

/// Elements whose frame moved during one propagation.
pub type MovedElements = SmallVec<[ElementId; 8]>;

/// Why propagation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationEnd {
    /// A sibling was moved and recursion was not requested.
    Sibling,
    /// The next group's header absorbed the change, shifting what follows it.
    GroupHeader,
    /// The footer was placed after the last item.
    Footer,
    /// Nothing follows the changed item.
    Terminal,
    /// The step guard was hit before the chain finished.
    StepLimit,
}

/// Result of one propagation.
#[derive(Clone, Debug, PartialEq)]
pub struct PropagationOutcome {
    pub end: PropagationEnd,
    pub moved: MovedElements,
    /// Number of forward steps walked.
    pub steps: usize,
}

impl PropagationOutcome {
    fn new() -> Self {
        Self {
            end: PropagationEnd::Terminal,
            moved: SmallVec::new(),
            steps: 0,
        }
    }

    fn finish(mut self, end: PropagationEnd) -> Self {
        self.end = end;
        self
    }
}

/// Applies post-layout size changes to a [`LayoutInfo`].
pub struct UpdatePropagator<'a> {
    config: &'a StackPanelConfig,
    axis: &'static dyn AxisGeometry,
    layout_info: &'a mut LayoutInfo,
    section_ends: &'a mut SectionEndTable,
}

impl<'a> UpdatePropagator<'a> {
    pub fn new(
        config: &'a StackPanelConfig,
        layout_info: &'a mut LayoutInfo,
        section_ends: &'a mut SectionEndTable,
    ) -> Self {
        Self {
            config,
            axis: config.axis(),
            layout_info,
            section_ends,
        }
    }

    /// Replaces the size of the item at `path`, then propagates from it.
    ///
    /// With breadth stretch enabled the item keeps its stretched breadth.
    pub fn update_item_size(
        &mut self,
        path: IndexPath,
        size: Size,
        should_recurse: bool,
    ) -> PropagationOutcome {
        let axis = self.axis;
        let stretch = self.config.breadth_stretch;
        let Some(record) = self.layout_info.item_mut(path) else {
            debug_assert!(false, "size update for {path} which has no layout record");
            return PropagationOutcome::new();
        };
        let breadth = axis.breadth(&record.frame);
        record.frame.set_size(size);
        if stretch {
            axis.set_breadth(&mut record.frame, breadth);
        }
        self.propagate(path, should_recurse)
    }

    /// Fixes up positions after the frame of `changed` has been modified.
    ///
    /// Without `should_recurse` only the immediate successor is moved.
    pub fn propagate(&mut self, changed: IndexPath, should_recurse: bool) -> PropagationOutcome {
        let axis = self.axis;
        let mut outcome = PropagationOutcome::new();

        let Some(record) = self.layout_info.item(changed) else {
            debug_assert!(false, "propagating from {changed} which has no layout record");
            return outcome;
        };

        let mut current = changed;
        let mut extent_end = axis.extent_end(&record.frame);

        loop {
            if outcome.steps >= self.config.max_propagation_steps {
                log::warn!(
                    "Stack layout: propagation from {} stopped at {} after {} steps",
                    changed,
                    current,
                    outcome.steps
                );
                return outcome.finish(PropagationEnd::StepLimit);
            }
            outcome.steps += 1;

            let next = current.next_row();
            if let Some(sibling) = self.layout_info.item_mut(next) {
                axis.set_extent_start(&mut sibling.frame, extent_end);
                outcome.moved.push(sibling.element);
                if !should_recurse {
                    return outcome.finish(PropagationEnd::Sibling);
                }
                extent_end = axis.extent_end(&sibling.frame);
                current = next;
                continue;
            }

            // `current` is the last item of its group.
            self.section_ends.set(current.group, extent_end);

            // Empty header-less groups collapse onto the same end.
            let mut next_group = current.group + 1;
            let group_bound = self.layout_info.group_bound();
            while next_group < group_bound && !self.layout_info.has_group_records(next_group) {
                self.section_ends.set(next_group, extent_end);
                next_group += 1;
            }

            if self.layout_info.header(next_group).is_some() {
                self.adjust_group_header(next_group, extent_end, &mut outcome.moved);
                return outcome.finish(PropagationEnd::GroupHeader);
            }

            // Groups without headers continue straight into their first item.
            let first_of_next = IndexPath::new(next_group, 0);
            if let Some(item) = self.layout_info.item_mut(first_of_next) {
                axis.set_extent_start(&mut item.frame, extent_end);
                outcome.moved.push(item.element);
                if !should_recurse {
                    return outcome.finish(PropagationEnd::Sibling);
                }
                extent_end = axis.extent_end(&item.frame);
                current = first_of_next;
                continue;
            }

            // No later group has records; trailing empty groups end here too.
            self.section_ends.collapse_from(current.group + 1, extent_end);

            if let Some(footer) = self.layout_info.footer_mut() {
                if axis.extent_start(&footer.frame) != extent_end {
                    axis.set_extent_start(&mut footer.frame, extent_end);
                    outcome.moved.push(ElementId::Footer);
                }
                return outcome.finish(PropagationEnd::Footer);
            }

            return outcome.finish(PropagationEnd::Terminal);
        }
    }

    /// Realigns the header of `group` so its inline frame starts at `extent_end`.
    ///
    /// An inline header moves with its inline frame. A floating header keeps
    /// its visible frame, which follows the scroll offset; only its inline
    /// frame and the content after it move.
    fn adjust_group_header(&mut self, group: usize, extent_end: f32, moved: &mut MovedElements) {
        let Some(inline_frame) = self.layout_info.inline_header_frame(group) else {
            return;
        };
        let difference = extent_end - self.axis.extent_start(&inline_frame);
        if difference == 0.0 {
            return;
        }
        let is_inline = self
            .layout_info
            .header(group)
            .is_some_and(|header| header.kind.is_inline_header());
        self.shift_group_header(group, difference, is_inline, moved);
    }

    /// Moves the header of `group` and everything after it by `delta`.
    fn shift_group_header(
        &mut self,
        group: usize,
        delta: f32,
        move_visible_frame: bool,
        moved: &mut MovedElements,
    ) {
        let axis = self.axis;
        self.layout_info
            .shift_header(group, delta, move_visible_frame, axis, moved);
        self.layout_info.shift_after_header(group, delta, axis, moved);
        self.section_ends.shift_from(group, delta);
    }
}

#[cfg(test)]
#[path = "tests/propagator_tests.rs"]
mod tests;
