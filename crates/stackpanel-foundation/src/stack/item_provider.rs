//! What the layout needs to know about the host list.
//!
//! This module defines the [`ItemGeometryProvider`] trait, implemented by the
//! panel that owns the data source and the views.

use stackpanel_ui_graphics::{Point, Size};

use super::index_path::IndexPath;

/// Counts, sizes and scroll state supplied by the host.
///
/// Implementations should reflect a single data snapshot for the duration
/// of a layout pass.
pub trait ItemGeometryProvider {
    /// Number of groups in the data source.
    fn group_count(&self) -> usize;

    /// Number of items in `group`.
    fn item_count(&self, group: usize) -> usize;

    /// Size of the item at `path`.
    ///
    /// `is_in_view` tells whether the item starts inside the viewport window.
    /// Off-screen items may be answered with a cheap estimate; in-view items
    /// should be measured. The returned size is used as-is, degenerate
    /// values included.
    fn size_for_item(&self, path: IndexPath, is_in_view: bool, available_breadth: f32) -> Size;

    /// Current scroll offset of the hosting surface.
    fn viewport_offset(&self) -> Point {
        Point::ZERO
    }

    /// Size of the header of `group`, or `None` when the group has no header.
    fn header_size(&self, group: usize, available_breadth: f32) -> Option<Size> {
        let _ = (group, available_breadth);
        None
    }

    /// Size of the trailing footer, or `None` when there is no footer.
    fn footer_size(&self, available_breadth: f32) -> Option<Size> {
        let _ = available_breadth;
        None
    }
}
