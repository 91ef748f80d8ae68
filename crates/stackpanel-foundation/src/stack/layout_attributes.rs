//! Layout records handed to the renderer.

use stackpanel_ui_graphics::Rect;

use super::index_path::{ElementId, IndexPath};

/// Where a group header currently sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderPlacement {
    /// In normal flow, directly before the group's first item.
    #[default]
    Inline,
    /// Pinned to the viewport edge; its frame follows the scroll offset.
    Floating,
}

/// What a layout record represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepresentedKind {
    Item,
    GroupHeader(HeaderPlacement),
    Footer,
}

impl RepresentedKind {
    #[inline]
    pub fn is_inline_header(self) -> bool {
        matches!(self, RepresentedKind::GroupHeader(HeaderPlacement::Inline))
    }

    #[inline]
    pub fn is_floating_header(self) -> bool {
        matches!(self, RepresentedKind::GroupHeader(HeaderPlacement::Floating))
    }
}

/// The materialized result of laying out one element.
///
/// Frames are only written by the layout pass and the update propagator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAttributes {
    pub(crate) element: ElementId,
    pub(crate) frame: Rect,
    pub(crate) kind: RepresentedKind,
}

impl LayoutAttributes {
    pub(crate) fn item(path: IndexPath, frame: Rect) -> Self {
        Self {
            element: ElementId::Item(path),
            frame,
            kind: RepresentedKind::Item,
        }
    }

    pub(crate) fn group_header(group: usize, frame: Rect) -> Self {
        Self {
            element: ElementId::GroupHeader(group),
            frame,
            kind: RepresentedKind::GroupHeader(HeaderPlacement::Inline),
        }
    }

    pub(crate) fn footer(frame: Rect) -> Self {
        Self {
            element: ElementId::Footer,
            frame,
            kind: RepresentedKind::Footer,
        }
    }

    #[inline]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    #[inline]
    pub fn kind(&self) -> RepresentedKind {
        self.kind
    }

    #[inline]
    pub fn index_path(&self) -> Option<IndexPath> {
        self.element.index_path()
    }
}
