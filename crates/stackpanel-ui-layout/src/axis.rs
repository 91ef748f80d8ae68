//! Extent/breadth view over physical geometry.
//!
//! A scrolling stack has two logical dimensions: the *extent* (the scroll
//! direction) and the *breadth* (across it). [`AxisGeometry`] reads and
//! writes those dimensions on a [`Rect`] so layout code never branches on
//! orientation. Pick the implementation once with [`Axis::geometry`] and hold
//! on to it for the session.

use stackpanel_ui_graphics::{Point, Rect, Size};

/// Scroll orientation of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Extent runs left to right; breadth is the height.
    Horizontal,

    /// Extent runs top to bottom; breadth is the width.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the geometry accessor for this orientation.
    ///
    /// This is the only place orientation is branched on.
    pub fn geometry(self) -> &'static dyn AxisGeometry {
        match self {
            Axis::Horizontal => &HorizontalAxis,
            Axis::Vertical => &VerticalAxis,
        }
    }
}

/// Orientation-independent accessors over a [`Rect`].
pub trait AxisGeometry: std::fmt::Debug + Sync {
    /// The orientation this accessor implements.
    fn axis(&self) -> Axis;

    fn extent_start(&self, rect: &Rect) -> f32;

    fn extent_length(&self, rect: &Rect) -> f32;

    fn breadth_start(&self, rect: &Rect) -> f32;

    fn breadth(&self, rect: &Rect) -> f32;

    fn extent_of_point(&self, point: Point) -> f32;

    fn extent_of_size(&self, size: Size) -> f32;

    fn breadth_of_size(&self, size: Size) -> f32;

    /// Builds a size from logical lengths.
    fn make_size(&self, extent: f32, breadth: f32) -> Size;

    /// Moves the extent coordinate; the breadth coordinate is left alone.
    fn set_extent_start(&self, rect: &mut Rect, value: f32);

    /// Sets the breadth length; origin and extent length are left alone.
    fn set_breadth(&self, rect: &mut Rect, value: f32);

    #[inline]
    fn extent_end(&self, rect: &Rect) -> f32 {
        self.extent_start(rect) + self.extent_length(rect)
    }

    /// Shifts the rect along the extent axis by `delta`.
    #[inline]
    fn translate_extent(&self, rect: &mut Rect, delta: f32) {
        let start = self.extent_start(rect);
        self.set_extent_start(rect, start + delta);
    }

    /// Moves a cursor rect past itself: the new extent-start is the old extent-end.
    #[inline]
    fn advance(&self, rect: &mut Rect) {
        let end = self.extent_end(rect);
        self.set_extent_start(rect, end);
    }
}

/// Vertical scrolling: extent is `y`/`height`, breadth is `x`/`width`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VerticalAxis;

impl AxisGeometry for VerticalAxis {
    fn axis(&self) -> Axis {
        Axis::Vertical
    }

    #[inline]
    fn extent_start(&self, rect: &Rect) -> f32 {
        rect.y
    }

    #[inline]
    fn extent_length(&self, rect: &Rect) -> f32 {
        rect.height
    }

    #[inline]
    fn breadth_start(&self, rect: &Rect) -> f32 {
        rect.x
    }

    #[inline]
    fn breadth(&self, rect: &Rect) -> f32 {
        rect.width
    }

    #[inline]
    fn extent_of_point(&self, point: Point) -> f32 {
        point.y
    }

    #[inline]
    fn extent_of_size(&self, size: Size) -> f32 {
        size.height
    }

    #[inline]
    fn breadth_of_size(&self, size: Size) -> f32 {
        size.width
    }

    #[inline]
    fn make_size(&self, extent: f32, breadth: f32) -> Size {
        Size::new(breadth, extent)
    }

    #[inline]
    fn set_extent_start(&self, rect: &mut Rect, value: f32) {
        rect.y = value;
    }

    #[inline]
    fn set_breadth(&self, rect: &mut Rect, value: f32) {
        rect.width = value;
    }
}

/// Horizontal scrolling: extent is `x`/`width`, breadth is `y`/`height`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalAxis;

impl AxisGeometry for HorizontalAxis {
    fn axis(&self) -> Axis {
        Axis::Horizontal
    }

    #[inline]
    fn extent_start(&self, rect: &Rect) -> f32 {
        rect.x
    }

    #[inline]
    fn extent_length(&self, rect: &Rect) -> f32 {
        rect.width
    }

    #[inline]
    fn breadth_start(&self, rect: &Rect) -> f32 {
        rect.y
    }

    #[inline]
    fn breadth(&self, rect: &Rect) -> f32 {
        rect.height
    }

    #[inline]
    fn extent_of_point(&self, point: Point) -> f32 {
        point.x
    }

    #[inline]
    fn extent_of_size(&self, size: Size) -> f32 {
        size.width
    }

    #[inline]
    fn breadth_of_size(&self, size: Size) -> f32 {
        size.height
    }

    #[inline]
    fn make_size(&self, extent: f32, breadth: f32) -> Size {
        Size::new(extent, breadth)
    }

    #[inline]
    fn set_extent_start(&self, rect: &mut Rect, value: f32) {
        rect.x = value;
    }

    #[inline]
    fn set_breadth(&self, rect: &mut Rect, value: f32) {
        rect.height = value;
    }
}

#[cfg(test)]
#[path = "tests/axis_tests.rs"]
mod tests;
