//! Viewport window used to decide eager versus lazy measurement.

/// The span of the extent axis currently considered "in view".
///
/// An infinite extent leaves the window open-ended past the offset; items
/// before the offset stay out of view. A NaN extent contains nothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportWindow {
    start: f32,
    end: f32,
}

impl ViewportWindow {
    /// Window covering `[offset, offset + available_extent]`.
    pub fn new(offset: f32, available_extent: f32) -> Self {
        if !available_extent.is_finite() {
            log::debug!(
                "Stack layout: unbounded viewport extent ({}) at offset {}",
                available_extent,
                offset
            );
        }
        Self {
            start: offset,
            end: offset + available_extent,
        }
    }

    /// Whether an item starting at `extent_start` is in view. Both bounds are inclusive.
    #[inline]
    pub fn contains(&self, extent_start: f32) -> bool {
        extent_start >= self.start && extent_start <= self.end
    }
}
