use stackpanel_ui_layout::{Axis, AxisGeometry};

/// Default step guard for one propagation: unbounded.
///
/// A propagation takes at most one step per item record, so a finite
/// guard only ever cuts a valid chain short.
pub const DEFAULT_MAX_PROPAGATION_STEPS: usize = usize::MAX;

/// Configuration of a stack layout session.
///
/// Orientation is fixed for the lifetime of the session.
#[derive(Clone, Debug, PartialEq)]
pub struct StackPanelConfig {
    /// Scroll direction.
    pub orientation: Axis,

    /// Give every item the full available breadth, whatever its measured breadth.
    pub breadth_stretch: bool,

    /// Pin group headers to the viewport edge while their group is in view.
    pub sticky_headers: bool,

    /// Step guard for forward propagation.
    pub max_propagation_steps: usize,
}

impl Default for StackPanelConfig {
    fn default() -> Self {
        Self {
            orientation: Axis::Vertical,
            breadth_stretch: false,
            sticky_headers: true,
            max_propagation_steps: DEFAULT_MAX_PROPAGATION_STEPS,
        }
    }
}

impl StackPanelConfig {
    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn horizontal() -> Self {
        Self {
            orientation: Axis::Horizontal,
            ..Self::default()
        }
    }

    pub fn with_breadth_stretch(mut self, stretch: bool) -> Self {
        self.breadth_stretch = stretch;
        self
    }

    pub fn with_sticky_headers(mut self, sticky: bool) -> Self {
        self.sticky_headers = sticky;
        self
    }

    pub fn with_max_propagation_steps(mut self, steps: usize) -> Self {
        self.max_propagation_steps = steps;
        self
    }

    /// Geometry accessor for the configured orientation.
    #[inline]
    pub fn axis(&self) -> &'static dyn AxisGeometry {
        self.orientation.geometry()
    }
}
