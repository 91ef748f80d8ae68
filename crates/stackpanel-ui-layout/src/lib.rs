//! Layout axis contracts for Stackpanel

mod axis;

pub use axis::*;

pub mod prelude {
    pub use crate::axis::{Axis, AxisGeometry};
}
