//! Pure geometry for Stackpanel
//!
//! Points, sizes and rectangles shared by the layout crates. Nothing here
//! knows about scroll orientation; see `stackpanel-ui-layout` for that.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
