//! Virtualizing grouped stack layout for Stackpanel
//!
//! Positions the items, group headers and footer of a large sectioned list
//! along one scroll axis, measuring lazily and patching positions forward
//! when an item's size changes after layout.

pub mod stack;

pub use stack::*;

pub use stackpanel_ui_graphics::{Point, Rect, Size};
pub use stackpanel_ui_layout::{Axis, AxisGeometry};
