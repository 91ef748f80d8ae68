//! Virtualizing stack layout.
//!
//! The pieces, leaf first:
//!
//! - [`GroupLayout`] stacks the items of one group behind a running cursor,
//!   asking the [`ItemGeometryProvider`] for sizes it has not seen before.
//! - [`UpdatePropagator`] moves the elements after an item whose size changed.
//! - [`SectionEndTable`] records where each group ends, for sticky headers.
//! - [`StackPanelLayout`] ties them together for one session.
//!
//! All geometry goes through [`AxisGeometry`](stackpanel_ui_layout::AxisGeometry),
//! so the same code serves vertical and horizontal stacks.

mod config;
mod group_layout;
mod index_path;
mod item_provider;
mod layout_attributes;
mod layout_info;
mod propagator;
mod section_end;
mod size_cache;
mod stack_layout;
mod viewport;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{StackPanelConfig, DEFAULT_MAX_PROPAGATION_STEPS};
pub use group_layout::GroupLayout;
pub use index_path::{ElementId, IndexPath};
pub use item_provider::ItemGeometryProvider;
pub use layout_attributes::{HeaderPlacement, LayoutAttributes, RepresentedKind};
pub use layout_info::LayoutInfo;
pub use propagator::{MovedElements, PropagationEnd, PropagationOutcome, UpdatePropagator};
pub use section_end::SectionEndTable;
pub use size_cache::SizeCache;
pub use stack_layout::StackPanelLayout;
pub use viewport::ViewportWindow;
