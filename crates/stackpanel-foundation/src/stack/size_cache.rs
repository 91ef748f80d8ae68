//! Previously observed item sizes.
//!
//! A layout pass only reads the cache. Items found here are never sent to the
//! size query, which is how re-layouts avoid re-measuring.

use rustc_hash::FxHashMap;
use stackpanel_ui_graphics::Size;

use super::index_path::IndexPath;
use super::layout_info::LayoutInfo;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SizeCache {
    sizes: FxHashMap<IndexPath, Size>,
}

impl SizeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the size of every item record in `layout_info`.
    pub fn from_layout_info(layout_info: &LayoutInfo) -> Self {
        layout_info
            .iter()
            .filter_map(|attributes| {
                attributes
                    .index_path()
                    .map(|path| (path, attributes.frame().size()))
            })
            .collect()
    }

    pub fn get(&self, path: IndexPath) -> Option<Size> {
        self.sizes.get(&path).copied()
    }

    pub fn insert(&mut self, path: IndexPath, size: Size) -> Option<Size> {
        self.sizes.insert(path, size)
    }

    pub fn remove(&mut self, path: IndexPath) -> Option<Size> {
        self.sizes.remove(&path)
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl FromIterator<(IndexPath, Size)> for SizeCache {
    fn from_iter<I: IntoIterator<Item = (IndexPath, Size)>>(iter: I) -> Self {
        Self {
            sizes: iter.into_iter().collect(),
        }
    }
}
