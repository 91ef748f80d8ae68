// Copyright 2025 The Stackpanel Authors
// SPDX-License-Identifier: Apache-2.0

//! Where each group ends along the extent axis.
//!
//! Sticky-header logic reads this table while scrolling to know when the
//! next group should push a pinned header away.

use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionEndTable {
    ends: FxHashMap<usize, f32>,
}

impl SectionEndTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extent-end of `group`, if it has been laid out.
    pub fn get(&self, group: usize) -> Option<f32> {
        self.ends.get(&group).copied()
    }

    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.ends.iter().map(|(&group, &end)| (group, end))
    }

    /// Forgets a removed group.
    pub fn remove(&mut self, group: usize) -> Option<f32> {
        self.ends.remove(&group)
    }

    /// Forgets every group at or past `group_count`.
    pub fn retain_groups(&mut self, group_count: usize) {
        self.ends.retain(|&group, _| group < group_count);
    }

    pub fn clear(&mut self) {
        self.ends.clear();
    }

    pub(crate) fn set(&mut self, group: usize, end: f32) {
        self.ends.insert(group, end);
    }

    /// Sets the end of every known group at or past `group` to `end`.
    pub(crate) fn collapse_from(&mut self, group: usize, end: f32) {
        for (&g, value) in self.ends.iter_mut() {
            if g >= group {
                *value = end;
            }
        }
    }

    /// Shifts the end of `group` and every later group by `delta`.
    pub(crate) fn shift_from(&mut self, group: usize, delta: f32) {
        for (&g, end) in self.ends.iter_mut() {
            if g >= group {
                *end += delta;
            }
        }
    }
}
