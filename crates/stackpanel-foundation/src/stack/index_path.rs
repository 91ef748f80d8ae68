//! Identities of laid-out elements.

use std::fmt;

/// Position of an item in the grouped sequence.
///
/// Ordered by group first, then row, which is also the layout order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexPath {
    pub group: usize,
    pub row: usize,
}

impl IndexPath {
    pub const fn new(group: usize, row: usize) -> Self {
        Self { group, row }
    }

    /// The following row in the same group. May not exist.
    #[inline]
    pub const fn next_row(self) -> Self {
        Self::new(self.group, self.row + 1)
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.row)
    }
}

/// Anything that receives a layout record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementId {
    Item(IndexPath),
    GroupHeader(usize),
    /// The footer is singular; it trails the last group.
    Footer,
}

impl ElementId {
    /// Group the element belongs to. The footer belongs to none.
    pub fn group(&self) -> Option<usize> {
        match self {
            ElementId::Item(path) => Some(path.group),
            ElementId::GroupHeader(group) => Some(*group),
            ElementId::Footer => None,
        }
    }

    pub fn index_path(&self) -> Option<IndexPath> {
        match self {
            ElementId::Item(path) => Some(*path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_paths_order_by_group_then_row() {
        let mut paths = vec![
            IndexPath::new(1, 0),
            IndexPath::new(0, 2),
            IndexPath::new(0, 10),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                IndexPath::new(0, 2),
                IndexPath::new(0, 10),
                IndexPath::new(1, 0)
            ]
        );
        assert_eq!(IndexPath::new(2, 3).next_row(), IndexPath::new(2, 4));
        assert_eq!(IndexPath::new(2, 3).to_string(), "2:3");
    }

    #[test]
    fn footer_has_no_group() {
        assert_eq!(ElementId::Footer.group(), None);
        assert_eq!(ElementId::GroupHeader(4).group(), Some(4));
        assert_eq!(
            ElementId::Item(IndexPath::new(1, 2)).index_path(),
            Some(IndexPath::new(1, 2))
        );
    }
}
