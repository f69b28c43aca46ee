// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The three-state edge cell and the `Color` newtype.
//!
//! The original formulation stored `None` for "no edge", `-1` for "edge but
//! uncolored", and a plain integer for a colored edge. That encoding makes
//! color 0 and "absence" dangerously easy to confuse, so here the cell is an
//! explicit tagged type: [`EdgeCell::NotAdjacent`], [`EdgeCell::Uncolored`],
//! or [`EdgeCell::Colored`].

use std::fmt;

/// An edge color.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// colors with vertex indices or other integer values. For an n-vertex
/// graph, valid colors lie in `[0, n+1)`; the bound is enforced by
/// [`ColorMatrix`](crate::graph::ColorMatrix), not by the newtype itself,
/// because the limit depends on the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(u32);

impl Color {
    /// Create a new color.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// One cell of the adjacency/color matrix.
///
/// Cell (i, j) and cell (j, i) always hold the same state, and the diagonal
/// is always `NotAdjacent`; both invariants are maintained by
/// [`ColorMatrix`](crate::graph::ColorMatrix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeCell {
    /// No edge between the two vertices.
    #[default]
    NotAdjacent,
    /// An edge exists but has no color assigned yet.
    Uncolored,
    /// An edge exists and is colored.
    Colored(Color),
}

impl EdgeCell {
    /// Whether this cell represents an edge (colored or not).
    pub fn is_edge(self) -> bool {
        !matches!(self, EdgeCell::NotAdjacent)
    }

    /// The color of this cell, if it is a colored edge.
    pub fn color(self) -> Option<Color> {
        match self {
            EdgeCell::Colored(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Display for EdgeCell {
    /// `-` for no edge, `#` for an uncolored edge, `c{k}` for a colored one.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeCell::NotAdjacent => write!(f, "-"),
            EdgeCell::Uncolored => write!(f, "#"),
            EdgeCell::Colored(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_value() {
        let c = Color::new(0);
        assert_eq!(c.value(), 0);

        let c = Color::new(7);
        assert_eq!(c.value(), 7);
        assert_eq!(c.as_usize(), 7);
    }

    #[test]
    fn test_color_ordering() {
        assert!(Color::new(0) < Color::new(1));
        assert!(Color::new(3) > Color::new(2));
    }

    #[test]
    fn test_cell_is_edge() {
        assert!(!EdgeCell::NotAdjacent.is_edge());
        assert!(EdgeCell::Uncolored.is_edge());
        assert!(EdgeCell::Colored(Color::new(0)).is_edge());
    }

    #[test]
    fn test_cell_color() {
        assert_eq!(EdgeCell::NotAdjacent.color(), None);
        assert_eq!(EdgeCell::Uncolored.color(), None);
        assert_eq!(EdgeCell::Colored(Color::new(2)).color(), Some(Color::new(2)));
    }

    #[test]
    fn test_cell_color_zero_is_not_absence() {
        // The whole point of the tagged type: color 0 is a real color.
        let colored = EdgeCell::Colored(Color::new(0));
        assert!(colored.is_edge());
        assert_ne!(colored, EdgeCell::Uncolored);
        assert_ne!(colored, EdgeCell::NotAdjacent);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(format!("{}", EdgeCell::NotAdjacent), "-");
        assert_eq!(format!("{}", EdgeCell::Uncolored), "#");
        assert_eq!(format!("{}", EdgeCell::Colored(Color::new(4))), "c4");
    }
}
