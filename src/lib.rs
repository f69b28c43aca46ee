// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Proper edge coloring of simple undirected graphs with at most Δ+1 colors,
//! where Δ is the maximum vertex degree.
//!
//! The implementation follows the constructive method underlying Vizing's
//! theorem (the Misra–Gries fan-rotation algorithm): edges are colored one at
//! a time, and after every mutation the partial coloring is still proper.
//!
//! # Architecture
//!
//! - [`graph`] — the data model: an n×n symmetric matrix of three-state cells
//!   ([`graph::EdgeCell`]) plus the primitive queries and mutations the
//!   algorithm is built from (adjacency, free colors, symmetric edge writes).
//! - [`coloring`] — the engine: maximal fan construction, cd-path inversion,
//!   fan rotation, and the per-vertex orchestration loop in
//!   [`coloring::color_graph`].
//! - [`format`] — the textual problem format: a parser for `n m` + edge-list
//!   input, the standard `Δ colors` report, and a debug grid renderer.
//!
//! # Example
//!
//! ```
//! use vizing_color::graph::ColorMatrix;
//! use vizing_color::coloring::color_graph;
//!
//! // A triangle: Δ = 2, but an odd cycle needs 3 = Δ+1 colors.
//! let mut graph = ColorMatrix::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
//! color_graph(&mut graph).unwrap();
//!
//! assert!(graph.is_properly_colored(true));
//! assert_eq!(graph.used_colors().len(), 3);
//! ```
//!
//! # References
//!
//! - Misra, J. and Gries, D. (1992). "A constructive proof of Vizing's
//!   theorem." Information Processing Letters 41(3).

pub mod coloring;
pub mod format;
pub mod graph;

// Re-export commonly used types
pub use coloring::{color_graph, ColoringError, Statistics};
pub use graph::{Color, ColorMatrix, ColorSet, EdgeCell, GraphError};
