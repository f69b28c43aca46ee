// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the coloring engine.
//!
//! Every variant here is terminal: the algorithm is deterministic, so no
//! failed step can succeed on retry. The invariant-violation variants are
//! proven unreachable for valid simple-graph inputs colored with Δ+1
//! colors; hitting one means either a malformed precondition (not a simple
//! graph) or an implementation defect, and the variant carries enough
//! context (vertex, fan, attempted colors) to debug it.

use crate::graph::{Color, GraphError};
use thiserror::Error;

/// Errors surfaced by [`color_graph`](crate::coloring::color_graph) and
/// [`verify_coloring`](crate::coloring::verify_coloring).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// No free color was available where the Δ+1 budget guarantees one.
    #[error("no free color at vertex {vertex} (fan {fan:?}, excluding {exclude:?})")]
    NoFreeColor {
        vertex: usize,
        fan: Vec<usize>,
        exclude: Option<Color>,
    },

    /// No fan element had the target color free after cd-path inversion.
    #[error("no rotation pivot in fan {fan:?} at vertex {vertex} (c={c}, d={d})")]
    NoRotationPivot {
        vertex: usize,
        fan: Vec<usize>,
        c: Color,
        d: Color,
    },

    /// Post-pass verification found an improper or incomplete coloring.
    #[error("coloring is not proper and complete")]
    ImproperColoring,

    /// A matrix operation rejected its arguments mid-pass.
    #[error(transparent)]
    Graph(#[from] GraphError),
}
