// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fan rotation: a cyclic left shift of the colors on a fan's edges.
//!
//! For a fan prefix `F = [f, ..., w]` of vertex X, edge (X, F[i]) receives
//! the cell state that was on edge (X, F[i+1]), and the last edge (X, w)
//! receives what was on (X, f). The fan-construction invariant makes this
//! safe: each edge's color was free at the previous fan element, which after
//! the shift is exactly the edge that now carries it.
//!
//! The direction is correctness-sensitive. Only the left shift preserves
//! properness; a right shift hands each color to the *next* fan element,
//! where nothing guarantees it is free.

use crate::graph::{ColorMatrix, EdgeCell, GraphError};

/// Cyclically left-shift the cell states on edges (x, fan[i]).
///
/// Mutates exactly `fan.len()` edges, all incident to `x`. The seed edge's
/// state (uncolored, at the point the colorer calls this) lands on the last
/// fan edge; the caller overwrites it immediately afterwards.
pub fn rotate_fan(graph: &mut ColorMatrix, x: usize, fan: &[usize]) -> Result<(), GraphError> {
    if fan.len() < 2 {
        // A one-element fan has nothing to shift.
        return Ok(());
    }

    let mut states: Vec<EdgeCell> = fan.iter().map(|&v| graph.cell(x, v)).collect();
    states.rotate_left(1);

    for (&v, state) in fan.iter().zip(states) {
        match state {
            EdgeCell::Colored(c) => graph.set_edge_color(x, v, c)?,
            // The seed's uncolored state arriving at the last edge.
            EdgeCell::Uncolored => {
                if !graph.contains_edge(x, v) {
                    return Err(GraphError::NotAnEdge { u: x, v });
                }
                graph.set_edge_uncolored(x, v);
            }
            EdgeCell::NotAdjacent => return Err(GraphError::NotAnEdge { u: x, v }),
        }
    }
    Ok(())
}
