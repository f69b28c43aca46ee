// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! cd-path location and inversion.
//!
//! In a properly colored graph, the subgraph of edges colored c or d is a
//! disjoint union of simple paths and even cycles, because no vertex can
//! carry two c edges or two d edges. Starting the walk at a vertex X where c
//! is free means X has degree ≤ 1 in that subgraph, so the walk traverses a
//! path, never a cycle, and terminates.
//!
//! Inverting the path swaps c and d along it. This frees d at X — the whole
//! point — while every interior vertex keeps exactly one c edge and one d
//! edge, so properness is preserved everywhere.

use crate::graph::{Color, ColorMatrix, EdgeCell, GraphError};

/// Walk the maximal alternating path from `x`: first hop on color `d`,
/// next on `c`, alternating until the sought color is absent.
///
/// Always returns at least `[x]`. Under the proper-coloring invariant each
/// hop has at most one candidate neighbor; the ascending scan order only
/// matters for graphs that violate that precondition.
pub fn cd_path(graph: &ColorMatrix, x: usize, c: Color, d: Color) -> Vec<usize> {
    let mut path = vec![x];
    let mut cur = x;
    let mut sought = d;
    let mut other = c;

    loop {
        let next = graph
            .adjacent(cur)
            .find(|&v| graph.cell(cur, v) == EdgeCell::Colored(sought));
        match next {
            Some(v) => {
                path.push(v);
                cur = v;
                std::mem::swap(&mut sought, &mut other);
            }
            None => return path,
        }
    }
}

/// Invert the cd-path from `x`: every edge on it colored c becomes d and
/// vice versa. Afterwards d is free at `x`.
pub fn invert_cd_path(
    graph: &mut ColorMatrix,
    x: usize,
    c: Color,
    d: Color,
) -> Result<(), GraphError> {
    let path = cd_path(graph, x, c, d);
    log::trace!("cd-path of {}: c={} d={} path={:?}", x, c, d, path);

    for pair in path.windows(2) {
        let (u, v) = (pair[0], pair[1]);
        let flipped = if graph.cell(u, v) == EdgeCell::Colored(c) {
            d
        } else {
            c
        };
        graph.set_edge_color(u, v, flipped)?;
    }
    Ok(())
}
