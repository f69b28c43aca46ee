// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Maximal fan construction.
//!
//! A fan of vertex X is an ordered sequence of distinct neighbors
//! `F = [f, ..., l]` where edge (X, f) is uncolored and, for every
//! consecutive pair, the color of edge (X, F[k+1]) is free at F[k]. A fan is
//! maximal when no further neighbor can legally extend it.
//!
//! Fans are plain `Vec<usize>` index sequences, built fresh for each
//! iteration of the per-vertex coloring loop and discarded after the
//! rotation; they never hold references into the matrix.

use crate::graph::ColorMatrix;

/// Build the maximal fan of `x`, seeded at `seed` if given.
///
/// If `seed` is `None`, the lowest-index neighbor whose edge to `x` is
/// uncolored becomes the seed; if no such neighbor exists the vertex has
/// nothing left to color and the result is `None`.
///
/// Extension always picks the lowest-index eligible neighbor, so the fan
/// (and ultimately the whole coloring) is deterministic.
pub fn maximal_fan(graph: &ColorMatrix, x: usize, seed: Option<usize>) -> Option<Vec<usize>> {
    let seed = seed.or_else(|| {
        graph
            .adjacent(x)
            .find(|&v| graph.cell(x, v).color().is_none())
    })?;

    let mut fan = vec![seed];
    while let Some(v) = first_extension(graph, x, &fan) {
        fan.push(v);
    }
    Some(fan)
}

/// The lowest-index neighbor of `x` that can extend the fan: not already in
/// the fan, connected to `x` by a *colored* edge, with that color free at
/// the fan's current last element.
fn first_extension(graph: &ColorMatrix, x: usize, fan: &[usize]) -> Option<usize> {
    let last = *fan.last().expect("fan is never empty");
    let free_at_last = graph.free_colors(last);

    graph.adjacent(x).find(|&v| {
        if fan.contains(&v) {
            return false;
        }
        match graph.cell(x, v).color() {
            Some(c) => free_at_last.contains(c),
            None => false,
        }
    })
}
