// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The coloring engine.
//!
//! [`color_graph`] drives the matrix to a full proper edge coloring with at
//! most Δ+1 colors, one uncolored edge at a time. For each vertex X, while
//! an uncolored incident edge remains:
//!
//! 1. Build the maximal fan `F = [f, ..., l]` of X ([`fan::maximal_fan`]).
//! 2. Pick d = smallest free color at l, c = smallest free color at X
//!    excluding d. Smallest-first keeps already-introduced colors in use and
//!    the output deterministic.
//! 3. Invert the cd-path from X ([`path::invert_cd_path`]), making d free
//!    at X without breaking properness anywhere else.
//! 4. Re-scan F in original order for the first element w with d free.
//! 5. Rotate the fan prefix through w ([`rotate::rotate_fan`]) and set edge
//!    (X, w) to d.
//!
//! Each round colors exactly one previously uncolored edge at X, and every
//! intermediate state is a proper partial coloring, so the loop terminates.
//!
//! The matrix is taken by `&mut` for the whole pass: every step reads the
//! freshest state left by the previous one, and a cd-path inversion may
//! touch edges far from X, so there is no sound unit of parallelism here.

pub mod errors;
pub mod fan;
pub mod path;
pub mod rotate;
pub mod statistics;

pub use errors::ColoringError;
pub use statistics::{Counters, Statistics};

use crate::graph::ColorMatrix;
use fan::maximal_fan;
use path::invert_cd_path;
use rotate::rotate_fan;

/// Color every edge of the graph properly, using at most Δ+1 colors.
///
/// Any pre-seeded colors are cleared first; adjacency (and therefore Δ) is
/// unchanged by the pass. On success the matrix satisfies
/// `is_properly_colored(true)` and `used_colors().len() <= max_degree() + 1`,
/// and the returned [`Statistics`] describe the work done.
///
/// # Errors
///
/// All errors are fatal and leave the matrix in an unspecified partial
/// state; partial results are not a supported contract. The invariant
/// variants of [`ColoringError`] are unreachable for simple-graph inputs.
pub fn color_graph(graph: &mut ColorMatrix) -> Result<Statistics, ColoringError> {
    let mut stats = Statistics::new();
    graph.clear_colors();

    for x in 0..graph.vertex_count() {
        color_vertex(graph, x, &mut stats)?;
    }
    Ok(stats)
}

/// Resolve one vertex: loop until X has no uncolored incident edge.
fn color_vertex(
    graph: &mut ColorMatrix,
    x: usize,
    stats: &mut Statistics,
) -> Result<(), ColoringError> {
    while let Some(fan) = maximal_fan(graph, x, None) {
        stats.increment(Counters::FansBuilt);

        let last = *fan.last().expect("fan is never empty");

        // d may introduce a color new to the graph; picking the smallest
        // free color at l keeps the palette within [0, Δ+1).
        let d = graph
            .free_colors(last)
            .smallest()
            .ok_or_else(|| ColoringError::NoFreeColor {
                vertex: last,
                fan: fan.clone(),
                exclude: None,
            })?;

        // c must differ from d; the Δ+1 budget guarantees X still has one.
        let mut x_free = graph.free_colors(x);
        x_free.remove(d);
        let c = x_free.smallest().ok_or_else(|| ColoringError::NoFreeColor {
            vertex: x,
            fan: fan.clone(),
            exclude: Some(d),
        })?;
        log::debug!("vertex {}: fan={:?} c={} d={}", x, fan, c, d);

        invert_cd_path(graph, x, c, d)?;
        stats.increment(Counters::PathsInverted);

        // First fan element (original order) where d is now free. The
        // inversion only touched colors c and d, so the chain below w is
        // intact and w is guaranteed to exist.
        let w_pos = fan
            .iter()
            .position(|&v| graph.free_colors(v).contains(d))
            .ok_or_else(|| ColoringError::NoRotationPivot {
                vertex: x,
                fan: fan.clone(),
                c,
                d,
            })?;
        let w = fan[w_pos];

        rotate_fan(graph, x, &fan[..=w_pos])?;
        stats.increment(Counters::FansRotated);

        // The rotation leaves (X, w) holding the seed's uncolored state
        // (or untouched when w = f); the explicit assignment finishes the round.
        graph.set_edge_color(x, w, d)?;
        stats.increment(Counters::EdgesColored);
        log::trace!("vertex {}: colored edge ({}, {}) with {}", x, x, w, d);
    }
    Ok(())
}

/// Check a finished matrix: fully colored, proper, within the Δ+1 budget.
///
/// A convenience for callers that want an explicit post-pass check (the
/// binary's `--verify` flag); `color_graph` guarantees this by construction.
pub fn verify_coloring(graph: &ColorMatrix) -> Result<(), ColoringError> {
    if !graph.is_properly_colored(true) {
        return Err(ColoringError::ImproperColoring);
    }
    if graph.used_colors().len() > graph.max_degree() + 1 {
        return Err(ColoringError::ImproperColoring);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Color;

    fn assert_colored_within_budget(graph: &ColorMatrix) {
        assert!(graph.is_properly_colored(true));
        assert!(graph.used_colors().len() <= graph.max_degree() + 1);
    }

    #[test]
    fn test_empty_graph_is_noop() {
        let mut g = ColorMatrix::new(4);
        let stats = color_graph(&mut g).unwrap();

        assert!(g.is_properly_colored(true));
        assert_eq!(g.max_degree(), 0);
        assert!(g.used_colors().is_empty());
        assert_eq!(stats.get(Counters::EdgesColored), 0);
    }

    #[test]
    fn test_single_edge() {
        let mut g = ColorMatrix::from_edges(2, &[(0, 1)]).unwrap();
        let stats = color_graph(&mut g).unwrap();

        assert_colored_within_budget(&g);
        assert_eq!(g.used_colors().len(), 1);
        assert_eq!(stats.get(Counters::EdgesColored), 1);
    }

    #[test]
    fn test_triangle_needs_three_colors() {
        let mut g = ColorMatrix::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        color_graph(&mut g).unwrap();

        assert_colored_within_budget(&g);
        // Odd cycle: the Δ+1 bound is tight.
        assert_eq!(g.max_degree(), 2);
        assert_eq!(g.used_colors().len(), 3);
    }

    #[test]
    fn test_even_cycle_needs_two_colors() {
        let mut g = ColorMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]).unwrap();
        color_graph(&mut g).unwrap();

        assert_colored_within_budget(&g);
        assert!(g.used_colors().len() <= 3);
    }

    #[test]
    fn test_colors_drawn_from_delta_plus_one_prefix() {
        // Smallest-first selection keeps colors in [0, Δ+1), not merely
        // at most Δ+1 of them.
        let mut g =
            ColorMatrix::from_edges(5, &[(0, 1), (0, 3), (1, 2), (1, 4), (2, 3), (2, 4), (3, 4)])
                .unwrap();
        color_graph(&mut g).unwrap();

        let delta = g.max_degree();
        for c in g.used_colors().iter() {
            assert!(c.as_usize() < delta + 1);
        }
    }

    #[test]
    fn test_seeded_colors_are_cleared_first() {
        let mut g = crate::graph::ColorMatrix::from_colored_edges(
            3,
            &[(0, 1, Some(Color::new(3))), (1, 2, None), (0, 2, None)],
        )
        .unwrap();
        color_graph(&mut g).unwrap();

        assert_colored_within_budget(&g);
        // Color 3 exceeds Δ+1 = 3; the clear-then-recolor pass drops it.
        assert!(!g.used_colors().contains(Color::new(3)));
    }

    #[test]
    fn test_deterministic_output() {
        let edges = [(0, 1), (0, 3), (1, 2), (1, 4), (2, 3), (2, 4), (3, 4)];
        let mut g1 = ColorMatrix::from_edges(5, &edges).unwrap();
        let mut g2 = ColorMatrix::from_edges(5, &edges).unwrap();
        color_graph(&mut g1).unwrap();
        color_graph(&mut g2).unwrap();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_verify_coloring() {
        let mut g = ColorMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        assert_eq!(verify_coloring(&g), Err(ColoringError::ImproperColoring));

        color_graph(&mut g).unwrap();
        assert_eq!(verify_coloring(&g), Ok(()));
    }

    #[test]
    fn test_statistics_accumulate() {
        let mut g = ColorMatrix::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let stats = color_graph(&mut g).unwrap();

        assert_eq!(stats.get(Counters::EdgesColored), 3);
        assert_eq!(stats.get(Counters::FansBuilt), stats.get(Counters::FansRotated));
        assert!(stats.get(Counters::PathsInverted) >= 3);
    }
}
