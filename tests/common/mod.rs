// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use vizing_color::graph::ColorMatrix;

/// The 5-vertex project example graph: Δ = 4.
pub fn project_graph() -> ColorMatrix {
    ColorMatrix::from_edges(5, &[(0, 1), (0, 3), (1, 2), (1, 4), (2, 3), (2, 4), (3, 4)])
        .expect("valid edge list")
}

/// The complete graph on n vertices.
pub fn complete_graph(n: usize) -> ColorMatrix {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    ColorMatrix::from_edges(n, &edges).expect("valid edge list")
}

/// The cycle graph on n >= 3 vertices.
pub fn cycle_graph(n: usize) -> ColorMatrix {
    let edges: Vec<(usize, usize)> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    ColorMatrix::from_edges(n, &edges).expect("valid edge list")
}

/// The star with `leaves` outer vertices around vertex 0.
pub fn star_graph(leaves: usize) -> ColorMatrix {
    let edges: Vec<(usize, usize)> = (1..=leaves).map(|v| (0, v)).collect();
    ColorMatrix::from_edges(leaves + 1, &edges).expect("valid edge list")
}

/// The complete bipartite graph with parts of size a and b
/// (vertices 0..a against a..a+b).
pub fn complete_bipartite(a: usize, b: usize) -> ColorMatrix {
    let mut edges = Vec::new();
    for u in 0..a {
        for v in a..(a + b) {
            edges.push((u, v));
        }
    }
    ColorMatrix::from_edges(a + b, &edges).expect("valid edge list")
}

/// The Petersen graph: 3-regular on 10 vertices.
pub fn petersen_graph() -> ColorMatrix {
    let mut edges = Vec::new();
    for v in 0..5 {
        edges.push((v, (v + 1) % 5)); // outer 5-cycle
        edges.push((v, v + 5)); // spokes
        edges.push((v + 5, (v + 2) % 5 + 5)); // inner pentagram
    }
    ColorMatrix::from_edges(10, &edges).expect("valid edge list")
}
