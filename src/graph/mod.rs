// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The adjacency/color matrix model.
//!
//! A [`ColorMatrix`] is an n×n symmetric matrix of [`EdgeCell`]s. It owns
//! all coloring state; the engine in [`crate::coloring`] only ever works
//! through the queries and mutations exposed here, which keeps the two
//! matrix-symmetry invariants (cell(i,j) == cell(j,i), diagonal always
//! `NotAdjacent`) in one place.
//!
//! Colors for an n-vertex graph are drawn from `[0, n+1)`: n+1 colors are
//! always enough for the Δ+1 bound, since Δ ≤ n−1.

pub mod cell;
pub mod color_set;

pub use cell::{Color, EdgeCell};
pub use color_set::ColorSet;

use thiserror::Error;

/// Errors arising from graph construction or misuse of matrix operations.
///
/// These are caller errors, not algorithm failures: a well-formed simple
/// graph driven through the public contracts never produces one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A vertex index was at or beyond the vertex count.
    #[error("vertex {vertex} out of range for a {size}-vertex graph")]
    VertexOutOfRange { vertex: usize, size: usize },

    /// An edge (v, v) was supplied; self-loops are not supported.
    #[error("self-loop at vertex {vertex} (simple graphs only)")]
    SelfLoop { vertex: usize },

    /// The same vertex pair was supplied twice; multigraphs are not supported.
    #[error("duplicate edge ({u}, {v}) (simple graphs only)")]
    DuplicateEdge { u: usize, v: usize },

    /// A color at or beyond the n+1 color space was supplied.
    #[error("color {color} out of range for a {size}-vertex graph (limit {limit})")]
    ColorOutOfRange {
        color: u32,
        size: usize,
        limit: usize,
    },

    /// A color operation was requested on a non-adjacent vertex pair.
    #[error("({u}, {v}) is not an edge")]
    NotAnEdge { u: usize, v: usize },

    /// Raw rows did not form a square matrix.
    #[error("matrix is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// Raw rows were not symmetric: cell(i,j) != cell(j,i).
    #[error("matrix is asymmetric at ({u}, {v})")]
    Asymmetric { u: usize, v: usize },

    /// A raw diagonal cell claimed a vertex adjacent to itself.
    #[error("diagonal cell ({vertex}, {vertex}) is not NotAdjacent")]
    SelfAdjacent { vertex: usize },
}

/// The n×n symmetric adjacency/color matrix of a simple undirected graph.
///
/// Stored row-major. Every mutation writes both (u, v) and (v, u), so the
/// symmetry invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatrix {
    cells: Vec<EdgeCell>,
    size: usize,
}

impl ColorMatrix {
    /// Create a graph with `size` vertices and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![EdgeCell::NotAdjacent; size * size],
            size,
        }
    }

    /// Build a graph from an uncolored edge list.
    ///
    /// Rejects out-of-range vertices, self-loops, and duplicate edges.
    /// The pair (u, v) and its reverse (v, u) count as the same edge.
    pub fn from_edges(size: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let colored: Vec<(usize, usize, Option<Color>)> =
            edges.iter().map(|&(u, v)| (u, v, None)).collect();
        Self::from_colored_edges(size, &colored)
    }

    /// Build a graph from an edge list with optional pre-seeded colors.
    ///
    /// Seeded colors are stored as given; nothing checks that they form a
    /// proper coloring (use [`is_properly_colored`](Self::is_properly_colored)
    /// for that), and [`crate::coloring::color_graph`] discards them anyway.
    pub fn from_colored_edges(
        size: usize,
        edges: &[(usize, usize, Option<Color>)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(size);
        for &(u, v, color) in edges {
            graph.check_vertex(u)?;
            graph.check_vertex(v)?;
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            if graph.contains_edge(u, v) {
                return Err(GraphError::DuplicateEdge { u, v });
            }
            let cell = match color {
                Some(c) => {
                    graph.check_color(c)?;
                    EdgeCell::Colored(c)
                }
                None => EdgeCell::Uncolored,
            };
            graph.set_cell(u, v, cell);
        }
        Ok(graph)
    }

    /// Build a graph from raw matrix rows, validating well-formedness.
    ///
    /// This is the pre-flight path for callers holding an externally built
    /// matrix: it rejects non-square input, asymmetric cells, diagonal
    /// adjacency, and out-of-range colors before any coloring begins.
    pub fn from_rows(rows: Vec<Vec<EdgeCell>>) -> Result<Self, GraphError> {
        let size = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::NotSquare {
                    row: i,
                    len: row.len(),
                    size,
                });
            }
        }
        let mut graph = Self::new(size);
        for u in 0..size {
            if rows[u][u] != EdgeCell::NotAdjacent {
                return Err(GraphError::SelfAdjacent { vertex: u });
            }
            for v in 0..size {
                if rows[u][v] != rows[v][u] {
                    return Err(GraphError::Asymmetric { u, v });
                }
                if let EdgeCell::Colored(c) = rows[u][v] {
                    graph.check_color(c)?;
                }
                graph.cells[u * size + v] = rows[u][v];
            }
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.size
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_edge()).count() / 2
    }

    /// The size of the color space: n+1 for an n-vertex graph.
    pub fn color_limit(&self) -> usize {
        self.size + 1
    }

    /// The cell state for the vertex pair (u, v).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn cell(&self, u: usize, v: usize) -> EdgeCell {
        assert!(u < self.size && v < self.size);
        self.cells[u * self.size + v]
    }

    /// Whether (u, v) is an edge (colored or not).
    pub fn contains_edge(&self, u: usize, v: usize) -> bool {
        self.cell(u, v).is_edge()
    }

    /// Neighbors of v in ascending index order.
    ///
    /// Ascending order is a contract, not an artifact: the fan and path
    /// builders rely on it for deterministic tie-breaking.
    pub fn adjacent(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.cells[v * self.size..(v + 1) * self.size];
        row.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_edge())
            .map(|(u, _)| u)
    }

    /// Degree of v.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacent(v).count()
    }

    /// Δ: the maximum degree over all vertices. Zero for the empty graph.
    pub fn max_degree(&self) -> usize {
        (0..self.size).map(|v| self.degree(v)).max().unwrap_or(0)
    }

    /// Colors in `[0, n+1)` not used on any edge incident to v.
    ///
    /// `NotAdjacent` and `Uncolored` cells contribute nothing: only a
    /// `Colored` cell makes its color non-free.
    pub fn free_colors(&self, v: usize) -> ColorSet {
        let mut free = ColorSet::full(self.color_limit());
        for u in 0..self.size {
            if let EdgeCell::Colored(c) = self.cell(v, u) {
                free.remove(c);
            }
        }
        free
    }

    /// The union of all colors appearing on any edge of the graph.
    pub fn used_colors(&self) -> ColorSet {
        let mut used = ColorSet::empty(self.color_limit());
        for cell in &self.cells {
            if let EdgeCell::Colored(c) = cell {
                used.insert(*c);
            }
        }
        used
    }

    /// Reset every colored edge to `Uncolored`, leaving adjacency untouched.
    ///
    /// Idempotent.
    pub fn clear_colors(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell, EdgeCell::Colored(_)) {
                *cell = EdgeCell::Uncolored;
            }
        }
    }

    /// Set the color of an existing edge, writing both triangles.
    ///
    /// Requesting a color on a non-adjacent pair is a precondition
    /// violation and fails immediately.
    pub fn set_edge_color(&mut self, u: usize, v: usize, color: Color) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.check_color(color)?;
        if !self.contains_edge(u, v) {
            return Err(GraphError::NotAnEdge { u, v });
        }
        self.set_cell(u, v, EdgeCell::Colored(color));
        Ok(())
    }

    /// Check that no vertex has two incident edges of the same color.
    ///
    /// With `require_fully_colored`, additionally require that no incident
    /// edge is still `Uncolored`. This is a verification utility; the
    /// algorithm itself never needs it because it preserves properness as
    /// an invariant after every mutation.
    pub fn is_properly_colored(&self, require_fully_colored: bool) -> bool {
        for v in 0..self.size {
            let mut seen = ColorSet::empty(self.color_limit());
            for u in self.adjacent(v) {
                match self.cell(v, u) {
                    EdgeCell::Uncolored if require_fully_colored => return false,
                    EdgeCell::Colored(c) => {
                        if seen.contains(c) {
                            return false;
                        }
                        seen.insert(c);
                    }
                    _ => {}
                }
            }
        }
        true
    }

    /// The upper-triangle edge list, (u, v) with u < v, in row-major order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for u in 0..self.size {
            for v in (u + 1)..self.size {
                if self.contains_edge(u, v) {
                    edges.push((u, v));
                }
            }
        }
        edges
    }

    /// Reset a single existing edge to `Uncolored`, writing both triangles.
    ///
    /// Used by fan rotation when the seed edge's uncolored state shifts to
    /// the end of the fan; not part of the public coloring contract.
    pub(crate) fn set_edge_uncolored(&mut self, u: usize, v: usize) {
        debug_assert!(self.contains_edge(u, v));
        self.set_cell(u, v, EdgeCell::Uncolored);
    }

    fn set_cell(&mut self, u: usize, v: usize, cell: EdgeCell) {
        self.cells[u * self.size + v] = cell;
        self.cells[v * self.size + u] = cell;
    }

    fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v >= self.size {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                size: self.size,
            });
        }
        Ok(())
    }

    fn check_color(&self, color: Color) -> Result<(), GraphError> {
        if color.as_usize() >= self.color_limit() {
            return Err(GraphError::ColorOutOfRange {
                color: color.value(),
                size: self.size,
                limit: self.color_limit(),
            });
        }
        Ok(())
    }
}
