// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The textual problem format.
//!
//! Input: a first line `n m` (vertex count, edge count), then m lines of
//! `u v` or `u v color`, all 0-based. A third field pre-seeds that edge's
//! color in the matrix; the coloring entry point clears seeds anyway, so
//! they matter only to callers inspecting the matrix directly.
//!
//! Output report: a line `Δ color_count`, then one line `u v color` per
//! upper-triangle edge with the color 1-indexed.
//!
//! Also here: [`render_grid`], a human-readable dump of the whole matrix
//! for debugging.

use crate::graph::{Color, ColorMatrix, GraphError};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors from reading the textual problem format.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected {expected}, got {got:?}")]
    MalformedLine {
        line: usize,
        expected: &'static str,
        got: String,
    },

    #[error("line {line}: {source}")]
    BadNumber {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("expected {expected} edge lines, got {got}")]
    MissingEdges { expected: usize, got: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parse a problem from a reader into an (at most partially colored) matrix.
pub fn parse_problem(reader: impl BufRead) -> Result<ColorMatrix, ParseError> {
    let mut lines = reader.lines().enumerate();

    let (vert_count, edge_count) = {
        let (lineno, line) = lines
            .next()
            .ok_or(ParseError::MalformedLine {
                line: 1,
                expected: "vertex and edge counts",
                got: String::new(),
            })
            .and_then(|(i, l)| Ok((i, l?)))?;
        let fields = parse_fields(lineno + 1, &line, 2, "vertex and edge counts")?;
        (fields[0], fields[1])
    };

    let mut edges: Vec<(usize, usize, Option<Color>)> = Vec::with_capacity(edge_count);
    for (lineno, line) in lines.take(edge_count) {
        let line = line?;
        edges.push(parse_edge_fields(lineno + 1, &line)?);
    }
    if edges.len() < edge_count {
        return Err(ParseError::MissingEdges {
            expected: edge_count,
            got: edges.len(),
        });
    }

    Ok(ColorMatrix::from_colored_edges(vert_count, &edges)?)
}

/// Split a line into exactly `want` whitespace-separated integers.
fn parse_fields(
    lineno: usize,
    line: &str,
    want: usize,
    expected: &'static str,
) -> Result<Vec<usize>, ParseError> {
    let fields = split_numbers(lineno, line)?;
    if fields.len() != want {
        return Err(ParseError::MalformedLine {
            line: lineno,
            expected,
            got: line.to_string(),
        });
    }
    Ok(fields)
}

/// An edge line has two or three fields: `u v` or `u v color`.
///
/// The color field is parsed directly as `u32` (the matrix's color space),
/// so an oversized value fails here rather than wrapping on a cast.
fn parse_edge_fields(
    lineno: usize,
    line: &str,
) -> Result<(usize, usize, Option<Color>), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 && tokens.len() != 3 {
        return Err(ParseError::MalformedLine {
            line: lineno,
            expected: "`u v` or `u v color`",
            got: line.to_string(),
        });
    }
    let u = parse_number(lineno, tokens[0])?;
    let v = parse_number(lineno, tokens[1])?;
    let color = match tokens.get(2) {
        Some(tok) => Some(Color::new(parse_number(lineno, tok)?)),
        None => None,
    };
    Ok((u, v, color))
}

fn parse_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    lineno: usize,
    tok: &str,
) -> Result<T, ParseError> {
    tok.parse().map_err(|source| ParseError::BadNumber {
        line: lineno,
        source,
    })
}

fn split_numbers(lineno: usize, line: &str) -> Result<Vec<usize>, ParseError> {
    line.split_whitespace()
        .map(|tok| parse_number(lineno, tok))
        .collect()
}

/// Write the standard report: `Δ color_count`, then `u v color` per edge
/// with 1-indexed colors. Uncolored edges are skipped (a fully colored
/// matrix has none).
pub fn write_report(mut out: impl Write, graph: &ColorMatrix) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        graph.max_degree(),
        graph.used_colors().len()
    )?;
    for (u, v) in graph.edges() {
        if let Some(color) = graph.cell(u, v).color() {
            writeln!(out, "{} {} {}", u, v, color.value() + 1)?;
        }
    }
    Ok(())
}

/// Render the matrix as a labelled grid: `-` not adjacent, `#` uncolored,
/// `c{k}` colored.
pub fn render_grid(graph: &ColorMatrix) -> String {
    let n = graph.vertex_count();
    let mut out = String::new();

    for col in 0..n {
        let _ = write!(out, "\tv{}", col);
    }
    out.push('\n');
    for row in 0..n {
        let _ = write!(out, "v{}", row);
        for col in 0..n {
            let _ = write!(out, "\t{}", graph.cell(row, col));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeCell;

    #[test]
    fn test_parse_uncolored_problem() {
        let input = "3 2\n0 1\n1 2\n";
        let g = parse_problem(input.as_bytes()).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.cell(0, 1), EdgeCell::Uncolored);
        assert_eq!(g.cell(0, 2), EdgeCell::NotAdjacent);
    }

    #[test]
    fn test_parse_seeded_color() {
        let input = "3 2\n0 1 2\n1 2\n";
        let g = parse_problem(input.as_bytes()).unwrap();
        assert_eq!(g.cell(0, 1), EdgeCell::Colored(Color::new(2)));
        assert_eq!(g.cell(1, 2), EdgeCell::Uncolored);
    }

    #[test]
    fn test_parse_rejects_garbage_header() {
        let err = parse_problem("3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 1, .. }));

        let err = parse_problem("three two\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::BadNumber { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_short_input() {
        let err = parse_problem("3 2\n0 1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingEdges {
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_edge_line() {
        let err = parse_problem("3 1\n0 1 2 3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_oversized_seed_color() {
        // 2^32 does not fit the color space's u32: it must fail the parse,
        // not wrap around to color 0.
        let err = parse_problem("3 1\n0 1 4294967296\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::BadNumber { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_seed_color_beyond_limit() {
        // 3 vertices: the color space is [0, 4), so seed color 4 is rejected.
        let err = parse_problem("3 1\n0 1 4\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Graph(GraphError::ColorOutOfRange { color: 4, .. })
        ));
    }

    #[test]
    fn test_parse_propagates_graph_errors() {
        let err = parse_problem("3 1\n1 1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Graph(GraphError::SelfLoop { vertex: 1 })
        ));
    }

    #[test]
    fn test_report_format() {
        let mut g = ColorMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        g.set_edge_color(0, 1, Color::new(0)).unwrap();
        g.set_edge_color(1, 2, Color::new(1)).unwrap();

        let mut out = Vec::new();
        write_report(&mut out, &g).unwrap();
        let text = String::from_utf8(out).unwrap();

        // Δ=2, two colors; colors are 1-indexed in the report.
        assert_eq!(text, "2 2\n0 1 1\n1 2 2\n");
    }

    #[test]
    fn test_grid_markers() {
        let mut g = ColorMatrix::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        g.set_edge_color(0, 1, Color::new(4)).unwrap();

        let grid = render_grid(&g);
        assert!(grid.contains("v2"));
        assert!(grid.contains("c4"));
        assert!(grid.contains('#'));
        assert!(grid.contains('-'));
    }
}
