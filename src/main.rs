// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line wrapper: read a problem from stdin, color it, report.
//!
//! ```text
//! $ echo '3 3
//! 0 1
//! 1 2
//! 0 2' | vizing
//! 2 3
//! 0 1 1
//! 0 2 2
//! 1 2 3
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) for per-step engine traces.

use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use vizing_color::coloring::{color_graph, verify_coloring, Counters};
use vizing_color::format::{parse_problem, render_grid, write_report};

/// Proper edge coloring with at most Δ+1 colors.
#[derive(Debug, Parser)]
#[command(name = "vizing", version, about)]
struct Args {
    /// Re-check the result (proper, complete, within Δ+1) after coloring.
    #[arg(long)]
    verify: bool,

    /// Dump the colored matrix as a grid on stderr.
    #[arg(long)]
    grid: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("vizing: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut graph = parse_problem(stdin.lock())?;

    let stats = color_graph(&mut graph)?;
    log::info!(
        "colored {} edges ({} fans, {} inversions)",
        stats.get(Counters::EdgesColored),
        stats.get(Counters::FansBuilt),
        stats.get(Counters::PathsInverted),
    );

    if args.verify {
        verify_coloring(&graph)?;
    }
    if args.grid {
        eprint!("{}", render_grid(&graph));
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &graph)?;
    out.flush()?;
    Ok(())
}
