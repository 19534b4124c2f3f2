//! Benchmark driver: build one mesh, run each strategy over it as a timed
//! phase, and report elapsed time and total volume per strategy.
//!
//! Phases run sequentially on the calling thread. The mesh is only ever read.
//!
//! # Examples
//! ```rust
//! use mesh_cursor_bench::driver::{BenchConfig, run};
//!
//! let config = BenchConfig { print_tables: false, ..Default::default() };
//! let mut out = Vec::new();
//! let report = run(&config, &mut out)?;
//! assert_eq!(report.runs.len(), 6);
//! assert!(report.is_consistent(config.tolerance));
//! # Ok::<(), mesh_cursor_bench::mesh_error::MeshCursorError>(())
//! ```

use std::hint::black_box;
use std::io::Write;
use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::mesh::{Mesh, RandomMode};
use crate::mesh_error::MeshCursorError;
use crate::strategy::Strategy;
use crate::timer::{PhaseTimer, millis};

/// Relative tolerance used when cross-checking strategy totals.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Everything a benchmark run needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub vertex_count: usize,
    pub cell_count: usize,
    /// Pause before each phase, to separate phases in external monitors.
    pub pause: Duration,
    pub random_mode: RandomMode,
    /// Echo the coordinate and connectivity tables.
    pub print_tables: bool,
    /// Strategies to run. Duplicates are ignored; run order is always
    /// [`Strategy::ALL`] order.
    pub strategies: Vec<Strategy>,
    pub tolerance: f64,
    /// Print a closing comparison table.
    pub summary: bool,
    /// Print the report as JSON after the text output.
    pub json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            vertex_count: 10,
            cell_count: 8,
            pause: Duration::ZERO,
            random_mode: RandomMode::default(),
            print_tables: cfg!(debug_assertions),
            strategies: Strategy::ALL.to_vec(),
            tolerance: DEFAULT_TOLERANCE,
            summary: false,
            json: false,
        }
    }
}

impl BenchConfig {
    /// Reject configurations that cannot produce a valid run.
    pub fn validate(&self) -> Result<(), MeshCursorError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(MeshCursorError::InvalidTolerance(self.tolerance.to_string()));
        }
        if self.vertex_count == 0 && self.cell_count > 0 {
            return Err(MeshCursorError::NoVerticesForCells {
                cells: self.cell_count,
            });
        }
        Ok(())
    }

    /// Selected strategies in run order, without duplicates.
    pub fn selected_strategies(&self) -> Vec<Strategy> {
        let mut selected = self.strategies.clone();
        selected.sort_unstable();
        selected.dedup();
        selected
    }
}

/// Outcome of one timed phase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrategyReport {
    pub strategy: Strategy,
    pub elapsed: Duration,
    pub total: f64,
}

impl StrategyReport {
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        millis(self.elapsed)
    }
}

/// Outcome of a full run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchReport {
    pub vertex_count: usize,
    pub cell_count: usize,
    pub runs: Vec<StrategyReport>,
}

impl BenchReport {
    pub fn find(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.runs.iter().find(|run| run.strategy == strategy)
    }

    /// Largest relative deviation of any total from the first run's total.
    ///
    /// Zero when fewer than two strategies ran.
    pub fn max_relative_spread(&self) -> f64 {
        let Some(first) = self.runs.first() else {
            return 0.0;
        };
        let scale = first.total.abs().max(f64::MIN_POSITIVE);
        self.runs
            .iter()
            .map(|run| (run.total - first.total).abs() / scale)
            .fold(0.0, f64::max)
    }

    pub fn is_consistent(&self, tolerance: f64) -> bool {
        self.max_relative_spread() <= tolerance
    }

    /// Elapsed time of `strategy` relative to the raw loop, if both ran.
    pub fn slowdown(&self, strategy: Strategy) -> Option<f64> {
        let baseline = self.find(Strategy::RawLoop)?.elapsed.as_secs_f64();
        let this = self.find(strategy)?.elapsed.as_secs_f64();
        (baseline > 0.0).then(|| this / baseline)
    }
}

/// Build the mesh described by `config` and benchmark it.
pub fn run<W: Write>(config: &BenchConfig, out: &mut W) -> Result<BenchReport, MeshCursorError> {
    config.validate()?;

    writeln!(out, "#vertices={}", config.vertex_count)?;
    let mesh = Mesh::try_generate(config.vertex_count, config.cell_count, config.random_mode)?;
    if config.print_tables {
        mesh.write_coordinate_table(out)?;
    }
    writeln!(out, "#cells={}", config.cell_count)?;
    if config.print_tables {
        mesh.write_connectivity_table(out)?;
    }
    if !config.pause.is_zero() {
        writeln!(out, "#sleep_time={}", config.pause.as_secs_f64())?;
    }

    run_on_mesh(&mesh, config, out)
}

/// Benchmark an existing mesh with the strategies selected in `config`.
pub fn run_on_mesh<W: Write>(
    mesh: &Mesh,
    config: &BenchConfig,
    out: &mut W,
) -> Result<BenchReport, MeshCursorError> {
    let mut runs = Vec::with_capacity(config.strategies.len());
    for strategy in config.selected_strategies() {
        pause(config.pause);
        runs.push(run_phase(strategy, mesh, out)?);
    }

    let report = BenchReport {
        vertex_count: mesh.vertex_count(),
        cell_count: mesh.cell_count(),
        runs,
    };

    let spread = report.max_relative_spread();
    if spread > config.tolerance {
        log::warn!(
            "strategy totals disagree: relative spread {spread:e} exceeds tolerance {:e}",
            config.tolerance
        );
    }
    if config.summary {
        write_summary(&report, out)?;
    }
    if config.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    }
    Ok(report)
}

/// Time one strategy over `mesh` and print its result lines.
pub fn run_phase<W: Write>(
    strategy: Strategy,
    mesh: &Mesh,
    out: &mut W,
) -> Result<StrategyReport, MeshCursorError> {
    let mut timer = PhaseTimer::start(strategy.label(), 0, out)?;
    let total = black_box(strategy.total_volume(black_box(mesh)));
    let elapsed = timer.stop_and_display(out)?;
    writeln!(out, "volume({}) = {}", strategy.label(), total)?;
    log::info!("{strategy}: {} ms, total {total}", millis(elapsed));
    Ok(StrategyReport {
        strategy,
        elapsed,
        total,
    })
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

fn write_summary<W: Write>(report: &BenchReport, out: &mut W) -> Result<(), MeshCursorError> {
    writeln!(
        out,
        "{:<16} {:>14} {:>24} {:>10}",
        "strategy", "elapsed (ms)", "total", "vs raw"
    )?;
    for run in &report.runs {
        let slowdown = report
            .slowdown(run.strategy)
            .map_or_else(|| "-".to_owned(), |s| format!("{s:.2}x"));
        writeln!(
            out,
            "{:<16} {:>14.6} {:>24.16e} {:>10}",
            run.strategy.key(),
            run.elapsed_ms(),
            run.total,
            slowdown
        )?;
    }
    Ok(())
}
