//! `virtual-vs-block`: compare per-cell cursor styles against raw loops.
//!
//! ```text
//! virtual-vs-block [VERTICES] [CELLS] [SLEEP_TIME] [OPTIONS]
//! ```
//!
//! Malformed arguments are rejected by the parser (exit code 2). Set
//! `RUST_LOG=info` to log per-phase results.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use mesh_cursor_bench::driver::{self, BenchConfig, DEFAULT_TOLERANCE};
use mesh_cursor_bench::mesh::RandomMode;
use mesh_cursor_bench::strategy::Strategy;

#[derive(Debug, clap::Parser)]
#[clap(
    name = "virtual-vs-block",
    about = "Time raw loops, bulk gathers and cell cursors computing tetrahedron volumes"
)]
struct Args {
    /// Number of mesh vertices.
    #[clap(default_value_t = 10)]
    vertices: usize,

    /// Number of tetrahedral cells.
    #[clap(default_value_t = 8)]
    cells: usize,

    /// Seconds to pause before each phase (0 disables).
    #[clap(default_value_t = 0)]
    sleep_time: u64,

    /// Seed the generator from OS entropy instead of a fixed seed.
    #[clap(long)]
    really_random: bool,

    /// Seed for reproducible generation.
    #[clap(long, conflicts_with = "really_random")]
    seed: Option<u64>,

    /// Print the coordinate and connectivity tables.
    #[clap(long, overrides_with = "no_tables")]
    tables: bool,

    /// Never print the tables, even in debug builds.
    #[clap(long, overrides_with = "tables")]
    no_tables: bool,

    /// Run only this strategy; repeat to select several.
    #[clap(long = "strategy", value_name = "NAME")]
    strategies: Vec<Strategy>,

    /// Relative tolerance for the cross-strategy total check.
    #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Print a closing comparison table.
    #[clap(long)]
    summary: bool,

    /// Print the report as JSON.
    #[clap(long)]
    json: bool,
}

impl Args {
    fn into_config(self) -> BenchConfig {
        let defaults = BenchConfig::default();
        let random_mode = match (self.really_random, self.seed) {
            (true, _) => RandomMode::Entropy,
            (false, Some(seed)) => RandomMode::Reproducible { seed },
            (false, None) => defaults.random_mode,
        };
        let print_tables = if self.tables {
            true
        } else if self.no_tables {
            false
        } else {
            defaults.print_tables
        };
        let strategies = if self.strategies.is_empty() {
            defaults.strategies
        } else {
            self.strategies
        };
        BenchConfig {
            vertex_count: self.vertices,
            cell_count: self.cells,
            pause: Duration::from_secs(self.sleep_time),
            random_mode,
            print_tables,
            strategies,
            tolerance: self.tolerance,
            summary: self.summary,
            json: self.json,
        }
    }
}

/// Run the benchmark, reporting failures on `err`. Returns the exit code.
fn execute<W: Write, E: Write>(config: &BenchConfig, out: &mut W, err: &mut E) -> u8 {
    match driver::run(config, out) {
        Ok(_) => 0,
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Args::parse().into_config();
    let code = execute(&config, &mut io::stdout().lock(), &mut io::stderr().lock());
    ExitCode::from(code)
}
