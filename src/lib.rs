//! # mesh-cursor-bench
//!
//! mesh-cursor-bench measures what it costs to put a lightweight "cursor"
//! abstraction over an unstructured tetrahedral mesh. The same quantity, the
//! total signed volume of all cells, is computed six ways:
//!
//! - a raw loop over flat coordinate/connectivity buffers;
//! - a bulk row gather into a 4×3 block per cell;
//! - a per-cell [`Tetra`](cell::Tetra) cursor called through `&dyn Cell`;
//! - a per-cell [`TetraDirect`](cell::TetraDirect) cursor, with and without
//!   an intermediate coordinates copy;
//! - a single `TetraDirect` cursor walked across the mesh by updating its rank.
//!
//! Every path performs the same per-cell arithmetic in the same order, so the
//! totals double as a correctness cross-check.
//!
//! ## Determinism
//!
//! Meshes are generated from a `SmallRng` seeded with a fixed value unless
//! [`RandomMode::Entropy`](mesh::RandomMode::Entropy) is requested (or the
//! `really-random` feature is enabled), so repeated runs produce identical
//! tables and totals.
//!
//! ## Usage
//! ```rust
//! use mesh_cursor_bench::prelude::*;
//!
//! let mesh = Mesh::try_new(100, 500)?;
//! let baseline = Strategy::RawLoop.total_volume(&mesh);
//! for strategy in Strategy::ALL {
//!     assert_eq!(strategy.total_volume(&mesh), baseline);
//! }
//! # Ok::<(), mesh_cursor_bench::mesh_error::MeshCursorError>(())
//! ```

pub mod cell;
pub mod debug_invariants;
pub mod driver;
pub mod geometry;
pub mod mesh;
pub mod mesh_error;
pub mod strategy;
pub mod timer;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::cell::{Cell, GenericCell, Tetra, TetraDirect};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::driver::{BenchConfig, BenchReport, StrategyReport};
    pub use crate::geometry::volume::{signed_volume, tetra_volume};
    pub use crate::geometry::{CellCoordinates, Point3};
    pub use crate::mesh::{Mesh, RandomMode};
    pub use crate::mesh_error::MeshCursorError;
    pub use crate::strategy::Strategy;
    pub use crate::timer::PhaseTimer;
}
