//! Geometry kernels shared by every volume strategy.
//!
//! All strategies route through the same vector helpers in [`volume`] (or, for
//! the raw loop, spell out the same arithmetic in the same order), so per-cell
//! results are bit-identical across strategies.

pub mod volume;

/// A point in 3D space, `(x, y, z)`.
pub type Point3 = [f64; 3];

/// The four vertex coordinates of one tetrahedral cell, one row per vertex.
///
/// Row `i` holds the coordinates of the cell's `i`-th vertex, in the cell's
/// connectivity order.
pub type CellCoordinates = [Point3; 4];
