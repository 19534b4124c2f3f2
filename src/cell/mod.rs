//! Cell cursors: lightweight, non-owning views of one cell of a [`Mesh`].
//!
//! A cursor is a `(&Mesh, rank)` pair. It never copies mesh storage on
//! construction; coordinates are gathered from the mesh on every call.
//!
//! Two families are provided:
//!
//! - [`Cell`] is an object-safe trait. [`GenericCell`] keeps the default zero
//!   volume and [`Tetra`] overrides it. Calls made through `&dyn Cell` go
//!   through the vtable.
//! - [`TetraDirect`] is a plain struct whose methods resolve statically. Its
//!   `rank` field is public so one cursor can be walked across the mesh.
//!
//! Cursor validity is tied to the borrowed mesh: the borrow checker rejects
//! any cursor that would outlive it.

mod direct;
mod virtual_cell;

pub use direct::TetraDirect;
pub use virtual_cell::{GenericCell, Tetra};

use crate::geometry::CellCoordinates;
use crate::mesh::Mesh;

/// Dynamically dispatched view of one mesh cell.
pub trait Cell {
    /// Mesh this cell belongs to.
    fn mesh(&self) -> &Mesh;

    /// Position of the cell in the mesh connectivity table.
    fn rank(&self) -> usize;

    /// Freshly gathered vertex coordinates of this cell.
    fn coordinates(&self) -> CellCoordinates {
        self.mesh().gather(self.rank())
    }

    /// Signed volume. Cells without a known shape report zero.
    fn volume(&self) -> f64 {
        0.0
    }
}
