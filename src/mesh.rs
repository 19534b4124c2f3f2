//! Synthetic tetrahedral mesh: the storage owner every cell view borrows from.
//!
//! A [`Mesh`] holds two dense, row-major tables:
//!
//! - `vertex_coordinates`: one `[x, y, z]` row per vertex, values in `[-1, 1]`;
//! - `cell_vertices`: one `[v0, v1, v2, v3]` row per tetrahedron, each index in
//!   `[0, vertex_count)`.
//!
//! Indices may repeat within a cell. Degenerate cells are legal synthetic data
//! and have zero volume.
//!
//! ## Determinism
//!
//! Generation draws from a `SmallRng`. In [`RandomMode::Reproducible`] the
//! generator is seeded from a fixed value, so the same `(vertex_count,
//! cell_count, seed)` triple always produces byte-identical tables.
//! [`RandomMode::Entropy`] seeds from the OS instead.
//!
//! The mesh is immutable once built.

use std::io::{self, Write};

use bytemuck::cast_slice;
use itertools::Itertools;
use rand::distributions::Uniform;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use static_assertions::const_assert_eq;

use crate::debug_invariants;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::{CellCoordinates, Point3};
use crate::mesh_error::MeshCursorError;

/// Index type of the connectivity table.
pub type VertexIndex = u32;

/// One connectivity row: the four vertices of a tetrahedron.
pub type CellVertices = [VertexIndex; 4];

/// Seed used by [`RandomMode::default`] when reproducible generation is on.
pub const DEFAULT_SEED: u64 = 5489;

const COORDINATE_RANGE: (f64, f64) = (-1.0, 1.0);

// Rows are tightly packed so the tables can be viewed as flat buffers.
const_assert_eq!(std::mem::size_of::<Point3>(), 3 * std::mem::size_of::<f64>());
const_assert_eq!(
    std::mem::size_of::<CellVertices>(),
    4 * std::mem::size_of::<VertexIndex>()
);

/// How the mesh generator is seeded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomMode {
    /// Fixed seed; repeated runs produce identical meshes.
    Reproducible { seed: u64 },
    /// Seeded from OS entropy; every run differs.
    Entropy,
}

impl Default for RandomMode {
    fn default() -> Self {
        if cfg!(feature = "really-random") {
            RandomMode::Entropy
        } else {
            RandomMode::Reproducible { seed: DEFAULT_SEED }
        }
    }
}

impl RandomMode {
    fn rng(self) -> SmallRng {
        match self {
            RandomMode::Reproducible { seed } => SmallRng::seed_from_u64(seed),
            RandomMode::Entropy => SmallRng::from_entropy(),
        }
    }
}

/// Vertex coordinates plus cell-to-vertex connectivity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    vertex_coordinates: Vec<Point3>,
    cell_vertices: Vec<CellVertices>,
}

impl Mesh {
    /// Generate a mesh with the default [`RandomMode`].
    pub fn try_new(vertex_count: usize, cell_count: usize) -> Result<Self, MeshCursorError> {
        Self::try_generate(vertex_count, cell_count, RandomMode::default())
    }

    /// Generate `vertex_count` random vertices and `cell_count` random cells.
    ///
    /// Coordinates are drawn first, then connectivity, from a single stream.
    /// Fails if cells are requested with no vertices, or if `vertex_count`
    /// does not fit [`VertexIndex`].
    pub fn try_generate(
        vertex_count: usize,
        cell_count: usize,
        mode: RandomMode,
    ) -> Result<Self, MeshCursorError> {
        if vertex_count == 0 && cell_count > 0 {
            return Err(MeshCursorError::NoVerticesForCells { cells: cell_count });
        }
        let max_index = check_vertex_count(vertex_count)?;
        log::debug!("generating mesh: {vertex_count} vertices, {cell_count} cells, {mode:?}");

        let mut rng = mode.rng();
        let coord = Uniform::new_inclusive(COORDINATE_RANGE.0, COORDINATE_RANGE.1);
        let vertex_coordinates: Vec<Point3> = (0..vertex_count)
            .map(|_| [rng.sample(coord), rng.sample(coord), rng.sample(coord)])
            .collect();

        let cell_vertices: Vec<CellVertices> = match max_index {
            Some(max) if cell_count > 0 => {
                let index = Uniform::new_inclusive(0, max);
                (0..cell_count)
                    .map(|_| {
                        [
                            rng.sample(index),
                            rng.sample(index),
                            rng.sample(index),
                            rng.sample(index),
                        ]
                    })
                    .collect()
            }
            _ => Vec::new(),
        };

        let mesh = Self {
            vertex_coordinates,
            cell_vertices,
        };
        mesh.debug_assert_invariants();
        Ok(mesh)
    }

    /// Build a mesh from explicit tables, checking every connectivity index.
    pub fn from_parts(
        vertex_coordinates: Vec<Point3>,
        cell_vertices: Vec<CellVertices>,
    ) -> Result<Self, MeshCursorError> {
        check_vertex_count(vertex_coordinates.len())?;
        let mesh = Self {
            vertex_coordinates,
            cell_vertices,
        };
        mesh.validate_invariants()?;
        Ok(mesh)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_coordinates.len()
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_vertices.len()
    }

    /// Coordinate table, one row per vertex.
    #[inline]
    pub fn vertex_coordinates(&self) -> &[Point3] {
        &self.vertex_coordinates
    }

    /// Connectivity table, one row per cell.
    #[inline]
    pub fn cell_vertices(&self) -> &[CellVertices] {
        &self.cell_vertices
    }

    /// Coordinate table as one flat buffer: vertex `v` lives at `[3 * v .. 3 * v + 3]`.
    #[inline]
    pub fn coordinate_buffer(&self) -> &[f64] {
        cast_slice(&self.vertex_coordinates)
    }

    /// Connectivity table as one flat buffer: cell `c` lives at `[4 * c .. 4 * c + 4]`.
    #[inline]
    pub fn connectivity_buffer(&self) -> &[VertexIndex] {
        cast_slice(&self.cell_vertices)
    }

    /// Gather the coordinates of cell `rank` into a fresh 4×3 block.
    ///
    /// # Panics
    /// Panics if `rank >= self.cell_count()`.
    #[inline]
    pub fn gather(&self, rank: usize) -> CellCoordinates {
        let cell = self.cell_vertices[rank];
        cell.map(|v| self.vertex_coordinates[v as usize])
    }

    /// Write the coordinate table, one vertex per line.
    pub fn write_coordinate_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.vertex_coordinates {
            writeln!(out, "{}", row.iter().map(|x| format!("{x:>12.8}")).join(" "))?;
        }
        Ok(())
    }

    /// Write the connectivity table, one cell per line.
    pub fn write_connectivity_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for row in &self.cell_vertices {
            writeln!(out, "{}", row.iter().map(|v| format!("{v:>6}")).join(" "))?;
        }
        Ok(())
    }
}

impl DebugInvariants for Mesh {
    fn debug_assert_invariants(&self) {
        debug_invariants!(self.validate_invariants(), "Mesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshCursorError> {
        let vertex_count = self.vertex_count();
        for (cell, row) in self.cell_vertices.iter().enumerate() {
            if let Some(&index) = row.iter().find(|&&v| v as usize >= vertex_count) {
                return Err(MeshCursorError::VertexIndexOutOfRange {
                    cell,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// Largest valid vertex index for `vertex_count` vertices, if any.
fn check_vertex_count(vertex_count: usize) -> Result<Option<VertexIndex>, MeshCursorError> {
    match vertex_count.checked_sub(1) {
        None => Ok(None),
        Some(max) => VertexIndex::try_from(max)
            .map(Some)
            .map_err(|_| MeshCursorError::IndexOverflow { vertex_count }),
    }
}
