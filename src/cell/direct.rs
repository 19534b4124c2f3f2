use static_assertions::assert_eq_size;

use crate::geometry::CellCoordinates;
use crate::geometry::volume::{signed_volume, tetra_volume};
use crate::mesh::Mesh;

/// Statically dispatched tetrahedron cursor.
///
/// Set [`rank`](Self::rank) to repoint the cursor at another cell. The rank is
/// the only state, so reuse cannot leak anything from the previous cell.
#[derive(Clone, Copy, Debug)]
pub struct TetraDirect<'m> {
    mesh: &'m Mesh,
    pub rank: usize,
}

// Two words: the mesh borrow and the rank.
assert_eq_size!(TetraDirect<'static>, (usize, usize));

impl<'m> TetraDirect<'m> {
    #[inline]
    pub fn new(mesh: &'m Mesh, rank: usize) -> Self {
        Self { mesh, rank }
    }

    #[inline]
    pub fn mesh(&self) -> &'m Mesh {
        self.mesh
    }

    /// Copy of this cell's vertex coordinates.
    #[inline]
    pub fn coordinates(&self) -> CellCoordinates {
        self.mesh.gather(self.rank)
    }

    /// Volume computed from [`coordinates`](Self::coordinates).
    #[inline]
    pub fn volume(&self) -> f64 {
        tetra_volume(&self.coordinates())
    }

    /// Volume computed straight from the mesh rows, with no intermediate block.
    #[inline]
    pub fn volume_direct(&self) -> f64 {
        let [a, b, c, d] = self.mesh.cell_vertices()[self.rank];
        let coords = self.mesh.vertex_coordinates();
        signed_volume(
            coords[a as usize],
            coords[b as usize],
            coords[c as usize],
            coords[d as usize],
        )
    }
}
