use crate::cell::Cell;
use crate::geometry::volume::tetra_volume;
use crate::mesh::Mesh;

/// A cell of unknown shape. Uses every default of [`Cell`].
#[derive(Clone, Copy, Debug)]
pub struct GenericCell<'m> {
    mesh: &'m Mesh,
    rank: usize,
}

impl<'m> GenericCell<'m> {
    #[inline]
    pub fn new(mesh: &'m Mesh, rank: usize) -> Self {
        Self { mesh, rank }
    }
}

impl Cell for GenericCell<'_> {
    fn mesh(&self) -> &Mesh {
        self.mesh
    }

    fn rank(&self) -> usize {
        self.rank
    }
}

/// A tetrahedral cell whose volume goes through [`Cell::coordinates`].
#[derive(Clone, Copy, Debug)]
pub struct Tetra<'m> {
    mesh: &'m Mesh,
    rank: usize,
}

impl<'m> Tetra<'m> {
    #[inline]
    pub fn new(mesh: &'m Mesh, rank: usize) -> Self {
        Self { mesh, rank }
    }
}

impl Cell for Tetra<'_> {
    fn mesh(&self) -> &Mesh {
        self.mesh
    }

    fn rank(&self) -> usize {
        self.rank
    }

    fn volume(&self) -> f64 {
        tetra_volume(&self.coordinates())
    }
}
