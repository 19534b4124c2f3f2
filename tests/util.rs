#![allow(dead_code)]
use mesh_cursor_bench::geometry::Point3;
use mesh_cursor_bench::mesh::{CellVertices, Mesh, RandomMode};

pub const UNIT_TETRA: [Point3; 4] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Mesh over the unit tetrahedron's four corners with the given cells.
pub fn unit_mesh(cells: &[CellVertices]) -> Mesh {
    Mesh::from_parts(UNIT_TETRA.to_vec(), cells.to_vec()).unwrap()
}

pub fn seeded(vertices: usize, cells: usize, seed: u64) -> Mesh {
    Mesh::try_generate(vertices, cells, RandomMode::Reproducible { seed }).unwrap()
}

/// Relative difference, treating two zeros as equal.
pub fn rel_diff(a: f64, b: f64) -> f64 {
    let scale = a.abs().max(b.abs());
    if scale == 0.0 { 0.0 } else { (a - b).abs() / scale }
}
