//! The six ways of summing cell volumes over a [`Mesh`].
//!
//! | Strategy                       | Access path                                   |
//! |--------------------------------|-----------------------------------------------|
//! | [`Strategy::RawLoop`]          | offsets into the flat buffers, no objects     |
//! | [`Strategy::Slice`]            | per-row gather into a 4×3 block               |
//! | [`Strategy::Virtual`]          | fresh [`Tetra`] per cell, called as `&dyn Cell` |
//! | [`Strategy::Direct`]           | fresh [`TetraDirect`], `volume()` (copies)    |
//! | [`Strategy::DirectNoCopy`]     | fresh [`TetraDirect`], `volume_direct()`      |
//! | [`Strategy::DirectHoisted`]    | one [`TetraDirect`], `rank` moved each step   |
//!
//! Every strategy accumulates in cell order with the same per-cell arithmetic,
//! so all six totals are bit-identical for a given mesh.

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;

use serde::Serialize;

use crate::cell::{Cell, Tetra, TetraDirect};
use crate::geometry::volume::tetra_volume;
use crate::mesh::Mesh;
use crate::mesh_error::MeshCursorError;

/// One volume-summing strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    RawLoop,
    Slice,
    Virtual,
    Direct,
    DirectNoCopy,
    DirectHoisted,
}

impl Strategy {
    /// Every strategy, in run order.
    pub const ALL: [Strategy; 6] = [
        Strategy::RawLoop,
        Strategy::Slice,
        Strategy::Virtual,
        Strategy::Direct,
        Strategy::DirectNoCopy,
        Strategy::DirectHoisted,
    ];

    /// Short name accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Strategy::RawLoop => "raw-loop",
            Strategy::Slice => "slice",
            Strategy::Virtual => "virtual",
            Strategy::Direct => "direct",
            Strategy::DirectNoCopy => "direct-no-copy",
            Strategy::DirectHoisted => "direct-hoisted",
        }
    }

    /// Human-readable phase name used in the timing output.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::RawLoop => "raw loop",
            Strategy::Slice => "view+slice",
            Strategy::Virtual => "visitor+virtual",
            Strategy::Direct => "visitor non virtual",
            Strategy::DirectNoCopy => "visitor non virtual, no coord copy",
            Strategy::DirectHoisted => "visitor non virtual, no coord copy, set_rank",
        }
    }

    /// Sum of signed cell volumes over `mesh`.
    pub fn total_volume(self, mesh: &Mesh) -> f64 {
        match self {
            Strategy::RawLoop => raw_loop_volume(mesh),
            Strategy::Slice => slice_volume(mesh),
            Strategy::Virtual => virtual_volume(mesh),
            Strategy::Direct => direct_volume(mesh),
            Strategy::DirectNoCopy => direct_no_copy_volume(mesh),
            Strategy::DirectHoisted => direct_hoisted_volume(mesh),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Strategy {
    type Err = MeshCursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.key() == s)
            .ok_or_else(|| MeshCursorError::UnknownStrategy(s.to_owned()))
    }
}

/// Baseline: manual offsets into the flat coordinate and connectivity buffers.
#[allow(clippy::needless_range_loop)]
pub fn raw_loop_volume(mesh: &Mesh) -> f64 {
    const DIM: usize = 3;
    let coords = mesh.coordinate_buffer();
    let cells = mesh.connectivity_buffer();
    let mut vol = 0.0;
    for rk in 0..mesh.cell_count() {
        let cell = &cells[4 * rk..4 * rk + 4];
        let v0 = DIM * cell[0] as usize;
        let pt0 = &coords[v0..v0 + DIM];
        let v1 = DIM * cell[1] as usize;
        let pt1 = &coords[v1..v1 + DIM];
        let v2 = DIM * cell[2] as usize;
        let pt2 = &coords[v2..v2 + DIM];
        let v3 = DIM * cell[3] as usize;
        let pt3 = &coords[v3..v3 + DIM];

        let mut e1 = [0.0; DIM];
        let mut e2 = [0.0; DIM];
        let mut e3 = [0.0; DIM];
        for i in 0..DIM {
            e1[i] = pt1[i] - pt0[i];
            e2[i] = pt2[i] - pt0[i];
            e3[i] = pt3[i] - pt0[i];
        }

        let e2xe3 = [
            e2[1] * e3[2] - e2[2] * e3[1],
            e2[2] * e3[0] - e2[0] * e3[2],
            e2[0] * e3[1] - e2[1] * e3[0],
        ];
        vol += (e1[0] * e2xe3[0] + e1[1] * e2xe3[1] + e1[2] * e2xe3[2]) / 6.0;
    }
    vol
}

/// Bulk style: walk connectivity rows and gather each into a 4×3 block.
pub fn slice_volume(mesh: &Mesh) -> f64 {
    let coords = mesh.vertex_coordinates();
    let mut vol = 0.0;
    for cell in mesh.cell_vertices() {
        let cell_coords = cell.map(|v| coords[v as usize]);
        #[cfg(debug_assertions)]
        log::trace!("tetra: {cell:?} -> {cell_coords:?}");
        vol += tetra_volume(&cell_coords);
    }
    vol
}

/// Fresh [`Tetra`] per cell, volume called through the vtable.
pub fn virtual_volume(mesh: &Mesh) -> f64 {
    let mut vol = 0.0;
    for rk in 0..mesh.cell_count() {
        let tetra = Tetra::new(mesh, rk);
        // Hide the concrete type so the call cannot be devirtualized.
        let cell: &dyn Cell = black_box(&tetra);
        vol += cell.volume();
    }
    vol
}

/// Fresh [`TetraDirect`] per cell, volume via a coordinates copy.
pub fn direct_volume(mesh: &Mesh) -> f64 {
    let mut vol = 0.0;
    for rk in 0..mesh.cell_count() {
        let t = TetraDirect::new(mesh, rk);
        vol += t.volume();
    }
    vol
}

/// Fresh [`TetraDirect`] per cell, volume without the intermediate block.
pub fn direct_no_copy_volume(mesh: &Mesh) -> f64 {
    let mut vol = 0.0;
    for rk in 0..mesh.cell_count() {
        let t = TetraDirect::new(mesh, rk);
        vol += t.volume_direct();
    }
    vol
}

/// One [`TetraDirect`] built up front and repointed at each cell.
pub fn direct_hoisted_volume(mesh: &Mesh) -> f64 {
    let mut vol = 0.0;
    let mut t = TetraDirect::new(mesh, 0);
    for rk in 0..mesh.cell_count() {
        t.rank = rk;
        vol += t.volume_direct();
    }
    vol
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::RandomMode;

    fn unit_mesh(cells: Vec<[u32; 4]>) -> Mesh {
        Mesh::from_parts(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            cells,
        )
        .unwrap()
    }

    #[test]
    fn keys_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.key().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!(
            "nope".parse::<Strategy>().unwrap_err(),
            MeshCursorError::UnknownStrategy("nope".into())
        );
    }

    #[test]
    fn unit_tetra_is_one_sixth_everywhere() {
        let mesh = unit_mesh(vec![[0, 1, 2, 3]]);
        for strategy in Strategy::ALL {
            let vol = strategy.total_volume(&mesh);
            assert!((vol - 1.0 / 6.0).abs() < 1e-15, "{strategy}: {vol}");
        }
    }

    #[test]
    fn degenerate_cells_are_zero_everywhere() {
        let mesh = unit_mesh(vec![[0, 0, 2, 3], [1, 2, 1, 1], [3, 3, 3, 3]]);
        for strategy in Strategy::ALL {
            assert_eq!(strategy.total_volume(&mesh), 0.0, "{strategy}");
        }
    }

    #[test]
    fn swapping_vertices_negates_everywhere() {
        let mesh = unit_mesh(vec![[0, 1, 2, 3]]);
        let swapped = unit_mesh(vec![[0, 1, 3, 2]]);
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.total_volume(&swapped),
                -strategy.total_volume(&mesh),
                "{strategy}"
            );
        }
    }

    #[test]
    fn all_strategies_bit_identical() {
        let mesh = Mesh::try_generate(100, 1000, RandomMode::Reproducible { seed: 77 }).unwrap();
        let reference = raw_loop_volume(&mesh);
        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.total_volume(&mesh).to_bits(),
                reference.to_bits(),
                "{strategy}"
            );
        }
    }

    #[test]
    fn slice_gather_matches_cursor_gather() {
        let mesh = Mesh::try_generate(64, 2000, RandomMode::Reproducible { seed: 31 }).unwrap();
        assert_eq!(
            slice_volume(&mesh).to_bits(),
            direct_no_copy_volume(&mesh).to_bits()
        );
        assert_eq!(slice_volume(&mesh).to_bits(), direct_volume(&mesh).to_bits());
    }

    #[test]
    fn raw_loop_reads_last_vertex_row() {
        // The last vertex row ends exactly at the buffer end.
        let mesh = Mesh::from_parts(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            vec![[0, 1, 2, 3], [3, 2, 1, 0]],
        )
        .unwrap();
        assert_eq!(raw_loop_volume(&mesh), direct_no_copy_volume(&mesh));
    }

    #[test]
    fn hoisted_matches_per_iteration() {
        let mesh = Mesh::try_generate(9, 500, RandomMode::Reproducible { seed: 5 }).unwrap();
        assert_eq!(direct_hoisted_volume(&mesh), direct_no_copy_volume(&mesh));
    }

    #[test]
    fn empty_mesh_sums_to_zero() {
        let mesh = Mesh::try_new(0, 0).unwrap();
        for strategy in Strategy::ALL {
            assert_eq!(strategy.total_volume(&mesh), 0.0);
        }
    }
}
