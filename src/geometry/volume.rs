//! Signed tetrahedron volume via the scalar triple product.
//!
//! For vertices `[p0, p1, p2, p3]` with edges `e1 = p1 - p0`, `e2 = p2 - p0`
//! and `e3 = p3 - p0`:
//!
//! ```text
//! volume = e1 · (e2 × e3) / 6
//! ```
//!
//! The sign encodes orientation: swapping any two vertices negates it, and a
//! cell with repeated vertices has volume zero.
//!
//! # Examples
//! ```rust
//! use mesh_cursor_bench::geometry::volume::tetra_volume;
//!
//! let unit = [
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ];
//! assert!((tetra_volume(&unit) - 1.0 / 6.0).abs() < 1e-15);
//! ```

use super::{CellCoordinates, Point3};

/// Signed volume of the tetrahedron `(p0, p1, p2, p3)`.
#[inline(always)]
pub fn signed_volume(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> f64 {
    let e1 = sub(p1, p0);
    let e2 = sub(p2, p0);
    let e3 = sub(p3, p0);
    dot(e1, cross(e2, e3)) / 6.0
}

/// Signed volume of a gathered 4×3 coordinate block.
#[inline(always)]
pub fn tetra_volume(coords: &CellCoordinates) -> f64 {
    signed_volume(coords[0], coords[1], coords[2], coords[3])
}

#[inline(always)]
pub fn sub(a: Point3, b: Point3) -> Point3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline(always)]
pub fn dot(a: Point3, b: Point3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline(always)]
pub fn cross(a: Point3, b: Point3) -> Point3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: CellCoordinates = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn unit_tetra_is_one_sixth() {
        assert!(approx(tetra_volume(&UNIT), 1.0 / 6.0));
    }

    #[test]
    fn swapping_two_vertices_negates() {
        let swapped = [UNIT[1], UNIT[0], UNIT[2], UNIT[3]];
        assert_eq!(tetra_volume(&swapped), -tetra_volume(&UNIT));
        let swapped = [UNIT[0], UNIT[1], UNIT[3], UNIT[2]];
        assert_eq!(tetra_volume(&swapped), -tetra_volume(&UNIT));
    }

    #[test]
    fn repeated_vertex_is_degenerate() {
        let flat = [UNIT[0], UNIT[1], UNIT[1], UNIT[3]];
        assert_eq!(tetra_volume(&flat), 0.0);
        let point = [UNIT[2]; 4];
        assert_eq!(tetra_volume(&point), 0.0);
    }

    #[test]
    fn translation_invariant() {
        let shift = [3.5, -2.0, 0.25];
        let moved = UNIT.map(|p| [p[0] + shift[0], p[1] + shift[1], p[2] + shift[2]]);
        assert!(approx(tetra_volume(&moved), tetra_volume(&UNIT)));
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
        assert_eq!(dot([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]), 32.0);
    }
}
