//! Canonical meshes shared by the geometry tests.

use grainshape3d_f64::math::{Point, Real};

/// Axis-aligned cube `[0, side]^3` as 12 triangles over 8 vertices.
pub fn cube(side: Real) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let s = side;
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(s, 0.0, 0.0),
        Point::new(s, s, 0.0),
        Point::new(0.0, s, 0.0),
        Point::new(0.0, 0.0, s),
        Point::new(s, 0.0, s),
        Point::new(s, s, s),
        Point::new(0.0, s, s),
    ];
    let indices = vec![
        [0, 1, 2],
        [0, 2, 3], // bottom
        [4, 6, 5],
        [4, 7, 6], // top
        [0, 4, 5],
        [0, 5, 1], // y = 0 side
        [1, 5, 6],
        [1, 6, 2], // x = s side
        [2, 6, 7],
        [2, 7, 3], // y = s side
        [3, 7, 4],
        [3, 4, 0], // x = 0 side
    ];
    (vertices, indices)
}

/// The cube of [`cube`] tessellated into five tetrahedra.
pub fn cube_tets(side: Real) -> (Vec<Point<Real>>, Vec<[u32; 4]>) {
    let (vertices, _) = cube(side);
    let elements = vec![
        [0, 1, 3, 4],
        [1, 2, 3, 6],
        [1, 4, 5, 6],
        [3, 4, 6, 7],
        [1, 3, 4, 6],
    ];
    (vertices, elements)
}

/// Regular tetrahedron with unit edge length.
pub fn regular_tetrahedron() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.5, (3.0 as Real).sqrt() / 2.0, 0.0),
        Point::new(0.5, (3.0 as Real).sqrt() / 6.0, (2.0 as Real / 3.0).sqrt()),
    ];
    let indices = vec![[0, 1, 2], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
    (vertices, indices)
}

/// Unit right tetrahedron at the origin, volume `1/6`.
pub fn unit_right_tetrahedron() -> (Vec<Point<Real>>, Vec<[u32; 4]>) {
    let vertices = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    (vertices, vec![[0, 1, 2, 3]])
}
