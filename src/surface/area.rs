use crate::math::{Point, Real};
use crate::mesh::normalize_indices;
use crate::surface::SurfaceError;

/// Computes the total area of a triangulated surface.
///
/// Per triangle with vertices `a`, `b`, `c`, the area is
/// `‖(b − a) × (c − a)‖ / 2`. Uniformly 1-based face indices are detected and
/// converted automatically.
pub fn surface_area(
    vertices: &[Point<Real>],
    indices: &[[u32; 3]],
) -> Result<Real, SurfaceError> {
    let indices = normalize_indices(indices, vertices.len())?;

    let mut area: Real = 0.0;
    for idx in indices.iter() {
        let a = vertices[idx[0] as usize];
        let b = vertices[idx[1] as usize];
        let c = vertices[idx[2] as usize];
        area += (b - a).cross(&(c - a)).norm() * 0.5;
    }

    Ok(area)
}
