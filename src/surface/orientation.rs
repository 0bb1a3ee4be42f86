use crate::math::{Matrix, Point, Real, Vector};
use crate::mesh::normalize_indices;
use crate::surface::SurfaceError;
use crate::utils::{sorted_symmetric_eigen, EigenOrder};

/// The area-weighted second-moment tensor of a surface's facet normals, with
/// the shape indices derived from its spectrum.
///
/// The eigenvalues `f1 ≥ f2 ≥ f3` sum to 1 and measure how strongly the facet
/// normals align with the corresponding eigenvector: an equant particle
/// spreads its normals evenly (`f1 ≈ f2 ≈ f3`), a platy one concentrates them
/// along a single direction, an elongated one spreads them in a band.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct OrientationTensor {
    /// Compactness index `f3 / f1` (equancy).
    pub compactness: Real,
    /// Flakiness index `(f1 − f2) / f1` (platyness).
    pub flakiness: Real,
    /// Rodness index `(f2 − f3) / f1` (elongation).
    pub rodness: Real,
    /// The eigenvalues of the orientation tensor, descending.
    pub eigenvalues: Vector<Real>,
    /// The unit eigenvectors, one column per eigenvalue, in matching order.
    pub eigenvectors: Matrix<Real>,
}

/// Computes the surface orientation tensor of a triangulated surface.
///
/// The tensor is `f = (1/A) Σ aₖ nₖnₖᵀ` over the triangles, where `aₖ` is the
/// triangle area, `nₖ` its unit normal, and `A` the total area. Degenerate
/// triangles have no normal and contribute nothing. Uniformly 1-based face
/// indices are detected and converted automatically.
pub fn surface_orientation_tensor(
    vertices: &[Point<Real>],
    indices: &[[u32; 3]],
) -> Result<OrientationTensor, SurfaceError> {
    let indices = normalize_indices(indices, vertices.len())?;

    let mut tensor = Matrix::zeros();
    let mut total_area: Real = 0.0;

    for idx in indices.iter() {
        let a = vertices[idx[0] as usize];
        let b = vertices[idx[1] as usize];
        let c = vertices[idx[2] as usize];

        let v = (b - a).cross(&(c - b));
        let norm = v.norm();

        if norm > 0.0 {
            let n = v / norm;
            let area = norm * 0.5;
            tensor += n * n.transpose() * area;
            total_area += area;
        }
    }

    if total_area <= 0.0 {
        return Err(SurfaceError::ZeroArea);
    }

    tensor /= total_area;

    let (eigenvalues, eigenvectors) = sorted_symmetric_eigen(&tensor, EigenOrder::Descending);
    let (f1, f2, f3) = (eigenvalues.x, eigenvalues.y, eigenvalues.z);

    if f1 <= 0.0 {
        return Err(SurfaceError::DegenerateTensor);
    }

    Ok(OrientationTensor {
        compactness: f3 / f1,
        flakiness: (f1 - f2) / f1,
        rodness: (f2 - f3) / f1,
        eigenvalues,
        eigenvectors,
    })
}
