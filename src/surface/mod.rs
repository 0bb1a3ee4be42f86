//! Surface-level descriptors of a triangulated mesh.

pub use self::area::surface_area;
pub use self::orientation::{surface_orientation_tensor, OrientationTensor};

use crate::mesh::IndexError;

mod area;
mod orientation;

/// Indicates the failure of a surface descriptor computation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// A face index refers outside the vertex buffer.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// The mesh has no area to weight facet orientations with.
    #[error("total surface area is zero; the mesh is degenerate")]
    ZeroArea,
    /// The orientation tensor has a non-positive leading eigenvalue.
    #[error("largest orientation-tensor eigenvalue is non-positive")]
    DegenerateTensor,
}
