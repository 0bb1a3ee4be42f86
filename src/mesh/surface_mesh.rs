use crate::math::{Point, Real};
use crate::mesh::{normalize_indices, IndexError};
use crate::surface::{OrientationTensor, SurfaceError};

/// An indexed triangulated surface.
///
/// Vertices are shared between triangles through the index buffer. The index
/// buffer is normalized to 0-based indexing at construction time and the mesh
/// is immutable afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SurfaceMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Creates a surface mesh from a vertex and a triangle index buffer.
    ///
    /// The indices are validated (and 1-based buffers converted) eagerly.
    pub fn new(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Result<Self, IndexError> {
        let indices = normalize_indices(&indices, vertices.len())?.into_owned();
        Ok(Self { vertices, indices })
    }

    /// Builds a mesh from buffers already known to be 0-based and in range.
    pub(crate) fn from_parts(vertices: Vec<Point<Real>>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh, one `[u32; 3]` per triangle.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// The total surface area of this mesh.
    pub fn surface_area(&self) -> Result<Real, SurfaceError> {
        crate::surface::surface_area(&self.vertices, &self.indices)
    }

    /// The area-weighted orientation tensor of this mesh's facet normals.
    pub fn orientation_tensor(&self) -> Result<OrientationTensor, SurfaceError> {
        crate::surface::surface_orientation_tensor(&self.vertices, &self.indices)
    }
}
