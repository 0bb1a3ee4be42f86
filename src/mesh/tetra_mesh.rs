use crate::mass_properties::{MassPropertiesError, VolumeInertia};
use crate::math::{Point, Real};
use crate::mesh::{normalize_indices, IndexError};

/// An indexed tetrahedral volume mesh.
///
/// Typically produced by tessellating a closed
/// [`SurfaceMesh`](crate::mesh::SurfaceMesh) with an external meshing tool.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TetraMesh {
    vertices: Vec<Point<Real>>,
    elements: Vec<[u32; 4]>,
}

impl TetraMesh {
    /// Creates a tetrahedral mesh from a vertex and an element buffer.
    ///
    /// The element indices are validated (and 1-based buffers converted)
    /// eagerly.
    pub fn new(vertices: Vec<Point<Real>>, elements: Vec<[u32; 4]>) -> Result<Self, IndexError> {
        let elements = normalize_indices(&elements, vertices.len())?.into_owned();
        Ok(Self { vertices, elements })
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The element buffer of this mesh, one `[u32; 4]` per tetrahedron.
    pub fn elements(&self) -> &[[u32; 4]] {
        &self.elements
    }

    /// The number of tetrahedra of this mesh.
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// The total volume and volume-weighted centroid of this mesh.
    pub fn volume_and_centroid(&self) -> Result<(Real, Point<Real>), MassPropertiesError> {
        crate::mass_properties::details::tetmesh_volume_and_centroid(
            &self.vertices,
            &self.elements,
        )
    }

    /// Volume, centroid, and inertia of this mesh, with principal moments and
    /// axes.
    pub fn volume_centroid_inertia(
        &self,
        compute_inertia: bool,
    ) -> Result<VolumeInertia, MassPropertiesError> {
        crate::mass_properties::tetmesh_volume_centroid_inertia(
            &self.vertices,
            &self.elements,
            compute_inertia,
        )
    }
}
