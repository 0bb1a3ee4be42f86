//! Volume, centroid, and inertia of tetrahedral volume meshes.

pub use self::tetmesh::{tetmesh_volume_centroid_inertia, VolumeInertia};

use crate::mesh::IndexError;

mod tetmesh;

/// Free functions for some special-cases of the volume/inertia computation.
pub mod details {
    pub use super::tetmesh::tetmesh_volume_and_centroid;
}

/// Indicates the failure of a volume or inertia computation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MassPropertiesError {
    /// An element index refers outside the vertex buffer.
    #[error(transparent)]
    Index(#[from] IndexError),
    /// The summed tetrahedron volumes vanish.
    #[error("total mesh volume is zero; check the elements for degeneracy")]
    ZeroVolume,
}
