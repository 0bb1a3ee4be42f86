use crate::mass_properties::MassPropertiesError;
use crate::math::{Matrix, Point, Real, Vector};
use crate::mesh::normalize_indices;
use crate::utils::{sorted_symmetric_eigen, EigenOrder};

/// Volume, centroid, and inertia of a tetrahedral volume mesh.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VolumeInertia {
    /// The total volume, the sum of the unsigned tetrahedron volumes.
    pub volume: Real,
    /// The volume-weighted centroid.
    pub centroid: Point<Real>,
    /// The inertia tensor about the centroid, with unit density.
    ///
    /// Symmetric; the off-diagonal entries are the negated products of
    /// inertia, following the standard inertia-tensor sign convention.
    pub inertia: Matrix<Real>,
    /// The principal moments of inertia, ascending.
    pub principal_moments: Vector<Real>,
    /// The principal axes, one unit column per principal moment, in matching
    /// order.
    pub principal_axes: Matrix<Real>,
}

impl VolumeInertia {
    /// The principal moments as a diagonal matrix, in the same ascending
    /// order as [`Self::principal_moments`].
    pub fn principal_inertia_matrix(&self) -> Matrix<Real> {
        Matrix::from_diagonal(&self.principal_moments)
    }
}

/// Computes the total volume and volume-weighted centroid of a tetrahedral
/// mesh.
///
/// Per tetrahedron with vertices `a`, `b`, `c`, `d`, the unsigned volume is
/// `|(a − d) · ((b − d) × (c − d))| / 6` and the centroid contribution is its
/// arithmetic-mean vertex. Uniformly 1-based element indices are detected and
/// converted automatically.
pub fn tetmesh_volume_and_centroid(
    vertices: &[Point<Real>],
    elements: &[[u32; 4]],
) -> Result<(Real, Point<Real>), MassPropertiesError> {
    let elements = normalize_indices(elements, vertices.len())?;

    let mut volume: Real = 0.0;
    let mut weighted = Vector::zeros();

    for el in elements.iter() {
        let [a, b, c, d] = el.map(|i| vertices[i as usize]);
        let vol = tetrahedron_volume(&a, &b, &c, &d);
        let center = (a.coords + b.coords + c.coords + d.coords) / 4.0;
        weighted += center * vol;
        volume += vol;
    }

    if volume <= 0.0 {
        return Err(MassPropertiesError::ZeroVolume);
    }

    Ok((volume, Point::from(weighted / volume)))
}

/// Computes the volume, centroid, and inertia tensor about the centroid of a
/// tetrahedral mesh, along with the principal moments and axes.
///
/// With `compute_inertia` disabled only the volume and centroid are computed
/// and every tensor of the result is zero.
pub fn tetmesh_volume_centroid_inertia(
    vertices: &[Point<Real>],
    elements: &[[u32; 4]],
    compute_inertia: bool,
) -> Result<VolumeInertia, MassPropertiesError> {
    let elements = normalize_indices(elements, vertices.len())?;
    let (volume, centroid) = tetmesh_volume_and_centroid(vertices, &elements)?;

    if !compute_inertia {
        return Ok(VolumeInertia {
            volume,
            centroid,
            inertia: Matrix::zeros(),
            principal_moments: Vector::zeros(),
            principal_axes: Matrix::zeros(),
        });
    }

    let mut ixx: Real = 0.0;
    let mut iyy: Real = 0.0;
    let mut izz: Real = 0.0;
    let mut ixy: Real = 0.0;
    let mut ixz: Real = 0.0;
    let mut iyz: Real = 0.0;

    for el in elements.iter() {
        // Vertices re-expressed relative to the centroid.
        let [a, b, c, d] = el.map(|i| vertices[i as usize] - centroid);

        let vol = (b - d).cross(&(c - d)).dot(&(a - d)).abs() / 6.0;
        let coeff = vol / 20.0;

        // Per-tetrahedron vertex sums and sums of products along each axis
        // and axis pair.
        let sx = a.x + b.x + c.x + d.x;
        let sy = a.y + b.y + c.y + d.y;
        let sz = a.z + b.z + c.z + d.z;
        let sxx = a.x * a.x + b.x * b.x + c.x * c.x + d.x * d.x;
        let syy = a.y * a.y + b.y * b.y + c.y * c.y + d.y * d.y;
        let szz = a.z * a.z + b.z * b.z + c.z * c.z + d.z * d.z;
        let sxy = a.x * a.y + b.x * b.y + c.x * c.y + d.x * d.y;
        let sxz = a.x * a.z + b.x * b.z + c.x * c.z + d.x * d.z;
        let syz = a.y * a.z + b.y * b.z + c.y * c.z + d.y * d.z;

        ixx += coeff * (sy * sy + syy + sz * sz + szz);
        iyy += coeff * (sx * sx + sxx + sz * sz + szz);
        izz += coeff * (sx * sx + sxx + sy * sy + syy);
        ixy += coeff * (sx * sy + sxy);
        ixz += coeff * (sx * sz + sxz);
        iyz += coeff * (sy * sz + syz);
    }

    let inertia = Matrix::new(ixx, -ixy, -ixz, -ixy, iyy, -iyz, -ixz, -iyz, izz);
    let (principal_moments, principal_axes) =
        sorted_symmetric_eigen(&inertia, EigenOrder::Ascending);

    Ok(VolumeInertia {
        volume,
        centroid,
        inertia,
        principal_moments,
        principal_axes,
    })
}

/// The unsigned volume of the tetrahedron `(a, b, c, d)`.
fn tetrahedron_volume(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>, d: &Point<Real>) -> Real {
    (b - d).cross(&(c - d)).dot(&(a - d)).abs() / 6.0
}
