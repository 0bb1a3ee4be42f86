/*!
grainshape
==========

**grainshape** computes quantitative shape, form, and surface-roughness
descriptors of discretized 3-dimensional geometry, for particle and grain
characterization in materials and geotechnical analysis.

The pipeline is built from small, pure components:

- [`io`] decodes triangulated-surface (STL) files into indexed meshes;
- [`surface`] computes surface area and the surface orientation tensor;
- [`mass_properties`] computes volume, centroid, and inertia of tetrahedral
  volume meshes;
- [`form`] derives dimensionless form descriptors from scalar measurements;
- [`roughness`] computes statistical descriptors of height fields.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod form;
pub mod io;
pub mod mass_properties;
pub mod mesh;
pub mod roughness;
pub mod surface;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// Archimedes' constant at the crate's scalar precision.
    pub const PI: Real = core::f64::consts::PI as Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The matrix type.
    pub use Matrix3 as Matrix;
}
