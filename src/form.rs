//! Dimensionless form descriptors computed from scalar measurements.
//!
//! The `(s, i, l)` arguments are the short, intermediate, and long principal
//! extents of a particle (`s ≤ i ≤ l`), estimated externally, e.g. from a
//! principal-component extent analysis. The volume of the convex hull is also
//! an external input.

use crate::math::{Real, PI};

/// Indicates a violated form-descriptor precondition.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    /// The convex-hull volume must be strictly positive.
    #[error("convex-hull volume must be > 0")]
    NonPositiveConvexHullVolume,
    /// The particle volume must be non-negative.
    #[error("volume must be >= 0")]
    NegativeVolume,
    /// The surface area must be strictly positive.
    #[error("surface area must be > 0")]
    NonPositiveSurfaceArea,
    /// Axis lengths must be non-negative, with a strictly positive long axis.
    #[error("axis lengths must be non-negative, with the long axis > 0")]
    InvalidAxisLengths,
}

/// Ratio of a particle's volume to the volume of its convex hull.
pub fn convexity(volume: Real, volume_convex_hull: Real) -> Result<Real, FormError> {
    if volume_convex_hull <= 0.0 {
        return Err(FormError::NonPositiveConvexHullVolume);
    }
    if volume < 0.0 {
        return Err(FormError::NegativeVolume);
    }
    Ok(volume / volume_convex_hull)
}

/// Wadell sphericity: the surface area of the volume-equivalent sphere over
/// the particle's surface area. Equals 1 for a perfect sphere.
pub fn sphericity_wadell(volume: Real, surface_area: Real) -> Result<Real, FormError> {
    if volume < 0.0 {
        return Err(FormError::NegativeVolume);
    }
    if surface_area <= 0.0 {
        return Err(FormError::NonPositiveSurfaceArea);
    }
    Ok(6.0 * volume / ((6.0 * volume / PI).powf(1.0 / 3.0) * surface_area))
}

/// Krumbein intercept sphericity `((i·s) / l²)^(1/3)`.
pub fn sphericity_krumbein(s: Real, i: Real, l: Real) -> Result<Real, FormError> {
    if l <= 0.0 || i < 0.0 || s < 0.0 {
        return Err(FormError::InvalidAxisLengths);
    }
    Ok(((i * s) / (l * l)).powf(1.0 / 3.0))
}

/// Kong & Fonseca flatness `(i − s)/i` and elongation `(l − i)/l`.
///
/// Each term is 0 when its denominator is 0.
pub fn form_parameters_kong_and_fonseca(s: Real, i: Real, l: Real) -> (Real, Real) {
    let flatness = if i != 0.0 { (i - s) / i } else { 0.0 };
    let elongation = if l != 0.0 { (l - i) / l } else { 0.0 };
    (flatness, elongation)
}

/// Potticary et al. flatness `2(i − s)/(s + i + l)` and elongation
/// `(l − i)/(s + i + l)`.
///
/// Both terms are 0 when the axis lengths sum to 0.
pub fn form_parameters_potticary_et_al(s: Real, i: Real, l: Real) -> (Real, Real) {
    let denom = s + i + l;
    if denom == 0.0 {
        return (0.0, 0.0);
    }
    (2.0 * (i - s) / denom, (l - i) / denom)
}

/// Zingg classification ratios `s/i` and `i/l`.
///
/// Each term is 0 when its denominator is 0.
pub fn form_parameters_zingg(s: Real, i: Real, l: Real) -> (Real, Real) {
    let si = if i != 0.0 { s / i } else { 0.0 };
    let il = if l != 0.0 { i / l } else { 0.0 };
    (si, il)
}

/// Form factors computed from volume and surface measurements.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SurfaceFormFactors {
    /// Volume over convex-hull volume.
    pub convexity: Real,
    /// Wadell sphericity.
    pub sphericity_wadell: Real,
}

/// Form factors computed from the `(s, i, l)` principal extents.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct AxisFormFactors {
    /// Krumbein intercept sphericity.
    pub sphericity_krumbein: Real,
    /// Potticary et al. flatness.
    pub flatness_potticary: Real,
    /// Potticary et al. elongation.
    pub elongation_potticary: Real,
    /// Kong & Fonseca flatness.
    pub flatness_kong_fonseca: Real,
    /// Kong & Fonseca elongation.
    pub elongation_kong_fonseca: Real,
    /// Zingg `s/i` ratio.
    pub zingg_si_ratio: Real,
    /// Zingg `i/l` ratio.
    pub zingg_il_ratio: Real,
}

/// Bundles the volume/area form factors in one call.
pub fn form_functions_1(
    surface_area: Real,
    volume: Real,
    volume_convex_hull: Real,
) -> Result<SurfaceFormFactors, FormError> {
    Ok(SurfaceFormFactors {
        convexity: convexity(volume, volume_convex_hull)?,
        sphericity_wadell: sphericity_wadell(volume, surface_area)?,
    })
}

/// Bundles every axis-based form factor in one call.
pub fn form_functions_2(s: Real, i: Real, l: Real) -> Result<AxisFormFactors, FormError> {
    let sphericity_krumbein = sphericity_krumbein(s, i, l)?;
    let (flatness_potticary, elongation_potticary) = form_parameters_potticary_et_al(s, i, l);
    let (flatness_kong_fonseca, elongation_kong_fonseca) =
        form_parameters_kong_and_fonseca(s, i, l);
    let (zingg_si_ratio, zingg_il_ratio) = form_parameters_zingg(s, i, l);

    Ok(AxisFormFactors {
        sphericity_krumbein,
        flatness_potticary,
        elongation_potticary,
        flatness_kong_fonseca,
        elongation_kong_fonseca,
        zingg_si_ratio,
        zingg_il_ratio,
    })
}
