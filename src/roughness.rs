//! Statistical descriptors of surface height fields.
//!
//! The moment statistics ([`sa`], [`sq`], [`sku`], [`ssk`]) accept any slice
//! of height samples; a grid flattens to its sample slice without changing
//! them. The gradient statistic [`sdq`] needs the 2-D grid together with its
//! sample spacings.

use crate::math::Real;
use na::DMatrix;
use num::Zero;

/// Indicates the failure of a roughness computation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RoughnessError {
    /// The gradient statistic needs at least two samples per direction.
    #[error("height grid must be at least 2x2, got {rows}x{cols}")]
    GridTooSmall {
        /// Number of grid rows.
        rows: usize,
        /// Number of grid columns.
        cols: usize,
    },
    /// Sample spacings must be strictly positive.
    #[error("sample spacings must be > 0")]
    NonPositiveSpacing,
}

fn mean(z: &[Real]) -> Real {
    let sum: Real = z.iter().sum();
    sum / z.len() as Real
}

/// Arithmetical mean height: the mean absolute deviation from the mean plane.
///
/// An empty sample slice yields NaN.
pub fn sa(z: &[Real]) -> Real {
    let m = mean(z);
    z.iter().map(|v| (v - m).abs()).sum::<Real>() / z.len() as Real
}

/// Root-mean-square height of the samples about their mean (population RMS).
///
/// An empty sample slice yields NaN.
pub fn sq(z: &[Real]) -> Real {
    let m = mean(z);
    (z.iter().map(|v| (v - m) * (v - m)).sum::<Real>() / z.len() as Real).sqrt()
}

/// Height-distribution kurtosis `mean((z − mean)⁴) / sq⁴`.
///
/// Pass a precomputed [`sq`] to avoid recomputing it. A perfectly flat
/// surface has an undefined ratio and yields positive infinity rather than
/// an error.
pub fn sku(z: &[Real], sq_value: Option<Real>) -> Real {
    let m = mean(z);
    let s = sq_value.unwrap_or_else(|| sq(z));
    if s.is_zero() {
        return Real::INFINITY;
    }
    z.iter().map(|v| (v - m).powi(4)).sum::<Real>() / z.len() as Real / s.powi(4)
}

/// Height-distribution skewness `mean((z − mean)³) / sq³`.
///
/// Pass a precomputed [`sq`] to avoid recomputing it. A perfectly flat
/// surface has an undefined ratio and yields NaN rather than an error.
pub fn ssk(z: &[Real], sq_value: Option<Real>) -> Real {
    let m = mean(z);
    let s = sq_value.unwrap_or_else(|| sq(z));
    if s.is_zero() {
        return Real::NAN;
    }
    z.iter().map(|v| (v - m).powi(3)).sum::<Real>() / z.len() as Real / s.powi(3)
}

/// Root-mean-square gradient of a height grid.
///
/// Forward differences are taken across columns (divided by `dx`) and across
/// rows (divided by `dy`); both squared-gradient sums are normalized by the
/// single shared `(rows − 1)·(cols − 1)` count.
pub fn sdq(z: &DMatrix<Real>, dx: Real, dy: Real) -> Result<Real, RoughnessError> {
    if dx <= 0.0 || dy <= 0.0 {
        return Err(RoughnessError::NonPositiveSpacing);
    }

    let (rows, cols) = z.shape();
    if rows < 2 || cols < 2 {
        return Err(RoughnessError::GridTooSmall { rows, cols });
    }

    let mut sum: Real = 0.0;
    for r in 0..rows {
        for c in 0..cols - 1 {
            let g = (z[(r, c + 1)] - z[(r, c)]) / dx;
            sum += g * g;
        }
    }
    for r in 0..rows - 1 {
        for c in 0..cols {
            let g = (z[(r + 1, c)] - z[(r, c)]) / dy;
            sum += g * g;
        }
    }

    Ok((sum / ((rows - 1) * (cols - 1)) as Real).sqrt())
}

/// Roughness descriptors of a height grid, bundled.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RoughnessMetrics {
    /// Root-mean-square height.
    pub sq: Real,
    /// Arithmetical mean height.
    pub sa: Real,
    /// Root-mean-square gradient.
    pub sdq: Real,
    /// Height-distribution kurtosis.
    pub sku: Real,
    /// Height-distribution skewness.
    pub ssk: Real,
}

/// Computes every roughness descriptor of `z` in one call, reusing the RMS
/// height for the kurtosis and skewness.
pub fn roughness_functions(
    z: &DMatrix<Real>,
    dx: Real,
    dy: Real,
) -> Result<RoughnessMetrics, RoughnessError> {
    let samples = z.as_slice();
    let sq_value = sq(samples);

    Ok(RoughnessMetrics {
        sq: sq_value,
        sa: sa(samples),
        sdq: sdq(z, dx, dy)?,
        sku: sku(samples, Some(sq_value)),
        ssk: ssk(samples, Some(sq_value)),
    })
}
