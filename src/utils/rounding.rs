use crate::math::Real;

/// Rounds `x` to `decimals` decimal places, half away from zero.
pub(crate) fn round_to_decimals(x: Real, decimals: u32) -> Real {
    let scale = (10.0 as Real).powi(decimals as i32);
    (x * scale).round() / scale
}
