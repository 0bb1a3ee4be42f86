use grainshape3d_f64::na::DMatrix;
use grainshape3d_f64::roughness::{roughness_functions, sa, sdq, sku, sq, ssk, RoughnessError};

#[test]
fn known_grid_values() {
    let z = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 3.0]);
    let metrics = roughness_functions(&z, 1.0, 1.0).unwrap();

    assert_abs_diff_eq!(metrics.sa, 1.0, epsilon = 1.0e-12);
    assert_abs_diff_eq!(metrics.sq, 1.25f64.sqrt(), epsilon = 1.0e-12);
    assert_abs_diff_eq!(metrics.sdq, 10.0f64.sqrt(), epsilon = 1.0e-12);
    assert_abs_diff_eq!(metrics.sku, 2.5625 / 1.5625, epsilon = 1.0e-12);
    assert_abs_diff_eq!(metrics.ssk, 0.0, epsilon = 1.0e-12);
}

#[test]
fn anisotropic_spacings_scale_the_gradients() {
    let z = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 3.0]);

    // Column differences are 1, row differences are 2; with dx = 1, dy = 2
    // every term contributes a unit squared gradient, four terms in total.
    let value = sdq(&z, 1.0, 2.0).unwrap();
    assert_abs_diff_eq!(value, 2.0, epsilon = 1.0e-12);
}

#[test]
fn flat_grids_yield_sentinels() {
    let z = vec![1.0; 16];
    let sq_value = sq(&z);

    assert_abs_diff_eq!(sq_value, 0.0);
    assert!(sku(&z, Some(sq_value)).is_infinite());
    assert!(sku(&z, Some(sq_value)) > 0.0);
    assert!(ssk(&z, Some(sq_value)).is_nan());
}

#[test]
fn gradient_grid_preconditions() {
    let z = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 2.0, 3.0]);
    assert_eq!(sdq(&z, 1.0, 0.0), Err(RoughnessError::NonPositiveSpacing));

    let column = DMatrix::from_row_slice(3, 1, &[0.0, 1.0, 2.0]);
    assert_eq!(
        sdq(&column, 1.0, 1.0),
        Err(RoughnessError::GridTooSmall { rows: 3, cols: 1 })
    );
}

#[test]
fn moment_statistics_ignore_grid_shape() {
    let samples = [0.5, 1.5, -0.25, 2.0, 1.0, 0.0];
    let grid = DMatrix::from_row_slice(2, 3, &samples);

    assert_abs_diff_eq!(sa(grid.as_slice()), sa(&samples), epsilon = 1.0e-12);
    assert_abs_diff_eq!(sq(grid.as_slice()), sq(&samples), epsilon = 1.0e-12);
}
