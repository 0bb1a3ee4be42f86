use super::support;
use grainshape3d_f64::math::{Point, Real};
use grainshape3d_f64::surface::{surface_area, surface_orientation_tensor};

fn unit_square() -> Vec<Point<Real>> {
    vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ]
}

#[test]
fn unit_square_area() {
    let area = surface_area(&unit_square(), &[[0, 1, 2], [0, 2, 3]]).unwrap();
    assert_abs_diff_eq!(area, 1.0, epsilon = 1.0e-9);
}

#[test]
fn area_is_indexing_base_independent() {
    let zero_based = surface_area(&unit_square(), &[[0, 1, 2], [0, 2, 3]]).unwrap();
    let one_based = surface_area(&unit_square(), &[[1, 2, 3], [1, 3, 4]]).unwrap();
    assert_eq!(zero_based, one_based);
}

#[test]
fn regular_tetrahedron_area_is_sqrt_three() {
    let (vertices, indices) = support::regular_tetrahedron();
    let area = surface_area(&vertices, &indices).unwrap();
    assert_abs_diff_eq!(area, (3.0 as Real).sqrt(), epsilon = 1.0e-9);
}

#[test]
fn planar_mesh_orientation_tensor() {
    let tensor = surface_orientation_tensor(&unit_square(), &[[0, 1, 2], [0, 2, 3]]).unwrap();

    // The eigenvalues trace a normalized tensor and the plane normal carries
    // the largest one.
    assert_abs_diff_eq!(tensor.eigenvalues.sum(), 1.0, epsilon = 1.0e-9);
    assert_abs_diff_eq!(tensor.eigenvalues.x, 1.0, epsilon = 1.0e-9);
    assert_abs_diff_eq!(tensor.eigenvectors.column(0).z.abs(), 1.0, epsilon = 1.0e-9);
}

#[test]
fn cube_orientation_is_isotropic() {
    let (vertices, indices) = support::cube(1.0);
    let tensor = surface_orientation_tensor(&vertices, &indices).unwrap();

    for k in 0..3 {
        assert_abs_diff_eq!(tensor.eigenvalues[k], 1.0 / 3.0, epsilon = 1.0e-9);
    }
    assert_abs_diff_eq!(tensor.compactness, 1.0, epsilon = 1.0e-9);
    assert_abs_diff_eq!(tensor.flakiness, 0.0, epsilon = 1.0e-9);
    assert_abs_diff_eq!(tensor.rodness, 0.0, epsilon = 1.0e-9);
}

#[test]
fn flakiness_and_rodness_partition_the_compactness_complement() {
    let (vertices, indices) = support::regular_tetrahedron();
    let tensor = surface_orientation_tensor(&vertices, &indices).unwrap();

    assert_abs_diff_eq!(
        tensor.flakiness + tensor.rodness,
        1.0 - tensor.compactness,
        epsilon = 1.0e-9
    );
}
