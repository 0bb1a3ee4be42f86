use super::support;
use grainshape3d_f64::mass_properties::{
    details::tetmesh_volume_and_centroid, tetmesh_volume_centroid_inertia, MassPropertiesError,
};
use grainshape3d_f64::math::{Matrix, Point};
use grainshape3d_f64::mesh::TetraMesh;

#[test]
fn unit_right_tetrahedron_volume_and_centroid() {
    let (vertices, elements) = support::unit_right_tetrahedron();
    let (volume, centroid) = tetmesh_volume_and_centroid(&vertices, &elements).unwrap();

    assert_abs_diff_eq!(volume, 1.0 / 6.0, epsilon = 1.0e-12);
    assert_abs_diff_eq!(centroid, Point::new(0.25, 0.25, 0.25), epsilon = 1.0e-12);
}

#[test]
fn inertia_is_indexing_base_independent() {
    let (vertices, _) = support::unit_right_tetrahedron();

    let zero_based = tetmesh_volume_centroid_inertia(&vertices, &[[0, 1, 2, 3]], true).unwrap();
    let one_based = tetmesh_volume_centroid_inertia(&vertices, &[[1, 2, 3, 4]], true).unwrap();

    assert_eq!(zero_based.volume, one_based.volume);
    assert_eq!(zero_based.centroid, one_based.centroid);
    assert_eq!(zero_based.inertia, one_based.inertia);
}

#[test]
fn cube_inertia_matches_the_analytic_tensor() {
    let side = 2.0;
    let (vertices, elements) = support::cube_tets(side);
    let result = tetmesh_volume_centroid_inertia(&vertices, &elements, true).unwrap();

    let volume = side * side * side;
    assert_abs_diff_eq!(result.volume, volume, epsilon = 1.0e-9);
    assert_abs_diff_eq!(
        result.centroid,
        Point::new(side / 2.0, side / 2.0, side / 2.0),
        epsilon = 1.0e-9
    );

    // Unit-density cube about its center: I = V s^2 / 6 on the diagonal.
    let expected = Matrix::from_diagonal_element(volume * side * side / 6.0);
    assert_abs_diff_eq!(result.inertia, expected, epsilon = 1.0e-9);
    assert_abs_diff_eq!(result.principal_inertia_matrix(), expected, epsilon = 1.0e-9);
}

#[test]
fn principal_axes_are_orthonormal() {
    let (vertices, elements) = support::cube_tets(1.0);
    let result = tetmesh_volume_centroid_inertia(&vertices, &elements, true).unwrap();

    let gram = result.principal_axes.transpose() * result.principal_axes;
    assert_abs_diff_eq!(gram, Matrix::identity(), epsilon = 1.0e-9);
}

#[test]
fn the_mesh_type_delegates_to_the_free_functions() {
    let (vertices, elements) = support::cube_tets(1.0);
    let mesh = TetraMesh::new(vertices.clone(), elements.clone()).unwrap();
    assert_eq!(mesh.num_elements(), 5);

    let (volume, centroid) = mesh.volume_and_centroid().unwrap();
    assert_eq!(
        (volume, centroid),
        tetmesh_volume_and_centroid(&vertices, &elements).unwrap()
    );

    let full = mesh.volume_centroid_inertia(true).unwrap();
    assert_eq!(
        full,
        tetmesh_volume_centroid_inertia(&vertices, &elements, true).unwrap()
    );
}

#[test]
fn flat_meshes_have_no_volume() {
    let (vertices, _) = support::unit_right_tetrahedron();
    // All four vertices in the z = 0 plane.
    let flat = vec![vertices[0], vertices[1], vertices[2], vertices[0]];
    assert_eq!(
        tetmesh_volume_and_centroid(&flat, &[[0, 1, 2, 3]]),
        Err(MassPropertiesError::ZeroVolume)
    );
}
