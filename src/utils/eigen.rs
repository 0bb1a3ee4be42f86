use crate::math::{Matrix, Real, Vector};

/// Ordering convention applied to a sorted eigendecomposition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EigenOrder {
    /// Smallest eigenvalue first.
    Ascending,
    /// Largest eigenvalue first.
    Descending,
}

/// Eigendecomposition of a symmetric matrix, with deterministically ordered
/// eigenvalues and the matching unit eigenvectors as columns.
///
/// The symmetric solver guarantees real eigenvalues and orthonormal
/// eigenvectors, but no particular order; this applies the requested one.
pub fn sorted_symmetric_eigen(
    m: &Matrix<Real>,
    order: EigenOrder,
) -> (Vector<Real>, Matrix<Real>) {
    let eigen = m.symmetric_eigen();

    let mut perm = [0usize, 1, 2];
    perm.sort_unstable_by(|&i, &j| {
        let (a, b) = (eigen.eigenvalues[i], eigen.eigenvalues[j]);
        let ord = match order {
            EigenOrder::Ascending => a.partial_cmp(&b),
            EigenOrder::Descending => b.partial_cmp(&a),
        };
        ord.unwrap_or(core::cmp::Ordering::Equal)
    });

    let values = Vector::new(
        eigen.eigenvalues[perm[0]],
        eigen.eigenvalues[perm[1]],
        eigen.eigenvalues[perm[2]],
    );
    let vectors = Matrix::from_columns(&[
        eigen.eigenvectors.column(perm[0]).into_owned(),
        eigen.eigenvectors.column(perm[1]).into_owned(),
        eigen.eigenvectors.column(perm[2]).into_owned(),
    ]);

    (values, vectors)
}
