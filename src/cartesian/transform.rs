use nalgebra::{Matrix4, Vector4};

use crate::number::FieldNumber;

use super::point3::Point3;
use super::vector::Vector3;

/// Affine transformation of 3D Cartesian points.
///
/// Stored as a 4x4 matrix acting on column vectors `(x, y, z, 1)`; the
/// bottom row stays `(0, 0, 0, 1)`, so the result needs no division.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform3<F: FieldNumber> {
    matrix: Matrix4<F>,
}

impl<F: FieldNumber> Transform3<F> {
    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Wraps an affine matrix.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the bottom row is not `(0, 0, 0, 1)`.
    #[must_use]
    pub fn from_matrix(matrix: Matrix4<F>) -> Self {
        debug_assert!(
            matrix[(3, 0)].is_zero()
                && matrix[(3, 1)].is_zero()
                && matrix[(3, 2)].is_zero()
                && matrix[(3, 3)].is_one(),
            "matrix is not affine"
        );
        Self { matrix }
    }

    /// Translation by `v`.
    #[must_use]
    pub fn translation(v: &Vector3<F>) -> Self {
        let mut matrix = Matrix4::identity();
        matrix[(0, 3)] = v.x().clone();
        matrix[(1, 3)] = v.y().clone();
        matrix[(2, 3)] = v.z().clone();
        Self { matrix }
    }

    /// Uniform scaling about the origin by `factor`.
    #[must_use]
    pub fn scaling(factor: F) -> Self {
        let mut matrix = Matrix4::identity();
        matrix[(0, 0)] = factor.clone();
        matrix[(1, 1)] = factor.clone();
        matrix[(2, 2)] = factor;
        Self { matrix }
    }

    /// The underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4<F> {
        &self.matrix
    }

    /// Applies the transformation to a point.
    #[must_use]
    pub fn transform(&self, p: &Point3<F>) -> Point3<F> {
        let v = &self.matrix * Vector4::new(p.x().clone(), p.y().clone(), p.z().clone(), F::one());
        Point3::new(v.x.clone(), v.y.clone(), v.z.clone())
    }
}
