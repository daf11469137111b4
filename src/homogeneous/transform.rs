use nalgebra::{Matrix4, Vector4};

use crate::number::RingNumber;

use super::point3::Point3;
use super::vector::Vector3;

/// Affine transformation of 3D homogeneous points.
///
/// Stored as a 4x4 ring matrix applied to the homogeneous quadruple. No
/// division ever happens; scale factors accumulate in the weight. The
/// bottom row is `(0, 0, 0, w)` with nonzero `w`, which keeps the map
/// affine.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform3<R: RingNumber> {
    matrix: Matrix4<R>,
}

impl<R: RingNumber> Transform3<R> {
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
    /// Panics in debug builds if the bottom row is not `(0, 0, 0, w)` with
    /// nonzero `w`.
    #[must_use]
    pub fn from_matrix(matrix: Matrix4<R>) -> Self {
        debug_assert!(
            matrix[(3, 0)].is_zero()
                && matrix[(3, 1)].is_zero()
                && matrix[(3, 2)].is_zero()
                && !matrix[(3, 3)].is_zero(),
            "matrix is not affine"
        );
        Self { matrix }
    }

    /// Translation by `v`.
    ///
    /// The diagonal carries the vector's weight, so a fractional shift
    /// needs no division in the ring.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the vector is ideal.
    #[must_use]
    pub fn translation(v: &Vector3<R>) -> Self {
        let w = v.hw().clone();
        debug_assert!(!w.is_zero(), "translation by an ideal vector");
        let mut matrix = Matrix4::from_diagonal_element(w);
        matrix[(0, 3)] = v.hx().clone();
        matrix[(1, 3)] = v.hy().clone();
        matrix[(2, 3)] = v.hz().clone();
        Self { matrix }
    }

    /// Uniform scaling about the origin by `num / den`.
    ///
    /// The denominator lands in the weight slot, so fractional factors
    /// stay in the ring.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `den` is zero.
    #[must_use]
    pub fn scaling(num: R, den: R) -> Self {
        debug_assert!(!den.is_zero(), "scaling by a zero denominator");
        let mut matrix = Matrix4::from_diagonal_element(num);
        matrix[(3, 3)] = den;
        Self { matrix }
    }

    /// The underlying matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4<R> {
        &self.matrix
    }

    /// Applies the transformation to the homogeneous quadruple of `p`.
    #[must_use]
    pub fn transform(&self, p: &Point3<R>) -> Point3<R> {
        let v = &self.matrix
            * Vector4::new(
                p.hx().clone(),
                p.hy().clone(),
                p.hz().clone(),
                p.hw().clone(),
            );
        Point3::from_homogeneous(v.x.clone(), v.y.clone(), v.z.clone(), v.w.clone())
    }
}

#[cfg(test)]
mod tests {
    use num_rational::Ratio;

    use super::*;

    #[test]
    fn translation_scales_with_the_vector_weight() {
        let t = Transform3::translation(&Vector3::new(1_i64, 0, 0, 2));
        let m = t.matrix();
        assert_eq!(m[(0, 0)], 2);
        assert_eq!(m[(0, 3)], 1);
        assert_eq!(m[(3, 3)], 2);
    }

    #[test]
    fn translation_moves_weighted_points_exactly() {
        let t = Transform3::translation(&Vector3::new(1_i64, 2, 3, 1));
        let p = Point3::from_homogeneous(2_i64, 4, 6, 2);
        let q = t.transform(&p);
        assert_eq!(q, Point3::from_homogeneous(4, 8, 12, 2));
        assert_eq!(q.x(), Ratio::from(2));
    }

    #[test]
    fn identity_preserves_the_quadruple() {
        let p = Point3::from_homogeneous(3_i64, -6, 9, 3);
        let q = Transform3::identity().transform(&p);
        assert_eq!(*q.hx(), 3);
        assert_eq!(*q.hw(), 3);
    }

    #[test]
    fn fractional_translation_stays_in_the_ring() {
        let t = Transform3::translation(&Vector3::new(1_i64, 0, 0, 2));
        let q = t.transform(&Point3::from_homogeneous(0_i64, 0, 0, 1));
        assert_eq!(q.x(), Ratio::new(1, 2));
        assert_eq!(*q.hw(), 2);
    }

    #[test]
    fn fractional_scaling_divides_through_the_weight() {
        let t = Transform3::scaling(1_i64, 2);
        let q = t.transform(&Point3::from_homogeneous(2_i64, 4, 6, 2));
        assert_eq!(q.x(), Ratio::new(1, 2));
        assert_eq!(q.y(), Ratio::from(1));
        assert_eq!(q.z(), Ratio::new(3, 2));
        assert_eq!(*q.hw(), 4);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "ideal")]
    fn translation_by_an_ideal_vector_is_rejected() {
        let _ = Transform3::translation(&Vector3::new(1_i64, 0, 0, 0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "zero denominator")]
    fn scaling_by_a_zero_denominator_is_rejected() {
        let _ = Transform3::scaling(3_i64, 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "not affine")]
    fn projective_bottom_row_is_rejected() {
        let mut m = Matrix4::identity();
        m[(3, 0)] = 1_i64;
        let _ = Transform3::from_matrix(m);
    }
}
