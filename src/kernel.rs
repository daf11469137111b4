//! Kernel parameter binding.
//!
//! A kernel names the concrete number and geometry types that work
//! together, so generic code written against [`Kernel`] is specialized at
//! compile time with no per-call dispatch. Two bindings ship with the
//! crate: [`Cartesian`](crate::cartesian::Cartesian) and
//! [`Homogeneous`](crate::homogeneous::Homogeneous).

use std::fmt::Debug;

use crate::handle::{CartesianIter, Coordinates};
use crate::number::{FieldNumber, RingNumber};

/// Marker for the coordinate-space origin.
///
/// Converts into the origin point of any kernel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin;

/// Compile-time binding of the types a geometric computation needs.
///
/// The binding is self-referential: `Point3` is a point type parametrized
/// by this kernel's scalars, its shared representation is `Vector3`, and
/// `Transform3` is the transformation those points accept.
pub trait Kernel: Sized {
    /// Field type of Cartesian coordinate reads.
    type FT: FieldNumber;

    /// Ring type of homogeneous coordinate reads.
    type RT: RingNumber<Field = Self::FT>;

    /// 2D point of this kernel.
    type Point2: Point2Ops<Self>;

    /// 3D point of this kernel.
    type Point3: Point3Ops<Self>;

    /// Coordinate representation shared by 2D points.
    type Vector2: Coordinates<FT = Self::FT> + Clone + Debug;

    /// Coordinate representation shared by 3D points.
    type Vector3: Coordinates<FT = Self::FT> + Clone + Debug;

    /// 2D direction of this kernel.
    type Direction2: Clone + Debug;

    /// 3D direction of this kernel.
    type Direction3: Clone + Debug;

    /// Affine transformation applied to 3D points.
    type Transform3: Clone + Debug;
}

/// Operations every 2D point offers, whatever its representation.
///
/// Coordinates come back by value so that stored (Cartesian) and computed
/// (homogeneous) representations fit the same signatures.
pub trait Point2Ops<K: Kernel>:
    Clone + Debug + PartialEq + From<Origin> + Default
{
    /// Cartesian x coordinate.
    fn x(&self) -> K::FT;

    /// Cartesian y coordinate.
    fn y(&self) -> K::FT;

    /// Homogeneous x coordinate.
    fn hx(&self) -> K::RT;

    /// Homogeneous y coordinate.
    fn hy(&self) -> K::RT;

    /// Homogeneous weight.
    fn hw(&self) -> K::RT;

    /// Cartesian coordinate `i`, for `i < 2`.
    fn cartesian(&self, i: usize) -> K::FT;

    /// Homogeneous coordinate `i`, for `i <= 2`; index 2 is the weight.
    fn homogeneous(&self, i: usize) -> K::RT;

    /// Number of Cartesian coordinates, always 2.
    fn dimension(&self) -> usize;

    /// Iterator over both Cartesian coordinates.
    fn cartesian_iter(&self) -> CartesianIter<K::Vector2>;
}

/// Operations every 3D point offers, whatever its representation.
pub trait Point3Ops<K: Kernel>:
    Clone + Debug + PartialEq + From<Origin> + Default
{
    /// Cartesian x coordinate.
    fn x(&self) -> K::FT;

    /// Cartesian y coordinate.
    fn y(&self) -> K::FT;

    /// Cartesian z coordinate.
    fn z(&self) -> K::FT;

    /// Homogeneous x coordinate.
    fn hx(&self) -> K::RT;

    /// Homogeneous y coordinate.
    fn hy(&self) -> K::RT;

    /// Homogeneous z coordinate.
    fn hz(&self) -> K::RT;

    /// Homogeneous weight.
    fn hw(&self) -> K::RT;

    /// Cartesian coordinate `i`, for `i < 3`.
    fn cartesian(&self, i: usize) -> K::FT;

    /// Homogeneous coordinate `i`, for `i <= 3`; index 3 is the weight.
    fn homogeneous(&self, i: usize) -> K::RT;

    /// Number of Cartesian coordinates, always 3.
    fn dimension(&self) -> usize;

    /// Iterator over the three Cartesian coordinates.
    fn cartesian_iter(&self) -> CartesianIter<K::Vector3>;

    /// Returns the point moved by `t`.
    fn transform(&self, t: &K::Transform3) -> K::Point3;
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_rational::Ratio;
    use num_traits::{One, Zero};

    use super::*;
    use crate::cartesian::{self, Cartesian};
    use crate::homogeneous::{self, Homogeneous};

    fn centroid_x<K: Kernel>(points: &[K::Point3]) -> K::FT {
        let mut sum = K::FT::zero();
        let mut count = K::FT::zero();
        for p in points {
            sum += p.x();
            count += K::FT::one();
        }
        sum / count
    }

    fn coordinate_sum<K: Kernel>(p: &K::Point3) -> K::FT {
        p.cartesian_iter().fold(K::FT::zero(), |acc, c| acc + c)
    }

    fn origin_reads<K: Kernel>() -> (K::FT, K::RT) {
        let p2 = K::Point2::from(Origin);
        let p3 = K::Point3::from(Origin);
        (p2.x(), p3.hw())
    }

    fn default_is_origin<K: Kernel>() -> bool {
        K::Point3::default() == K::Point3::from(Origin)
    }

    fn shift<K: Kernel>(p: &K::Point3, t: &K::Transform3) -> K::Point3 {
        p.transform(t)
    }

    #[test]
    fn centroid_over_the_float_cartesian_kernel() {
        let pts = [
            cartesian::Point3::new(0.0, 1.0, 0.0),
            cartesian::Point3::new(3.0, 1.0, 0.0),
            cartesian::Point3::new(6.0, 1.0, 0.0),
        ];
        let cx = centroid_x::<Cartesian<f64>>(&pts);
        assert_relative_eq!(cx, 3.0);
    }

    #[test]
    fn centroid_over_the_exact_homogeneous_kernel() {
        let pts = [
            homogeneous::Point3::from_homogeneous(1, 0, 0, 2),
            homogeneous::Point3::from_homogeneous(3, 0, 0, 2),
        ];
        // (1/2 + 3/2) / 2 = 1, with no rounding anywhere.
        assert_eq!(centroid_x::<Homogeneous<i64>>(&pts), Ratio::one());
    }

    #[test]
    fn coordinate_sum_agrees_between_kernels() {
        let c = cartesian::Point3::new(1.0, 2.0, 3.0);
        let sum = coordinate_sum::<Cartesian<f64>>(&c);
        assert_relative_eq!(sum, 6.0);

        let h = homogeneous::Point3::from_homogeneous(2, 4, 6, 2);
        assert_eq!(coordinate_sum::<Homogeneous<i64>>(&h), Ratio::from(6));
    }

    #[test]
    fn origin_substitutes_into_both_kernels() {
        let (x, w) = origin_reads::<Cartesian<Ratio<i64>>>();
        assert_eq!(x, Ratio::zero());
        assert_eq!(w, Ratio::one());

        let (x, w) = origin_reads::<Homogeneous<i64>>();
        assert_eq!(x, Ratio::zero());
        assert_eq!(w, 1);
    }

    #[test]
    fn default_points_sit_at_the_origin() {
        assert!(default_is_origin::<Cartesian<f64>>());
        assert!(default_is_origin::<Homogeneous<i64>>());
    }

    #[test]
    fn transform_is_reachable_through_the_binding() {
        let t = cartesian::Transform3::translation(&cartesian::Vector3::new(1.0, 0.0, 0.0));
        let p = cartesian::Point3::new(1.0, 1.0, 1.0);
        let q = shift::<Cartesian<f64>>(&p, &t);
        assert_relative_eq!(*q.x(), 2.0);

        let t = homogeneous::Transform3::translation(&homogeneous::Vector3::new(1, 0, 0, 1));
        let p = homogeneous::Point3::from_homogeneous(2, 4, 6, 2);
        let q = shift::<Homogeneous<i64>>(&p, &t);
        assert_eq!(q.x(), Ratio::from(2));
    }
}
