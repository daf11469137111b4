use std::ops::Index;

use crate::handle::{CartesianIter, Coordinates, Handle};
use crate::kernel::{Kernel, Origin, Point3Ops};
use crate::number::{FieldNumber, RingNumber};

use super::transform::Transform3;
use super::vector::Vector3;

/// A 3D point whose representation stores Cartesian coordinates.
///
/// The representation sits behind a [`Handle`]: copying the point bumps a
/// reference count, and all copies read the same stored coordinates.
#[derive(Debug, Clone)]
pub struct Point3<F: FieldNumber> {
    base: Handle<Vector3<F>>,
}

impl<F: FieldNumber> Point3<F> {
    /// Creates a point from Cartesian coordinates.
    #[must_use]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self {
            base: Handle::new(Vector3::new(x, y, z)),
        }
    }

    /// Creates a point from homogeneous coordinates.
    ///
    /// The weight is accepted for signature symmetry with homogeneous
    /// points and ignored; a Cartesian point always carries an implicit
    /// unit weight.
    #[must_use]
    pub fn from_homogeneous(x: F, y: F, z: F, _w: F) -> Self {
        Self::new(x, y, z)
    }

    #[must_use]
    pub fn x(&self) -> &F {
        self.base.get().x()
    }

    #[must_use]
    pub fn y(&self) -> &F {
        self.base.get().y()
    }

    #[must_use]
    pub fn z(&self) -> &F {
        self.base.get().z()
    }

    /// Homogeneous x coordinate; aliases [`Point3::x`].
    #[must_use]
    pub fn hx(&self) -> &F {
        self.x()
    }

    /// Homogeneous y coordinate; aliases [`Point3::y`].
    #[must_use]
    pub fn hy(&self) -> &F {
        self.y()
    }

    /// Homogeneous z coordinate; aliases [`Point3::z`].
    #[must_use]
    pub fn hz(&self) -> &F {
        self.z()
    }

    /// Homogeneous weight: always one, produced on demand.
    #[must_use]
    pub fn hw(&self) -> F {
        F::one()
    }

    /// Returns a reference to Cartesian coordinate `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> &F {
        self.base.get().cartesian(i)
    }

    /// Returns homogeneous coordinate `i`; index 3 is the implicit unit
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> F {
        self.base.get().homogeneous(i)
    }

    /// Number of Cartesian coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.base.get().dimension()
    }

    /// Iterator over the three Cartesian coordinates.
    ///
    /// The iterator shares the point's representation and stays usable if
    /// the point is dropped first.
    #[must_use]
    pub fn cartesian_iter(&self) -> CartesianIter<Vector3<F>> {
        CartesianIter::new(self.base.clone())
    }

    /// Returns the point moved by `t`.
    #[must_use]
    pub fn transform(&self, t: &Transform3<F>) -> Self {
        t.transform(self)
    }
}

impl<F: FieldNumber> From<Origin> for Point3<F> {
    fn from(_: Origin) -> Self {
        Self {
            base: Handle::new(Vector3::zero()),
        }
    }
}

impl<F: FieldNumber> Default for Point3<F> {
    fn default() -> Self {
        Self::from(Origin)
    }
}

// Aliased handles short-circuit; otherwise compare stored coordinates.
impl<F: FieldNumber> PartialEq for Point3<F> {
    fn eq(&self, other: &Self) -> bool {
        Handle::ptr_eq(&self.base, &other.base) || self.base.get() == other.base.get()
    }
}

impl<F: FieldNumber> Index<usize> for Point3<F> {
    type Output = F;

    fn index(&self, i: usize) -> &F {
        self.cartesian(i)
    }
}

impl<F, K> Point3Ops<K> for Point3<F>
where
    F: FieldNumber + RingNumber<Field = F>,
    K: Kernel<FT = F, RT = F, Point3 = Point3<F>, Vector3 = Vector3<F>, Transform3 = Transform3<F>>,
{
    fn x(&self) -> F {
        self.x().clone()
    }

    fn y(&self) -> F {
        self.y().clone()
    }

    fn z(&self) -> F {
        self.z().clone()
    }

    fn hx(&self) -> F {
        self.x().clone()
    }

    fn hy(&self) -> F {
        self.y().clone()
    }

    fn hz(&self) -> F {
        self.z().clone()
    }

    fn hw(&self) -> F {
        F::one()
    }

    fn cartesian(&self, i: usize) -> F {
        self.cartesian(i).clone()
    }

    fn homogeneous(&self, i: usize) -> F {
        self.homogeneous(i)
    }

    fn dimension(&self) -> usize {
        self.dimension()
    }

    fn cartesian_iter(&self) -> CartesianIter<Vector3<F>> {
        self.cartesian_iter()
    }

    fn transform(&self, t: &Transform3<F>) -> Point3<F> {
        self.transform(t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use num_rational::Ratio;
    use num_traits::{One, Zero};

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn reads_return_what_was_stored() {
        let a = p(1.0, -2.5, 4.0);
        assert_relative_eq!(*a.x(), 1.0);
        assert_relative_eq!(*a.y(), -2.5);
        assert_relative_eq!(*a.z(), 4.0);
    }

    #[test]
    fn homogeneous_weight_is_implicitly_one() {
        let a = Point3::new(Ratio::new(1, 3), Ratio::from(0), Ratio::from(-2));
        assert_eq!(a.hw(), Ratio::one());
        assert_eq!(a.homogeneous(3), Ratio::one());
        assert_eq!(*a.hz(), Ratio::from(-2));
    }

    #[test]
    fn weight_argument_is_ignored_on_construction() {
        let a = Point3::from_homogeneous(3.0, 6.0, 9.0, 3.0);
        assert_relative_eq!(*a.x(), 3.0);
        assert_relative_eq!(*a.y(), 6.0);
        assert_relative_eq!(*a.z(), 9.0);
    }

    #[test]
    fn indexing_matches_cartesian() {
        let a = Point3::new(Ratio::from(2), Ratio::from(4), Ratio::from(8));
        assert_eq!(a[2], Ratio::from(8));
        assert_eq!(*a.cartesian(0), a[0]);
    }

    #[test]
    fn copies_share_one_representation() {
        let a = p(1.0, 2.0, 3.0);
        let b = a.clone();
        assert!(Handle::ptr_eq(&a.base, &b.base));
        assert_eq!(a.base.refs(), 2);
        assert_eq!(a, b);
        drop(b);
        assert_eq!(a.base.refs(), 1);
    }

    #[test]
    fn equality_compares_coordinates_for_distinct_reps() {
        let a = Point3::new(Ratio::from(1), Ratio::from(2), Ratio::from(3));
        let b = Point3::new(Ratio::from(1), Ratio::from(2), Ratio::from(3));
        let c = Point3::new(Ratio::from(1), Ratio::from(2), Ratio::from(4));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn origin_reads_as_all_zeros() {
        let a = Point3::<Ratio<i64>>::from(Origin);
        assert_eq!(*a.x(), Ratio::zero());
        assert_eq!(*a.z(), Ratio::zero());
        assert_eq!(a, Point3::default());
    }

    #[test]
    fn iterator_visits_coordinates_in_order_and_restarts() {
        let a = p(0.5, 1.5, 2.5);
        let first: Vec<f64> = a.cartesian_iter().collect();
        let second: Vec<f64> = a.cartesian_iter().collect();
        assert_eq!(first, vec![0.5, 1.5, 2.5]);
        assert_eq!(first, second);
    }

    #[test]
    fn shared_points_read_across_threads() {
        let a = p(1.0, 2.0, 3.0);
        let b = a.clone();
        let sum = std::thread::spawn(move || b.x() + b.y() + b.z())
            .join()
            .unwrap();
        assert_relative_eq!(sum, 6.0);
        assert_eq!(a.base.refs(), 1);
    }

    #[test]
    fn transform_delegates_to_the_transformation() {
        let t = Transform3::translation(&Vector3::new(1.0, 2.0, 3.0));
        let a = p(1.0, 1.0, 1.0).transform(&t);
        assert_relative_eq!(*a.x(), 2.0);
        assert_relative_eq!(*a.y(), 3.0);
        assert_relative_eq!(*a.z(), 4.0);
    }

    #[test]
    fn transform_is_exact_over_rationals() {
        let t = Transform3::scaling(Ratio::new(1, 2));
        let a = Point3::new(Ratio::new(1, 3), Ratio::from(2), Ratio::from(0)).transform(&t);
        assert_eq!(*a.x(), Ratio::new(1, 6));
        assert_eq!(*a.y(), Ratio::from(1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cartesian_index_out_of_range_panics() {
        let a = p(0.0, 0.0, 0.0);
        let _ = a.cartesian(3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn homogeneous_index_out_of_range_panics() {
        let a = p(0.0, 0.0, 0.0);
        let _ = a.homogeneous(4);
    }
}
