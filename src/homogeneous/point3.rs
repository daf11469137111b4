use crate::error::{KernelError, Result};
use crate::handle::{CartesianIter, Coordinates, Handle};
use crate::kernel::{Kernel, Origin, Point3Ops};
use crate::number::RingNumber;

use super::direction::Direction3;
use super::transform::Transform3;
use super::vector::Vector3;

/// A 3D point whose representation stores homogeneous coordinates.
///
/// Homogeneous reads are references into the stored quadruple and stay
/// exact; Cartesian reads divide on every call. Copying the point bumps a
/// reference count on the shared representation.
#[derive(Debug, Clone)]
pub struct Point3<R: RingNumber> {
    base: Handle<Vector3<R>>,
}

impl<R: RingNumber> Point3<R> {
    /// Creates a point from Cartesian coordinates given over the field.
    ///
    /// Each coordinate is split into numerator and denominator and the
    /// denominators are cross multiplied away, so the stored quadruple is
    /// exact and integral input gets weight one.
    #[must_use]
    pub fn new(x: R::Field, y: R::Field, z: R::Field) -> Self {
        Self {
            base: Handle::new(Vector3::from_cartesian(&x, &y, &z)),
        }
    }

    /// Creates a point from an explicit homogeneous quadruple.
    ///
    /// A zero weight is allowed and yields an ideal point; see
    /// [`Point3::is_ideal`].
    #[must_use]
    pub fn from_homogeneous(hx: R, hy: R, hz: R, hw: R) -> Self {
        Self {
            base: Handle::new(Vector3::new(hx, hy, hz, hw)),
        }
    }

    /// Homogeneous x coordinate, exactly as stored.
    #[must_use]
    pub fn hx(&self) -> &R {
        self.base.get().hx()
    }

    /// Homogeneous y coordinate, exactly as stored.
    #[must_use]
    pub fn hy(&self) -> &R {
        self.base.get().hy()
    }

    /// Homogeneous z coordinate, exactly as stored.
    #[must_use]
    pub fn hz(&self) -> &R {
        self.base.get().hz()
    }

    /// Homogeneous weight, exactly as stored.
    #[must_use]
    pub fn hw(&self) -> &R {
        self.base.get().hw()
    }

    /// Cartesian x coordinate, computed as `hx / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the point is ideal.
    #[must_use]
    pub fn x(&self) -> R::Field {
        self.base.get().x()
    }

    /// Cartesian y coordinate, computed as `hy / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the point is ideal.
    #[must_use]
    pub fn y(&self) -> R::Field {
        self.base.get().y()
    }

    /// Cartesian z coordinate, computed as `hz / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the point is ideal.
    #[must_use]
    pub fn z(&self) -> R::Field {
        self.base.get().z()
    }

    /// Returns Cartesian coordinate `i`, dividing on the spot.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`, and in debug builds if the point is ideal.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> R::Field {
        self.base.get().cartesian(i)
    }

    /// Returns a reference to homogeneous coordinate `i`; index 3 is the
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> &R {
        self.base.get().homogeneous(i)
    }

    /// Number of Cartesian coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.base.get().dimension()
    }

    /// Iterator over the three Cartesian coordinates, dividing per step.
    #[must_use]
    pub fn cartesian_iter(&self) -> CartesianIter<Vector3<R>> {
        CartesianIter::new(self.base.clone())
    }

    /// Direction from the origin toward this point, taken from the raw
    /// homogeneous components with the weight dropped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `hx`, `hy` and `hz` are all zero.
    #[must_use]
    pub fn direction(&self) -> Direction3<R> {
        Direction3::new(self.hx().clone(), self.hy().clone(), self.hz().clone())
    }

    /// `true` if the weight is zero, i.e. the point lies at infinity.
    #[must_use]
    pub fn is_ideal(&self) -> bool {
        self.hw().is_zero()
    }

    /// Returns the point moved by `t`. The result keeps whatever weight
    /// the matrix produces; nothing is divided.
    #[must_use]
    pub fn transform(&self, t: &Transform3<R>) -> Self {
        t.transform(self)
    }

    /// Converts into a Cartesian-representation point over
    /// [`RingNumber::Field`].
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::ZeroWeight`] if the point is ideal.
    pub fn to_cartesian(&self) -> Result<crate::cartesian::Point3<R::Field>> {
        if self.is_ideal() {
            return Err(KernelError::ZeroWeight);
        }
        Ok(crate::cartesian::Point3::new(self.x(), self.y(), self.z()))
    }
}

impl<R: RingNumber> From<Origin> for Point3<R> {
    fn from(_: Origin) -> Self {
        Self {
            base: Handle::new(Vector3::zero()),
        }
    }
}

impl<R: RingNumber> Default for Point3<R> {
    fn default() -> Self {
        Self::from(Origin)
    }
}

// Aliased handles short-circuit; otherwise the representations compare by
// coordinate ratios.
impl<R: RingNumber> PartialEq for Point3<R> {
    fn eq(&self, other: &Self) -> bool {
        Handle::ptr_eq(&self.base, &other.base) || self.base.get() == other.base.get()
    }
}

impl<R, K> Point3Ops<K> for Point3<R>
where
    R: RingNumber,
    K: Kernel<
        FT = R::Field,
        RT = R,
        Point3 = Point3<R>,
        Vector3 = Vector3<R>,
        Transform3 = Transform3<R>,
    >,
{
    fn x(&self) -> R::Field {
        self.x()
    }

    fn y(&self) -> R::Field {
        self.y()
    }

    fn z(&self) -> R::Field {
        self.z()
    }

    fn hx(&self) -> R {
        self.hx().clone()
    }

    fn hy(&self) -> R {
        self.hy().clone()
    }

    fn hz(&self) -> R {
        self.hz().clone()
    }

    fn hw(&self) -> R {
        self.hw().clone()
    }

    fn cartesian(&self, i: usize) -> R::Field {
        self.cartesian(i)
    }

    fn homogeneous(&self, i: usize) -> R {
        self.homogeneous(i).clone()
    }

    fn dimension(&self) -> usize {
        self.dimension()
    }

    fn cartesian_iter(&self) -> CartesianIter<Vector3<R>> {
        self.cartesian_iter()
    }

    fn transform(&self, t: &Transform3<R>) -> Point3<R> {
        self.transform(t)
    }
}
