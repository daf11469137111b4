use std::ops::Index;

use crate::handle::{CartesianIter, Coordinates, Handle};
use crate::kernel::{Kernel, Origin, Point2Ops};
use crate::number::{FieldNumber, RingNumber};

use super::vector::Vector2;

/// A 2D point whose representation stores Cartesian coordinates.
///
/// The representation sits behind a [`Handle`]: copying the point bumps a
/// reference count, and all copies read the same stored coordinates.
#[derive(Debug, Clone)]
pub struct Point2<F: FieldNumber> {
    base: Handle<Vector2<F>>,
}

impl<F: FieldNumber> Point2<F> {
    /// Creates a point from Cartesian coordinates.
    #[must_use]
    pub fn new(x: F, y: F) -> Self {
        Self {
            base: Handle::new(Vector2::new(x, y)),
        }
    }

    /// Creates a point from homogeneous coordinates.
    ///
    /// The weight is accepted for signature symmetry with homogeneous
    /// points and ignored; a Cartesian point always carries an implicit
    /// unit weight.
    #[must_use]
    pub fn from_homogeneous(x: F, y: F, _w: F) -> Self {
        Self::new(x, y)
    }

    #[must_use]
    pub fn x(&self) -> &F {
        self.base.get().x()
    }

    #[must_use]
    pub fn y(&self) -> &F {
        self.base.get().y()
    }

    /// Homogeneous x coordinate; aliases [`Point2::x`].
    #[must_use]
    pub fn hx(&self) -> &F {
        self.x()
    }

    /// Homogeneous y coordinate; aliases [`Point2::y`].
    #[must_use]
    pub fn hy(&self) -> &F {
        self.y()
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
    /// Panics if `i >= 2`.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> &F {
        self.base.get().cartesian(i)
    }

    /// Returns homogeneous coordinate `i`; index 2 is the implicit unit
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> F {
        self.base.get().homogeneous(i)
    }

    /// Number of Cartesian coordinates.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.base.get().dimension()
    }

    /// Iterator over both Cartesian coordinates.
    ///
    /// The iterator shares the point's representation and stays usable if
    /// the point is dropped first.
    #[must_use]
    pub fn cartesian_iter(&self) -> CartesianIter<Vector2<F>> {
        CartesianIter::new(self.base.clone())
    }
}

impl<F: FieldNumber> From<Origin> for Point2<F> {
    fn from(_: Origin) -> Self {
        Self {
            base: Handle::new(Vector2::zero()),
        }
    }
}

impl<F: FieldNumber> Default for Point2<F> {
    fn default() -> Self {
        Self::from(Origin)
    }
}

// Aliased handles short-circuit; otherwise compare stored coordinates.
impl<F: FieldNumber> PartialEq for Point2<F> {
    fn eq(&self, other: &Self) -> bool {
        Handle::ptr_eq(&self.base, &other.base) || self.base.get() == other.base.get()
    }
}

impl<F: FieldNumber> Index<usize> for Point2<F> {
    type Output = F;

    fn index(&self, i: usize) -> &F {
        self.cartesian(i)
    }
}

impl<F, K> Point2Ops<K> for Point2<F>
where
    F: FieldNumber + RingNumber<Field = F>,
    K: Kernel<FT = F, RT = F, Point2 = Point2<F>, Vector2 = Vector2<F>>,
{
    fn x(&self) -> F {
        self.x().clone()
    }

    fn y(&self) -> F {
        self.y().clone()
    }

    fn hx(&self) -> F {
        self.x().clone()
    }

    fn hy(&self) -> F {
        self.y().clone()
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

    fn cartesian_iter(&self) -> CartesianIter<Vector2<F>> {
        self.cartesian_iter()
    }
}
