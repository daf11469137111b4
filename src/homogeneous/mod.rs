//! Kernel with homogeneous coordinates over a ring.
//!
//! Points store `(hx, .., hw)` tuples exactly as constructed. Ring reads
//! are references into the stored tuple; Cartesian reads divide in the
//! quotient field on every call, and equality cross multiplies instead of
//! dividing. Over an exact ring such as `i64` nothing ever rounds.

mod direction;
mod point2;
mod point3;
mod transform;
mod vector;

pub use direction::{Direction2, Direction3};
pub use point2::Point2;
pub use point3::Point3;
pub use transform::Transform3;
pub use vector::{Vector2, Vector3};

use std::marker::PhantomData;

use crate::kernel::Kernel;
use crate::number::RingNumber;

/// Kernel binding with homogeneous coordinate storage.
///
/// `R` is the coordinate ring; Cartesian reads land in its quotient field
/// [`RingNumber::Field`]. `Homogeneous<i64>` gives exact rational points
/// with `Ratio<i64>` reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Homogeneous<R> {
    _ring: PhantomData<R>,
}

impl<R: RingNumber> Kernel for Homogeneous<R> {
    type FT = R::Field;
    type RT = R;
    type Point2 = Point2<R>;
    type Point3 = Point3<R>;
    type Vector2 = Vector2<R>;
    type Vector3 = Vector3<R>;
    type Direction2 = Direction2<R>;
    type Direction3 = Direction3<R>;
    type Transform3 = Transform3<R>;
}
