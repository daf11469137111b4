//! Kernel with directly stored Cartesian coordinates.
//!
//! Coordinate reads are plain field accesses and come back by reference.
//! The homogeneous view of these points is synthesized: the weight is an
//! implicit one and is never stored.

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
use crate::number::{FieldNumber, RingNumber};

/// Kernel binding with directly stored coordinates.
///
/// `F` serves as both the field and the ring type, so it must be a ring
/// that is its own quotient field; floats and `num_rational::Ratio`
/// qualify, bare integers do not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cartesian<F> {
    _field: PhantomData<F>,
}

impl<F> Kernel for Cartesian<F>
where
    F: FieldNumber + RingNumber<Field = F>,
{
    type FT = F;
    type RT = F;
    type Point2 = Point2<F>;
    type Point3 = Point3<F>;
    type Vector2 = Vector2<F>;
    type Vector3 = Vector3<F>;
    type Direction2 = Direction2<F>;
    type Direction3 = Direction3<F>;
    type Transform3 = Transform3<F>;
}
