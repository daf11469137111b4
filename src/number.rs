//! Number-type bounds behind the kernel parameters.
//!
//! Kernels are generic over two scalar roles: a field type for Cartesian
//! coordinates and a ring type for homogeneous coordinates. Both are thin
//! trait aliases over the `num-traits` vocabulary so that plain floats,
//! integers, and `num_rational::Ratio` all plug in without adapters.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_rational::Ratio;
use num_traits::{Num, NumAssignOps, One, Zero};

/// Field arithmetic: the full `+`, `-`, `*`, `/` set with identities.
///
/// Used for Cartesian coordinates and for the Cartesian reads of
/// homogeneous coordinates. Implemented automatically for any conforming
/// type (`f32`, `f64`, `Ratio<i32>`, `Ratio<i64>`, ...).
pub trait FieldNumber:
    Num + NumAssignOps + Neg<Output = Self> + Clone + Debug + 'static
{
}

impl<T> FieldNumber for T where
    T: Num + NumAssignOps + Neg<Output = T> + Clone + Debug + 'static
{
}

/// Ring arithmetic: `+`, `-`, `*` with identities, but no division.
///
/// Used for raw homogeneous coordinates. Each ring names the quotient
/// field its ratios live in ([`RingNumber::Field`]) and can split a field
/// value back into a numerator/denominator pair, which is how homogeneous
/// points are built exactly from field-typed coordinates.
pub trait RingNumber:
    Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Zero
    + One
    + PartialEq
    + Clone
    + Debug
    + 'static
{
    /// The field obtained by taking ratios of this ring.
    ///
    /// Every ring value embeds into it via `From`.
    type Field: FieldNumber + From<Self>;

    /// Returns the ring-typed numerator of a field value.
    fn numerator(f: &Self::Field) -> Self;

    /// Returns the ring-typed denominator of a field value.
    ///
    /// Never zero for a well-formed field value.
    fn denominator(f: &Self::Field) -> Self;
}

impl RingNumber for i32 {
    type Field = Ratio<i32>;

    fn numerator(f: &Ratio<i32>) -> i32 {
        *f.numer()
    }

    fn denominator(f: &Ratio<i32>) -> i32 {
        *f.denom()
    }
}

impl RingNumber for i64 {
    type Field = Ratio<i64>;

    fn numerator(f: &Ratio<i64>) -> i64 {
        *f.numer()
    }

    fn denominator(f: &Ratio<i64>) -> i64 {
        *f.denom()
    }
}

// Floats form their own quotient field; the decomposition is trivial.

impl RingNumber for f32 {
    type Field = f32;

    fn numerator(f: &f32) -> f32 {
        *f
    }

    fn denominator(_f: &f32) -> f32 {
        1.0
    }
}

impl RingNumber for f64 {
    type Field = f64;

    fn numerator(f: &f64) -> f64 {
        *f
    }

    fn denominator(_f: &f64) -> f64 {
        1.0
    }
}

// A ratio is a ring over itself, so exact rationals can also serve as the
// field of a Cartesian kernel.

impl RingNumber for Ratio<i32> {
    type Field = Ratio<i32>;

    fn numerator(f: &Ratio<i32>) -> Ratio<i32> {
        f.clone()
    }

    fn denominator(_f: &Ratio<i32>) -> Ratio<i32> {
        Ratio::one()
    }
}

impl RingNumber for Ratio<i64> {
    type Field = Ratio<i64>;

    fn numerator(f: &Ratio<i64>) -> Ratio<i64> {
        f.clone()
    }

    fn denominator(_f: &Ratio<i64>) -> Ratio<i64> {
        Ratio::one()
    }
}
