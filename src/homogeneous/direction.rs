use crate::number::RingNumber;

/// A direction in the plane, stored as raw ring components.
///
/// The weight of the point or vector it came from is dropped, not divided
/// out, so the components are exact. Comparing directions is left to
/// predicate code, which must treat scaled component pairs as the same
/// ray.
#[derive(Debug, Clone)]
pub struct Direction2<R: RingNumber> {
    dx: R,
    dy: R,
}

impl<R: RingNumber> Direction2<R> {
    /// Creates a direction from homogeneous direction components.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if both components are zero.
    #[must_use]
    pub fn new(dx: R, dy: R) -> Self {
        debug_assert!(
            !(dx.is_zero() && dy.is_zero()),
            "cannot take the direction of a zero vector"
        );
        Self { dx, dy }
    }

    #[must_use]
    pub fn dx(&self) -> &R {
        &self.dx
    }

    #[must_use]
    pub fn dy(&self) -> &R {
        &self.dy
    }
}

/// A direction in space, stored as raw ring components. See
/// [`Direction2`].
#[derive(Debug, Clone)]
pub struct Direction3<R: RingNumber> {
    dx: R,
    dy: R,
    dz: R,
}

impl<R: RingNumber> Direction3<R> {
    /// Creates a direction from homogeneous direction components.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if all components are zero.
    #[must_use]
    pub fn new(dx: R, dy: R, dz: R) -> Self {
        debug_assert!(
            !(dx.is_zero() && dy.is_zero() && dz.is_zero()),
            "cannot take the direction of a zero vector"
        );
        Self { dx, dy, dz }
    }

    #[must_use]
    pub fn dx(&self) -> &R {
        &self.dx
    }

    #[must_use]
    pub fn dy(&self) -> &R {
        &self.dy
    }

    #[must_use]
    pub fn dz(&self) -> &R {
        &self.dz
    }
}
