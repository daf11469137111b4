use crate::number::FieldNumber;

/// A direction in the plane: a vector with the magnitude forgotten.
///
/// Components are kept exactly as handed in; nothing is normalized, so
/// exact number types stay exact. Comparing directions is left to
/// predicate code, which must treat scaled component tuples as the same
/// ray.
#[derive(Debug, Clone)]
pub struct Direction2<F: FieldNumber> {
    dx: F,
    dy: F,
}

impl<F: FieldNumber> Direction2<F> {
    /// Creates a direction from vector components.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if both components are zero.
    #[must_use]
    pub fn new(dx: F, dy: F) -> Self {
        debug_assert!(
            !(dx.is_zero() && dy.is_zero()),
            "cannot take the direction of a zero vector"
        );
        Self { dx, dy }
    }

    #[must_use]
    pub fn dx(&self) -> &F {
        &self.dx
    }

    #[must_use]
    pub fn dy(&self) -> &F {
        &self.dy
    }
}

/// A direction in space. See [`Direction2`].
#[derive(Debug, Clone)]
pub struct Direction3<F: FieldNumber> {
    dx: F,
    dy: F,
    dz: F,
}

impl<F: FieldNumber> Direction3<F> {
    /// Creates a direction from vector components.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if all components are zero.
    #[must_use]
    pub fn new(dx: F, dy: F, dz: F) -> Self {
        debug_assert!(
            !(dx.is_zero() && dy.is_zero() && dz.is_zero()),
            "cannot take the direction of a zero vector"
        );
        Self { dx, dy, dz }
    }

    #[must_use]
    pub fn dx(&self) -> &F {
        &self.dx
    }

    #[must_use]
    pub fn dy(&self) -> &F {
        &self.dy
    }

    #[must_use]
    pub fn dz(&self) -> &F {
        &self.dz
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn keeps_components_as_given() {
        let d = Direction2::new(3.0, -4.0);
        assert_relative_eq!(*d.dx(), 3.0);
        assert_relative_eq!(*d.dy(), -4.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "zero vector")]
    fn rejects_the_zero_direction() {
        let _ = Direction3::new(0.0, 0.0, 0.0);
    }
}
