use crate::handle::Coordinates;
use crate::number::FieldNumber;

use super::direction::{Direction2, Direction3};

/// Coordinate representation shared by [`Point2`](super::Point2) values.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector2<F: FieldNumber> {
    coords: [F; 2],
}

impl<F: FieldNumber> Vector2<F> {
    /// Creates a vector from its Cartesian components.
    #[must_use]
    pub fn new(x: F, y: F) -> Self {
        Self { coords: [x, y] }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero())
    }

    #[must_use]
    pub fn x(&self) -> &F {
        &self.coords[0]
    }

    #[must_use]
    pub fn y(&self) -> &F {
        &self.coords[1]
    }

    /// Returns a reference to Cartesian coordinate `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> &F {
        match i {
            0 | 1 => &self.coords[i],
            _ => panic!("cartesian index {i} out of range for dimension 2"),
        }
    }

    /// Returns homogeneous coordinate `i`; index 2 is the implicit unit
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> F {
        match i {
            0 | 1 => self.coords[i].clone(),
            2 => F::one(),
            _ => panic!("homogeneous index {i} out of range for dimension 2"),
        }
    }

    /// Direction of this vector, with the magnitude dropped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the vector is zero.
    #[must_use]
    pub fn direction(&self) -> Direction2<F> {
        Direction2::new(self.coords[0].clone(), self.coords[1].clone())
    }
}

impl<F: FieldNumber> Coordinates for Vector2<F> {
    type FT = F;

    fn dimension(&self) -> usize {
        2
    }

    fn coordinate(&self, i: usize) -> F {
        self.cartesian(i).clone()
    }
}

/// Coordinate representation shared by [`Point3`](super::Point3) values.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector3<F: FieldNumber> {
    coords: [F; 3],
}

impl<F: FieldNumber> Vector3<F> {
    /// Creates a vector from its Cartesian components.
    #[must_use]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { coords: [x, y, z] }
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(F::zero(), F::zero(), F::zero())
    }

    #[must_use]
    pub fn x(&self) -> &F {
        &self.coords[0]
    }

    #[must_use]
    pub fn y(&self) -> &F {
        &self.coords[1]
    }

    #[must_use]
    pub fn z(&self) -> &F {
        &self.coords[2]
    }

    /// Returns a reference to Cartesian coordinate `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> &F {
        match i {
            0 | 1 | 2 => &self.coords[i],
            _ => panic!("cartesian index {i} out of range for dimension 3"),
        }
    }

    /// Returns homogeneous coordinate `i`; index 3 is the implicit unit
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> F {
        match i {
            0 | 1 | 2 => self.coords[i].clone(),
            3 => F::one(),
            _ => panic!("homogeneous index {i} out of range for dimension 3"),
        }
    }

    /// Direction of this vector, with the magnitude dropped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the vector is zero.
    #[must_use]
    pub fn direction(&self) -> Direction3<F> {
        Direction3::new(
            self.coords[0].clone(),
            self.coords[1].clone(),
            self.coords[2].clone(),
        )
    }
}

impl<F: FieldNumber> Coordinates for Vector3<F> {
    type FT = F;

    fn dimension(&self) -> usize {
        3
    }

    fn coordinate(&self, i: usize) -> F {
        self.cartesian(i).clone()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_rational::Ratio;
    use num_traits::One;

    use super::*;

    #[test]
    fn components_are_stored_as_given() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert_relative_eq!(*v.x(), 1.5);
        assert_relative_eq!(*v.cartesian(2), 0.25);
    }

    #[test]
    fn homogeneous_view_appends_a_unit_weight() {
        let v = Vector3::new(Ratio::new(1, 2), Ratio::from(3), Ratio::from(0));
        assert_eq!(v.homogeneous(0), Ratio::new(1, 2));
        assert_eq!(v.homogeneous(3), Ratio::one());

        let w = Vector2::new(Ratio::from(4), Ratio::from(5));
        assert_eq!(w.homogeneous(2), Ratio::one());
    }

    #[test]
    fn coordinate_trait_agrees_with_accessors() {
        let v = Vector2::new(Ratio::new(2, 3), Ratio::new(-1, 4));
        assert_eq!(v.dimension(), 2);
        assert_eq!(v.coordinate(1), Ratio::new(-1, 4));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn cartesian_index_out_of_range_panics() {
        let v = Vector2::new(0.0, 0.0);
        let _ = v.cartesian(2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn homogeneous_index_out_of_range_panics() {
        let v = Vector3::new(0.0, 0.0, 0.0);
        let _ = v.homogeneous(4);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "zero vector")]
    fn zero_vector_has_no_direction() {
        let _ = Vector3::<f64>::zero().direction();
    }
}
