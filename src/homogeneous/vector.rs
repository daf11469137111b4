use crate::handle::Coordinates;
use crate::number::RingNumber;

/// Coordinate representation shared by [`Point2`](super::Point2) values:
/// a homogeneous triple `(hx, hy, hw)` over the ring.
///
/// The triple is stored exactly as constructed. Cartesian reads divide on
/// every call; nothing is cached or normalized, so the weight keeps the
/// magnitude and sign construction gave it.
#[derive(Debug, Clone)]
pub struct Vector2<R: RingNumber> {
    hx: R,
    hy: R,
    hw: R,
}

impl<R: RingNumber> Vector2<R> {
    /// Creates a vector from an explicit homogeneous triple.
    ///
    /// A zero weight is allowed and denotes an ideal element; Cartesian
    /// reads then have nothing to return.
    #[must_use]
    pub fn new(hx: R, hy: R, hw: R) -> Self {
        Self { hx, hy, hw }
    }

    /// Builds the triple for a Cartesian position given over the field.
    ///
    /// Each coordinate splits into numerator and denominator, and cross
    /// multiplying clears both denominators. The result is exact, and
    /// integral input comes out with weight one.
    #[must_use]
    pub fn from_cartesian(x: &R::Field, y: &R::Field) -> Self {
        let (xn, xd) = (R::numerator(x), R::denominator(x));
        let (yn, yd) = (R::numerator(y), R::denominator(y));
        Self::new(xn * yd.clone(), yn * xd.clone(), xd * yd)
    }

    /// The origin triple `(0, 0, 1)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(R::zero(), R::zero(), R::one())
    }

    #[must_use]
    pub fn hx(&self) -> &R {
        &self.hx
    }

    #[must_use]
    pub fn hy(&self) -> &R {
        &self.hy
    }

    #[must_use]
    pub fn hw(&self) -> &R {
        &self.hw
    }

    /// Cartesian x coordinate, computed as `hx / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the weight is zero.
    #[must_use]
    pub fn x(&self) -> R::Field {
        self.divide(&self.hx)
    }

    /// Cartesian y coordinate, computed as `hy / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the weight is zero.
    #[must_use]
    pub fn y(&self) -> R::Field {
        self.divide(&self.hy)
    }

    /// Returns Cartesian coordinate `i`, dividing on the spot.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 2`, and in debug builds if the weight is zero.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> R::Field {
        match i {
            0 => self.x(),
            1 => self.y(),
            _ => panic!("cartesian index {i} out of range for dimension 2"),
        }
    }

    /// Returns a reference to homogeneous coordinate `i`; index 2 is the
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 2`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> &R {
        match i {
            0 => &self.hx,
            1 => &self.hy,
            2 => &self.hw,
            _ => panic!("homogeneous index {i} out of range for dimension 2"),
        }
    }

    fn divide(&self, coord: &R) -> R::Field {
        debug_assert!(!self.hw.is_zero(), "Cartesian read of an ideal element");
        R::Field::from(coord.clone()) / R::Field::from(self.hw.clone())
    }
}

impl<R: RingNumber> Coordinates for Vector2<R> {
    type FT = R::Field;

    fn dimension(&self) -> usize {
        2
    }

    fn coordinate(&self, i: usize) -> R::Field {
        self.cartesian(i)
    }
}

// Two triples denote the same position when their coordinate ratios
// agree; cross multiplying avoids any division.
impl<R: RingNumber> PartialEq for Vector2<R> {
    fn eq(&self, other: &Self) -> bool {
        self.hx.clone() * other.hw.clone() == other.hx.clone() * self.hw.clone()
            && self.hy.clone() * other.hw.clone() == other.hy.clone() * self.hw.clone()
    }
}

/// Coordinate representation shared by [`Point3`](super::Point3) values:
/// a homogeneous quadruple `(hx, hy, hz, hw)` over the ring.
///
/// See [`Vector2`] for the storage and division rules; they are the same
/// one coordinate up.
#[derive(Debug, Clone)]
pub struct Vector3<R: RingNumber> {
    hx: R,
    hy: R,
    hz: R,
    hw: R,
}

impl<R: RingNumber> Vector3<R> {
    /// Creates a vector from an explicit homogeneous quadruple.
    ///
    /// A zero weight is allowed and denotes an ideal element.
    #[must_use]
    pub fn new(hx: R, hy: R, hz: R, hw: R) -> Self {
        Self { hx, hy, hz, hw }
    }

    /// Builds the quadruple for a Cartesian position given over the field.
    #[must_use]
    pub fn from_cartesian(x: &R::Field, y: &R::Field, z: &R::Field) -> Self {
        let (xn, xd) = (R::numerator(x), R::denominator(x));
        let (yn, yd) = (R::numerator(y), R::denominator(y));
        let (zn, zd) = (R::numerator(z), R::denominator(z));
        Self::new(
            xn * yd.clone() * zd.clone(),
            yn * xd.clone() * zd.clone(),
            zn * xd.clone() * yd.clone(),
            xd * yd * zd,
        )
    }

    /// The origin quadruple `(0, 0, 0, 1)`.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(R::zero(), R::zero(), R::zero(), R::one())
    }

    #[must_use]
    pub fn hx(&self) -> &R {
        &self.hx
    }

    #[must_use]
    pub fn hy(&self) -> &R {
        &self.hy
    }

    #[must_use]
    pub fn hz(&self) -> &R {
        &self.hz
    }

    #[must_use]
    pub fn hw(&self) -> &R {
        &self.hw
    }

    /// Cartesian x coordinate, computed as `hx / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the weight is zero.
    #[must_use]
    pub fn x(&self) -> R::Field {
        self.divide(&self.hx)
    }

    /// Cartesian y coordinate, computed as `hy / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the weight is zero.
    #[must_use]
    pub fn y(&self) -> R::Field {
        self.divide(&self.hy)
    }

    /// Cartesian z coordinate, computed as `hz / hw` on every call.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the weight is zero.
    #[must_use]
    pub fn z(&self) -> R::Field {
        self.divide(&self.hz)
    }

    /// Returns Cartesian coordinate `i`, dividing on the spot.
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`, and in debug builds if the weight is zero.
    #[must_use]
    pub fn cartesian(&self, i: usize) -> R::Field {
        match i {
            0 => self.x(),
            1 => self.y(),
            2 => self.z(),
            _ => panic!("cartesian index {i} out of range for dimension 3"),
        }
    }

    /// Returns a reference to homogeneous coordinate `i`; index 3 is the
    /// weight.
    ///
    /// # Panics
    ///
    /// Panics if `i > 3`.
    #[must_use]
    pub fn homogeneous(&self, i: usize) -> &R {
        match i {
            0 => &self.hx,
            1 => &self.hy,
            2 => &self.hz,
            3 => &self.hw,
            _ => panic!("homogeneous index {i} out of range for dimension 3"),
        }
    }

    fn divide(&self, coord: &R) -> R::Field {
        debug_assert!(!self.hw.is_zero(), "Cartesian read of an ideal element");
        R::Field::from(coord.clone()) / R::Field::from(self.hw.clone())
    }
}

impl<R: RingNumber> Coordinates for Vector3<R> {
    type FT = R::Field;

    fn dimension(&self) -> usize {
        3
    }

    fn coordinate(&self, i: usize) -> R::Field {
        self.cartesian(i)
    }
}

impl<R: RingNumber> PartialEq for Vector3<R> {
    fn eq(&self, other: &Self) -> bool {
        self.hx.clone() * other.hw.clone() == other.hx.clone() * self.hw.clone()
            && self.hy.clone() * other.hw.clone() == other.hy.clone() * self.hw.clone()
            && self.hz.clone() * other.hw.clone() == other.hz.clone() * self.hw.clone()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_rational::Ratio;

    use super::*;

    #[test]
    fn ratio_equality_identifies_scaled_triples() {
        let a = Vector2::new(2, 4, 2);
        let b = Vector2::new(1, 2, 1);
        let c = Vector2::new(1, 3, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn opposite_sign_quadruples_are_the_same_position() {
        assert_eq!(Vector3::new(1, 2, 3, 1), Vector3::new(-1, -2, -3, -1));
    }

    #[test]
    fn cartesian_reads_divide_by_the_weight() {
        let v = Vector3::new(2_i64, 4, 6, 4);
        assert_eq!(v.x(), Ratio::new(1, 2));
        assert_eq!(v.y(), Ratio::new(1, 1));
        assert_eq!(v.cartesian(2), Ratio::new(3, 2));
    }

    #[test]
    fn from_cartesian_clears_denominators_exactly() {
        let v = Vector2::<i64>::from_cartesian(&Ratio::new(2, 3), &Ratio::new(1, 2));
        assert_eq!(*v.hx(), 4);
        assert_eq!(*v.hy(), 3);
        assert_eq!(*v.hw(), 6);
        assert_eq!(v.x(), Ratio::new(2, 3));
        assert_eq!(v.y(), Ratio::new(1, 2));
    }

    #[test]
    fn integral_cartesian_input_gets_weight_one() {
        let v = Vector3::<i64>::from_cartesian(&Ratio::from(5), &Ratio::from(-2), &Ratio::from(7));
        assert_eq!(*v.hx(), 5);
        assert_eq!(*v.hy(), -2);
        assert_eq!(*v.hz(), 7);
        assert_eq!(*v.hw(), 1);
    }

    #[test]
    fn float_rings_decompose_trivially() {
        let v = Vector2::<f64>::from_cartesian(&0.5, &2.0);
        assert_relative_eq!(*v.hx(), 0.5);
        assert_relative_eq!(*v.hw(), 1.0);
    }

    #[test]
    fn zero_weight_triples_are_representable() {
        let v = Vector2::new(3, 4, 0);
        assert_eq!(*v.hw(), 0);
        assert_eq!(*v.homogeneous(2), 0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "ideal")]
    fn cartesian_read_of_zero_weight_panics_in_debug() {
        let v = Vector2::new(1, 0, 0);
        let _ = v.x();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn homogeneous_index_out_of_range_panics() {
        let v = Vector3::new(0, 0, 0, 1);
        let _ = v.homogeneous(4);
    }
}
