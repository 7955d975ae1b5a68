use std::fmt;
use std::ops::{Div, Neg, Sub};

/// A 3-component cartesian vector. Every operation returns a new value;
/// the components carry no identity beyond their numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub i: f64,
    pub j: f64,
    pub k: f64,
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.i, self.j, self.k)
    }
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        i: 0.0,
        j: 0.0,
        k: 0.0,
    };

    pub fn new(i: f64, j: f64, k: f64) -> Self {
        Self { i, j, k }
    }

    /// Right-handed cross product.
    pub fn cross(&self, b: Vec3) -> Vec3 {
        Vec3::new(
            self.j * b.k - self.k * b.j,
            self.k * b.i - self.i * b.k,
            self.i * b.j - self.j * b.i,
        )
    }

    /// Scalar dot product.
    pub fn dot(&self, b: Vec3) -> f64 {
        self.i * b.i + self.j * b.j + self.k * b.k
    }

    /// Euclidean norm.
    pub fn magnitude(&self) -> f64 {
        (self.i * self.i + self.j * self.j + self.k * self.k).sqrt()
    }

    /// Unit vector in the same direction. The zero vector has no direction
    /// and is returned unchanged rather than dividing by zero; callers that
    /// need a valid direction check the magnitude first.
    pub fn unit(&self) -> Vec3 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(self.i / magnitude, self.j / magnitude, self.k / magnitude)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.i, -self.j, -self.k)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, b: Vec3) -> Vec3 {
        Vec3::new(self.i - b.i, self.j - b.j, self.k - b.k)
    }
}

/// Component-wise division, used to apply per-axis scale factors.
impl Div for Vec3 {
    type Output = Vec3;

    fn div(self, b: Vec3) -> Vec3 {
        Vec3::new(self.i / b.i, self.j / b.j, self.k / b.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product_basis() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
    }

    #[test]
    fn test_cross_anti_commutative() {
        let a = Vec3::new(1.5, -2.0, 0.5);
        let b = Vec3::new(-0.25, 3.0, 7.0);

        assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn test_dot_commutative() {
        let a = Vec3::new(1.5, -2.0, 0.5);
        let b = Vec3::new(-0.25, 3.0, 7.0);

        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), 1.5 * -0.25 + -2.0 * 3.0 + 0.5 * 7.0);
    }

    #[test]
    fn test_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(Vec3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_unit_has_magnitude_one() {
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert!((v.unit().magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unit_of_zero_is_zero() {
        assert_eq!(Vec3::ZERO.unit(), Vec3::ZERO);
    }

    #[test]
    fn test_negation_and_subtraction() {
        let a = Vec3::new(1.0, -2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);

        assert_eq!(-a, Vec3::new(-1.0, 2.0, -3.0));
        assert_eq!(a - b, Vec3::new(0.5, -2.5, 2.5));
    }

    #[test]
    fn test_component_wise_division() {
        let a = Vec3::new(10.0, 20.0, 30.0);
        let s = Vec3::new(2.0, 4.0, 10.0);

        assert_eq!(a / s, Vec3::new(5.0, 5.0, 3.0));
    }
}
