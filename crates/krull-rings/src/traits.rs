//! Algebraic structure traits.
//!
//! This module defines the core algebraic traits that coefficient domains
//! of finitely presented modules must satisfy. Relation matrices are
//! reduced with gcd transformations, so the central contract here is
//! [`EuclideanDomain`]: division with remainder, gcd, and unit tests.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;

    /// Computes self^n for non-negative n.
    fn pow(&self, n: u32) -> Self {
        if n == 0 {
            return Self::one();
        }

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base.clone();
            }
            base = base.clone() * base;
            exp >>= 1;
        }

        result
    }
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
///
/// If a * b = 0, then a = 0 or b = 0.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
///
/// The remainder convention must be deterministic: canonical triangular
/// forms are unique only when `rem` picks a fixed representative for each
/// residue class (over `Z`, the non-negative one).
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Computes the quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Computes the greatest common divisor.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a
    }

    /// Computes the least common multiple.
    fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        self.div(&g) * other.clone()
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns (gcd, x, y) such that gcd = self*x + other*y.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);

    /// Returns true if this element has a multiplicative inverse.
    fn is_unit(&self) -> bool;

    /// The unit `u` such that `self / u` is the canonical associate.
    ///
    /// Pivots of a reduced matrix are divided by their canonical unit so
    /// the form is unique; over `Z` this is the sign. The default is for
    /// domains where every element is already its canonical associate.
    fn canonical_unit(&self) -> Self {
        Self::one()
    }

    /// The multiplicative inverse of a unit, `None` for non-units.
    fn unit_inverse(&self) -> Option<Self> {
        if self.is_unit() {
            Some(Self::one().div(self))
        } else {
            None
        }
    }
}

/// Marker trait for ordered rings.
pub trait OrderedRing: Ring + Ord {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}
