//! The ring of integers Z.
//!
//! This is the canonical Euclidean domain: every finitely generated
//! abelian group is a finitely presented `Z`-module. The type wraps
//! `dashu::IBig` so coefficient growth during row reduction never
//! overflows.

use dashu::base::{Abs, Gcd, Signed as DashuSigned};
use dashu::integer::IBig;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::traits::{CommutativeRing, EuclideanDomain, IntegralDomain, OrderedRing, Ring};

/// An arbitrary precision integer with the algebraic trait stack.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z(IBig);

impl Z {
    /// Creates a new integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the inner `dashu::IBig`.
    #[must_use]
    pub fn into_inner(self) -> IBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        DashuSigned::is_negative(&self.0)
    }
}

impl Ring for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl CommutativeRing for Z {}
impl IntegralDomain for Z {}

impl EuclideanDomain for Z {
    /// Euclidean division with a non-negative remainder.
    ///
    /// `a = b*q + r` with `0 <= r < |b|`, which is the convention that
    /// makes the canonical triangular form unique.
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        let mut q = &self.0 / &other.0;
        let mut r = &self.0 - &q * &other.0;
        if DashuSigned::is_negative(&r) {
            if DashuSigned::is_positive(&other.0) {
                q -= IBig::ONE;
                r += &other.0;
            } else {
                q += IBig::ONE;
                r -= &other.0;
            }
        }
        (Self(q), Self(r))
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            return Self::zero();
        }
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let mut old_r = self.clone();
        let mut r = other.clone();
        let mut old_s = Self::one();
        let mut s = Self::zero();
        let mut old_t = Self::zero();
        let mut t = Self::one();

        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r);
            old_r = r;
            r = rem;

            let new_s = old_s.clone() - q.clone() * s.clone();
            old_s = s;
            s = new_s;

            let new_t = old_t.clone() - q * t.clone();
            old_t = t;
            t = new_t;
        }

        // Normalize so the reported gcd is non-negative.
        if old_r.is_negative() {
            (-old_r, -old_s, -old_t)
        } else {
            (old_r, old_s, old_t)
        }
    }

    fn is_unit(&self) -> bool {
        self.0 == IBig::ONE || self.0 == IBig::NEG_ONE
    }

    fn canonical_unit(&self) -> Self {
        if self.is_negative() {
            Self::new(-1)
        } else {
            Self::one()
        }
    }
}

impl OrderedRing for Z {
    fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    fn signum(&self) -> i8 {
        if self.0 == IBig::ZERO {
            0
        } else if DashuSigned::is_positive(&self.0) {
            1
        } else {
            -1
        }
    }
}

impl num_traits::Zero for Z {
    fn zero() -> Self {
        <Self as Ring>::zero()
    }

    fn is_zero(&self) -> bool {
        <Self as Ring>::is_zero(self)
    }
}

impl num_traits::One for Z {
    fn one() -> Self {
        <Self as Ring>::one()
    }

    fn is_one(&self) -> bool {
        <Self as Ring>::is_one(self)
    }
}

impl Add for Z {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Z {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Z {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Neg for Z {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<IBig> for Z {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z({})", self.0)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_laws() {
        let a = Z::new(10);
        let b = Z::new(3);

        assert!(<Z as Ring>::zero().is_zero());
        assert!(<Z as Ring>::one().is_one());

        assert_eq!((a.clone() + b.clone()).to_i64(), Some(13));
        assert_eq!((a * b).to_i64(), Some(30));
    }

    #[test]
    fn test_num_traits_agrees_with_ring() {
        // Z satisfies both trait stacks; the constants must match even
        // with both in scope.
        use num_traits::{One, Zero};

        assert_eq!(<Z as Zero>::zero(), <Z as Ring>::zero());
        assert_eq!(<Z as One>::one(), <Z as Ring>::one());
        assert!(Zero::is_zero(&<Z as Ring>::zero()));
        assert!(One::is_one(&<Z as Ring>::one()));
    }

    #[test]
    fn test_euclidean_div_rem() {
        // Remainder is always non-negative, whatever the signs.
        for (a, b, q, r) in [
            (17i64, 5i64, 3i64, 2i64),
            (-17, 5, -4, 3),
            (17, -5, -3, 2),
            (-17, -5, 4, 3),
        ] {
            let (qq, rr) = Z::new(a).div_rem(&Z::new(b));
            assert_eq!(qq, Z::new(q), "quotient of {a} by {b}");
            assert_eq!(rr, Z::new(r), "remainder of {a} by {b}");
        }
    }

    #[test]
    fn test_extended_gcd() {
        let a = Z::new(48);
        let b = Z::new(18);

        let (g, x, y) = a.extended_gcd(&b);
        assert_eq!(g, Z::new(6));
        assert_eq!(a * x + b * y, Z::new(6));
    }

    #[test]
    fn test_units() {
        assert!(Z::new(1).is_unit());
        assert!(Z::new(-1).is_unit());
        assert!(!Z::new(2).is_unit());
        assert!(!Z::new(0).is_unit());

        assert_eq!(Z::new(-7).canonical_unit(), Z::new(-1));
        assert_eq!(Z::new(7).canonical_unit(), Z::new(1));
    }
}
