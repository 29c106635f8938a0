//! Property-based tests for the integer Euclidean domain.

use proptest::prelude::*;

use crate::traits::{EuclideanDomain, OrderedRing, Ring};
use crate::Z;

// Strategy for generating small integers
fn small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

// Strategy for generating non-zero integers
fn non_zero_int() -> impl Strategy<Value = i64> {
    prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

proptest! {
    // Ring axioms

    #[test]
    fn add_commutative(a in small_int(), b in small_int()) {
        let a = Z::new(a);
        let b = Z::new(b);
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn mul_distributes(a in small_int(), b in small_int(), c in small_int()) {
        let a = Z::new(a);
        let b = Z::new(b);
        let c = Z::new(c);
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b + a * c
        );
    }

    #[test]
    fn neg_is_additive_inverse(a in small_int()) {
        let a = Z::new(a);
        prop_assert!((a.clone() + (-a)).is_zero());
    }

    // Euclidean domain contract

    #[test]
    fn div_rem_identity(a in small_int(), b in non_zero_int()) {
        let a = Z::new(a);
        let b = Z::new(b);
        let (q, r) = a.div_rem(&b);
        prop_assert_eq!(b.clone() * q + r.clone(), a);
        // Non-negative remainder strictly smaller than |b|
        prop_assert!(!r.is_negative());
        prop_assert!(r < b.abs());
    }

    #[test]
    fn gcd_divides_both(a in small_int(), b in non_zero_int()) {
        let a = Z::new(a);
        let b = Z::new(b);
        let g = a.gcd(&b);
        prop_assert!(a.rem(&g).is_zero());
        prop_assert!(b.rem(&g).is_zero());
    }

    #[test]
    fn extended_gcd_bezout(a in small_int(), b in small_int()) {
        let a = Z::new(a);
        let b = Z::new(b);
        let (g, x, y) = a.extended_gcd(&b);
        prop_assert_eq!(a.clone() * x + b.clone() * y, g.clone());
        prop_assert_eq!(g, a.gcd(&b));
    }

    #[test]
    fn canonical_associate_is_non_negative(a in non_zero_int()) {
        let a = Z::new(a);
        let u = a.canonical_unit();
        prop_assert!(u.is_unit());
        let assoc = a.div(&u);
        prop_assert!(!assoc.is_negative());
        prop_assert_eq!(assoc * u, a);
    }
}
