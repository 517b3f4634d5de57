//! Property-based tests for prime and binary field arithmetic

use ecarith_algorithms::ec::{Field, FieldElement, FieldOps};
use ecarith_tests::curves::{B163, K283, P256, P384};
use num_bigint::BigUint;
use proptest::prelude::*;

/// Arbitrary bytes reduced into the field by dropping excess bits
fn element<'f>(field: &'f Field, bytes: &[u8]) -> FieldElement<'f> {
    let bits = field.bits();
    let v = BigUint::from_bytes_be(bytes) % (BigUint::from(1u8) << bits);
    match field.from_biguint_checked(&v) {
        Ok(e) => e,
        // Above p: fold back under the modulus
        Err(_) => field
            .from_biguint_checked(&(v % field.characteristic()))
            .unwrap(),
    }
}

fn fields() -> [&'static Field; 4] {
    [P256.field(), P384.field(), B163.field(), K283.field()]
}

proptest! {
    #[test]
    fn add_and_multiply_are_commutative(
        a in prop::collection::vec(any::<u8>(), 48),
        b in prop::collection::vec(any::<u8>(), 48)
    ) {
        for f in fields() {
            let (x, y) = (element(f, &a), element(f, &b));
            prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
            prop_assert_eq!(x.multiply(&y).unwrap(), y.multiply(&x).unwrap());
        }
    }

    #[test]
    fn multiplication_distributes_over_addition(
        a in prop::collection::vec(any::<u8>(), 48),
        b in prop::collection::vec(any::<u8>(), 48),
        c in prop::collection::vec(any::<u8>(), 48)
    ) {
        for f in fields() {
            let (x, y, z) = (element(f, &a), element(f, &b), element(f, &c));
            let lhs = x.multiply(&y.add(&z).unwrap()).unwrap();
            let rhs = x.multiply(&y).unwrap().add(&x.multiply(&z).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);

            // Fused helpers agree with the plain operations
            prop_assert_eq!(
                x.multiply_plus_product(&y, &z, &z).unwrap(),
                x.multiply(&y).unwrap().add(&z.square()).unwrap()
            );
            prop_assert_eq!(
                x.square_plus_product(&y, &z).unwrap(),
                x.square().add(&y.multiply(&z).unwrap()).unwrap()
            );
        }
    }

    #[test]
    fn subtraction_and_negation(
        a in prop::collection::vec(any::<u8>(), 48),
        b in prop::collection::vec(any::<u8>(), 48)
    ) {
        for f in fields() {
            let (x, y) = (element(f, &a), element(f, &b));
            prop_assert_eq!(x.subtract(&y).unwrap().add(&y).unwrap(), x);
            prop_assert!(x.add(&x.negate()).unwrap().is_zero());
            prop_assert_eq!(x.add_one().subtract(&f.one()).unwrap(), x);
        }
    }

    #[test]
    fn inversion_and_division(
        a in prop::collection::vec(any::<u8>(), 48),
        b in prop::collection::vec(any::<u8>(), 48)
    ) {
        for f in fields() {
            let (x, y) = (element(f, &a), element(f, &b));
            if x.is_zero() {
                prop_assert!(x.invert().is_err());
                continue;
            }
            prop_assert!(x.multiply(&x.invert().unwrap()).unwrap().is_one());
            prop_assert_eq!(y.divide(&x).unwrap().multiply(&x).unwrap(), y);
        }
    }

    #[test]
    fn square_roots_square_back(a in prop::collection::vec(any::<u8>(), 48)) {
        for f in fields() {
            let x = element(f, &a);
            let s = x.square();
            let r = s.sqrt().expect("squares have roots");
            prop_assert_eq!(r.square(), s);
            if let Some(r) = x.sqrt() {
                prop_assert_eq!(r.square(), x);
            }
            prop_assert_eq!(x.square_pow(3), x.square().square().square());
        }
    }

    #[test]
    fn binary_quadratic_solutions(a in prop::collection::vec(any::<u8>(), 48)) {
        for f in [B163.field(), K283.field()] {
            let x = element(f, &a);
            match x.solve_quadratic().unwrap() {
                Some(z) => {
                    prop_assert_eq!(x.trace().unwrap(), 0);
                    prop_assert_eq!(z.square().add(&z).unwrap(), x);
                }
                None => prop_assert_eq!(x.trace().unwrap(), 1),
            }
        }
    }

    #[test]
    fn byte_encoding_is_canonical(a in prop::collection::vec(any::<u8>(), 48)) {
        for f in fields() {
            let x = element(f, &a);
            let bytes = x.to_bytes();
            prop_assert_eq!(bytes.len(), f.byte_len());
            prop_assert_eq!(FieldElement::from_bytes(f, &bytes).unwrap(), x);
        }
    }
}

#[test]
fn binary_only_operations_are_rejected_on_prime_fields() {
    let x = P256.field().one();
    assert!(x.trace().is_err());
    assert!(x.half_trace().is_err());
    assert!(x.solve_quadratic().is_err());
}

#[test]
fn mixed_field_operands_are_rejected() {
    let x = P256.field().one();
    let y = P384.field().one();
    assert!(x.add(&y).is_err());
    assert!(x.multiply(&y).is_err());
    assert!(x.divide(&y).is_err());
}
