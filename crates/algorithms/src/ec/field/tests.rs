use super::*;
use ecarith_params::{FieldParams, SECP224K1, SECP224R1, SECP256K1, SECP256R1, SECP384R1, SECP521R1};
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn prime_of(params: &ecarith_params::CurveParams) -> BigUint {
    match params.field {
        FieldParams::Prime { p } => BigUint::parse_bytes(p.as_bytes(), 16).unwrap(),
        FieldParams::Binary { .. } => panic!("{} is not a prime curve", params.name),
    }
}

fn sect163_field() -> Field {
    Field::binary(163, &[3, 6, 7]).unwrap()
}

fn sect233_field() -> Field {
    Field::binary(233, &[74]).unwrap()
}

/// Schoolbook polynomial product reduced by x^m + sum x^k + 1, bit by bit
fn reference_binary_mul(a: &BigUint, b: &BigUint, m: usize, ks: &[usize]) -> BigUint {
    let mut r = BigUint::zero();
    for i in 0..b.bits() {
        if b.bit(i) {
            r ^= a << i as usize;
        }
    }
    let mut f = BigUint::one() << m;
    for &k in ks {
        f |= BigUint::one() << k;
    }
    f |= BigUint::one();
    let mut deg = r.bits() as usize;
    while deg > m {
        deg -= 1;
        if r.bit(deg as u64) {
            r ^= &f << (deg - m);
        }
    }
    r
}

#[test]
fn test_prime_arithmetic_matches_bigint() {
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    for params in [&SECP224K1, &SECP224R1, &SECP256K1, &SECP256R1, &SECP384R1, &SECP521R1] {
        let p = prime_of(params);
        let field = Field::prime(&p).unwrap();
        for _ in 0..20 {
            let a = field.random_element(&mut rng);
            let b = field.random_element(&mut rng);
            let (x, y) = (a.to_biguint(), b.to_biguint());
            assert!(x < p && y < p);

            assert_eq!(a.add(&b).unwrap().to_biguint(), (&x + &y) % &p, "{}", params.name);
            assert_eq!(
                a.subtract(&b).unwrap().to_biguint(),
                (&x + &p - &y) % &p,
                "{}",
                params.name
            );
            assert_eq!(a.multiply(&b).unwrap().to_biguint(), (&x * &y) % &p, "{}", params.name);
            assert_eq!(a.square().to_biguint(), (&x * &x) % &p, "{}", params.name);
            assert_eq!(a.negate().to_biguint(), (&p - &x) % &p, "{}", params.name);
        }
    }
}

#[test]
fn test_reduction_strategy_selection() {
    let k1 = Field::prime(&prime_of(&SECP256K1)).unwrap();
    let r1 = Field::prime(&prime_of(&SECP256R1)).unwrap();
    let p521 = Field::prime(&prime_of(&SECP521R1)).unwrap();
    match (&k1, &r1, &p521) {
        (Field::Prime(k1), Field::Prime(r1), Field::Prime(p521)) => {
            assert!(k1.is_pseudo_mersenne());
            assert!(!r1.is_pseudo_mersenne());
            assert!(p521.is_pseudo_mersenne());
            assert!(p521.sqrt_is_direct_exponent());
        }
        _ => panic!("expected prime fields"),
    }
}

#[test]
fn test_extreme_products_reduce() {
    for params in [&SECP256K1, &SECP256R1, &SECP384R1, &SECP521R1] {
        let p = prime_of(params);
        let field = Field::prime(&p).unwrap();
        let max = field.from_biguint_checked(&(&p - 1u32)).unwrap();
        // (p-1)^2 = 1 mod p
        assert!(max.square().is_one(), "{}", params.name);
        assert!(max.add(&field.one()).unwrap().is_zero(), "{}", params.name);
    }
}

#[test]
fn test_wraparound_selects_and_equality() {
    for params in [&SECP224K1, &SECP256R1, &SECP521R1] {
        let p = prime_of(params);
        let field = Field::prime(&p).unwrap();
        let one = field.one();
        let max = field.from_biguint_checked(&(&p - 1u32)).unwrap();

        // borrow out of the top word selects the wrapped difference
        assert_eq!(field.zero().subtract(&one).unwrap(), max, "{}", params.name);
        // carry past p selects the reduced sum
        assert_eq!(
            max.add(&max).unwrap().to_biguint(),
            &p - 2u32,
            "{}",
            params.name
        );
        assert!(one.subtract(&one).unwrap().is_zero());
        assert!(!max.is_zero() && !max.is_one());

        let high = field.from_biguint_checked(&(BigUint::one() << (p.bits() - 2))).unwrap();
        assert_ne!(high, field.zero());
        assert_ne!(high, high.add(&one).unwrap());
        assert_eq!(high, field.from_biguint_checked(&high.to_biguint()).unwrap());
    }
}

#[test]
fn test_prime_inverse() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for params in [&SECP224R1, &SECP256R1, &SECP521R1] {
        let field = Field::prime(&prime_of(params)).unwrap();
        for _ in 0..10 {
            let a = field.random_element(&mut rng);
            if a.is_zero() {
                continue;
            }
            let inv = a.invert().unwrap();
            assert!(a.multiply(&inv).unwrap().is_one());
            assert_eq!(field.one().divide(&a).unwrap(), inv);
        }
        assert_eq!(
            field.zero().invert().unwrap_err(),
            Error::DivisionByZero { context: "invert" }
        );
        assert!(matches!(
            field.one().divide(&field.zero()),
            Err(Error::DivisionByZero { .. })
        ));
    }
}

#[test]
fn test_prime_sqrt_all_shapes() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    // 3 mod 4 (P-256, P-521), 5 mod 8 (secp224k1), 1 mod 8 (P-224)
    for params in [&SECP256R1, &SECP521R1, &SECP224K1, &SECP224R1] {
        let p = prime_of(params);
        let field = Field::prime(&p).unwrap();
        let legendre = (&p - 1u32) >> 1;
        let mut saw_non_residue = false;
        for _ in 0..32 {
            let a = field.random_element(&mut rng);
            let sq = a.square();
            let root = sq.sqrt().expect("square must have a root");
            assert_eq!(root.square(), sq, "{}", params.name);

            match a.sqrt() {
                Some(r) => assert_eq!(r.square(), a, "{}", params.name),
                None => {
                    saw_non_residue = true;
                    assert_eq!(a.to_biguint().modpow(&legendre, &p), &p - 1u32, "{}", params.name);
                }
            }
        }
        assert!(saw_non_residue, "{}", params.name);
        assert_eq!(field.zero().sqrt(), Some(field.zero()));
        assert_eq!(field.one().sqrt(), Some(field.one()));
    }
}

#[test]
fn test_from_integer_range() {
    let p = prime_of(&SECP256K1);
    let field = Field::prime(&p).unwrap();

    let top = BigInt::from(&p - 1u32);
    assert_eq!(field.from_integer(&top).unwrap().to_biguint(), &p - 1u32);
    assert!(matches!(
        field.from_integer(&BigInt::from(p.clone())),
        Err(Error::InvalidValue { .. })
    ));
    assert!(matches!(
        field.from_integer(&BigInt::from(-1)),
        Err(Error::InvalidValue { .. })
    ));

    let binary = sect163_field();
    let max = (BigUint::one() << 163usize) - 1u32;
    assert!(binary.from_biguint_checked(&max).is_ok());
    assert!(matches!(
        binary.from_biguint_checked(&(BigUint::one() << 163usize)),
        Err(Error::InvalidValue { .. })
    ));
}

#[test]
fn test_mixed_fields_rejected() {
    let f1 = Field::prime(&prime_of(&SECP256K1)).unwrap();
    let f2 = Field::prime(&prime_of(&SECP256R1)).unwrap();
    let a = f1.one();
    let b = f2.one();
    assert_eq!(a.add(&b), Err(Error::operand("add")));
    assert_eq!(a.multiply(&b), Err(Error::operand("multiply")));
    assert!(matches!(a.divide(&b), Err(Error::InvalidOperand { .. })));
    assert_ne!(a, b);

    // Equal but separately constructed fields are compatible
    let f1_again = Field::prime(&prime_of(&SECP256K1)).unwrap();
    assert!(a.add(&f1_again.one()).is_ok());
}

#[test]
fn test_field_construction_validation() {
    assert!(matches!(Field::prime(&BigUint::from(10u32)), Err(Error::Parameter { .. })));
    assert!(matches!(Field::prime(&BigUint::from(3u32)), Err(Error::Parameter { .. })));
    assert!(Field::prime(&(BigUint::one() << 700usize)).is_err());

    assert!(Field::binary(163, &[3, 6]).is_err());
    assert!(Field::binary(163, &[7, 6, 3]).is_err());
    assert!(Field::binary(163, &[120]).is_err());
    assert!(Field::binary(163, &[0]).is_err());
    assert!(Field::binary(283, &[5, 7, 12]).is_ok());
}

#[test]
fn test_binary_mul_matches_reference() {
    let mut rng = ChaCha20Rng::seed_from_u64(163);
    for (field, m, ks) in [
        (sect163_field(), 163usize, &[3usize, 6, 7][..]),
        (sect233_field(), 233, &[74][..]),
        (Field::binary(283, &[5, 7, 12]).unwrap(), 283, &[5, 7, 12][..]),
    ] {
        for _ in 0..10 {
            let a = field.random_element(&mut rng);
            let b = field.random_element(&mut rng);
            let expected = reference_binary_mul(&a.to_biguint(), &b.to_biguint(), m, ks);
            assert_eq!(a.multiply(&b).unwrap().to_biguint(), expected, "m = {}", m);
            let sq = reference_binary_mul(&a.to_biguint(), &a.to_biguint(), m, ks);
            assert_eq!(a.square().to_biguint(), sq, "m = {}", m);
            // characteristic two
            assert!(a.add(&a).unwrap().is_zero());
            assert_eq!(a.negate(), a);
        }
    }
}

#[test]
fn test_binary_inverse_and_sqrt() {
    let mut rng = ChaCha20Rng::seed_from_u64(233);
    for field in [sect163_field(), sect233_field()] {
        for _ in 0..10 {
            let a = field.random_element(&mut rng);
            let root = a.sqrt().expect("every binary element is a square");
            assert_eq!(root.square(), a);
            if !a.is_zero() {
                assert!(a.multiply(&a.invert().unwrap()).unwrap().is_one());
            }
        }
        assert!(field.zero().invert().is_err());
        assert!(field.one().invert().unwrap().is_one());
    }
}

#[test]
fn test_trace_and_quadratic_solutions() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let field = sect163_field();
    assert_eq!(field.one().trace().unwrap(), 1);
    assert_eq!(field.zero().trace().unwrap(), 0);

    let mut solved = 0;
    for _ in 0..20 {
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);
        let sum = a.add(&b).unwrap();
        assert_eq!(
            sum.trace().unwrap(),
            a.trace().unwrap() ^ b.trace().unwrap()
        );
        match a.solve_quadratic().unwrap() {
            Some(z) => {
                solved += 1;
                assert_eq!(z.square().add(&z).unwrap(), a);
            }
            None => assert_eq!(a.trace().unwrap(), 1),
        }
    }
    assert!(solved > 0);

    let even = Field::binary(194, &[87]).unwrap();
    assert!(matches!(
        even.one().half_trace(),
        Err(Error::NotImplemented { .. })
    ));
    let prime = Field::prime(&prime_of(&SECP256K1)).unwrap();
    assert!(prime.one().trace().is_err());
}

#[test]
fn test_byte_encoding() {
    let field = Field::prime(&prime_of(&SECP256K1)).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let a = field.random_element(&mut rng);
    let bytes = a.to_bytes();
    assert_eq!(bytes.len(), 32);
    assert_eq!(FieldElement::from_bytes(&field, &bytes).unwrap(), a);

    assert!(FieldElement::from_bytes(&field, &[0u8; 33]).is_err());
    assert!(FieldElement::from_bytes(&field, &[0xFF; 32]).is_err());
    assert!(FieldElement::from_bytes(&field, &[5]).unwrap() == field.from_integer(&BigInt::from(5)).unwrap());

    let binary = sect163_field();
    assert_eq!(binary.one().to_bytes().len(), 21);
}

#[test]
fn test_compound_products() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for field in [Field::prime(&prime_of(&SECP384R1)).unwrap(), sect233_field()] {
        let a = field.random_element(&mut rng);
        let b = field.random_element(&mut rng);
        let x = field.random_element(&mut rng);
        let y = field.random_element(&mut rng);
        let xy = x.multiply(&y).unwrap();
        let ab = a.multiply(&b).unwrap();
        assert_eq!(a.multiply_plus_product(&b, &x, &y).unwrap(), ab.add(&xy).unwrap());
        assert_eq!(a.multiply_minus_product(&b, &x, &y).unwrap(), ab.subtract(&xy).unwrap());
        assert_eq!(a.square_plus_product(&x, &y).unwrap(), a.square().add(&xy).unwrap());
        assert_eq!(a.square_pow(3), a.square().square().square());
        assert_eq!(a.add_one(), a.add(&field.one()).unwrap());
    }
}

#[test]
fn test_bit_helpers() {
    let field = Field::prime(&prime_of(&SECP256K1)).unwrap();
    let six = field.from_integer(&BigInt::from(6)).unwrap();
    assert_eq!(six.bit_length(), 3);
    assert!(!six.test_bit_zero());
    assert!(six.add_one().test_bit_zero());

    let mut z = six;
    z.zeroize();
    assert!(z.is_zero());
}
