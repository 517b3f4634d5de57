// Cross-crate behaviour: custom curves, shared tables, error conversion and
// the constant-time helpers the lookup tables are built on

use ecarith_algorithms::ec::{
    Curve, CurveBuilder, Field, LookupTable, Multiplier, MultiplierKind, PrecomputedPoint,
    ReferenceMultiplier, WTauNafMultiplier,
};
use ecarith_algorithms::{CoordinateSystem, Error, ResultExt};
use ecarith_internal::constant_time::{ct_index_mask, ct_words_are_zero, ct_words_eq, ct_xor_masked};
use ecarith_tests::curves::{K163, K256, K283, P256, P384};
use ecarith_tests::{affine_coords, hex_uint};
use num_bigint::{BigInt, BigUint};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn toy_curve(system: CoordinateSystem) -> Curve {
    // y^2 = x^3 + 2x + 3 over GF(97)
    let field = Field::prime(&BigUint::from(97u32)).unwrap();
    CurveBuilder::new(field, BigUint::from(2u32), BigUint::from(3u32))
        .name("toy97")
        .coordinate_system(system)
        .build()
        .unwrap()
}

#[test]
fn test_custom_prime_curve_doubling() {
    for system in [
        CoordinateSystem::Affine,
        CoordinateSystem::Homogeneous,
        CoordinateSystem::Jacobian,
    ] {
        let curve = toy_curve(system);
        let p = curve.create_point(&BigInt::from(3), &BigInt::from(6)).unwrap();
        let expected = (BigUint::from(80u32), BigUint::from(10u32));

        assert_eq!(affine_coords(&p.twice()), expected, "{}", system);
        assert_eq!(affine_coords(&p.add(&p).unwrap()), expected);
        assert_eq!(affine_coords(&curve.multiply(&p, &BigInt::from(2)).unwrap()), expected);
        assert!(curve.order().is_none());
        assert!(curve.generator().is_none());
    }
}

#[test]
fn test_custom_curve_rejects_lambda_coordinates() {
    let field = Field::prime(&BigUint::from(97u32)).unwrap();
    let err = CurveBuilder::new(field, BigUint::from(2u32), BigUint::from(3u32))
        .coordinate_system(CoordinateSystem::LambdaProjective)
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedCoordinateSystem { .. }));
}

#[test]
fn test_custom_curve_rejects_unreduced_coefficients() {
    let field = Field::prime(&BigUint::from(97u32)).unwrap();
    let err = CurveBuilder::new(field, BigUint::from(97u32), BigUint::from(3u32))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Parameter { .. }));
}

#[test]
fn test_default_multipliers() {
    assert_eq!(P256.multiplier_kind(), MultiplierKind::WNaf);
    assert_eq!(K163.multiplier_kind(), MultiplierKind::WTauNaf);
    assert_eq!(K256.multiplier_kind(), MultiplierKind::Glv);
    assert_eq!(K283.coordinate_system(), CoordinateSystem::LambdaProjective);
    assert_eq!(P256.coordinate_system(), CoordinateSystem::Jacobian);
}

#[test]
fn test_validate_point_on_named_curves() {
    for curve in [&*P256, &*K256, &*K163] {
        let g = curve.generator().unwrap();
        let (x, y) = affine_coords(&g);
        let (x, y) = (BigInt::from(x), BigInt::from(y));
        assert_eq!(curve.validate_point(&x, &y).unwrap(), g);
        assert!(matches!(
            curve.validate_point(&x, &(y + 2)),
            Err(Error::InvalidValue { .. })
        ));
    }
}

#[test]
fn test_shared_precomputation_across_threads() {
    let g = K283.generator().unwrap();
    let pre = PrecomputedPoint::new(g);
    let scalars: Vec<BigInt> = (1u64..=8).map(|i| BigInt::from(i * 0x1234_5678_9abc_def1)).collect();

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = scalars
            .iter()
            .map(|k| {
                let pre = &pre;
                s.spawn(move || WTauNafMultiplier.multiply_precomputed(pre, k).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (k, r) in scalars.iter().zip(results) {
        assert_eq!(r, ReferenceMultiplier.multiply(&g, k).unwrap());
    }
    assert!(pre.has_tnaf_table());
}

#[test]
fn test_lookup_table_over_named_curve() {
    let g = P384.generator().unwrap();
    let mut points = vec![g];
    for i in 1..6 {
        let next = points[i - 1].add(&g).unwrap();
        points.push(next);
    }
    P384.normalize_all(&mut points).unwrap();
    let table = LookupTable::new(&P384, &points).unwrap();
    for (i, p) in points.iter().enumerate() {
        assert_eq!(table.lookup(i).unwrap(), *p);
    }
    assert_eq!(table.lookup(5).unwrap(), P384.multiply(&g, &BigInt::from(6)).unwrap());
}

#[test]
fn test_blinded_normalization_matches() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for curve in [&*P256, &*K283] {
        let p = curve.generator().unwrap().times_pow2(11);
        assert_eq!(
            affine_coords(&p.normalize_blinded(&mut rng)),
            affine_coords(&p.normalize())
        );
        let z = curve.random_field_element_mult(&mut rng);
        assert!(!z.is_zero());
    }
}

#[test]
fn test_error_converts_to_api_error() {
    let r: ecarith_api::Result<_> = P256
        .field()
        .from_integer(&BigInt::from(-1))
        .with_context("import");
    match r {
        Err(ecarith_api::Error::InvalidValue { context, .. }) => assert_eq!(context, "import"),
        other => panic!("unexpected {:?}", other.map(|e| e.to_biguint())),
    }

    let g = P256.generator().unwrap();
    match g.tau().with_context("frobenius") {
        Err(ecarith_api::Error::Other { context, .. }) => assert_eq!(context, "frobenius"),
        Err(other) => panic!("unexpected {:?}", other),
        Ok(_) => panic!("tau is only defined on Koblitz curves"),
    }

    let p = hex_uint("FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF");
    assert!(P256.from_biguint(&p).is_err());
    assert!(P256.from_biguint(&(p - 1u32)).is_ok());
}

#[test]
fn test_constant_time_helpers() {
    assert_eq!(ct_index_mask(3, 3), u64::MAX);
    assert_eq!(ct_index_mask(3, 4), 0);

    let mut acc = [0u64; 3];
    ct_xor_masked(&mut acc, &[1, 2, 3], ct_index_mask(0, 1));
    assert_eq!(acc, [0, 0, 0]);
    ct_xor_masked(&mut acc, &[1, 2, 3], ct_index_mask(1, 1));
    assert_eq!(acc, [1, 2, 3]);

    assert!(bool::from(ct_words_eq(&acc, &[1, 2, 3])));
    assert!(!bool::from(ct_words_eq(&acc, &[1, 2])));
    assert!(bool::from(ct_words_are_zero(&[0, 0])));
    assert!(!bool::from(ct_words_are_zero(&acc)));
}
