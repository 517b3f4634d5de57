//! Known-answer tests for scalar multiplication on named curves

use ecarith_algorithms::ec::{
    Curve, Multiplier, PrecomputedPoint, ReferenceMultiplier, WNafMultiplier,
};
use ecarith_algorithms::CoordinateSystem;
use ecarith_params::curve_by_name;
use ecarith_tests::curves::P521;
use ecarith_tests::vectors::SCALAR_MULT_VECTORS;
use ecarith_tests::{affine_coords, hex_uint};
use num_bigint::{BigInt, BigUint};

const PRIME_SYSTEMS: [CoordinateSystem; 3] = [
    CoordinateSystem::Affine,
    CoordinateSystem::Homogeneous,
    CoordinateSystem::Jacobian,
];

#[test]
fn test_scalar_mult_vectors_all_systems() {
    for v in SCALAR_MULT_VECTORS {
        let params = curve_by_name(v.curve).expect("vector curve is known");
        let expected = (hex_uint(v.x), hex_uint(v.y));
        let k = BigInt::from(v.k);

        for system in PRIME_SYSTEMS {
            let curve = Curve::builder(params)
                .coordinate_system(system)
                .build()
                .unwrap();
            let g = curve.generator().unwrap();

            let by_curve = curve.multiply(&g, &k).unwrap();
            assert_eq!(affine_coords(&by_curve), expected, "{} k={} {}", v.curve, v.k, system);

            let by_reference = ReferenceMultiplier.multiply(&g, &k).unwrap();
            assert_eq!(by_reference, by_curve);

            let by_wnaf = WNafMultiplier.multiply(&g, &k).unwrap();
            assert_eq!(by_wnaf, by_curve);

            let pre = PrecomputedPoint::new(g);
            let by_table = WNafMultiplier.multiply_precomputed(&pre, &k).unwrap();
            assert_eq!(by_table, by_curve);
        }
    }
}

#[test]
fn test_order_multiples() {
    for params in ecarith_params::ALL_CURVES {
        let name = params.name;
        let curve = Curve::from_params(params).unwrap();
        let g = curve.generator().unwrap();
        let n = BigInt::from(curve.order().unwrap().clone());

        assert!(curve.multiply(&g, &n).unwrap().is_infinity(), "{}", name);
        assert!(
            ReferenceMultiplier.multiply(&g, &n).unwrap().is_infinity(),
            "{}",
            name
        );

        let n_minus_one = curve.multiply(&g, &(&n - 1)).unwrap();
        assert_eq!(n_minus_one, g.negate(), "{}", name);

        let n_plus_one = curve.multiply(&g, &(&n + 1)).unwrap();
        assert_eq!(n_plus_one, g, "{}", name);

        let minus_two = curve.multiply(&g, &BigInt::from(-2)).unwrap();
        assert_eq!(minus_two, g.twice().negate(), "{}", name);
    }
}

#[test]
fn test_p521_field_is_mersenne() {
    let p = P521.field().characteristic();
    assert_eq!(p, (BigUint::from(1u8) << 521usize) - 1u8);
    assert_eq!(p.bits(), 521);

    // Fermat inversion and square roots need a prime modulus
    let g = P521.generator().unwrap();
    let x = g.affine_x_coord().unwrap();
    assert!(x.multiply(&x.invert().unwrap()).unwrap().is_one());
    let y = g.affine_y_coord().unwrap();
    let root = y.square().sqrt().unwrap();
    assert_eq!(root.square(), y.square());
    assert!(g.is_valid());
}

#[test]
fn test_generators_are_valid() {
    for params in ecarith_params::ALL_CURVES {
        let curve = Curve::from_params(params).unwrap();
        let g = curve.generator().unwrap();
        assert!(g.is_valid(), "{}", params.name);
        assert!(g.is_normalized());
        assert_eq!(curve.name(), Some(params.name));
    }
}
