//! Property-based tests for the group law and scalar multiplication

use ecarith_algorithms::ec::{
    GlvMultiplier, Multiplier, PrecomputedPoint, ReferenceMultiplier, WNafMultiplier,
    WTauNafMultiplier,
};
use ecarith_tests::curves::{self, B163, K163, K233, K256, K283, P256, P256_HOMOGENEOUS};
use ecarith_tests::{affine_coords, scalar_from_bytes};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scalar_multiplication_is_additive(
        a in prop::collection::vec(any::<u8>(), 1..=32),
        b in prop::collection::vec(any::<u8>(), 1..=32),
        neg_a in any::<bool>(),
        neg_b in any::<bool>()
    ) {
        let (ka, kb) = (scalar_from_bytes(&a, neg_a), scalar_from_bytes(&b, neg_b));
        for curve in [&*P256, &*K163, &*B163] {
            let g = curve.generator().unwrap();
            let pa = curve.multiply(&g, &ka).unwrap();
            let pb = curve.multiply(&g, &kb).unwrap();
            let sum = curve.multiply(&g, &(&ka + &kb)).unwrap();
            prop_assert_eq!(pa.add(&pb).unwrap(), sum);
            prop_assert!(sum.is_normalized());
        }
    }

    #[test]
    fn wnaf_matches_reference(
        k in prop::collection::vec(any::<u8>(), 1..=40),
        negative in any::<bool>()
    ) {
        let k = scalar_from_bytes(&k, negative);
        for curve in curves::all() {
            let g = curve.generator().unwrap();
            let expected = ReferenceMultiplier.multiply(&g, &k).unwrap();
            prop_assert_eq!(WNafMultiplier.multiply(&g, &k).unwrap(), expected);
        }
    }

    #[test]
    fn wtnaf_matches_wnaf_on_koblitz_curves(
        k in prop::collection::vec(any::<u8>(), 1..=40),
        negative in any::<bool>()
    ) {
        let k = scalar_from_bytes(&k, negative);
        for curve in [&*K163, &*K233, &*K283] {
            let g = curve.generator().unwrap();
            let expected = WNafMultiplier.multiply(&g, &k).unwrap();
            prop_assert_eq!(WTauNafMultiplier.multiply(&g, &k).unwrap(), expected);
        }
    }

    #[test]
    fn glv_matches_wnaf_on_secp256k1(
        k in prop::collection::vec(any::<u8>(), 1..=48),
        negative in any::<bool>()
    ) {
        let k = scalar_from_bytes(&k, negative);
        let g = K256.generator().unwrap();
        let expected = WNafMultiplier.multiply(&g, &k).unwrap();
        prop_assert_eq!(GlvMultiplier.multiply(&g, &k).unwrap(), expected);
        let pre = PrecomputedPoint::new(g.twice());
        prop_assert_eq!(
            GlvMultiplier.multiply_precomputed(&pre, &k).unwrap(),
            expected.twice()
        );
    }

    #[test]
    fn precomputed_tables_are_reusable(
        scalars in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..=32), 1..4)
    ) {
        let g = K283.generator().unwrap().times_pow2(7).normalize();
        let pre = PrecomputedPoint::new(g);
        for k in &scalars {
            let k = scalar_from_bytes(k, false);
            let expected = ReferenceMultiplier.multiply(&g, &k).unwrap();
            prop_assert_eq!(WTauNafMultiplier.multiply_precomputed(&pre, &k).unwrap(), expected);
            prop_assert_eq!(WNafMultiplier.multiply_precomputed(&pre, &k).unwrap(), expected);
        }
        prop_assert!(pre.has_tnaf_table());
    }

    #[test]
    fn coordinate_systems_agree(k in prop::collection::vec(any::<u8>(), 1..=32)) {
        let k = scalar_from_bytes(&k, false);
        let jacobian = P256.multiply(&P256.generator().unwrap(), &k).unwrap();
        let homogeneous = P256_HOMOGENEOUS
            .multiply(&P256_HOMOGENEOUS.generator().unwrap(), &k)
            .unwrap();
        if jacobian.is_infinity() {
            prop_assert!(homogeneous.is_infinity());
        } else {
            prop_assert_eq!(affine_coords(&jacobian), affine_coords(&homogeneous));
            prop_assert_eq!(P256.import_point(&homogeneous).unwrap(), jacobian);
        }
    }
}
