//! Named curves built once per test binary

use ecarith_algorithms::ec::Curve;
use ecarith_algorithms::CoordinateSystem;
use ecarith_params::{
    CurveParams, SECP256K1, SECP256R1, SECP384R1, SECP521R1, SECT163K1, SECT163R2, SECT233K1, SECT283K1,
};
use once_cell::sync::Lazy;

fn build(params: &'static CurveParams) -> Curve {
    Curve::from_params(params).expect("named curve parameters are valid")
}

fn build_in(params: &'static CurveParams, system: CoordinateSystem) -> Curve {
    Curve::builder(params)
        .coordinate_system(system)
        .build()
        .expect("named curve parameters are valid")
}

pub static P256: Lazy<Curve> = Lazy::new(|| build(&SECP256R1));
pub static P256_AFFINE: Lazy<Curve> = Lazy::new(|| build_in(&SECP256R1, CoordinateSystem::Affine));
pub static P256_HOMOGENEOUS: Lazy<Curve> =
    Lazy::new(|| build_in(&SECP256R1, CoordinateSystem::Homogeneous));
pub static P384: Lazy<Curve> = Lazy::new(|| build(&SECP384R1));
pub static P521: Lazy<Curve> = Lazy::new(|| build(&SECP521R1));
pub static K256: Lazy<Curve> = Lazy::new(|| build(&SECP256K1));

pub static K163: Lazy<Curve> = Lazy::new(|| build(&SECT163K1));
pub static B163: Lazy<Curve> = Lazy::new(|| build(&SECT163R2));
pub static K233: Lazy<Curve> = Lazy::new(|| build(&SECT233K1));
pub static K283: Lazy<Curve> = Lazy::new(|| build(&SECT283K1));
pub static K283_HOMOGENEOUS: Lazy<Curve> =
    Lazy::new(|| build_in(&SECT283K1, CoordinateSystem::Homogeneous));

/// Every prebuilt curve, for tests that sweep all of them
pub fn all() -> [&'static Curve; 11] {
    [
        &*P256,
        &*P256_AFFINE,
        &*P256_HOMOGENEOUS,
        &*P384,
        &*P521,
        &*K256,
        &*K163,
        &*B163,
        &*K233,
        &*K283,
        &*K283_HOMOGENEOUS,
    ]
}
