//! Published scalar-multiplication results used as known answers

/// k G for a named curve, coordinates in big-endian hex
pub struct ScalarMultVector {
    pub curve: &'static str,
    pub k: u64,
    pub x: &'static str,
    pub y: &'static str,
}

pub const SCALAR_MULT_VECTORS: &[ScalarMultVector] = &[
    ScalarMultVector {
        curve: "secp256k1",
        k: 1,
        x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    },
    ScalarMultVector {
        curve: "secp256k1",
        k: 2,
        x: "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        y: "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    },
    ScalarMultVector {
        curve: "secp256k1",
        k: 3,
        x: "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        y: "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    },
    ScalarMultVector {
        curve: "secp256r1",
        k: 1,
        x: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
        y: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    },
    ScalarMultVector {
        curve: "secp256r1",
        k: 2,
        x: "7CF27B188D034F7E8A52380304B51AC3C08969E277F21B35A60B48FC47669978",
        y: "07775510DB8ED040293D9AC69F7430DBBA7DADE63CE982299E04B79D227873D1",
    },
    ScalarMultVector {
        curve: "secp256r1",
        k: 3,
        x: "5ECBE4D1A6330A44C8F7EF951D4BF165E6C6B721EFADA985FB41661BC6E7FD6C",
        y: "8734640C4998FF7E374B06CE1A64A2ECD82AB036384FB83D9A79B127A27D5032",
    },
];
