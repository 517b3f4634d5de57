//! Curves over prime fields (SEC 2, section 2)

use super::{CurveParams, FieldParams, GlvParams};

/// secp192r1 (NIST P-192), p = 2^192 - 2^64 - 1
pub const SECP192R1: CurveParams = CurveParams {
    name: "secp192r1",
    aliases: &["P-192", "prime192v1"],
    field: FieldParams::Prime {
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFF",
    },
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFC",
    b: "64210519E59C80E70FA7E9AB72243049FEB8DEECC146B9B1",
    order: "FFFFFFFFFFFFFFFFFFFFFFFF99DEF836146BC9B1B4D22831",
    cofactor: 1,
    gx: "188DA80EB03090F67CBF20EB43A18800F4FF0AFD82FF1012",
    gy: "07192B95FFC8DA78631011ED6B24CDD573F977A11E794811",
    glv: None,
};

/// secp224k1, p = 2^224 - 2^32 - 2^12 - 2^11 - 2^9 - 2^7 - 2^4 - 2 - 1
pub const SECP224K1: CurveParams = CurveParams {
    name: "secp224k1",
    aliases: &[],
    field: FieldParams::Prime {
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFE56D",
    },
    a: "00",
    b: "05",
    order: "010000000000000000000000000001DCE8D2EC6184CAF0A971769FB1F7",
    cofactor: 1,
    gx: "A1455B334DF099DF30FC28A169A467E9E47075A90F7E650EB6B7A45C",
    gy: "7E089FED7FBA344282CAFBD6F7E319F7C0B0BD59E2CA4BDB556D61A5",
    glv: Some(SECP224K1_GLV),
};

/// secp224r1 (NIST P-224), p = 2^224 - 2^96 + 1
pub const SECP224R1: CurveParams = CurveParams {
    name: "secp224r1",
    aliases: &["P-224"],
    field: FieldParams::Prime {
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF000000000000000000000001",
    },
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFE",
    b: "B4050A850C04B3ABF54132565044B0B7D7BFD8BA270B39432355FFB4",
    order: "FFFFFFFFFFFFFFFFFFFFFFFFFFFF16A2E0B8F03E13DD29455C5C2A3D",
    cofactor: 1,
    gx: "B70E0CBD6BB4BF7F321390B94A03C1D356C21122343280D6115C1D21",
    gy: "BD376388B5F723FB4C22DFE6CD4375A05A07476444D5819985007E34",
    glv: None,
};

/// secp256k1, p = 2^256 - 2^32 - 977
pub const SECP256K1: CurveParams = CurveParams {
    name: "secp256k1",
    aliases: &[],
    field: FieldParams::Prime {
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    },
    a: "00",
    b: "07",
    order: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    cofactor: 1,
    gx: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    gy: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    glv: Some(SECP256K1_GLV),
};

/// Endomorphism of secp224k1 from the cube roots of unity
pub const SECP224K1_GLV: GlvParams = GlvParams {
    beta: "FE0E87005B4E83761908C5131D552A850B3F58B749C37CF5B84D6768",
    lambda: "60DCD2104C4CBC0BE6EEEFC2BDD610739EC34E317F9B33046C9E4788",
    v1: ["6B8CF07D4CA75C88957D9D670591", "-B8ADF1378A6EB73409FA6C9C637D"],
    v2: ["01243AE1B4D71613BC9F780A03690E", "6B8CF07D4CA75C88957D9D670591"],
    g1: "6B8CF07D4CA75C88957D9D67059037A4",
    g2: "B8ADF1378A6EB73409FA6C9C637BA7F5",
    bits: 240,
};

/// Endomorphism of secp256k1 from the cube roots of unity
pub const SECP256K1_GLV: GlvParams = GlvParams {
    beta: "7AE96A2B657C07106E64479EAC3434E99CF0497512F58995C1396C28719501EE",
    lambda: "5363AD4CC05C30E0A5261C028812645A122E22EA20816678DF02967C1B23BD72",
    v1: ["3086D221A7D46BCDE86C90E49284EB15", "-E4437ED6010E88286F547FA90ABFE4C3"],
    v2: ["0114CA50F7A8E2F3F657C1108D9D44CFD8", "3086D221A7D46BCDE86C90E49284EB15"],
    g1: "3086D221A7D46BCDE86C90E49284EB153DAB",
    g2: "E4437ED6010E88286F547FA90ABFE4C42212",
    bits: 272,
};

/// secp256r1 (NIST P-256), p = 2^256 - 2^224 + 2^192 + 2^96 - 1
pub const SECP256R1: CurveParams = CurveParams {
    name: "secp256r1",
    aliases: &["P-256", "prime256v1"],
    field: FieldParams::Prime {
        p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    },
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    order: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    cofactor: 1,
    gx: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    gy: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    glv: None,
};

/// secp384r1 (NIST P-384), p = 2^384 - 2^128 - 2^96 + 2^32 - 1
pub const SECP384R1: CurveParams = CurveParams {
    name: "secp384r1",
    aliases: &["P-384"],
    field: FieldParams::Prime {
        p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFF",
    },
    a: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFF0000000000000000FFFFFFFC",
    b: "B3312FA7E23EE7E4988E056BE3F82D19181D9C6EFE8141120314088F5013875AC656398D8A2ED19D2A85C8EDD3EC2AEF",
    order: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC7634D81F4372DDF581A0DB248B0A77AECEC196ACCC52973",
    cofactor: 1,
    gx: "AA87CA22BE8B05378EB1C71EF320AD746E1D3B628BA79B9859F741E082542A385502F25DBF55296C3A545E3872760AB7",
    gy: "3617DE4A96262C6F5D9E98BF9292DC29F8F41DBD289A147CE9DA3113B5F0B8C00A60B1CE1D7E819D7A431D7C90EA0E5F",
    glv: None,
};

/// secp521r1 (NIST P-521), p = 2^521 - 1
pub const SECP521R1: CurveParams = CurveParams {
    name: "secp521r1",
    aliases: &["P-521"],
    field: FieldParams::Prime {
        p: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
    },
    a: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC",
    b: "0051953EB9618E1C9A1F929A21A0B68540EEA2DA725B99B315F3B8B489918EF109E156193951EC7E937B1652C0BD3BB1BF073573DF883D2C34F1EF451FD46B503F00",
    order: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFA51868783BF2F966B7FCC0148F709A5D03BB5C9B8899C47AEBB6FB71E91386409",
    cofactor: 1,
    gx: "00C6858E06B70404E9CD9E3ECB662395B4429C648139053FB521F828AF606B4D3DBAA14B5E77EFE75928FE1DC127A2FFA8DE3348B3C1856A429BF97E7E31C2E5BD66",
    gy: "011839296A789A3BC0045C8A5FB42C7D1BD998F54449579B446817AFBD17273E662C97EE72995EF42640C550B9013FAD0761353C7086A272C24088BE94769FD16650",
    glv: None,
};
