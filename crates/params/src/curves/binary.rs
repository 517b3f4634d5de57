//! Curves over binary fields (SEC 2, section 3)
//!
//! The `k` curves are Koblitz curves: b = 1 and a in {0, 1}.

use super::{CurveParams, FieldParams};

/// sect163k1 (NIST K-163), f(x) = x^163 + x^7 + x^6 + x^3 + 1
pub const SECT163K1: CurveParams = CurveParams {
    name: "sect163k1",
    aliases: &["K-163"],
    field: FieldParams::Binary {
        m: 163,
        ks: &[3, 6, 7],
    },
    a: "01",
    b: "01",
    order: "04000000000000000000020108A2E0CC0D99F8A5EF",
    cofactor: 2,
    gx: "02FE13C0537BBC11ACAA07D793DE4E6D5E5C94EEE8",
    gy: "0289070FB05D38FF58321F2E800536D538CCDAA3D9",
    glv: None,
};

/// sect163r2 (NIST B-163), f(x) = x^163 + x^7 + x^6 + x^3 + 1
pub const SECT163R2: CurveParams = CurveParams {
    name: "sect163r2",
    aliases: &["B-163"],
    field: FieldParams::Binary {
        m: 163,
        ks: &[3, 6, 7],
    },
    a: "01",
    b: "020A601907B8C953CA1481EB10512F78744A3205FD",
    order: "040000000000000000000292FE77E70C12A4234C33",
    cofactor: 2,
    gx: "03F0EBA16286A2D57EA0991168D4994637E8343E36",
    gy: "00D51FBC6C71A0094FA2CDD545B11C5C0C797324F1",
    glv: None,
};

/// sect233k1 (NIST K-233), f(x) = x^233 + x^74 + 1
pub const SECT233K1: CurveParams = CurveParams {
    name: "sect233k1",
    aliases: &["K-233"],
    field: FieldParams::Binary { m: 233, ks: &[74] },
    a: "00",
    b: "01",
    order: "8000000000000000000000000000069D5BB915BCD46EFB1AD5F173ABDF",
    cofactor: 4,
    gx: "017232BA853A7E731AF129F22FF4149563A419C26BF50A4C9D6EEFAD6126",
    gy: "01DB537DECE819B7F70F555A67C427A8CD9BF18AEB9B56E0C11056FAE6A3",
    glv: None,
};

/// sect283k1 (NIST K-283), f(x) = x^283 + x^12 + x^7 + x^5 + 1
pub const SECT283K1: CurveParams = CurveParams {
    name: "sect283k1",
    aliases: &["K-283"],
    field: FieldParams::Binary {
        m: 283,
        ks: &[5, 7, 12],
    },
    a: "00",
    b: "01",
    order: "01FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE9AE2ED07577265DFF7F94451E061E163C61",
    cofactor: 4,
    gx: "0503213F78CA44883F1A3B8162F188E553CD265F23C1567A16876913B0C2AC2458492836",
    gy: "01CCDA380F1C9E318D90F95D07E5426FE87E45C0E8184698E45962364E34116177DD2259",
    glv: None,
};
