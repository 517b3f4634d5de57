//! Short Weierstrass formulas over GF(p): y^2 = x^3 + a x + b

use ecarith_api::CoordinateSystem;

use super::Point;
use crate::ec::field::FieldOps;

impl<'c> Point<'c> {
    pub(super) fn fp_add(&self, b: &Self) -> Self {
        let curve = self.curve;
        let f = curve.field();
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&b.x, &b.y, &b.z);

        match curve.coordinate_system() {
            CoordinateSystem::Affine => {
                let dx = f.sub(x2, x1);
                let dy = f.sub(y2, y1);
                if f.is_zero(&dx) {
                    if f.is_zero(&dy) {
                        return self.fp_twice();
                    }
                    return Point::infinity_of(curve);
                }
                let Some(gamma) = f.div(&dy, &dx) else {
                    return Point::infinity_of(curve);
                };
                let x3 = f.sub(&f.sub(&f.square(&gamma), x1), x2);
                let y3 = f.sub(&f.mul(&gamma, &f.sub(x1, &x3)), y1);
                Point::from_raw_affine(curve, x3, y3)
            }
            CoordinateSystem::Homogeneous => {
                let u1 = f.mul(y2, z1);
                let u2 = f.mul(y1, z2);
                let u = f.sub(&u1, &u2);
                let v1 = f.mul(x2, z1);
                let v2 = f.mul(x1, z2);
                let v = f.sub(&v1, &v2);

                if f.is_zero(&v) {
                    if f.is_zero(&u) {
                        return self.fp_twice();
                    }
                    return Point::infinity_of(curve);
                }

                let w = f.mul(z1, z2);
                let v_sq = f.square(&v);
                let v_cu = f.mul(&v_sq, &v);
                let v_sq_v2 = f.mul(&v_sq, &v2);
                let a = f.sub(
                    &f.sub(&f.mul(&f.square(&u), &w), &v_cu),
                    &f.twice(&v_sq_v2),
                );

                let x3 = f.mul(&v, &a);
                let y3 = f.sub(&f.mul(&f.sub(&v_sq_v2, &a), &u), &f.mul(&u2, &v_cu));
                let z3 = f.mul(&v_cu, &w);
                Point::from_raw(curve, x3, y3, z3)
            }
            _ => {
                // Jacobian
                if !f.is_one(z1) && z1 == z2 {
                    // Shared Z: co-Z addition
                    let dx = f.sub(x1, x2);
                    let dy = f.sub(y1, y2);
                    if f.is_zero(&dx) {
                        if f.is_zero(&dy) {
                            return self.fp_twice();
                        }
                        return Point::infinity_of(curve);
                    }
                    let c = f.square(&dx);
                    let w1 = f.mul(x1, &c);
                    let w2 = f.mul(x2, &c);
                    let a1 = f.mul(&f.sub(&w1, &w2), y1);

                    let x3 = f.sub(&f.sub(&f.square(&dy), &w1), &w2);
                    let y3 = f.sub(&f.mul(&f.sub(&w1, &x3), &dy), &a1);
                    let z3 = f.mul(&dx, z1);
                    return Point::from_raw(curve, x3, y3, z3);
                }

                let (u2, s2) = if f.is_one(z1) {
                    (*x2, *y2)
                } else {
                    let z1_sq = f.square(z1);
                    let z1_cu = f.mul(&z1_sq, z1);
                    (f.mul(&z1_sq, x2), f.mul(&z1_cu, y2))
                };
                let (u1, s1) = if f.is_one(z2) {
                    (*x1, *y1)
                } else {
                    let z2_sq = f.square(z2);
                    let z2_cu = f.mul(&z2_sq, z2);
                    (f.mul(&z2_sq, x1), f.mul(&z2_cu, y1))
                };

                let h = f.sub(&u1, &u2);
                let r = f.sub(&s1, &s2);
                if f.is_zero(&h) {
                    if f.is_zero(&r) {
                        return self.fp_twice();
                    }
                    return Point::infinity_of(curve);
                }

                let h_sq = f.square(&h);
                let g = f.mul(&h_sq, &h);
                let v = f.mul(&h_sq, &u1);

                let x3 = f.sub(&f.add(&f.square(&r), &g), &f.twice(&v));
                let y3 = f.sub(&f.mul(&f.sub(&v, &x3), &r), &f.mul(&g, &s1));
                let z3 = f.mul(&f.mul(&h, z1), z2);
                Point::from_raw(curve, x3, y3, z3)
            }
        }
    }

    pub(super) fn fp_twice(&self) -> Self {
        let curve = self.curve;
        let f = curve.field();
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        if f.is_zero(y1) {
            return Point::infinity_of(curve);
        }
        let a = curve.a_words();

        match curve.coordinate_system() {
            CoordinateSystem::Affine => {
                let num = f.add(&f.three(&f.square(x1)), a);
                let Some(gamma) = f.div(&num, &f.twice(y1)) else {
                    return Point::infinity_of(curve);
                };
                let x3 = f.sub(&f.square(&gamma), &f.twice(x1));
                let y3 = f.sub(&f.mul(&gamma, &f.sub(x1, &x3)), y1);
                Point::from_raw_affine(curve, x3, y3)
            }
            CoordinateSystem::Homogeneous => {
                let mut w = *a;
                if !f.is_zero(&w) {
                    w = f.mul(&w, &f.square(z1));
                }
                w = f.add(&w, &f.three(&f.square(x1)));

                let s = f.mul(y1, z1);
                let t = f.mul(&s, y1);
                let b4 = f.four(&f.mul(x1, &t));
                let h = f.sub(&f.square(&w), &f.twice(&b4));

                let s2 = f.twice(&s);
                let x3 = f.mul(&h, &s2);
                let t2 = f.twice(&t);
                let y3 = f.sub(
                    &f.mul(&f.sub(&b4, &h), &w),
                    &f.twice(&f.square(&t2)),
                );
                let z3 = f.mul(&f.twice(&f.square(&s2)), &s);
                Point::from_raw(curve, x3, y3, z3)
            }
            _ => {
                // Jacobian, with the a = -3 shortcut
                let y1_sq = f.square(y1);
                let t = f.square(&y1_sq);
                let z1_is_one = f.is_one(z1);

                let (m, s) = if curve.a_is_minus_three() {
                    let z1_sq = if z1_is_one { *z1 } else { f.square(z1) };
                    let m = f.three(&f.mul(&f.add(x1, &z1_sq), &f.sub(x1, &z1_sq)));
                    (m, f.four(&f.mul(&y1_sq, x1)))
                } else {
                    let mut m = f.three(&f.square(x1));
                    if z1_is_one {
                        m = f.add(&m, a);
                    } else if !f.is_zero(a) {
                        let z1_pow4 = f.square(&f.square(z1));
                        m = f.add(&m, &f.mul(&z1_pow4, a));
                    }
                    (m, f.four(&f.mul(x1, &y1_sq)))
                };

                let x3 = f.sub(&f.square(&m), &f.twice(&s));
                let y3 = f.sub(&f.mul(&f.sub(&s, &x3), &m), &f.eight(&t));
                let mut z3 = f.twice(y1);
                if !z1_is_one {
                    z3 = f.mul(&z3, z1);
                }
                Point::from_raw(curve, x3, y3, z3)
            }
        }
    }

    pub(super) fn fp_negate(&self) -> Self {
        let f = self.curve.field();
        Point::from_raw(self.curve, self.x, f.negate(&self.y), self.z)
    }
}
