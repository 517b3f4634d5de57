//! Formulas over GF(2^m): y^2 + x y = x^3 + a x^2 + b

use ecarith_api::CoordinateSystem;

use super::Point;
use crate::ec::field::limbs::{ONE, ZERO};
use crate::ec::field::FieldOps;

impl<'c> Point<'c> {
    /// (0, sqrt(b)), the unique point of order two
    fn f2m_order_two(&self) -> Self {
        Point::from_raw_affine(self.curve, ZERO, *self.curve.sqrt_b_words())
    }

    pub(super) fn f2m_add(&self, b: &Self) -> Self {
        let curve = self.curve;
        let f = curve.field();
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&b.x, &b.y, &b.z);

        match curve.coordinate_system() {
            CoordinateSystem::Affine => {
                let dx = f.add(x1, x2);
                let dy = f.add(y1, y2);
                if f.is_zero(&dx) {
                    if f.is_zero(&dy) {
                        return self.f2m_twice();
                    }
                    return Point::infinity_of(curve);
                }
                let Some(l) = f.div(&dy, &dx) else {
                    return Point::infinity_of(curve);
                };
                let x3 = f.add(&f.add(&f.add(&f.square(&l), &l), &dx), curve.a_words());
                let y3 = f.add(&f.add(&f.mul(&l, &f.add(x1, &x3)), &x3), y1);
                Point::from_raw_affine(curve, x3, y3)
            }
            CoordinateSystem::Homogeneous => {
                let u1 = f.mul(y2, z1);
                let v1 = f.mul(x2, z1);
                let u2 = f.mul(y1, z2);
                let v2 = f.mul(x1, z2);
                let u = f.add(&u1, &u2);
                let v = f.add(&v1, &v2);

                if f.is_zero(&v) {
                    if f.is_zero(&u) {
                        return self.f2m_twice();
                    }
                    return Point::infinity_of(curve);
                }

                let v_sq = f.square(&v);
                let v_cu = f.mul(&v_sq, &v);
                let w = f.mul(z1, z2);
                let uv = f.add(&u, &v);
                let a = f.add(
                    &f.mul(
                        &f.add(&f.mul(&uv, &u), &f.mul(&v_sq, curve.a_words())),
                        &w,
                    ),
                    &v_cu,
                );

                let x3 = f.mul(&v, &a);
                let v_sq_z2 = f.mul(&v_sq, z2);
                let y3 = f.add(
                    &f.mul(&f.add(&f.mul(&u, x1), &f.mul(&v, y1)), &v_sq_z2),
                    &f.mul(&uv, &a),
                );
                let z3 = f.mul(&v_cu, &w);
                Point::from_raw(curve, x3, y3, z3)
            }
            _ => {
                // Lambda-projective
                if f.is_zero(x1) {
                    if f.is_zero(x2) {
                        return Point::infinity_of(curve);
                    }
                    return b.f2m_add(self);
                }

                let (l1, l2) = (y1, y2);
                let u2 = f.mul(x2, z1);
                let s2 = f.mul(l2, z1);
                let u1 = f.mul(x1, z2);
                let s1 = f.mul(l1, z2);

                let a = f.add(&s1, &s2);
                let bb = f.add(&u1, &u2);
                if f.is_zero(&bb) {
                    if f.is_zero(&a) {
                        return self.f2m_twice();
                    }
                    return Point::infinity_of(curve);
                }

                if f.is_zero(x2) {
                    // b = (0, y2) with y2 affine: add in affine form
                    let p = self.normalize();
                    let x1 = p.x;
                    let Some(y1) = p.y_coord().map(|y| *y.words()) else {
                        return *b;
                    };
                    let Some(l) = f.div(&f.add(&y1, y2), &x1) else {
                        return Point::infinity_of(curve);
                    };
                    let x3 = f.add(&f.add(&f.add(&f.square(&l), &l), &x1), curve.a_words());
                    if f.is_zero(&x3) {
                        return self.f2m_order_two();
                    }
                    let y3 = f.add(&f.add(&f.mul(&l, &f.add(&x1, &x3)), &x3), &y1);
                    let Some(y3_over_x3) = f.div(&y3, &x3) else {
                        return Point::infinity_of(curve);
                    };
                    return Point::from_raw_affine(curve, x3, f.add(&y3_over_x3, &x3));
                }

                let bb = f.square(&bb);
                let au1 = f.mul(&a, &u1);
                let au2 = f.mul(&a, &u2);
                let x3 = f.mul(&au1, &au2);
                if f.is_zero(&x3) {
                    return self.f2m_order_two();
                }

                let abz2 = f.mul(&f.mul(&a, &bb), z2);
                let l3 = f.add(
                    &f.square(&f.add(&au2, &bb)),
                    &f.mul(&abz2, &f.add(l1, z1)),
                );
                let z3 = f.mul(&abz2, z1);
                Point::from_raw(curve, x3, l3, z3)
            }
        }
    }

    pub(super) fn f2m_twice(&self) -> Self {
        let curve = self.curve;
        let f = curve.field();
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        if f.is_zero(x1) {
            // a point with x = 0 is its own negation
            return Point::infinity_of(curve);
        }
        let a = curve.a_words();

        match curve.coordinate_system() {
            CoordinateSystem::Affine => {
                let Some(y_over_x) = f.div(y1, x1) else {
                    return Point::infinity_of(curve);
                };
                let l1 = f.add(&y_over_x, x1);
                let x3 = f.add(&f.add(&f.square(&l1), &l1), a);
                let y3 = f.add(&f.square(x1), &f.mul(&x3, &f.add(&l1, &ONE)));
                Point::from_raw_affine(curve, x3, y3)
            }
            CoordinateSystem::Homogeneous => {
                let x1z1 = f.mul(x1, z1);
                let y1z1 = f.mul(y1, z1);
                let x1_sq = f.square(x1);
                let s = f.add(&x1_sq, &y1z1);
                let v = x1z1;
                let v_sq = f.square(&v);
                let sv = f.add(&s, &v);
                let h = f.add(&f.mul(&sv, &s), &f.mul(&v_sq, a));

                let x3 = f.mul(&v, &h);
                let y3 = f.add(&f.mul(&f.square(&x1_sq), &v), &f.mul(&h, &sv));
                let z3 = f.mul(&v, &v_sq);
                Point::from_raw(curve, x3, y3, z3)
            }
            _ => {
                // Lambda-projective
                let l1 = y1;
                let l1z1 = f.mul(l1, z1);
                let z1_sq = f.square(z1);
                let a_z1_sq = f.mul(a, &z1_sq);
                let t = f.add(&f.add(&f.square(l1), &l1z1), &a_z1_sq);
                if f.is_zero(&t) {
                    return self.f2m_order_two();
                }

                let x3 = f.square(&t);
                let z3 = f.mul(&t, &z1_sq);
                let b = curve.b_words();

                let l3 = if curve.b_is_small() {
                    let t1 = f.square(&f.add(l1, x1));
                    let t2 = if f.is_one(b) {
                        f.square(&f.add(&a_z1_sq, &z1_sq))
                    } else {
                        f.add(&f.square(&a_z1_sq), &f.mul(b, &f.square(&z1_sq)))
                    };
                    let mut l3 = f.add(
                        &f.add(&f.mul(&f.add(&f.add(&t1, &t), &z1_sq), &t1), &t2),
                        &x3,
                    );
                    if f.is_zero(a) {
                        l3 = f.add(&l3, &z3);
                    } else if !f.is_one(a) {
                        let a_plus_1 = f.add(a, &ONE);
                        l3 = f.add(&l3, &f.mul(&a_plus_1, &z3));
                    }
                    l3
                } else {
                    let x1z1 = f.mul(x1, z1);
                    f.add(
                        &f.add(&f.add(&f.square(&x1z1), &f.mul(&t, &l1z1)), &x3),
                        &z3,
                    )
                };
                Point::from_raw(curve, x3, l3, z3)
            }
        }
    }

    pub(super) fn f2m_negate(&self) -> Self {
        let f = self.curve.field();
        if f.is_zero(&self.x) {
            return *self;
        }
        let y = match self.coordinate_system() {
            CoordinateSystem::LambdaProjective => f.add(&self.y, &self.z),
            _ => f.add(&self.y, &self.x),
        };
        Point::from_raw(self.curve, self.x, y, self.z)
    }
}
