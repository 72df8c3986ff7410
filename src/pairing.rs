/*
 * Copyright 2025 by Ideal Labs, LLC
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Divisor evaluation and the Tate pairing (Miller's algorithm) on the
//! Type-1 supersingular family, embedding degree 2.

use num_bigint::BigUint;

use crate::curve::{AffinePoint, Curve};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::fp2::Complex;

/// A fixed non-trivial cube root of unity in F_p², used as the distortion
/// map's multiplier. Exists because `p ≡ 2 (mod 3)` makes 3 a quadratic
/// residue mod `p` (so `sqrt(3)` lives in F_p, via the same `p ≡ 3 mod 4`
/// square-root formula used by `hash_to_point`), giving
/// `zeta = -1/2 + (sqrt(3)/2) i`, which satisfies `zeta^2 + zeta + 1 = 0`.
pub fn cube_root_of_unity(p: &BigUint) -> Complex {
	let three = BigUint::from(3u32);
	let sqrt3 = crate::bignum::mod_sqrt_p3mod4(&three, p);
	let two_inv = crate::bignum::mod_inv(&BigUint::from(2u32), p).expect("2 is invertible mod an odd prime");
	let neg_two_inv = crate::bignum::mod_neg(&two_inv, p);
	let imag = crate::bignum::mod_mul(&sqrt3, &two_inv, p);
	Complex::new(neg_two_inv, imag)
}

/// The distortion map `phi(x, y) = (zeta * x, y)`, lifting a point of
/// `E(F_p)` into `E(F_p^2)` so it is linearly independent from `E(F_p)`
/// points under the pairing.
pub fn distortion(point: &AffinePoint<BigUint>, p: &BigUint, zeta: &Complex) -> AffinePoint<Complex> {
	match point {
		AffinePoint::Infinity => AffinePoint::Infinity,
		AffinePoint::Finite { x, y } => {
			AffinePoint::Finite { x: zeta.mul(&Complex::from_base(x), p), y: Complex::from_base(y) }
		},
	}
}

/// The value at `b` of the vertical line through `a` (an `F_p`-point), i.e.
/// `b.x - a.x` lifted into `F_p^2`.
///
/// `a` reaches infinity exactly at the last step of Miller's algorithm (the
/// accumulated multiple hits the group order); there is no vertical line
/// through infinity, so that step's factor is conventionally `1`.
pub fn evaluate_vertical(a: &AffinePoint<BigUint>, b: &AffinePoint<Complex>, p: &BigUint) -> Result<Complex> {
	let (ax, bx) = match (a, b) {
		(AffinePoint::Finite { x: ax, .. }, AffinePoint::Finite { x: bx, .. }) => (ax, bx),
		(AffinePoint::Infinity, AffinePoint::Finite { .. }) => return Ok(Complex::one()),
		_ => return Err(Error::ArithmeticFailure),
	};
	Ok(bx.sub(&Complex::from_base(ax), p))
}

/// The value at `b` of the tangent line to the curve at `a` (an
/// `F_p`-point). Fails if `a` is infinity or `a.y = 0` (vertical tangent).
pub fn evaluate_tangent(a: &AffinePoint<BigUint>, b: &AffinePoint<Complex>, curve: &Curve) -> Result<Complex> {
	let (ax, ay) = match a {
		AffinePoint::Finite { x, y } if !y.is_zero() => (x, y),
		_ => return Err(Error::ArithmeticFailure),
	};
	let (bx, by) = match b {
		AffinePoint::Finite { x, y } => (x, y),
		AffinePoint::Infinity => return Err(Error::ArithmeticFailure),
	};
	let p = &curve.p;
	let three = BigUint::from(3u32);
	let two = BigUint::from(2u32);
	let num = crate::bignum::mod_mul(&three, &crate::bignum::mod_mul(ax, ax, p), p);
	let den = crate::bignum::mod_mul(&two, ay, p);
	let m = crate::bignum::mod_mul(&num, &crate::bignum::mod_inv(&den, p)?, p);
	let m = Complex::from_base(&m);
	let lhs = by.sub(&Complex::from_base(ay), &curve.p);
	let rhs = m.mul(&bx.sub(&Complex::from_base(ax), &curve.p), &curve.p);
	Ok(lhs.sub(&rhs, &curve.p))
}

/// The value at `b` of the line through `a` and `a_prime` (both `F_p`-points),
/// dispatching to the tangent formula when `a == a_prime` and to the
/// vertical-line formula when `a_prime == -a`.
pub fn evaluate_line(
	a: &AffinePoint<BigUint>,
	a_prime: &AffinePoint<BigUint>,
	b: &AffinePoint<Complex>,
	curve: &Curve,
) -> Result<Complex> {
	if a == a_prime {
		return evaluate_tangent(a, b, curve);
	}
	let (ax, ay) = match a {
		AffinePoint::Finite { x, y } => (x, y),
		AffinePoint::Infinity => return Err(Error::ArithmeticFailure),
	};
	let (apx, apy) = match a_prime {
		AffinePoint::Finite { x, y } => (x, y),
		AffinePoint::Infinity => return Err(Error::ArithmeticFailure),
	};
	let p = &curve.p;
	if ax == apx {
		// a' = -a: the line through a and -a is vertical.
		return evaluate_vertical(a, b, p);
	}
	let (bx, by) = match b {
		AffinePoint::Finite { x, y } => (x, y),
		AffinePoint::Infinity => return Err(Error::ArithmeticFailure),
	};
	let num = crate::bignum::mod_sub(apy, ay, p);
	let den = crate::bignum::mod_sub(apx, ax, p);
	let m = crate::bignum::mod_mul(&num, &crate::bignum::mod_inv(&den, p)?, p);
	let m = Complex::from_base(&m);
	let lhs = by.sub(&Complex::from_base(ay), p);
	let rhs = m.mul(&bx.sub(&Complex::from_base(ax), p), p);
	Ok(lhs.sub(&rhs, p))
}

/// The (reduced, non-degenerate) Tate pairing `e(P, B)` for `P, B` of order
/// `q` in `E(F_p)`, realized by Miller's algorithm with `B` mapped into
/// `E(F_p^2)` via the distortion map so the two arguments are linearly
/// independent.
pub fn tate(p_pt: &AffinePoint<BigUint>, b_pt: &AffinePoint<BigUint>, q: &BigUint, curve: &Curve) -> Result<Complex> {
	let p = &curve.p;
	let zeta = cube_root_of_unity(p);
	let b_lifted = distortion(b_pt, p, &zeta);

	let mut f = Complex::one();
	let mut v = p_pt.clone();
	let bit_len = q.bits();

	for i in (0..bit_len.saturating_sub(1)).rev() {
		let bit = q.bit(i);

		let line = evaluate_line(&v, &v, &b_lifted, curve)?;
		let v_doubled = v.double(curve)?;
		let vert = evaluate_vertical(&v_doubled, &b_lifted, p)?;
		f = f.square(p).mul(&line, p).div(&vert, p)?;
		v = v_doubled;

		if bit {
			let line = evaluate_line(&v, p_pt, &b_lifted, curve)?;
			let v_added = v.add(p_pt, curve)?;
			let vert = evaluate_vertical(&v_added, &b_lifted, p)?;
			f = f.mul(&line, p).div(&vert, p)?;
			v = v_added;
		}
	}

	let p_squared_minus_one = p * p - <BigUint as num_traits::One>::one();
	let final_exp = &p_squared_minus_one / q;
	Ok(f.pow(&final_exp, p))
}
