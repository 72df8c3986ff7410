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

//! Window-NAF scalar multiplication, generic over [`crate::field::Field`].

use num_bigint::BigUint;
use num_integer::Integer as _;

use crate::curve::{AffinePoint, Curve};
use crate::error::Result;
use crate::field::Field;

/// Window width used to recode the scalar. `w = 4` precomputes
/// `{P, 3P, 5P, 7P}` (and their negatives), a reasonable trade-off between
/// precomputation size and the number of nonzero digits for the ~160-512 bit
/// scalars this crate deals with.
const WINDOW: u32 = 4;

/// Recode `k` into windowed non-adjacent form: digits `d_i` with
/// `k = sum d_i * 2^i`, each nonzero `d_i` odd and in
/// `[-(2^(w-1)-1), 2^(w-1)-1]`, with no two nonzero digits closer than `w`
/// positions apart.
fn wnaf_digits(k: &BigUint, w: u32) -> Vec<i64> {
	let modulus = 1i64 << w;
	let half = 1i64 << (w - 1);
	let mut k = k.clone();
	let mut digits = Vec::new();

	while !num_traits::Zero::is_zero(&k) {
		if k.is_odd() {
			let window = (&k & BigUint::from((modulus - 1) as u64))
				.to_u32_digits()
				.first()
				.copied()
				.unwrap_or(0) as i64;
			let digit = if window >= half { window - modulus } else { window };
			digits.push(digit);
			if digit >= 0 {
				k -= BigUint::from(digit as u64);
			} else {
				k += BigUint::from((-digit) as u64);
			}
		} else {
			digits.push(0);
		}
		k >>= 1u32;
	}
	digits
}

/// `[k]P` via window-NAF scalar multiplication. Returns infinity when `k = 0`.
///
/// `k` is taken to be non-negative, which covers every call site in this
/// crate (master secrets, Miller-loop exponents, Lagrange shares are always
/// reduced into `[0, q)` or `[0, p)` before reaching this function).
pub fn w_naf_multiply<F: Field>(k: &BigUint, point: &AffinePoint<F>, curve: &Curve) -> Result<AffinePoint<F>> {
	if num_traits::Zero::is_zero(k) || point.is_infinity() {
		return Ok(AffinePoint::Infinity);
	}

	let half_width = 1usize << (WINDOW - 2); // number of odd multiples to precompute
	let mut odd_multiples = Vec::with_capacity(half_width);
	odd_multiples.push(point.clone());
	let double_p = point.double(curve)?;
	for i in 1..half_width {
		odd_multiples.push(odd_multiples[i - 1].add(&double_p, curve)?);
	}

	let digits = wnaf_digits(k, WINDOW);
	let mut acc: AffinePoint<F> = AffinePoint::Infinity;
	for &digit in digits.iter().rev() {
		acc = acc.double(curve)?;
		if digit != 0 {
			let idx = (digit.unsigned_abs() as usize - 1) / 2;
			let term = &odd_multiples[idx];
			acc = if digit > 0 { acc.add(term, curve)? } else { acc.add(&term.neg(curve), curve)? };
		}
	}
	Ok(acc)
}
