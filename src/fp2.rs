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

//! F_p², represented as Gaussian integers `real + imag * i` with `i^2 = -1`.
//!
//! This requires `p ≡ 3 (mod 4)` so that `-1` is a quadratic non-residue and
//! `i` genuinely generates a degree-2 extension; the curve family this crate
//! targets (`p ≡ 2 mod 3`, odd) always satisfies this.

use num_bigint::BigUint;

use crate::bignum;
use crate::error::{Error, Result};
use crate::field::Field;

/// An element `real + imag * i` of F_p².
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Complex {
	pub real: BigUint,
	pub imag: BigUint,
}

impl Complex {
	pub fn new(real: BigUint, imag: BigUint) -> Self {
		Complex { real, imag }
	}

	/// The conjugate `real - imag * i`.
	pub fn conjugate(&self, p: &BigUint) -> Self {
		Complex { real: self.real.clone(), imag: bignum::mod_neg(&self.imag, p) }
	}

	/// The field norm `real^2 + imag^2`, which lies in F_p.
	pub fn norm(&self, p: &BigUint) -> BigUint {
		bignum::mod_add(
			&bignum::mod_mul(&self.real, &self.real, p),
			&bignum::mod_mul(&self.imag, &self.imag, p),
			p,
		)
	}

	/// Exponentiation by a non-negative scalar, via square-and-multiply.
	pub fn pow(&self, exp: &BigUint, p: &BigUint) -> Self {
		let mut result = Complex::one();
		let mut base = self.clone();
		let mut e = exp.clone();
		let two = BigUint::from(2u32);
		while !num_traits::Zero::is_zero(&e) {
			if &e % &two == BigUint::from(1u32) {
				result = result.mul(&base, p);
			}
			base = base.square(p);
			e /= &two;
		}
		result
	}
}

impl Field for Complex {
	fn zero() -> Self {
		Complex { real: num_traits::Zero::zero(), imag: num_traits::Zero::zero() }
	}

	fn one() -> Self {
		Complex { real: BigUint::from(1u32), imag: num_traits::Zero::zero() }
	}

	fn from_base(x: &BigUint) -> Self {
		Complex { real: x.clone(), imag: num_traits::Zero::zero() }
	}

	fn add(&self, other: &Self, p: &BigUint) -> Self {
		Complex {
			real: bignum::mod_add(&self.real, &other.real, p),
			imag: bignum::mod_add(&self.imag, &other.imag, p),
		}
	}

	fn sub(&self, other: &Self, p: &BigUint) -> Self {
		Complex {
			real: bignum::mod_sub(&self.real, &other.real, p),
			imag: bignum::mod_sub(&self.imag, &other.imag, p),
		}
	}

	fn mul(&self, other: &Self, p: &BigUint) -> Self {
		// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
		let ac = bignum::mod_mul(&self.real, &other.real, p);
		let bd = bignum::mod_mul(&self.imag, &other.imag, p);
		let ad = bignum::mod_mul(&self.real, &other.imag, p);
		let bc = bignum::mod_mul(&self.imag, &other.real, p);
		Complex { real: bignum::mod_sub(&ac, &bd, p), imag: bignum::mod_add(&ad, &bc, p) }
	}

	fn square(&self, p: &BigUint) -> Self {
		// (a + bi)^2 = (a^2 - b^2) + 2ab i
		let a2 = bignum::mod_mul(&self.real, &self.real, p);
		let b2 = bignum::mod_mul(&self.imag, &self.imag, p);
		let two_ab = bignum::mod_mul(&BigUint::from(2u32), &bignum::mod_mul(&self.real, &self.imag, p), p);
		Complex { real: bignum::mod_sub(&a2, &b2, p), imag: two_ab }
	}

	fn inverse(&self, p: &BigUint) -> Result<Self> {
		// 1 / (a + bi) = (a - bi) / (a^2 + b^2)
		let norm = self.norm(p);
		if num_traits::Zero::is_zero(&norm) {
			return Err(Error::ArithmeticFailure);
		}
		let norm_inv = bignum::mod_inv(&norm, p)?;
		let conj = self.conjugate(p);
		Ok(Complex {
			real: bignum::mod_mul(&conj.real, &norm_inv, p),
			imag: bignum::mod_mul(&conj.imag, &norm_inv, p),
		})
	}
}
