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

//! The common interface shared by F_p (`BigUint`) and F_p² ([`crate::fp2::Complex`]).
//!
//! The affine curve arithmetic in [`crate::curve`] and the scalar
//! multiplication in [`crate::curve::wnaf`] are written once, generically
//! over this trait, instead of duplicated for the base field and the
//! quadratic extension -- the curve over F_p and the curve over F_p² are
//! "the same algebra lifted", as the data model puts it.

use num_bigint::BigUint;

use crate::error::Result;

/// A field in which every operation is reduced modulo an externally supplied
/// prime `p` (no value here carries its own modulus).
pub trait Field: Clone + PartialEq + core::fmt::Debug {
	/// The additive identity.
	fn zero() -> Self;
	/// The multiplicative identity.
	fn one() -> Self;
	/// Whether `self` is the additive identity.
	fn is_zero(&self) -> bool {
		*self == Self::zero()
	}
	/// Lift an F_p element into this field (identity for F_p itself).
	fn from_base(x: &BigUint) -> Self;

	fn add(&self, other: &Self, p: &BigUint) -> Self;
	fn sub(&self, other: &Self, p: &BigUint) -> Self;
	fn neg(&self, p: &BigUint) -> Self {
		Self::zero().sub(self, p)
	}
	fn mul(&self, other: &Self, p: &BigUint) -> Self;
	fn square(&self, p: &BigUint) -> Self {
		self.mul(self, p)
	}
	/// The multiplicative inverse, or [`crate::error::Error::ArithmeticFailure`]
	/// if `self` is a zero divisor.
	fn inverse(&self, p: &BigUint) -> Result<Self>;

	/// `self / other`, i.e. `self * other.inverse()`.
	fn div(&self, other: &Self, p: &BigUint) -> Result<Self> {
		Ok(self.mul(&other.inverse(p)?, p))
	}
}

impl Field for BigUint {
	fn zero() -> Self {
		num_traits::Zero::zero()
	}

	fn one() -> Self {
		num_traits::One::one()
	}

	fn from_base(x: &BigUint) -> Self {
		x.clone()
	}

	fn add(&self, other: &Self, p: &BigUint) -> Self {
		crate::bignum::mod_add(self, other, p)
	}

	fn sub(&self, other: &Self, p: &BigUint) -> Self {
		crate::bignum::mod_sub(self, other, p)
	}

	fn mul(&self, other: &Self, p: &BigUint) -> Self {
		crate::bignum::mod_mul(self, other, p)
	}

	fn inverse(&self, p: &BigUint) -> Result<Self> {
		crate::bignum::mod_inv(self, p)
	}
}
