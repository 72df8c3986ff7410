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

//! Elliptic-curve arithmetic: affine points over F_p and F_p², and w-NAF
//! scalar multiplication, generic over the [`crate::field::Field`] trait.

pub mod affine;
pub mod wnaf;

pub use affine::AffinePoint;

use num_bigint::BigUint;

/// `y^2 = x^3 + a*x + b` over `F_p`. This crate only ever instantiates
/// `a = 0, b = 1` (the Type-1 supersingular family), but the group law is
/// written against the general Weierstrass form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
	pub a: BigUint,
	pub b: BigUint,
	pub p: BigUint,
}

impl Curve {
	/// The Type-1 supersingular curve `y^2 = x^3 + 1` over `F_p`.
	pub fn supersingular(p: BigUint) -> Self {
		Curve { a: BigUint::from(0u32), b: BigUint::from(1u32), p }
	}
}
