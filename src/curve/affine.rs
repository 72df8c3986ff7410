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

//! Affine points on `y^2 = x^3 + a*x + b`, generic over the base field `F`
//! (`BigUint` for the F_p instantiation, [`crate::fp2::Complex`] for F_p²).

use crate::curve::Curve;
use crate::error::Result;
use crate::field::Field;

/// A point on the curve, or the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AffinePoint<F: Field> {
	Infinity,
	Finite { x: F, y: F },
}

impl<F: Field> AffinePoint<F> {
	pub fn finite(x: F, y: F) -> Self {
		AffinePoint::Finite { x, y }
	}

	pub fn is_infinity(&self) -> bool {
		matches!(self, AffinePoint::Infinity)
	}

	pub fn x(&self) -> Option<&F> {
		match self {
			AffinePoint::Finite { x, .. } => Some(x),
			AffinePoint::Infinity => None,
		}
	}

	pub fn y(&self) -> Option<&F> {
		match self {
			AffinePoint::Finite { y, .. } => Some(y),
			AffinePoint::Infinity => None,
		}
	}

	/// Whether `(x, y)` actually lies on `curve`.
	pub fn is_on_curve(&self, curve: &Curve) -> bool {
		match self {
			AffinePoint::Infinity => true,
			AffinePoint::Finite { x, y } => {
				let lhs = y.square(&curve.p);
				let a = F::from_base(&curve.a);
				let b = F::from_base(&curve.b);
				let rhs = x.square(&curve.p).mul(x, &curve.p).add(&a.mul(x, &curve.p), &curve.p).add(&b, &curve.p);
				lhs == rhs
			},
		}
	}

	/// `-P`; the negation of infinity is infinity.
	pub fn neg(&self, curve: &Curve) -> Self {
		match self {
			AffinePoint::Infinity => AffinePoint::Infinity,
			AffinePoint::Finite { x, y } => AffinePoint::Finite { x: x.clone(), y: y.neg(&curve.p) },
		}
	}

	/// `2P`, using the tangent-doubling formula. Infinity-closed.
	pub fn double(&self, curve: &Curve) -> Result<Self> {
		let (x, y) = match self {
			AffinePoint::Infinity => return Ok(AffinePoint::Infinity),
			AffinePoint::Finite { x, y } => (x, y),
		};
		if y.is_zero() {
			return Ok(AffinePoint::Infinity);
		}
		let p = &curve.p;
		let a = F::from_base(&curve.a);
		let three = F::from_base(&num_bigint::BigUint::from(3u32));
		let two = F::from_base(&num_bigint::BigUint::from(2u32));

		let num = three.mul(&x.square(p), p).add(&a, p);
		let den = two.mul(y, p);
		let m = num.div(&den, p)?;

		let x3 = m.square(p).sub(&x.add(x, p), p);
		let y3 = m.mul(&x.sub(&x3, p), p).sub(y, p);
		Ok(AffinePoint::Finite { x: x3, y: y3 })
	}

	/// `P + Q`, using the standard chord-and-tangent group law.
	pub fn add(&self, other: &Self, curve: &Curve) -> Result<Self> {
		match (self, other) {
			(AffinePoint::Infinity, _) => Ok(other.clone()),
			(_, AffinePoint::Infinity) => Ok(self.clone()),
			(AffinePoint::Finite { x: x1, y: y1 }, AffinePoint::Finite { x: x2, y: y2 }) => {
				let p = &curve.p;
				if x1 == x2 {
					if y1 == &y2.neg(p) || y1.is_zero() {
						return Ok(AffinePoint::Infinity);
					}
					return self.double(curve);
				}
				let num = y2.sub(y1, p);
				let den = x2.sub(x1, p);
				let m = num.div(&den, p)?;
				let x3 = m.square(p).sub(x1, p).sub(x2, p);
				let y3 = m.mul(&x1.sub(&x3, p), p).sub(y1, p);
				Ok(AffinePoint::Finite { x: x3, y: y3 })
			},
		}
	}
}
