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

//! Curve parameter generation: a Solinas prime subgroup order `q`, a prime
//! field `p = 12rq - 1`, and a base point of order `q`.

use num_bigint::BigUint;
use num_traits::One;

use crate::bignum;
use crate::context::CryptoContext;
use crate::curve::{AffinePoint, Curve};
use crate::error::{Error, Result};
use crate::schemes::SecurityLevel;

/// Attempts allowed while searching for a Solinas prime of the requested
/// bit length before giving up.
pub const SOLINAS_ATTEMPT_LIMIT: u32 = 100;
/// Attempts allowed while searching for the field prime `p = 12rq - 1`.
/// Primes thin out as `n_p` grows (density ~`1/ln(2^n_p)`), so this needs a
/// much larger budget than [`SOLINAS_ATTEMPT_LIMIT`] to stay reliable at the
/// higher security levels.
pub const FIELD_PRIME_ATTEMPT_LIMIT: u32 = 4096;
/// Attempts allowed while searching for a base point of prime order.
pub const POINT_ATTEMPT_LIMIT: u32 = 100;

const MILLER_RABIN_ROUNDS: u32 = 20;

/// The curve, subgroup order, base point and hash function produced by
/// [`generate`] for a given [`SecurityLevel`]. Shared by every scheme's
/// `setup`.
#[derive(Clone, Debug)]
pub struct CurveParams {
	pub curve: Curve,
	pub q: BigUint,
	pub base_point: AffinePoint<BigUint>,
	pub hash: crate::hash::HashFunction,
}

/// Sample a Solinas-form prime `2^a ± 2^b ± 1` of exactly `n_bits` bits, with
/// `a = n_bits - 1` (so the top bit is fixed) and `b` drawn uniformly from
/// `(0, a)`.
fn random_solinas_prime(n_bits: u32, ctx: &mut CryptoContext) -> Result<BigUint> {
	let a = n_bits - 1;
	let two_a = BigUint::one() << a;

	for _ in 0..SOLINAS_ATTEMPT_LIMIT {
		let b = 1 + (ctx.random_below(&BigUint::from((a - 1) as u64)).to_u32_digits().first().copied().unwrap_or(0));
		let two_b = BigUint::one() << b;

		for candidate in [&two_a + &two_b + BigUint::one(), &two_a + &two_b - BigUint::one(), &two_a - &two_b + BigUint::one(), &two_a - &two_b - BigUint::one()]
		{
			if candidate.bits() as u32 != n_bits {
				continue;
			}
			if ctx.is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
				return Ok(candidate);
			}
		}
	}
	Err(Error::SolinasPrimeGenerationFailed)
}

/// Find a random affine point of order exactly `q` on `curve`, whose order
/// (the curve's point count) is `12 r q`.
fn random_base_point(curve: &Curve, r: &BigUint, q: &BigUint, ctx: &mut CryptoContext) -> Result<AffinePoint<BigUint>> {
	let p = &curve.p;
	let cofactor = BigUint::from(12u32) * r;

	for _ in 0..POINT_ATTEMPT_LIMIT {
		let x = ctx.random_below(p);
		let rhs = bignum::mod_add(&bignum::mod_mul(&bignum::mod_mul(&x, &x, p), &x, p), &BigUint::one(), p);
		let y = bignum::mod_sqrt_p3mod4(&rhs, p);
		if bignum::mod_mul(&y, &y, p) != rhs {
			continue;
		}
		let candidate = AffinePoint::finite(x, y);
		let base = crate::curve::wnaf::w_naf_multiply(&cofactor, &candidate, curve)?;
		if base.is_infinity() {
			continue;
		}
		let order_check = crate::curve::wnaf::w_naf_multiply(q, &base, curve)?;
		if order_check.is_infinity() {
			return Ok(base);
		}
	}
	Err(Error::PointGenerationFailed)
}

/// Generate fresh curve parameters at the given security level: a Solinas
/// prime subgroup order `q`, a field prime `p = 12rq - 1`, and a base point
/// of order `q` on `y^2 = x^3 + 1` over F_p.
pub fn generate(level: SecurityLevel, ctx: &mut CryptoContext) -> Result<CurveParams> {
	let (n_q, n_p, hash) = level.table();
	let q = random_solinas_prime(n_q, ctx)?;

	let twelve_q = BigUint::from(12u32) * &q;
	let r_lo = ((BigUint::one() << (n_p - 1)) / &twelve_q).max(BigUint::one());
	let r_hi = ((BigUint::one() << n_p) / &twelve_q).max(&r_lo + BigUint::one());

	let mut found = None;
	for _ in 0..FIELD_PRIME_ATTEMPT_LIMIT {
		let r = ctx.random_range(&r_lo, &r_hi);
		let candidate = &twelve_q * &r - BigUint::one();
		if candidate.bits() as u32 == n_p && ctx.is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
			found = Some((candidate, r));
			break;
		}
	}
	let (p, r) = found.ok_or(Error::SolinasPrimeGenerationFailed)?;

	let curve = Curve::supersingular(p);
	let base_point = random_base_point(&curve, &r, &q, ctx)?;

	Ok(CurveParams { curve, q, base_point, hash })
}

#[cfg(test)]
mod test {
	use super::*;
	use rand_chacha::ChaCha20Rng;
	use rand_core::SeedableRng;

	#[test]
	fn generate_yields_consistent_base_point() {
		let mut rng = ChaCha20Rng::seed_from_u64(1);
		let mut ctx = CryptoContext::new(&mut rng, crate::hash::HashFunction::Sha1);
		let params = generate(SecurityLevel::L0, &mut ctx).unwrap();

		assert!(params.base_point.is_on_curve(&params.curve));
		assert!(!params.base_point.is_infinity());
		let q_times = crate::curve::wnaf::w_naf_multiply(&params.q, &params.base_point, &params.curve).unwrap();
		assert!(q_times.is_infinity());
		assert!(ctx.is_probable_prime(&params.curve.p, 20));
		assert!(ctx.is_probable_prime(&params.q, 20));
	}
}
