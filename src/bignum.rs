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

//! A small facade around `num-bigint`'s `BigUint`.
//!
//! Every operation above this module takes its modulus as an explicit
//! argument rather than carrying it on the integer itself, matching the
//! "modular integer carries no modulus" data model. This is also the one
//! seam where the bignum backend could be swapped for another crate without
//! touching the rest of the arithmetic core.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::RngCore;

use crate::error::{Error, Result};

/// `(a + b) mod m`.
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
	(a + b) % m
}

/// `(a - b) mod m`, always returning a value in `[0, m)`.
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
	let a = a % m;
	let b = b % m;
	if a >= b {
		a - b
	} else {
		m - (b - a)
	}
}

/// `-a mod m`.
pub fn mod_neg(a: &BigUint, m: &BigUint) -> BigUint {
	mod_sub(&BigUint::zero(), a, m)
}

/// `(a * b) mod m`.
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
	(a * b) % m
}

/// `base^exp mod m`.
pub fn mod_pow(base: &BigUint, exp: &BigUint, m: &BigUint) -> BigUint {
	base.modpow(exp, m)
}

/// The modular inverse of `a` mod `m`, via the extended Euclidean algorithm.
///
/// Fails with [`Error::ArithmeticFailure`] if `gcd(a, m) != 1`.
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Result<BigUint> {
	let a = a % m;
	if a.is_zero() {
		return Err(Error::ArithmeticFailure);
	}

	// Extended Euclidean algorithm over signed bigints, computed without a
	// signed bignum type by tracking sign alongside magnitude.
	let (mut old_r, mut r) = (a.clone(), m.clone());
	let (mut old_s, mut s): (BigUint, BigUint) = (BigUint::one(), BigUint::zero());
	let (mut old_s_neg, mut s_neg) = (false, false);

	while !r.is_zero() {
		let q = &old_r / &r;
		let new_r = &old_r - &q * &r;
		old_r = core::mem::replace(&mut r, new_r);

		let qs = &q * &s;
		let (new_s, new_s_neg) = if old_s_neg == s_neg {
			if old_s >= qs {
				(&old_s - &qs, old_s_neg)
			} else {
				(&qs - &old_s, !old_s_neg)
			}
		} else {
			(&old_s + &qs, old_s_neg)
		};
		old_s = core::mem::replace(&mut s, new_s);
		old_s_neg = core::mem::replace(&mut s_neg, new_s_neg);
	}

	if old_r != BigUint::one() {
		return Err(Error::ArithmeticFailure);
	}

	let inv = if old_s_neg { m - (old_s % m) } else { old_s % m };
	Ok(inv)
}

/// Sample a uniform integer in `[0, bound)` by rejection sampling on raw bytes.
pub fn random_below<R: RngCore + ?Sized>(bound: &BigUint, rng: &mut R) -> BigUint {
	if bound.is_zero() {
		return BigUint::zero();
	}
	let byte_len = (bound.bits() as usize).div_ceil(8).max(1);
	loop {
		let mut buf = vec![0u8; byte_len];
		rng.fill_bytes(&mut buf);
		// Clear the excess high bits so the rejection rate stays bounded.
		let excess_bits = byte_len * 8 - bound.bits() as usize;
		if excess_bits > 0 {
			buf[0] &= 0xffu8 >> excess_bits;
		}
		let candidate = BigUint::from_bytes_be(&buf);
		if &candidate < bound {
			return candidate;
		}
	}
}

/// Sample a uniform integer in `[lo, hi]` inclusive.
pub fn random_range<R: RngCore + ?Sized>(lo: &BigUint, hi: &BigUint, rng: &mut R) -> BigUint {
	let span = hi - lo + BigUint::one();
	lo + random_below(&span, rng)
}

/// Sample `n` uniformly random bytes.
pub fn random_bytes<R: RngCore + ?Sized>(n: usize, rng: &mut R) -> Vec<u8> {
	let mut buf = vec![0u8; n];
	rng.fill_bytes(&mut buf);
	buf
}

/// Small odd primes used to reject obvious composites before paying for
/// Miller-Rabin's modular exponentiations.
const TRIAL_DIVISION_PRIMES: &[u32] = &[
	3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
	101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
	197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// `true` if `n` survives division by every prime in [`TRIAL_DIVISION_PRIMES`],
/// i.e. `n` is one of those primes or coprime to all of them.
fn survives_trial_division(n: &BigUint) -> bool {
	TRIAL_DIVISION_PRIMES
		.iter()
		.all(|&small| *n == BigUint::from(small) || n % small != BigUint::zero())
}

/// Miller-Rabin probable-primality test, preceded by trial division against
/// small primes.
///
/// `num-bigint` does not ship a primality test, so this crate provides its
/// own -- the one place where "an external bignum library" (per the original
/// scope note) falls short and the facade has to do real work.
pub fn is_probable_prime<R: RngCore + ?Sized>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
	let zero = BigUint::zero();
	let one = BigUint::one();
	let two = &one + &one;

	if *n < two {
		return false;
	}
	if *n == two || *n == BigUint::from(3u32) {
		return true;
	}
	if (n & &one) == zero {
		return false;
	}
	if !survives_trial_division(n) {
		return false;
	}

	// write n - 1 = d * 2^s with d odd
	let n_minus_one = n - &one;
	let mut d = n_minus_one.clone();
	let mut s = 0u32;
	while (&d & &one) == zero {
		d >>= 1;
		s += 1;
	}

	let n_minus_two = n - &two;
	'witness: for _ in 0..rounds {
		let a = random_range(&two, &n_minus_two, rng);
		let mut x = a.modpow(&d, n);
		if x == one || x == n_minus_one {
			continue;
		}
		for _ in 0..s.saturating_sub(1) {
			x = (&x * &x) % n;
			if x == n_minus_one {
				continue 'witness;
			}
		}
		return false;
	}
	true
}

/// A modular square root of `a` mod `p`, valid only when `p ≡ 3 (mod 4)`.
///
/// Returns a candidate `r` with `r^2 ≡ a (mod p)` whenever one exists; the
/// caller (`hash_to_point`) is responsible for checking the result actually
/// squares back to `a`, since this formula produces *a* square root only if
/// `a` is a quadratic residue in the first place.
pub fn mod_sqrt_p3mod4(a: &BigUint, p: &BigUint) -> BigUint {
	let one = BigUint::one();
	let four = &one + &one + &one + &one;
	let exp = (p + &one) / four;
	a.modpow(&exp, p)
}

#[cfg(test)]
mod test {
	use super::*;
	use rand_chacha::ChaCha20Rng;
	use rand_core::SeedableRng;

	fn rng() -> ChaCha20Rng {
		ChaCha20Rng::seed_from_u64(42)
	}

	#[test]
	fn mod_sub_wraps_around() {
		let m = BigUint::from(7u32);
		assert_eq!(mod_sub(&BigUint::from(2u32), &BigUint::from(5u32), &m), BigUint::from(4u32));
	}

	#[test]
	fn mod_inv_round_trips() {
		let m = BigUint::from(97u32);
		let a = BigUint::from(13u32);
		let inv = mod_inv(&a, &m).unwrap();
		assert_eq!(mod_mul(&a, &inv, &m), BigUint::one());
	}

	#[test]
	fn mod_inv_rejects_non_coprime() {
		let m = BigUint::from(10u32);
		assert_eq!(mod_inv(&BigUint::from(4u32), &m), Err(Error::ArithmeticFailure));
	}

	#[test]
	fn primality_matches_known_values() {
		let mut r = rng();
		assert!(is_probable_prime(&BigUint::from(104729u32), 20, &mut r));
		assert!(!is_probable_prime(&BigUint::from(104730u32), 20, &mut r));
		assert!(is_probable_prime(&BigUint::from(2u32), 20, &mut r));
		assert!(!is_probable_prime(&BigUint::from(1u32), 20, &mut r));
	}

	#[test]
	fn random_below_stays_in_range() {
		let mut r = rng();
		let bound = BigUint::from(1000u32);
		for _ in 0..50 {
			assert!(random_below(&bound, &mut r) < bound);
		}
	}
}
