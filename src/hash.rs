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

//! Hash-to-range, hash-to-point, canonical F_p² encoding, and the keyed
//! pseudo-random byte stream used by BF-IBE.

use num_bigint::BigUint;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use crate::bignum;
use crate::curve::{AffinePoint, Curve};
use crate::error::{Error, Result};
use crate::fp2::Complex;

/// The attempt budget beyond which `hash_to_point` gives up and reports an
/// arithmetic failure. In practice each counter step finds a valid point
/// with probability ~1/2, so this is reached only for a malformed curve.
const HASH_TO_POINT_ATTEMPT_LIMIT: u32 = 4096;

/// The SHA family member backing a [`crate::schemes::SecurityLevel`].
/// Treated as an opaque primitive: this module never reasons about its
/// internals, only about its digest length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFunction {
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
}

impl HashFunction {
	/// The digest length in bytes.
	pub const fn digest_len(self) -> usize {
		match self {
			HashFunction::Sha1 => 20,
			HashFunction::Sha224 => 28,
			HashFunction::Sha256 => 32,
			HashFunction::Sha384 => 48,
			HashFunction::Sha512 => 64,
		}
	}

	/// `H(data)`.
	pub fn digest(self, data: &[u8]) -> Vec<u8> {
		match self {
			HashFunction::Sha1 => Sha1::digest(data).to_vec(),
			HashFunction::Sha224 => Sha224::digest(data).to_vec(),
			HashFunction::Sha256 => Sha256::digest(data).to_vec(),
			HashFunction::Sha384 => Sha384::digest(data).to_vec(),
			HashFunction::Sha512 => Sha512::digest(data).to_vec(),
		}
	}
}

/// Iterated-digest construction producing enough pseudo-random bytes to
/// cover `modulus`, reduced mod `modulus`. Deterministic in `s`.
pub fn hash_to_range(s: &[u8], modulus: &BigUint, h: HashFunction) -> BigUint {
	let needed = (modulus.bits() as usize).div_ceil(8);
	let mut out = Vec::with_capacity(needed + h.digest_len());
	let mut counter: u32 = 0;
	while out.len() < needed {
		let mut input = Vec::with_capacity(s.len() + 4);
		input.extend_from_slice(s);
		input.extend_from_slice(&counter.to_be_bytes());
		out.extend_from_slice(&h.digest(&input));
		counter += 1;
	}
	out.truncate(needed);
	BigUint::from_bytes_be(&out) % modulus
}

/// Hash `id` to a point of order `q` on `curve`, by hashing to a candidate
/// `x`, solving `y^2 = x^3 + 1` via the `p ≡ 3 mod 4` square-root formula
/// (rehashing with an incremented counter on failure), then cofactor
/// clearing by `(p+1)/q`.
pub fn hash_to_point(id: &[u8], curve: &Curve, q: &BigUint, h: HashFunction) -> Result<AffinePoint<BigUint>> {
	let p = &curve.p;
	let cofactor = (p + BigUint::from(1u32)) / q;

	for counter in 0..HASH_TO_POINT_ATTEMPT_LIMIT {
		let mut input = Vec::with_capacity(id.len() + 4);
		input.extend_from_slice(id);
		input.extend_from_slice(&counter.to_be_bytes());
		let x = hash_to_range(&input, p, h);

		let rhs = bignum::mod_add(&bignum::mod_mul(&bignum::mod_mul(&x, &x, p), &x, p), &BigUint::from(1u32), p);
		let y = bignum::mod_sqrt_p3mod4(&rhs, p);
		if bignum::mod_mul(&y, &y, p) == rhs {
			let candidate = AffinePoint::finite(x, y);
			let cleared = crate::curve::wnaf::w_naf_multiply(&cofactor, &candidate, curve)?;
			if !cleared.is_infinity() {
				return Ok(cleared);
			}
		}
	}
	Err(Error::PointGenerationFailed)
}

/// Fixed-width big-endian encoding of `v`'s two components, concatenated.
/// `swap` exchanges which component is written first.
pub fn canonical(v: &Complex, p: &BigUint, swap: bool) -> Vec<u8> {
	let width = (p.bits() as usize).div_ceil(8);
	let real = to_fixed_be(&v.real, width);
	let imag = to_fixed_be(&v.imag, width);
	if swap {
		[imag, real].concat()
	} else {
		[real, imag].concat()
	}
}

fn to_fixed_be(x: &BigUint, width: usize) -> Vec<u8> {
	let raw = x.to_bytes_be();
	let mut out = vec![0u8; width];
	let start = width.saturating_sub(raw.len());
	out[start..].copy_from_slice(&raw[raw.len().saturating_sub(width)..]);
	out
}

/// A keyed pseudo-random byte stream: `H(key || counter)` repeated and
/// concatenated until `len` bytes are produced.
pub fn hash_bytes(len: usize, key: &[u8], h: HashFunction) -> Vec<u8> {
	let mut out = Vec::with_capacity(len + h.digest_len());
	let mut counter: u32 = 0;
	while out.len() < len {
		let mut input = Vec::with_capacity(key.len() + 4);
		input.extend_from_slice(key);
		input.extend_from_slice(&counter.to_be_bytes());
		out.extend_from_slice(&h.digest(&input));
		counter += 1;
	}
	out.truncate(len);
	out
}

/// XOR two equal-length byte slices.
pub fn xor(a: &[u8], b: &[u8]) -> Vec<u8> {
	a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn digest_lengths_match_rfc() {
		assert_eq!(HashFunction::Sha1.digest(b"abc").len(), 20);
		assert_eq!(HashFunction::Sha256.digest(b"abc").len(), 32);
		assert_eq!(HashFunction::Sha512.digest(b"abc").len(), 64);
	}

	#[test]
	fn hash_to_range_is_deterministic_and_in_range() {
		let modulus = BigUint::from(104729u32);
		let a = hash_to_range(b"identity", &modulus, HashFunction::Sha256);
		let b = hash_to_range(b"identity", &modulus, HashFunction::Sha256);
		assert_eq!(a, b);
		assert!(a < modulus);
	}

	#[test]
	fn hash_bytes_respects_requested_length() {
		let out = hash_bytes(100, b"key", HashFunction::Sha256);
		assert_eq!(out.len(), 100);
	}

	#[test]
	fn canonical_round_trips() {
		let p = BigUint::from(104723u32);
		let v = Complex::new(BigUint::from(42u32), BigUint::from(1337u32));
		let bytes = canonical(&v, &p, false);
		let width = bytes.len() / 2;
		let real = BigUint::from_bytes_be(&bytes[..width]);
		let imag = BigUint::from_bytes_be(&bytes[width..]);
		assert_eq!(Complex::new(real, imag), v);
	}

	#[test]
	fn hash_to_point_produces_point_of_order_q() {
		use crate::schemes::SecurityLevel;
		use rand_chacha::ChaCha20Rng;
		use rand_core::SeedableRng;

		let mut rng = ChaCha20Rng::seed_from_u64(3);
		let mut ctx = crate::context::CryptoContext::new(&mut rng, HashFunction::Sha1);
		let setup = crate::params::generate(SecurityLevel::L0, &mut ctx).unwrap();

		let q_id = hash_to_point(b"alice@example.org", &setup.curve, &setup.q, setup.hash).unwrap();
		assert!(q_id.is_on_curve(&setup.curve));
		let q_times = crate::curve::wnaf::w_naf_multiply(&setup.q, &q_id, &setup.curve).unwrap();
		assert!(q_times.is_infinity());
	}
}
