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

//! [`CryptoContext`] bundles the single randomness source and hash function
//! selection that every operation in this crate is threaded through,
//! replacing the source's ambient globals (Design Note, §9).

use num_bigint::BigUint;
use rand_core::RngCore;

use crate::bignum;
use crate::hash::HashFunction;

/// The randomness source and hash function an operation needs. Borrows its
/// RNG rather than owning it, so callers keep control of reseeding and
/// thread-local vs. OS-backed entropy.
pub struct CryptoContext<'a> {
	rng: &'a mut dyn RngCore,
	hash: HashFunction,
}

impl<'a> CryptoContext<'a> {
	pub fn new(rng: &'a mut dyn RngCore, hash: HashFunction) -> Self {
		CryptoContext { rng, hash }
	}

	pub fn hash(&self) -> HashFunction {
		self.hash
	}

	pub fn digest(&self, data: &[u8]) -> Vec<u8> {
		self.hash.digest(data)
	}

	pub fn random_bytes(&mut self, n: usize) -> Vec<u8> {
		bignum::random_bytes(n, self.rng)
	}

	pub fn random_below(&mut self, bound: &BigUint) -> BigUint {
		bignum::random_below(bound, self.rng)
	}

	pub fn random_range(&mut self, lo: &BigUint, hi: &BigUint) -> BigUint {
		bignum::random_range(lo, hi, self.rng)
	}

	pub fn is_probable_prime(&mut self, n: &BigUint, rounds: u32) -> bool {
		bignum::is_probable_prime(n, rounds, self.rng)
	}

	pub fn fill_bytes(&mut self, buf: &mut [u8]) {
		self.rng.fill_bytes(buf)
	}
}
