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

//! The three end-user schemes built on the arithmetic core: BF-IBE,
//! Hess-IBS, and BSW CP-ABE.

pub mod abe;
pub mod bf_ibe;
pub mod hess_ibs;

mod pkg;

pub use pkg::PublicParameters;

use crate::hash::HashFunction;

/// Selects the `(n_q, n_p, hash)` triple used by [`crate::params::generate`].
/// `L0` is for tests and benchmarks; `L2` (SHA-256, 256/1536-bit) is a
/// reasonable default for production use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
	L0,
	L1,
	L2,
	L3,
	L4,
}

impl SecurityLevel {
	/// `(subgroup order bits, field prime bits, hash function)`.
	pub const fn table(self) -> (u32, u32, HashFunction) {
		match self {
			SecurityLevel::L0 => (160, 512, HashFunction::Sha1),
			SecurityLevel::L1 => (224, 1024, HashFunction::Sha224),
			SecurityLevel::L2 => (256, 1536, HashFunction::Sha256),
			SecurityLevel::L3 => (384, 3840, HashFunction::Sha384),
			SecurityLevel::L4 => (512, 7680, HashFunction::Sha512),
		}
	}
}
