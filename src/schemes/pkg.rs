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

//! Shared Private Key Generator construction used by both BF-IBE and
//! Hess-IBS: the two schemes differ only in how they use the extracted
//! key, not in how the PKG is set up.

use num_bigint::BigUint;

use crate::context::CryptoContext;
use crate::curve::{wnaf, AffinePoint, Curve};
use crate::error::Result;
use crate::hash::{self, HashFunction};
use crate::schemes::SecurityLevel;

/// Public parameters shared by the PKG and every participant: the curve,
/// the subgroup order, the base point, the PKG's public key `P_pub = [s]P`,
/// and the hash function fixed by the security level.
#[derive(Clone, Debug)]
pub struct PublicParameters {
	pub curve: Curve,
	pub q: BigUint,
	pub p_base: AffinePoint<BigUint>,
	pub p_pub: AffinePoint<BigUint>,
	pub hash: HashFunction,
}

/// Generate fresh curve parameters, draw a master secret `s` uniformly in
/// `[2, q-1]`, and publish `P_pub = [s]P`.
pub fn setup(level: SecurityLevel, ctx: &mut CryptoContext) -> Result<(PublicParameters, BigUint)> {
	let generated = crate::params::generate(level, ctx)?;
	let two = BigUint::from(2u32);
	let s = ctx.random_range(&two, &(&generated.q - BigUint::from(1u32)));
	let p_pub = wnaf::w_naf_multiply(&s, &generated.base_point, &generated.curve)?;

	Ok((
		PublicParameters {
			curve: generated.curve,
			q: generated.q,
			p_base: generated.base_point,
			p_pub,
			hash: generated.hash,
		},
		s,
	))
}

/// `Q_id <- hash_to_point(id)`; private key is `[s] Q_id`.
pub fn extract(id: &[u8], master_secret: &BigUint, params: &PublicParameters) -> Result<AffinePoint<BigUint>> {
	let q_id = hash::hash_to_point(id, &params.curve, &params.q, params.hash)?;
	wnaf::w_naf_multiply(master_secret, &q_id, &params.curve)
}
