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

//! Hess Identity-Based Signatures.

use num_bigint::BigUint;

use crate::context::CryptoContext;
use crate::curve::{wnaf, AffinePoint};
use crate::error::Result;
use crate::field::Field;
use crate::hash;
use crate::schemes::pkg::{self, PublicParameters};

pub use pkg::setup;

/// `Q_id <- hash_to_point(id)`; return `[s] Q_id`, the signer's private key.
pub fn extract(id: &[u8], master_secret: &BigUint, params: &PublicParameters) -> Result<AffinePoint<BigUint>> {
	pkg::extract(id, master_secret, params)
}

/// A Hess-IBS signature `(U, v)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
	pub u: AffinePoint<BigUint>,
	pub v: BigUint,
}

/// Sign `msg` under `id` with private key `sk_id`.
///
/// Draws a fresh nonce `k` from `ctx` on every call; the function takes no
/// nonce parameter, so a caller cannot accidentally reuse one across
/// messages (doing so leaks `sk_id`).
pub fn sign(msg: &[u8], sk_id: &AffinePoint<BigUint>, params: &PublicParameters, ctx: &mut CryptoContext) -> Result<Signature> {
	let one = BigUint::from(1u32);
	let k = ctx.random_range(&one, &(&params.q - &one));

	let r = crate::pairing::tate(&params.p_base, &params.p_base, &params.q, &params.curve)?.pow(&k, &params.curve.p);
	let r_bytes = hash::canonical(&r, &params.curve.p, false);

	let mut input = Vec::with_capacity(msg.len() + r_bytes.len());
	input.extend_from_slice(msg);
	input.extend_from_slice(&r_bytes);
	let v = hash::hash_to_range(&input, &params.q, params.hash);

	let v_sk = wnaf::w_naf_multiply(&v, sk_id, &params.curve)?;
	let k_p = wnaf::w_naf_multiply(&k, &params.p_base, &params.curve)?;
	let u = v_sk.add(&k_p, &params.curve)?;

	Ok(Signature { u, v })
}

/// Verify `signature` over `msg` under `id`.
pub fn verify(msg: &[u8], signature: &Signature, id: &[u8], params: &PublicParameters) -> Result<bool> {
	let q_id = hash::hash_to_point(id, &params.curve, &params.q, params.hash)?;

	let lhs = crate::pairing::tate(&signature.u, &params.p_base, &params.q, &params.curve)?;
	let rhs_base = crate::pairing::tate(&q_id, &params.p_pub, &params.q, &params.curve)?;
	let neg_v = &params.q - (&signature.v % &params.q);
	let rhs_inv = rhs_base.pow(&neg_v, &params.curve.p);
	let r_prime = lhs.mul(&rhs_inv, &params.curve.p);

	let r_bytes = hash::canonical(&r_prime, &params.curve.p, false);
	let mut input = Vec::with_capacity(msg.len() + r_bytes.len());
	input.extend_from_slice(msg);
	input.extend_from_slice(&r_bytes);
	let v_prime = hash::hash_to_range(&input, &params.q, params.hash);

	Ok(v_prime == signature.v)
}
