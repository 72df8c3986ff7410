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

//! Boneh-Franklin Identity-Based Encryption.

use num_bigint::BigUint;

use crate::context::CryptoContext;
use crate::curve::{wnaf, AffinePoint};
use crate::error::{Error, Result};
use crate::hash;
use crate::schemes::pkg::{self, PublicParameters};

pub use pkg::setup;

/// `Q_id <- hash_to_point(id)`; return `[s] Q_id`, the recipient's private key.
pub fn extract(id: &[u8], master_secret: &BigUint, params: &PublicParameters) -> Result<AffinePoint<BigUint>> {
	pkg::extract(id, master_secret, params)
}

/// A BF-IBE ciphertext `(U, V, W)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
	pub u: AffinePoint<BigUint>,
	pub v: Vec<u8>,
	pub w: Vec<u8>,
}

/// Encrypt `msg` to `id` under `params`.
pub fn encrypt(msg: &[u8], id: &[u8], params: &PublicParameters, ctx: &mut CryptoContext) -> Result<Ciphertext> {
	if msg.is_empty() {
		return Err(Error::LengthZero);
	}
	if id.is_empty() {
		return Err(Error::NullArgument);
	}

	let q_id = hash::hash_to_point(id, &params.curve, &params.q, params.hash)?;
	let rho = ctx.random_bytes(params.hash.digest_len());
	let t = ctx.digest(msg);

	let mut rho_t = Vec::with_capacity(rho.len() + t.len());
	rho_t.extend_from_slice(&rho);
	rho_t.extend_from_slice(&t);
	let l = hash::hash_to_range(&rho_t, &params.q, params.hash);

	let u = wnaf::w_naf_multiply(&l, &params.p_base, &params.curve)?;
	let theta = crate::pairing::tate(&params.p_pub, &q_id, &params.q, &params.curve)?.pow(&l, &params.curve.p);
	let z = hash::canonical(&theta, &params.curve.p, false);
	let w = ctx.digest(&z);
	let v = hash::xor(&w[..rho.len().min(w.len())], &rho[..rho.len().min(w.len())]);

	let w_stream = hash::hash_bytes(msg.len(), &rho, params.hash);
	let w_out = hash::xor(&w_stream, msg);

	Ok(Ciphertext { u, v, w: w_out })
}

/// Decrypt `ciphertext` using the recipient's private key `sk_id`.
pub fn decrypt(ciphertext: &Ciphertext, sk_id: &AffinePoint<BigUint>, params: &PublicParameters) -> Result<Vec<u8>> {
	let theta_prime = crate::pairing::tate(&ciphertext.u, sk_id, &params.q, &params.curve)?;
	let z_prime = hash::canonical(&theta_prime, &params.curve.p, false);
	let w_prime = params.hash.digest(&z_prime);
	let rho_prime = hash::xor(&w_prime[..ciphertext.v.len().min(w_prime.len())], &ciphertext.v);

	let m_prime = hash::xor(&hash::hash_bytes(ciphertext.w.len(), &rho_prime, params.hash), &ciphertext.w);
	let t_prime = params.hash.digest(&m_prime);

	let mut rho_t_prime = Vec::with_capacity(rho_prime.len() + t_prime.len());
	rho_t_prime.extend_from_slice(&rho_prime);
	rho_t_prime.extend_from_slice(&t_prime);
	let l_prime = hash::hash_to_range(&rho_t_prime, &params.q, params.hash);

	let check = wnaf::w_naf_multiply(&l_prime, &params.p_base, &params.curve)?;
	if check == ciphertext.u {
		Ok(m_prime)
	} else {
		Err(Error::DecryptionFailed)
	}
}
