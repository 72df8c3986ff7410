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

//! Bethencourt-Sahai-Waters ciphertext-policy encryption: key generation,
//! policy-tree secret sharing, and attribute-satisfying decryption.
//!
//! Exponents for `alpha`, `beta`, the polynomial shares, and the per-key
//! randomizers live in `Z/qZ`, the order of the subgroup generated by `g`
//! -- not the field modulus `p` that the curve's coordinates live in.

use num_bigint::BigUint;

use crate::bignum;
use crate::context::CryptoContext;
use crate::curve::{wnaf, AffinePoint, Curve};
use crate::error::{Error, Result};
use crate::field::Field;
use crate::fp2::Complex;
use crate::hash::{self, HashFunction};
use crate::schemes::abe::tree::{lagrange_coefficient_at_zero, AccessNode, AccessTree};
use crate::schemes::SecurityLevel;

/// Public key: `(curve, g, h = [beta]g, f = [1/beta]g, e(g,g)^alpha, H, q)`.
#[derive(Clone, Debug)]
pub struct PublicKeyAbe {
	pub curve: Curve,
	pub g: AffinePoint<BigUint>,
	pub h: AffinePoint<BigUint>,
	pub f: AffinePoint<BigUint>,
	pub e_gg_alpha: Complex,
	pub hash: HashFunction,
	pub q: BigUint,
}

/// Master key: `(beta, g^alpha)`. Held only by the authority; `keygen` takes
/// the matching [`PublicKeyAbe`] as a separate argument rather than this
/// struct embedding a reference back to it.
#[derive(Clone, Debug)]
pub struct MasterKeyAbe {
	pub beta: BigUint,
	pub g_alpha: AffinePoint<BigUint>,
}

/// A user's secret key: the normalizing component `D` plus one `(D_j, D'_j)`
/// pair per held attribute.
#[derive(Clone, Debug)]
pub struct SecretKeyAbe {
	pub d: AffinePoint<BigUint>,
	pub components: Vec<AttributeKey>,
}

#[derive(Clone, Debug)]
pub struct AttributeKey {
	pub attribute: String,
	pub d_j: AffinePoint<BigUint>,
	pub d_prime_j: AffinePoint<BigUint>,
}

/// One leaf's ciphertext share, `(C_y, C'_y)`, tagged with the attribute it
/// was shared under.
#[derive(Clone, Debug)]
pub struct EncryptedLeaf {
	pub attribute: String,
	pub c_y: AffinePoint<BigUint>,
	pub c_y_prime: AffinePoint<BigUint>,
}

/// A ciphertext: the policy tree with per-leaf shares, `C~ = M * e(g,g)^{alpha s}`,
/// and `C = [s]h`.
#[derive(Clone, Debug)]
pub struct EncryptedMessageAbe {
	pub tree: AccessNode<EncryptedLeaf>,
	pub c_tilde: Complex,
	pub c: AffinePoint<BigUint>,
}

/// Generate fresh curve parameters, draw `alpha, beta` uniformly in
/// `[1, q-1]`, and publish `(g, h = [beta]g, f = [1/beta]g, e(g,g)^alpha)`.
pub fn setup(level: SecurityLevel, ctx: &mut CryptoContext) -> Result<(PublicKeyAbe, MasterKeyAbe)> {
	let generated = crate::params::generate(level, ctx)?;
	let curve = generated.curve;
	let q = generated.q;
	let g = generated.base_point;
	let one = BigUint::from(1u32);

	let alpha = ctx.random_range(&one, &(&q - &one));
	let beta = ctx.random_range(&one, &(&q - &one));

	let h = wnaf::w_naf_multiply(&beta, &g, &curve)?;
	let beta_inv = bignum::mod_inv(&beta, &q)?;
	let f = wnaf::w_naf_multiply(&beta_inv, &g, &curve)?;
	let g_alpha = wnaf::w_naf_multiply(&alpha, &g, &curve)?;
	let e_gg_alpha = crate::pairing::tate(&g, &g, &q, &curve)?.pow(&alpha, &curve.p);

	Ok((
		PublicKeyAbe { curve, g, h, f, e_gg_alpha, hash: generated.hash, q: q.clone() },
		MasterKeyAbe { beta, g_alpha },
	))
}

/// Issue a secret key for `attributes`.
///
/// `D = g^{(alpha+r)/beta}` (Design Note: the canonical BSW definition,
/// computed here as `[beta^-1]([r]g + g^alpha)` since the master key holds
/// `g^alpha` as a point rather than `alpha` itself).
pub fn keygen(
	master_key: &MasterKeyAbe,
	pk: &PublicKeyAbe,
	attributes: &[String],
	ctx: &mut CryptoContext,
) -> Result<SecretKeyAbe> {
	let q = &pk.q;
	let zero = BigUint::from(0u32);
	let one = BigUint::from(1u32);

	let r = ctx.random_range(&zero, &(q - &one));
	let r_g = wnaf::w_naf_multiply(&r, &pk.g, &pk.curve)?;
	let g_alpha_plus_r = master_key.g_alpha.add(&r_g, &pk.curve)?;
	let beta_inv = bignum::mod_inv(&master_key.beta, q)?;
	let d = wnaf::w_naf_multiply(&beta_inv, &g_alpha_plus_r, &pk.curve)?;

	let mut components = Vec::with_capacity(attributes.len());
	for attribute in attributes {
		let r_j = ctx.random_range(&zero, &(q - &one));
		let h_j = hash::hash_to_point(attribute.as_bytes(), &pk.curve, q, pk.hash)?;

		let d_j = r_g.add(&wnaf::w_naf_multiply(&r_j, &h_j, &pk.curve)?, &pk.curve)?;
		let d_prime_j = wnaf::w_naf_multiply(&r_j, &pk.g, &pk.curve)?;

		components.push(AttributeKey { attribute: attribute.clone(), d_j, d_prime_j });
	}

	Ok(SecretKeyAbe { d, components })
}

/// Coefficients `[a_0 = constant, a_1, ..., a_degree]` of a random degree-`degree`
/// polynomial over `Z/qZ` with the given constant term.
fn random_polynomial(degree: usize, constant: &BigUint, q: &BigUint, ctx: &mut CryptoContext) -> Vec<BigUint> {
	let mut coeffs = Vec::with_capacity(degree + 1);
	coeffs.push(constant.clone());
	for _ in 0..degree {
		coeffs.push(ctx.random_below(q));
	}
	coeffs
}

/// Evaluate a polynomial (low-degree-first coefficients) at `x`, by Horner's
/// method.
fn eval_polynomial(coeffs: &[BigUint], x: u64, q: &BigUint) -> BigUint {
	let x = BigUint::from(x);
	let mut acc = BigUint::from(0u32);
	for coeff in coeffs.iter().rev() {
		acc = bignum::mod_add(&bignum::mod_mul(&acc, &x, q), coeff, q);
	}
	acc
}

/// Share `secret` down through `node`: at each interior node, a random
/// polynomial of degree `threshold - 1` with constant term `secret` assigns
/// each child `i` (1-based) the share `q(i)`, which becomes that child's
/// secret in turn; at a leaf, the share becomes `C_y = [share]g`,
/// `C'_y = [share] hash_to_point(attribute)`.
fn share_secret(node: &AccessTree, secret: &BigUint, pk: &PublicKeyAbe, ctx: &mut CryptoContext) -> Result<AccessNode<EncryptedLeaf>> {
	match node {
		AccessNode::Leaf(attribute) => {
			let c_y = wnaf::w_naf_multiply(secret, &pk.g, &pk.curve)?;
			let h_attr = hash::hash_to_point(attribute.as_bytes(), &pk.curve, &pk.q, pk.hash)?;
			let c_y_prime = wnaf::w_naf_multiply(secret, &h_attr, &pk.curve)?;
			Ok(AccessNode::Leaf(EncryptedLeaf { attribute: attribute.clone(), c_y, c_y_prime }))
		},
		AccessNode::Interior { threshold, children } => {
			let degree = threshold.saturating_sub(1);
			let coeffs = random_polynomial(degree, secret, &pk.q, ctx);
			let mut encrypted_children = Vec::with_capacity(children.len());
			for (idx, child) in children.iter().enumerate() {
				let share = eval_polynomial(&coeffs, (idx + 1) as u64, &pk.q);
				encrypted_children.push(share_secret(child, &share, pk, ctx)?);
			}
			Ok(AccessNode::Interior { threshold: *threshold, children: encrypted_children })
		},
	}
}

/// Encrypt `msg` under the monotone policy `tree`.
pub fn encrypt(msg: &Complex, tree: &AccessTree, pk: &PublicKeyAbe, ctx: &mut CryptoContext) -> Result<EncryptedMessageAbe> {
	let zero = BigUint::from(0u32);
	let one = BigUint::from(1u32);
	let s = ctx.random_range(&zero, &(&pk.q - &one));

	let c_tilde = msg.mul(&pk.e_gg_alpha.pow(&s, &pk.curve.p), &pk.curve.p);
	let c = wnaf::w_naf_multiply(&s, &pk.h, &pk.curve)?;
	let encrypted_tree = share_secret(tree, &s, pk, ctx)?;

	Ok(EncryptedMessageAbe { tree: encrypted_tree, c_tilde, c })
}

/// Recover `F_x = e(g,g)^{r q_x(0)}` at `node`, or `None` if the user's
/// attributes don't satisfy it. Interior nodes combine any satisfying subset
/// of their children's results by Lagrange interpolation at 0, iterating
/// directly over that subset rather than through a separately-tracked index.
fn decrypt_node(node: &AccessNode<EncryptedLeaf>, sk: &SecretKeyAbe, pk: &PublicKeyAbe) -> Result<Option<Complex>> {
	match node {
		AccessNode::Leaf(leaf) => {
			let Some(key) = sk.components.iter().find(|k| k.attribute == leaf.attribute) else {
				return Ok(None);
			};
			let numerator = crate::pairing::tate(&key.d_j, &leaf.c_y, &pk.q, &pk.curve)?;
			let denominator = crate::pairing::tate(&key.d_prime_j, &leaf.c_y_prime, &pk.q, &pk.curve)?;
			Ok(Some(numerator.div(&denominator, &pk.curve.p)?))
		},
		AccessNode::Interior { threshold, children } => {
			let mut satisfied: Vec<(i64, Complex)> = Vec::new();
			for (idx, child) in children.iter().enumerate() {
				if let Some(value) = decrypt_node(child, sk, pk)? {
					satisfied.push(((idx + 1) as i64, value));
					if satisfied.len() == *threshold {
						break;
					}
				}
			}
			if satisfied.len() < *threshold {
				return Ok(None);
			}
			let indices: Vec<i64> = satisfied.iter().map(|(i, _)| *i).collect();
			let mut acc = Complex::one();
			for (i, value) in &satisfied {
				let coeff = lagrange_coefficient_at_zero(*i, &indices, &pk.q)?;
				acc = acc.mul(&value.pow(&coeff, &pk.curve.p), &pk.curve.p);
			}
			Ok(Some(acc))
		},
	}
}

/// Decrypt `ciphertext` with `secret_key`, or fail with
/// [`Error::PolicyNotSatisfied`] if its attributes don't satisfy the policy.
pub fn decrypt(ciphertext: &EncryptedMessageAbe, secret_key: &SecretKeyAbe, pk: &PublicKeyAbe) -> Result<Complex> {
	let a = decrypt_node(&ciphertext.tree, secret_key, pk)?.ok_or(Error::PolicyNotSatisfied)?;
	let denominator = crate::pairing::tate(&ciphertext.c, &secret_key.d, &pk.q, &pk.curve)?;
	ciphertext.c_tilde.mul(&a, &pk.curve.p).div(&denominator, &pk.curve.p)
}

#[cfg(test)]
mod test {
	use super::*;
	use rand_chacha::ChaCha20Rng;
	use rand_core::SeedableRng;

	fn message(p: &BigUint) -> Complex {
		Complex::new(BigUint::from(42u32) % p, BigUint::from(7u32) % p)
	}

	#[test]
	fn and_policy_decrypts_with_all_attributes() {
		let mut rng = ChaCha20Rng::seed_from_u64(21);
		let mut ctx = CryptoContext::new(&mut rng, crate::hash::HashFunction::Sha1);
		let (pk, msk) = setup(SecurityLevel::L0, &mut ctx).unwrap();

		let tree = AccessTree::and(vec![AccessTree::leaf("engineering"), AccessTree::leaf("clearance")]);
		let msg = message(&pk.curve.p);
		let ct = encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

		let attrs = vec!["engineering".to_string(), "clearance".to_string()];
		let sk = keygen(&msk, &pk, &attrs, &mut ctx).unwrap();
		assert_eq!(decrypt(&ct, &sk, &pk).unwrap(), msg);
	}

	#[test]
	fn and_policy_fails_with_partial_attributes() {
		let mut rng = ChaCha20Rng::seed_from_u64(22);
		let mut ctx = CryptoContext::new(&mut rng, crate::hash::HashFunction::Sha1);
		let (pk, msk) = setup(SecurityLevel::L0, &mut ctx).unwrap();

		let tree = AccessTree::and(vec![AccessTree::leaf("engineering"), AccessTree::leaf("clearance")]);
		let msg = message(&pk.curve.p);
		let ct = encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

		let attrs = vec!["engineering".to_string()];
		let sk = keygen(&msk, &pk, &attrs, &mut ctx).unwrap();
		assert_eq!(decrypt(&ct, &sk, &pk), Err(Error::PolicyNotSatisfied));
	}

	#[test]
	fn two_of_three_threshold_decrypts_with_any_pair() {
		let mut rng = ChaCha20Rng::seed_from_u64(23);
		let mut ctx = CryptoContext::new(&mut rng, crate::hash::HashFunction::Sha1);
		let (pk, msk) = setup(SecurityLevel::L0, &mut ctx).unwrap();

		let tree = AccessTree::threshold(2, vec![AccessTree::leaf("a"), AccessTree::leaf("b"), AccessTree::leaf("c")]);
		let msg = message(&pk.curve.p);
		let ct = encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

		let attrs = vec!["a".to_string(), "c".to_string()];
		let sk = keygen(&msk, &pk, &attrs, &mut ctx).unwrap();
		assert_eq!(decrypt(&ct, &sk, &pk).unwrap(), msg);
	}

	#[test]
	fn threshold_fails_below_minimum_attributes() {
		let mut rng = ChaCha20Rng::seed_from_u64(24);
		let mut ctx = CryptoContext::new(&mut rng, crate::hash::HashFunction::Sha1);
		let (pk, msk) = setup(SecurityLevel::L0, &mut ctx).unwrap();

		let tree = AccessTree::threshold(2, vec![AccessTree::leaf("a"), AccessTree::leaf("b"), AccessTree::leaf("c")]);
		let msg = message(&pk.curve.p);
		let ct = encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

		let attrs = vec!["a".to_string()];
		let sk = keygen(&msk, &pk, &attrs, &mut ctx).unwrap();
		assert_eq!(decrypt(&ct, &sk, &pk), Err(Error::PolicyNotSatisfied));
	}
}
