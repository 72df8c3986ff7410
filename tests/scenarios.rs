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

//! End-to-end scenarios against the public API, one per scheme and failure
//! mode, at the lowest security level.

use num_bigint::BigUint;
use pbc::context::CryptoContext;
use pbc::error::Error;
use pbc::fp2::Complex;
use pbc::hash::HashFunction;
use pbc::schemes::abe::{self, AccessTree};
use pbc::schemes::{bf_ibe, hess_ibs, SecurityLevel};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

fn fresh_ctx(seed: u64) -> (ChaCha20Rng, HashFunction) {
	(ChaCha20Rng::seed_from_u64(seed), HashFunction::Sha1)
}

/// S1: BF-IBE round trip for a matching identity.
#[test]
fn bf_ibe_round_trip_succeeds() {
	let (mut rng, hash) = fresh_ctx(101);
	let mut ctx = CryptoContext::new(&mut rng, hash);
	let (params, master_secret) = bf_ibe::setup(SecurityLevel::L0, &mut ctx).unwrap();

	let sk = bf_ibe::extract(b"alice@example.org", &master_secret, &params).unwrap();
	let ciphertext = bf_ibe::encrypt(b"hello", b"alice@example.org", &params, &mut ctx).unwrap();
	let plaintext = bf_ibe::decrypt(&ciphertext, &sk, &params).unwrap();
	assert_eq!(plaintext, b"hello");
}

/// S2: decrypting with a key extracted for a different identity fails.
#[test]
fn bf_ibe_mismatched_identity_fails() {
	let (mut rng, hash) = fresh_ctx(102);
	let mut ctx = CryptoContext::new(&mut rng, hash);
	let (params, master_secret) = bf_ibe::setup(SecurityLevel::L0, &mut ctx).unwrap();

	let sk_bob = bf_ibe::extract(b"bob", &master_secret, &params).unwrap();
	let ciphertext = bf_ibe::encrypt(b"hello", b"alice", &params, &mut ctx).unwrap();
	assert_eq!(bf_ibe::decrypt(&ciphertext, &sk_bob, &params), Err(Error::DecryptionFailed));
}

/// S3: Hess-IBS signs and verifies, and a tampered message is rejected.
#[test]
fn hess_ibs_sign_and_verify() {
	let (mut rng, hash) = fresh_ctx(103);
	let mut ctx = CryptoContext::new(&mut rng, hash);
	let (params, master_secret) = hess_ibs::setup(SecurityLevel::L0, &mut ctx).unwrap();

	let sk = hess_ibs::extract(b"alice", &master_secret, &params).unwrap();
	let sig = hess_ibs::sign(b"the quick brown fox", &sk, &params, &mut ctx).unwrap();

	assert!(hess_ibs::verify(b"the quick brown fox", &sig, b"alice", &params).unwrap());
	assert!(!hess_ibs::verify(b"the quick brown dog", &sig, b"alice", &params).unwrap());
}

/// S4: an ABE AND-policy decrypts once the key holds every required attribute.
#[test]
fn abe_and_policy_round_trip() {
	let (mut rng, hash) = fresh_ctx(104);
	let mut ctx = CryptoContext::new(&mut rng, hash);
	let (pk, mk) = abe::setup(SecurityLevel::L0, &mut ctx).unwrap();

	let tree = AccessTree::and(vec![AccessTree::leaf("student"), AccessTree::leaf("cs")]);
	let msg = Complex::new(BigUint::from(0x0102030405060708u64) % &pk.curve.p, BigUint::from(0x1112131415161718u64) % &pk.curve.p);
	let ciphertext = abe::encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

	let attributes = vec!["student".to_string(), "cs".to_string()];
	let sk = abe::keygen(&mk, &pk, &attributes, &mut ctx).unwrap();
	assert_eq!(abe::decrypt(&ciphertext, &sk, &pk).unwrap(), msg);
}

/// S5: the same policy refuses a key missing one of the required attributes.
#[test]
fn abe_and_policy_refuses_partial_attributes() {
	let (mut rng, hash) = fresh_ctx(105);
	let mut ctx = CryptoContext::new(&mut rng, hash);
	let (pk, mk) = abe::setup(SecurityLevel::L0, &mut ctx).unwrap();

	let tree = AccessTree::and(vec![AccessTree::leaf("student"), AccessTree::leaf("cs")]);
	let msg = Complex::new(BigUint::from(42u32), BigUint::from(7u32));
	let ciphertext = abe::encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

	let attributes = vec!["student".to_string()];
	let sk = abe::keygen(&mk, &pk, &attributes, &mut ctx).unwrap();
	assert_eq!(abe::decrypt(&ciphertext, &sk, &pk), Err(Error::PolicyNotSatisfied));
}

/// S6: a 2-of-3 threshold policy accepts any satisfying pair and refuses a
/// key with only one of the three attributes.
#[test]
fn abe_threshold_policy_accepts_any_satisfying_pair() {
	let (mut rng, hash) = fresh_ctx(106);
	let mut ctx = CryptoContext::new(&mut rng, hash);
	let (pk, mk) = abe::setup(SecurityLevel::L0, &mut ctx).unwrap();

	let tree = AccessTree::threshold(2, vec![AccessTree::leaf("a"), AccessTree::leaf("b"), AccessTree::leaf("c")]);
	let msg = Complex::new(BigUint::from(99u32), BigUint::from(3u32));
	let ciphertext = abe::encrypt(&msg, &tree, &pk, &mut ctx).unwrap();

	let attributes_ac = vec!["a".to_string(), "c".to_string()];
	let sk_ac = abe::keygen(&mk, &pk, &attributes_ac, &mut ctx).unwrap();
	assert_eq!(abe::decrypt(&ciphertext, &sk_ac, &pk).unwrap(), msg);

	let attributes_a = vec!["a".to_string()];
	let sk_a = abe::keygen(&mk, &pk, &attributes_a, &mut ctx).unwrap();
	assert_eq!(abe::decrypt(&ciphertext, &sk_a, &pk), Err(Error::PolicyNotSatisfied));
}
