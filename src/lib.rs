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

//! Pairing-based cryptography over Type-1 supersingular curves.
//!
//! Three schemes share one arithmetic core (modular bignum facade, F_p² via
//! Gaussian integers, affine curve arithmetic, window-NAF scalar
//! multiplication, and the Tate pairing via Miller's algorithm):
//!
//! - [`schemes::bf_ibe`] — Boneh-Franklin Identity-Based Encryption.
//! - [`schemes::hess_ibs`] — Hess Identity-Based Signatures.
//! - [`schemes::abe`] — Bethencourt-Sahai-Waters Ciphertext-Policy
//!   Attribute-Based Encryption.
//!
//! Every operation that needs randomness or a hash function takes a
//! [`context::CryptoContext`] explicitly; there is no ambient RNG or hasher.
//!
//! ```
//! use pbc::context::CryptoContext;
//! use pbc::hash::HashFunction;
//! use pbc::schemes::{bf_ibe, SecurityLevel};
//! use rand_chacha::ChaCha20Rng;
//! use rand_core::SeedableRng;
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(0);
//! let mut ctx = CryptoContext::new(&mut rng, HashFunction::Sha1);
//!
//! let (params, master_secret) = bf_ibe::setup(SecurityLevel::L0, &mut ctx).unwrap();
//! let sk = bf_ibe::extract(b"alice@example.org", &master_secret, &params).unwrap();
//! let ct = bf_ibe::encrypt(b"hello", b"alice@example.org", &params, &mut ctx).unwrap();
//! assert_eq!(bf_ibe::decrypt(&ct, &sk, &params).unwrap(), b"hello");
//! ```

pub mod bignum;
pub mod context;
pub mod curve;
pub mod error;
pub mod field;
pub mod fp2;
pub mod hash;
pub mod pairing;
pub mod params;
pub mod schemes;

pub use context::CryptoContext;
pub use error::{Error, Result};
