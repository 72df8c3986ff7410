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

//! The monotone access tree, as a tagged enum generic over its leaf payload
//! rather than a pointer tree with a fixed-size child array: a policy tree
//! carries a bare attribute name at each leaf ([`AccessTree`]); the
//! encrypted tree produced by `encrypt` carries the per-leaf ciphertext
//! shares instead ([`super::bsw::EncryptedLeaf`]). A child's 1-based
//! position in `children` is its x-coordinate for Lagrange interpolation.

use num_bigint::BigUint;

use crate::bignum;
use crate::error::Result;

/// A monotone access structure: an interior node is satisfied once at least
/// `threshold` of its children are; a leaf carries payload `L`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessNode<L> {
	Leaf(L),
	Interior { threshold: usize, children: Vec<AccessNode<L>> },
}

/// The policy tree given to `encrypt`: leaves are bare attribute names.
pub type AccessTree = AccessNode<String>;

impl AccessTree {
	pub fn leaf(attribute: impl Into<String>) -> Self {
		AccessNode::Leaf(attribute.into())
	}

	pub fn threshold(threshold: usize, children: Vec<AccessTree>) -> Self {
		AccessNode::Interior { threshold, children }
	}

	/// `AND` of all children: threshold equal to the child count.
	pub fn and(children: Vec<AccessTree>) -> Self {
		let n = children.len();
		AccessNode::Interior { threshold: n, children }
	}

	/// `OR` of all children: threshold of one.
	pub fn or(children: Vec<AccessTree>) -> Self {
		AccessNode::Interior { threshold: 1, children }
	}

	/// Whether `attributes` satisfies this policy.
	pub fn is_satisfied_by(&self, attributes: &[String]) -> bool {
		match self {
			AccessNode::Leaf(attr) => attributes.iter().any(|a| a == attr),
			AccessNode::Interior { threshold, children } => {
				children.iter().filter(|c| c.is_satisfied_by(attributes)).count() >= *threshold
			},
		}
	}
}

impl<L> AccessNode<L> {
	pub fn threshold_of(&self) -> usize {
		match self {
			AccessNode::Leaf(_) => 1,
			AccessNode::Interior { threshold, .. } => *threshold,
		}
	}
}

/// `Delta_{i,S}(0) = prod_{j in S, j != i} (0 - j) / (i - j)`, computed in
/// `Z/qZ` via modular inverse (never plain integer division).
pub fn lagrange_coefficient_at_zero(i: i64, s: &[i64], q: &BigUint) -> Result<BigUint> {
	let mut num = BigUint::from(1u32);
	let mut den = BigUint::from(1u32);

	for &j in s {
		if j == i {
			continue;
		}
		num = bignum::mod_mul(&num, &signed_mod(-j, q), q);
		den = bignum::mod_mul(&den, &signed_mod(i - j, q), q);
	}

	let den_inv = bignum::mod_inv(&den, q)?;
	Ok(bignum::mod_mul(&num, &den_inv, q))
}

/// Reduce a signed `i64` into `[0, q)`.
fn signed_mod(v: i64, q: &BigUint) -> BigUint {
	if v >= 0 {
		BigUint::from(v as u64) % q
	} else {
		bignum::mod_neg(&BigUint::from((-v) as u64), q)
	}
}
