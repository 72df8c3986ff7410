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

//! The single error type returned by every fallible operation in this crate.

use core::fmt;

/// Failure modes for the arithmetic core and the three schemes built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// A required input (identity, message, attribute) was empty.
	NullArgument,
	/// A message or identity with length zero was supplied where one is required.
	LengthZero,
	/// Public parameters failed validation (points off-curve, `[q]P != infinity`, ...).
	IllegalPublicParameters,
	/// A private/secret key failed validation against the public parameters.
	IllegalPrivateKey,
	/// A ciphertext's components failed validation (point off-curve, wrong length, ...).
	IllegalCiphertext,
	/// Attempt budget exhausted while searching for a Solinas prime.
	SolinasPrimeGenerationFailed,
	/// Attempt budget exhausted while searching for a point of prime order.
	PointGenerationFailed,
	/// The BF-IBE consistency check `[l']P == U` failed.
	DecryptionFailed,
	/// The attribute set does not satisfy the access tree.
	PolicyNotSatisfied,
	/// A divisor evaluation or field inverse hit a zero divisor.
	ArithmeticFailure,
	/// The hash primitive failed. Never constructed in practice -- the
	/// RustCrypto digests this crate uses (`sha1`/`sha2`) are infallible by
	/// construction -- but kept for parity with the schemes' documented
	/// failure modes.
	HashFailure,
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let msg = match self {
			Error::NullArgument => "required argument was absent",
			Error::LengthZero => "message or identity had zero length",
			Error::IllegalPublicParameters => "public parameters failed validation",
			Error::IllegalPrivateKey => "private key failed validation",
			Error::IllegalCiphertext => "ciphertext failed validation",
			Error::SolinasPrimeGenerationFailed => {
				"exhausted attempts generating a Solinas prime"
			},
			Error::PointGenerationFailed => "exhausted attempts generating a base point",
			Error::DecryptionFailed => "ciphertext consistency check failed",
			Error::PolicyNotSatisfied => "attribute set does not satisfy the access tree",
			Error::ArithmeticFailure => "zero divisor encountered during field arithmetic",
			Error::HashFailure => "hash primitive failed",
		};
		f.write_str(msg)
	}
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
