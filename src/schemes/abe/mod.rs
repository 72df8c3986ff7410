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

//! Bethencourt-Sahai-Waters Ciphertext-Policy Attribute-Based Encryption.

mod bsw;
mod tree;

pub use bsw::{
	decrypt, encrypt, keygen, setup, AttributeKey, EncryptedLeaf, EncryptedMessageAbe, MasterKeyAbe, PublicKeyAbe,
	SecretKeyAbe,
};
pub use tree::{AccessNode, AccessTree};
