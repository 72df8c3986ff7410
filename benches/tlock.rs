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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use pbc::context::CryptoContext;
use pbc::fp2::Complex;
use pbc::hash::HashFunction;
use pbc::schemes::abe::{self, AccessTree};
use pbc::schemes::{bf_ibe, hess_ibs, SecurityLevel};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

/// Benchmarks parameter generation at each security level. This is the
/// dominant cost of every scheme's `setup`, since it searches for a Solinas
/// prime, a field prime, and a point of prime order.
fn params_generation(c: &mut Criterion) {
	let mut group = c.benchmark_group("params_generate");
	for level in [SecurityLevel::L0, SecurityLevel::L1] {
		group.bench_with_input(BenchmarkId::from_parameter(format!("{level:?}")), &level, |b, &level| {
			b.iter(|| {
				let mut rng = ChaCha20Rng::seed_from_u64(9);
				let mut ctx = CryptoContext::new(&mut rng, HashFunction::Sha1);
				black_box(pbc::params::generate(level, &mut ctx).unwrap())
			});
		});
	}
	group.finish();
}

/// Benchmarks BF-IBE encryption and decryption over a range of message
/// sizes, sharing one set of public parameters across all input sizes.
fn bf_ibe_round_trip(c: &mut Criterion) {
	let mut rng = ChaCha20Rng::seed_from_u64(10);
	let mut ctx = CryptoContext::new(&mut rng, HashFunction::Sha1);
	let (params, master_secret) = bf_ibe::setup(SecurityLevel::L0, &mut ctx).unwrap();
	let sk = bf_ibe::extract(b"alice@example.org", &master_secret, &params).unwrap();

	static KB: usize = 1024;
	let mut group = c.benchmark_group("bf_ibe");
	for size in [KB, 4 * KB, 16 * KB].iter() {
		let message = vec![7u8; *size];
		group.throughput(Throughput::Bytes(*size as u64));
		group.bench_with_input(BenchmarkId::new("encrypt", size), size, |b, _| {
			b.iter(|| black_box(bf_ibe::encrypt(&message, b"alice@example.org", &params, &mut ctx).unwrap()));
		});

		let ciphertext = bf_ibe::encrypt(&message, b"alice@example.org", &params, &mut ctx).unwrap();
		group.bench_with_input(BenchmarkId::new("decrypt", size), size, |b, _| {
			b.iter(|| black_box(bf_ibe::decrypt(&ciphertext, &sk, &params).unwrap()));
		});
	}
	group.finish();
}

/// Benchmarks Hess-IBS signing and verification.
fn hess_ibs_round_trip(c: &mut Criterion) {
	let mut rng = ChaCha20Rng::seed_from_u64(11);
	let mut ctx = CryptoContext::new(&mut rng, HashFunction::Sha1);
	let (params, master_secret) = hess_ibs::setup(SecurityLevel::L0, &mut ctx).unwrap();
	let sk = hess_ibs::extract(b"alice@example.org", &master_secret, &params).unwrap();
	let msg = b"pay bob 10 coins";

	let mut group = c.benchmark_group("hess_ibs");
	group.bench_function("sign", |b| {
		b.iter(|| black_box(hess_ibs::sign(msg, &sk, &params, &mut ctx).unwrap()));
	});

	let sig = hess_ibs::sign(msg, &sk, &params, &mut ctx).unwrap();
	group.bench_function("verify", |b| {
		b.iter(|| black_box(hess_ibs::verify(msg, &sig, b"alice@example.org", &params).unwrap()));
	});
	group.finish();
}

/// Benchmarks BSW CP-ABE key generation, encryption and decryption under a
/// 2-of-3 threshold policy.
fn abe_round_trip(c: &mut Criterion) {
	let mut rng = ChaCha20Rng::seed_from_u64(12);
	let mut ctx = CryptoContext::new(&mut rng, HashFunction::Sha1);
	let (pk, mk) = abe::setup(SecurityLevel::L0, &mut ctx).unwrap();
	let attributes = vec!["finance".to_string(), "auditor".to_string(), "executive".to_string()];
	let sk = abe::keygen(&mk, &pk, &attributes, &mut ctx).unwrap();
	let tree = AccessTree::threshold(2, vec![
		AccessTree::leaf("finance"),
		AccessTree::leaf("auditor"),
		AccessTree::leaf("executive"),
	]);
	let msg = Complex::new(BigUint::from(42u32) % &pk.curve.p, BigUint::from(7u32) % &pk.curve.p);

	let mut group = c.benchmark_group("abe");
	group.bench_function("keygen", |b| {
		b.iter(|| black_box(abe::keygen(&mk, &pk, &attributes, &mut ctx).unwrap()));
	});
	group.bench_function("encrypt", |b| {
		b.iter(|| black_box(abe::encrypt(&msg, &tree, &pk, &mut ctx).unwrap()));
	});

	let ciphertext = abe::encrypt(&msg, &tree, &pk, &mut ctx).unwrap();
	group.bench_function("decrypt", |b| {
		b.iter(|| black_box(abe::decrypt(&ciphertext, &sk, &pk).unwrap()));
	});
	group.finish();
}

criterion_group!(benches, params_generation, bf_ibe_round_trip, hess_ibs_round_trip, abe_round_trip);
criterion_main!(benches);
