// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#[macro_use]
extern crate criterion;
extern crate rand;

mod scheme_benches {
    use super::*;
    use authbench::ecdsa::EcdsaKeyPair;
    use authbench::hmac::HmacSha512;
    use authbench::rsa::RsaKeyPair;
    use authbench::traits::AuthenticationScheme;
    use criterion::*;
    use rand::{prelude::ThreadRng, thread_rng};

    const MESSAGE: &[u8] = b"Measuring the speed difference between different encryption types";

    fn sign(c: &mut Criterion) {
        let mut csprng: ThreadRng = thread_rng();
        let hmac = HmacSha512::generate(&mut csprng).unwrap();
        let rsa = RsaKeyPair::generate(&mut csprng).unwrap();
        let ecdsa = EcdsaKeyPair::generate(&mut csprng).unwrap();

        c.bench_function("HMAC-SHA512 signing", move |b| b.iter(|| hmac.sign(MESSAGE)));
        c.bench_function("RSA-4096 signing", move |b| b.iter(|| rsa.sign(MESSAGE)));
        c.bench_function("ECDSA P-521 signing", move |b| {
            b.iter(|| ecdsa.sign(MESSAGE))
        });
    }

    fn verify(c: &mut Criterion) {
        let mut csprng: ThreadRng = thread_rng();
        let hmac = HmacSha512::generate(&mut csprng).unwrap();
        let rsa = RsaKeyPair::generate(&mut csprng).unwrap();
        let ecdsa = EcdsaKeyPair::generate(&mut csprng).unwrap();

        let hmac_token = hmac.sign(MESSAGE);
        let rsa_token = rsa.sign(MESSAGE);
        let ecdsa_token = ecdsa.sign(MESSAGE);

        c.bench_function("HMAC-SHA512 verification", move |b| {
            b.iter(|| hmac.verify(MESSAGE, &hmac_token))
        });
        c.bench_function("RSA-4096 verification", move |b| {
            b.iter(|| rsa.verify(MESSAGE, &rsa_token))
        });
        c.bench_function("ECDSA P-521 verification", move |b| {
            b.iter(|| ecdsa.verify(MESSAGE, &ecdsa_token))
        });
    }

    fn key_generation(c: &mut Criterion) {
        let mut csprng: ThreadRng = thread_rng();
        let mut csprng2: ThreadRng = thread_rng();

        let mut group = c.benchmark_group("key_generation");
        group.sample_size(10);
        group.bench_function("HMAC-SHA512 key generation", move |b| {
            b.iter(|| HmacSha512::generate(&mut csprng))
        });
        // RSA-4096 modulus search is too slow to sample here; run the
        // binary to see its one-time setup cost.
        group.bench_function("ECDSA P-521 key generation", move |b| {
            b.iter(|| EcdsaKeyPair::generate(&mut csprng2))
        });
        group.finish();
    }

    criterion_group! {
        name = scheme_benches;
        config = Criterion::default();
        targets =
            sign,
            verify,
            key_generation
    }
}

criterion_main!(scheme_benches::scheme_benches,);
