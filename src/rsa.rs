// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use rand::{CryptoRng, RngCore};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::RsaPrivateKey;
use sha2::Sha512;
use signature::{Keypair, Signer, Verifier};

use crate::error::BenchError;
use crate::traits::AuthenticationScheme;

const KEY_SIZE_BITS: usize = 4096;

/// RSA PKCS#1 v1.5 signatures over SHA-512 with a 4096-bit modulus.
pub struct RsaKeyPair {
    signing: SigningKey<Sha512>,
    verifying: VerifyingKey<Sha512>,
}

impl RsaKeyPair {
    // Modulus search dominates test time, so correctness tests shrink it.
    pub(crate) fn with_key_size<R: CryptoRng + RngCore>(
        rng: &mut R,
        bits: usize,
    ) -> Result<Self, BenchError> {
        let private =
            RsaPrivateKey::new(rng, bits).map_err(|e| BenchError::KeyGeneration(e.to_string()))?;
        let signing = SigningKey::new(private);
        let verifying = signing.verifying_key();
        Ok(RsaKeyPair { signing, verifying })
    }
}

impl AuthenticationScheme for RsaKeyPair {
    const NAME: &'static str = "RSA";
    type Token = Signature;

    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, BenchError> {
        Self::with_key_size(rng, KEY_SIZE_BITS)
    }

    fn sign(&self, message: &[u8]) -> Signature {
        self.signing.sign(message)
    }

    fn verify(&self, message: &[u8], token: &Signature) -> bool {
        self.verifying.verify(message, token).is_ok()
    }
}
