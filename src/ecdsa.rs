// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use p521::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::{CryptoRng, RngCore};
use signature::{Signer, Verifier};

use crate::error::BenchError;
use crate::traits::AuthenticationScheme;

/// ECDSA over NIST P-521, hashing with the curve's associated SHA-512.
pub struct EcdsaKeyPair {
    signing: SigningKey,
    verifying: VerifyingKey,
}

impl AuthenticationScheme for EcdsaKeyPair {
    const NAME: &'static str = "ECDSA";
    type Token = Signature;

    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, BenchError> {
        let signing = SigningKey::random(rng);
        let verifying = VerifyingKey::from(&signing);
        Ok(EcdsaKeyPair { signing, verifying })
    }

    fn sign(&self, message: &[u8]) -> Signature {
        self.signing.sign(message)
    }

    fn verify(&self, message: &[u8], token: &Signature) -> bool {
        self.verifying.verify(message, token).is_ok()
    }
}
