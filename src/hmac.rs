// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use sha2::digest::Output;
use sha2::Sha512;

use crate::error::BenchError;
use crate::traits::AuthenticationScheme;

/// Symmetric key length in bytes, one SHA-512 block's worth of output.
const KEY_LENGTH: usize = 64;

/// HMAC-SHA512 under a random 64-byte symmetric key.
///
/// The keyed state is prepared once at setup; each sign or verify clones it
/// and absorbs the message, so the timed loops never rehash the key.
#[derive(Clone)]
pub struct HmacSha512 {
    keyed: Hmac<Sha512>,
}

impl HmacSha512 {
    /// Instantiates the scheme with caller-supplied key bytes.
    pub fn from_key(key: &[u8]) -> Result<Self, BenchError> {
        let keyed = Hmac::<Sha512>::new_from_slice(key)
            .map_err(|e| BenchError::KeyGeneration(e.to_string()))?;
        Ok(HmacSha512 { keyed })
    }
}

impl AuthenticationScheme for HmacSha512 {
    const NAME: &'static str = "HMAC";
    type Token = Output<Sha512>;

    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, BenchError> {
        let mut key = [0u8; KEY_LENGTH];
        rng.try_fill_bytes(&mut key)
            .map_err(|e| BenchError::KeyGeneration(e.to_string()))?;
        Self::from_key(&key)
    }

    fn sign(&self, message: &[u8]) -> Self::Token {
        let mut mac = self.keyed.clone();
        mac.update(message);
        mac.finalize().into_bytes()
    }

    fn verify(&self, message: &[u8], token: &Self::Token) -> bool {
        let mut mac = self.keyed.clone();
        mac.update(message);
        mac.verify_slice(token.as_slice()).is_ok()
    }
}
