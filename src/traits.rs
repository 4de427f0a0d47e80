// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use rand::{CryptoRng, RngCore};

use crate::error::BenchError;

/// Common interface over the authentication constructions under measurement.
///
/// Each implementation bundles its own key material behind a uniform
/// sign/verify surface, so the timing protocol in [`crate::bench`] never
/// branches on the concrete construction. Key material stays private to the
/// instance; the shared message is only ever borrowed.
pub trait AuthenticationScheme: Sized {
    /// Scheme identifier used in reports.
    const NAME: &'static str;

    /// Output of a single sign operation.
    ///
    /// Token bytes must not be compared across iterations: randomized
    /// signature schemes are free to produce a different token each call.
    type Token;

    /// Generates fresh key material for this scheme.
    ///
    /// May be expensive (e.g. RSA modulus search); callers keep it outside
    /// any timed region. A failure is fatal for the scheme's benchmark and
    /// is never retried.
    fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, BenchError>;

    /// Produces an authentication token for `message`.
    fn sign(&self, message: &[u8]) -> Self::Token;

    /// Returns whether `token` authenticates `message` under this scheme's
    /// key material.
    fn verify(&self, message: &[u8], token: &Self::Token) -> bool;
}
