// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0
#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]

#[cfg(test)]
#[path = "tests/hmac_tests.rs"]
pub mod hmac_tests;

#[cfg(test)]
#[path = "tests/rsa_tests.rs"]
pub mod rsa_tests;

#[cfg(test)]
#[path = "tests/ecdsa_tests.rs"]
pub mod ecdsa_tests;

#[cfg(test)]
#[path = "tests/bench_tests.rs"]
pub mod bench_tests;

// Scheme adapter trait
pub mod traits;
// Scheme implementations
pub mod ecdsa;
pub mod hmac;
pub mod rsa;

// Measurement harness
pub mod bench;
pub mod error;
