// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::{CryptoRng, RngCore};

use crate::error::BenchError;
use crate::traits::AuthenticationScheme;

/// Immutable parameters for one benchmark run.
///
/// Passed explicitly so runs are reproducible and tests can vary them; there
/// is no process-wide state.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkConfig<'a> {
    /// Message signed and verified on every iteration, shared read-only
    /// across all schemes so results stay comparable.
    pub message: &'a [u8],
    pub iterations: u32,
}

/// Averaged latencies for one scheme, created once after both timing loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchmarkResult {
    scheme: &'static str,
    avg_sign: Duration,
    avg_verify: Duration,
}

impl BenchmarkResult {
    pub fn new(scheme: &'static str, avg_sign: Duration, avg_verify: Duration) -> Self {
        BenchmarkResult {
            scheme,
            avg_sign,
            avg_verify,
        }
    }

    pub fn scheme(&self) -> &'static str {
        self.scheme
    }

    pub fn avg_sign(&self) -> Duration {
        self.avg_sign
    }

    pub fn avg_verify(&self) -> Duration {
        self.avg_verify
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} Signing Time: {:.2} ms",
            self.scheme,
            millis(self.avg_sign)
        )?;
        write!(
            f,
            "{} Verification Time: {:.2} ms",
            self.scheme,
            millis(self.avg_verify)
        )
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Drives one scheme through the fixed-iteration timing protocol.
///
/// Key generation happens once, before any clock is read. Both loops run
/// strictly sequentially on the calling thread: concurrency would add
/// scheduler and cache noise to exactly the quantity being measured. The
/// verify loop reuses the token from the final sign iteration; for
/// randomized schemes the verification cost is independent of which valid
/// token is checked. The boolean verdict is deliberately discarded so the
/// timed path stays a pure measurement of the verify call.
pub fn run<S, R>(rng: &mut R, config: &BenchmarkConfig<'_>) -> Result<BenchmarkResult, BenchError>
where
    S: AuthenticationScheme,
    R: CryptoRng + RngCore,
{
    if config.iterations == 0 {
        return Err(BenchError::InvalidConfiguration);
    }
    let scheme = S::generate(rng)?;

    // black_box keeps the optimizer from hoisting deterministic schemes out
    // of the loop.
    let start = Instant::now();
    let mut token = black_box(scheme.sign(config.message));
    for _ in 1..config.iterations {
        token = black_box(scheme.sign(config.message));
    }
    let sign_elapsed = start.elapsed();

    let start = Instant::now();
    for _ in 0..config.iterations {
        black_box(scheme.verify(config.message, &token));
    }
    let verify_elapsed = start.elapsed();

    Ok(BenchmarkResult::new(
        S::NAME,
        sign_elapsed / config.iterations,
        verify_elapsed / config.iterations,
    ))
}

/// Renders results in the order supplied, two lines per scheme.
pub fn report(results: &[BenchmarkResult]) -> String {
    results
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
