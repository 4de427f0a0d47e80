// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

// Every error here is fatal for the whole run: the harness measures latency
// and must not retry or partially report, otherwise the numbers stop being
// comparable across schemes.

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BenchError {
    #[error("Key material could not be generated: {0}")]
    KeyGeneration(String),

    #[error("Iteration count must be a positive integer")]
    InvalidConfiguration,
}
