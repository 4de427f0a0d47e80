// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use authbench::bench::{report, run, BenchmarkConfig};
use authbench::ecdsa::EcdsaKeyPair;
use authbench::error::BenchError;
use authbench::hmac::HmacSha512;
use authbench::rsa::RsaKeyPair;
use rand::thread_rng;

const MESSAGE: &[u8] = b"Measuring the speed difference between different encryption types";
const ITERATIONS: u32 = 1000;

fn main() {
    match execute() {
        Ok(output) => {
            println!("{}", output);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn execute() -> Result<String, BenchError> {
    let mut rng = thread_rng();
    let config = BenchmarkConfig {
        message: MESSAGE,
        iterations: ITERATIONS,
    };
    let results = [
        run::<HmacSha512, _>(&mut rng, &config)?,
        run::<RsaKeyPair, _>(&mut rng, &config)?,
        run::<EcdsaKeyPair, _>(&mut rng, &config)?,
    ];
    Ok(report(&results))
}
