// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helper functions to generate random binary payloads.

use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};

/// Generate random byte sequences.
///
/// Codec tests need payloads of every length modulo 3, with arbitrary
/// content. The generator is seeded so failures can be reproduced, the seed
/// is included in the `Debug` output.
///
/// # Example
/// ```
/// use google_cloud_test_utils::random_bytes::RandomBytes;
/// let mut payloads = RandomBytes::new(42);
/// let payload = payloads.sample(32);
/// assert_eq!(payload.len(), 32);
/// ```
#[derive(Debug)]
pub struct RandomBytes {
    seed: u64,
    rng: StdRng,
}

impl RandomBytes {
    /// Initializes a new generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Initializes a new generator with a random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    /// The seed used to initialize this generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create a payload with `n` random bytes.
    pub fn sample(&mut self, n: usize) -> Vec<u8> {
        let mut payload = vec![0_u8; n];
        self.rng.fill_bytes(&mut payload);
        payload
    }

    /// Create a payload with a random length in `0..=max`.
    pub fn sample_up_to(&mut self, max: usize) -> Vec<u8> {
        let n = self.rng.random_range(0..=max);
        self.sample(n)
    }
}
