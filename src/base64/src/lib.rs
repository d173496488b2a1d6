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

//! Base64 codec for byte fields in Google Cloud APIs.
//!
//! Google Cloud APIs transport `bytes` fields, such as configuration file
//! contents or certificates, as base64 strings inside JSON payloads. This crate
//! converts between those strings and raw bytes, and provides
//! [serde_with] adapters to apply the conversion at the JSON boundary.
//!
//! # Example
//! ```
//! # use google_cloud_base64::{EncodingError, decode, encode};
//! assert_eq!(encode(b"Man"), "TWFu");
//! assert_eq!(encode(b"Ma"), "TWE=");
//! assert_eq!(decode("TQ==")?, b"M");
//! assert!(decode("A!B=").is_err());
//! # Ok::<(), EncodingError>(())
//! ```
//!
//! The decoder is strict: it rejects any input that is not the canonical
//! encoding of some byte sequence. Use [Engine] to select a different alphabet
//! or padding policy.

mod alphabet;
pub use alphabet::Alphabet;
mod engine;
pub use engine::{Engine, Padding};
mod error;
pub use error::EncodingError;
pub mod wire;

/// Encodes `input` using the standard alphabet with padding.
///
/// The output has `4 * ceil(n / 3)` characters for `n` input bytes.
///
/// # Example
/// ```
/// # use google_cloud_base64::encode;
/// assert_eq!(encode(b""), "");
/// assert_eq!(encode([0_u8, 0, 0]), "AAAA");
/// assert_eq!(encode(b"M"), "TQ==");
/// ```
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    Engine::STANDARD.encode(input)
}

/// Decodes `input`, which must use the standard alphabet with padding.
///
/// # Example
/// ```
/// # use google_cloud_base64::{EncodingError, decode};
/// assert_eq!(decode("")?, b"");
/// assert_eq!(decode("TWE=")?, b"Ma");
/// assert!(matches!(decode("A"), Err(EncodingError::InvalidLength { .. })));
/// # Ok::<(), EncodingError>(())
/// ```
pub fn decode<T: AsRef<[u8]>>(input: T) -> Result<Vec<u8>, EncodingError> {
    Engine::STANDARD.decode(input)
}
