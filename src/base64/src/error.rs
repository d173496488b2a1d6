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

/// Represent failures decoding base64 text.
///
/// Encoding never fails, every byte sequence has a base64 representation. The
/// decoder rejects any input that is not the encoding of some byte sequence,
/// it never truncates or substitutes data.
///
/// # Examples
/// ```
/// # use google_cloud_base64::{EncodingError, decode};
/// let err = decode("A").unwrap_err();
/// assert!(matches!(err, EncodingError::InvalidLength { length: 1 }));
///
/// let err = decode("A!B=").unwrap_err();
/// assert!(matches!(err, EncodingError::InvalidSymbol { offset: 1, symbol: b'!' }));
///
/// let err = decode("A===").unwrap_err();
/// assert!(matches!(err, EncodingError::InvalidPadding { offset: 1 }));
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodingError {
    /// The input length is not valid for the padding policy.
    ///
    /// With required padding the length must be a multiple of 4. Without
    /// padding no input can have a length of the form `4 * k + 1`.
    #[error("invalid base64 length {length}")]
    InvalidLength { length: usize },

    /// The byte at `offset` is not part of the alphabet.
    #[error("invalid base64 symbol {symbol:#04x} at offset {offset}")]
    InvalidSymbol { offset: usize, symbol: u8 },

    /// A padding character is misplaced, repeated too many times, or not
    /// allowed by the padding policy.
    #[error("invalid base64 padding at offset {offset}")]
    InvalidPadding { offset: usize },

    /// The last symbol carries bits that no encoder would produce.
    ///
    /// For example, `TR==` cannot be produced by an encoder: `TQ==` is the only
    /// encoding of `[0x4D]`.
    #[error("invalid base64 last symbol {symbol:#04x} at offset {offset}, unused bits must be zero")]
    InvalidLastSymbol { offset: usize, symbol: u8 },
}
