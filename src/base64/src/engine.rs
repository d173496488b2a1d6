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

use crate::alphabet::{Alphabet, INVALID, PAD};
use crate::error::EncodingError;

type Result<T> = std::result::Result<T, EncodingError>;

/// How an [Engine] emits and accepts `=` padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Padding {
    /// Emit padding, and require canonical padding when decoding.
    #[default]
    Required,
    /// Emit padding, and accept both padded and unpadded input.
    Optional,
    /// Never emit padding, and reject any padding when decoding.
    Omitted,
}

impl Padding {
    const fn emits(self) -> bool {
        !matches!(self, Padding::Omitted)
    }
}

/// Encodes and decodes base64 text with a given alphabet and padding policy.
///
/// Most applications only need the [STANDARD][Engine::STANDARD] engine, which
/// is what [encode][crate::encode] and [decode][crate::decode] use. The other
/// constants cover the variants found in Google APIs.
///
/// # Example
/// ```
/// # use google_cloud_base64::{Alphabet, Engine, EncodingError, Padding};
/// let engine = Engine::STANDARD.with_padding(Padding::Omitted);
/// assert_eq!(engine.encode(b"Ma"), "TWE");
/// assert_eq!(engine.decode("TWE")?, b"Ma");
/// assert!(engine.decode("TWE=").is_err());
/// # Ok::<(), EncodingError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Engine {
    alphabet: Alphabet,
    padding: Padding,
}

impl Default for Engine {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl Engine {
    /// The standard alphabet with canonical padding.
    pub const STANDARD: Engine = Engine::new(Alphabet::STANDARD, Padding::Required);

    /// The standard alphabet without padding.
    pub const STANDARD_NO_PAD: Engine = Engine::new(Alphabet::STANDARD, Padding::Omitted);

    /// The URL-safe alphabet with canonical padding.
    pub const URL_SAFE: Engine = Engine::new(Alphabet::URL_SAFE, Padding::Required);

    /// The URL-safe alphabet without padding.
    pub const URL_SAFE_NO_PAD: Engine = Engine::new(Alphabet::URL_SAFE, Padding::Omitted);

    /// Produces the standard encoding, and decodes anything a ProtoJSON
    /// parser accepts: either alphabet, with or without padding.
    pub const PROTOJSON: Engine = Engine::new(Alphabet::PROTOJSON, Padding::Optional);

    /// Creates a new engine.
    pub const fn new(alphabet: Alphabet, padding: Padding) -> Self {
        Self { alphabet, padding }
    }

    /// Returns a copy of this engine using `alphabet`.
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Returns a copy of this engine using `padding`.
    pub const fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// The alphabet used to encode and decode.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// The padding policy used to encode and decode.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// The length of the encoding for `length` input bytes.
    ///
    /// Returns `None` if the result does not fit in a `usize`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_base64::Engine;
    /// assert_eq!(Engine::STANDARD.encoded_len(4), Some(8));
    /// assert_eq!(Engine::STANDARD_NO_PAD.encoded_len(4), Some(6));
    /// assert_eq!(Engine::STANDARD.encoded_len(usize::MAX), None);
    /// ```
    pub const fn encoded_len(&self, length: usize) -> Option<usize> {
        let tail = match (length % 3, self.padding.emits()) {
            (0, _) => 0,
            (_, true) => 4,
            (1, false) => 2,
            (_, false) => 3,
        };
        match (length / 3).checked_mul(4) {
            Some(n) => n.checked_add(tail),
            None => None,
        }
    }

    /// Encodes `input` into a new string.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_base64::Engine;
    /// assert_eq!(Engine::STANDARD.encode(b"Man"), "TWFu");
    /// assert_eq!(Engine::URL_SAFE.encode([0xfb_u8, 0xff]), "-_8=");
    /// ```
    pub fn encode<T: AsRef<[u8]>>(&self, input: T) -> String {
        let mut output = String::new();
        self.encode_string(input, &mut output);
        output
    }

    /// Appends the encoding of `input` to `output`.
    pub fn encode_string<T: AsRef<[u8]>>(&self, input: T, output: &mut String) {
        let input = input.as_ref();
        if let Some(n) = self.encoded_len(input.len()) {
            output.reserve(n);
        }
        let chunks = input.chunks_exact(3);
        let tail = chunks.remainder();
        for chunk in chunks {
            let group = u32::from(chunk[0]) << 16 | u32::from(chunk[1]) << 8 | u32::from(chunk[2]);
            self.push_symbols(group, 4, output);
        }
        match *tail {
            [a] => {
                self.push_symbols(u32::from(a) << 16, 2, output);
                self.push_padding(2, output);
            }
            [a, b] => {
                self.push_symbols(u32::from(a) << 16 | u32::from(b) << 8, 3, output);
                self.push_padding(1, output);
            }
            _ => {}
        }
    }

    // `group` holds 24 bits, most significant first.
    fn push_symbols(&self, group: u32, count: u32, output: &mut String) {
        for i in 0..count {
            output.push(self.alphabet.symbol(group >> (18 - 6 * i)));
        }
    }

    fn push_padding(&self, count: usize, output: &mut String) {
        if self.padding.emits() {
            output.push_str(&"=="[..count]);
        }
    }

    /// Decodes `input` into a new vector.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_base64::{Engine, EncodingError};
    /// assert_eq!(Engine::STANDARD.decode("TWFu")?, b"Man");
    /// assert_eq!(Engine::PROTOJSON.decode("-_8")?, [0xfb, 0xff]);
    /// assert!(Engine::STANDARD.decode("-_8=").is_err());
    /// # Ok::<(), EncodingError>(())
    /// ```
    pub fn decode<T: AsRef<[u8]>>(&self, input: T) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.decode_vec(input, &mut output)?;
        Ok(output)
    }

    /// Appends the decoded bytes of `input` to `output`.
    ///
    /// On error `output` is left unchanged.
    pub fn decode_vec<T: AsRef<[u8]>>(&self, input: T, output: &mut Vec<u8>) -> Result<()> {
        let input = input.as_ref();
        let body = self.strip_padding(input)?;
        let start = output.len();
        let result = self.decode_body(body, input.len(), output);
        if result.is_err() {
            output.truncate(start);
        }
        result
    }

    /// Validates the padding and length of `input`, returning the symbols
    /// before any trailing padding.
    fn strip_padding<'a>(&self, input: &'a [u8]) -> Result<&'a [u8]> {
        let length = input.len();
        let body_len = input.iter().rposition(|b| *b != PAD).map_or(0, |p| p + 1);
        let padding = length - body_len;
        if padding > 2 {
            return Err(EncodingError::InvalidPadding { offset: body_len });
        }
        let valid = match self.padding {
            Padding::Required => length % 4 == 0,
            Padding::Optional if padding == 0 => length % 4 != 1,
            Padding::Optional => length % 4 == 0,
            Padding::Omitted if padding != 0 => {
                return Err(EncodingError::InvalidPadding { offset: body_len });
            }
            Padding::Omitted => length % 4 != 1,
        };
        if !valid {
            return Err(EncodingError::InvalidLength { length });
        }
        Ok(&input[..body_len])
    }

    fn decode_body(&self, body: &[u8], length: usize, output: &mut Vec<u8>) -> Result<()> {
        output.reserve(body.len() / 4 * 3 + 2);
        let chunks = body.chunks_exact(4);
        let tail = chunks.remainder();
        let tail_offset = body.len() - tail.len();
        for (i, chunk) in chunks.enumerate() {
            let group = self.gather(4 * i, chunk)?;
            output.extend_from_slice(&[(group >> 16) as u8, (group >> 8) as u8, group as u8]);
        }
        match *tail {
            [] => {}
            [_, last] => {
                let group = self.gather(tail_offset, tail)?;
                if group & 0xF != 0 {
                    return Err(EncodingError::InvalidLastSymbol {
                        offset: tail_offset + 1,
                        symbol: last,
                    });
                }
                output.push((group >> 4) as u8);
            }
            [_, _, last] => {
                let group = self.gather(tail_offset, tail)?;
                if group & 0x3 != 0 {
                    return Err(EncodingError::InvalidLastSymbol {
                        offset: tail_offset + 2,
                        symbol: last,
                    });
                }
                output.extend_from_slice(&[(group >> 10) as u8, (group >> 2) as u8]);
            }
            // Unreachable after `strip_padding()`.
            _ => return Err(EncodingError::InvalidLength { length }),
        }
        Ok(())
    }

    /// Packs up to four symbols into an integer, 6 bits per symbol.
    fn gather(&self, offset: usize, symbols: &[u8]) -> Result<u32> {
        let mut group = 0_u32;
        for (i, symbol) in symbols.iter().enumerate() {
            group = group << 6 | u32::from(self.value(offset + i, *symbol)?);
        }
        Ok(group)
    }

    fn value(&self, offset: usize, symbol: u8) -> Result<u8> {
        match self.alphabet.value(symbol) {
            INVALID if symbol == PAD => Err(EncodingError::InvalidPadding { offset }),
            INVALID => Err(EncodingError::InvalidSymbol { offset, symbol }),
            value => Ok(value),
        }
    }
}
