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

/// Marks bytes that are not part of an alphabet in the reverse lookup tables.
pub(crate) const INVALID: u8 = 0xFF;

/// The padding character.
pub(crate) const PAD: u8 = b'=';

const STANDARD_SYMBOLS: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
const URL_SAFE_SYMBOLS: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

const STANDARD_DECODE: [u8; 256] = reverse(&STANDARD_SYMBOLS, [INVALID; 256]);
const URL_SAFE_DECODE: [u8; 256] = reverse(&URL_SAFE_SYMBOLS, [INVALID; 256]);
const PROTOJSON_DECODE: [u8; 256] = reverse(&URL_SAFE_SYMBOLS, STANDARD_DECODE);

/// Fills `table` with the 6-bit index of each symbol.
const fn reverse(symbols: &[u8; 64], mut table: [u8; 256]) -> [u8; 256] {
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// The symbols used to represent 6-bit groups.
///
/// An alphabet has a forward table, used when encoding, and a reverse table,
/// used when decoding. The reverse table may accept more symbols than the
/// encoder produces, see [Alphabet::PROTOJSON].
///
/// # Example
/// ```
/// # use google_cloud_base64::{Alphabet, Engine, Padding};
/// let engine = Engine::new(Alphabet::URL_SAFE, Padding::Omitted);
/// assert_eq!(engine.encode([0xfb_u8, 0xff]), "-_8");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: &'static [u8; 64],
    reverse: &'static [u8; 256],
}

impl Alphabet {
    /// The standard alphabet from [RFC 4648 section 4].
    ///
    /// This is the alphabet used by Google APIs for `bytes` fields.
    ///
    /// [RFC 4648 section 4]: https://www.rfc-editor.org/rfc/rfc4648#section-4
    pub const STANDARD: Alphabet = Alphabet {
        symbols: &STANDARD_SYMBOLS,
        reverse: &STANDARD_DECODE,
    };

    /// The URL and filename safe alphabet from [RFC 4648 section 5].
    ///
    /// [RFC 4648 section 5]: https://www.rfc-editor.org/rfc/rfc4648#section-5
    pub const URL_SAFE: Alphabet = Alphabet {
        symbols: &URL_SAFE_SYMBOLS,
        reverse: &URL_SAFE_DECODE,
    };

    /// Encodes with the standard symbols, decodes both standard and URL-safe
    /// symbols.
    ///
    /// ProtoJSON parsers accept either alphabet for `bytes` fields, while
    /// serializers always produce the standard alphabet.
    pub const PROTOJSON: Alphabet = Alphabet {
        symbols: &STANDARD_SYMBOLS,
        reverse: &PROTOJSON_DECODE,
    };

    /// Returns the symbol for the low 6 bits of `index`.
    pub(crate) fn symbol(&self, index: u32) -> char {
        char::from(self.symbols[(index & 0x3F) as usize])
    }

    /// Returns the 6-bit value for `symbol`, or [INVALID].
    pub(crate) fn value(&self, symbol: u8) -> u8 {
        self.reverse[usize::from(symbol)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Alphabet::STANDARD)]
    #[test_case(Alphabet::URL_SAFE)]
    #[test_case(Alphabet::PROTOJSON)]
    fn reverse_inverts_symbols(alphabet: Alphabet) {
        for index in 0..64_u32 {
            let symbol = alphabet.symbol(index);
            assert!(symbol.is_ascii(), "{symbol:?}");
            assert_eq!(u32::from(alphabet.value(symbol as u8)), index, "{symbol:?}");
        }
    }

    #[test_case(Alphabet::STANDARD, 64)]
    #[test_case(Alphabet::URL_SAFE, 64)]
    #[test_case(Alphabet::PROTOJSON, 66)]
    fn accepted_symbols(alphabet: Alphabet, want: usize) {
        let got = (0..=u8::MAX)
            .filter(|b| alphabet.value(*b) != INVALID)
            .count();
        assert_eq!(got, want);
    }

    #[test]
    fn padding_is_not_a_symbol() {
        for alphabet in [Alphabet::STANDARD, Alphabet::URL_SAFE, Alphabet::PROTOJSON] {
            assert_eq!(alphabet.value(PAD), INVALID);
        }
    }

    #[test_case(b'+', 62; "standard 62")]
    #[test_case(b'/', 63; "standard 63")]
    #[test_case(b'-', 62; "url safe 62")]
    #[test_case(b'_', 63; "url safe 63")]
    fn protojson_accepts_both(symbol: u8, want: u8) {
        assert_eq!(Alphabet::PROTOJSON.value(symbol), want);
    }

    #[test]
    fn standard_symbols() {
        let got: String = (0..64).map(|i| Alphabet::STANDARD.symbol(i)).collect();
        assert_eq!(
            got,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"
        );
        assert_eq!(Alphabet::PROTOJSON.symbol(62), '+');
        assert_eq!(Alphabet::URL_SAFE.symbol(63), '_');
    }
}
