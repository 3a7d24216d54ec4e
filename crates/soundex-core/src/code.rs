//! The Soundex code value type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of significant characters in every Soundex code.
pub const CODE_LENGTH: usize = 4;

/// Error types for parsing an existing Soundex code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodeError {
    /// The string does not have exactly four characters.
    #[error("Soundex code must be 4 characters, got {actual}")]
    InvalidLength { actual: usize },

    /// The first character is not something the encoder can emit.
    #[error("Invalid Soundex initial '{0}'")]
    InvalidInitial(char),

    /// A digit slot holds something other than `'0'..='6'`.
    #[error("Invalid Soundex digit '{found}' at position {position}")]
    InvalidDigit { position: usize, found: char },
}

/// A four-character Soundex code: an initial followed by three class digits.
///
/// Codes are small `Copy` values, so they can be used directly as keys in an
/// index without allocation.
///
/// # Example
/// ```ignore
/// use soundex_core::{encode, SoundexCode};
///
/// let code = encode("Robert").unwrap();
/// assert_eq!(code.as_str(), "R163");
/// assert_eq!(code, "R163".parse::<SoundexCode>().unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SoundexCode([u8; CODE_LENGTH]);

impl SoundexCode {
    /// Wrap a buffer filled in by the encoder.
    ///
    /// Every byte must be ASCII.
    pub(crate) fn from_ascii(bytes: [u8; CODE_LENGTH]) -> Self {
        debug_assert!(bytes.is_ascii(), "Soundex buffer must be ASCII");
        Self(bytes)
    }

    /// The full code, e.g. `"R163"`.
    pub fn as_str(&self) -> &str {
        // ASCII by construction, so this never falls back.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The uppercased first character of the encoded name.
    pub fn initial(&self) -> char {
        self.0[0] as char
    }

    /// The three class digits following the initial.
    pub fn digits(&self) -> &str {
        &self.as_str()[1..]
    }

    /// Check whether the code was padded, i.e. the name ran out of
    /// consonants before three digits were produced.
    pub fn is_padded(&self) -> bool {
        self.0[CODE_LENGTH - 1] == b'0'
    }
}

impl fmt::Display for SoundexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for SoundexCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SoundexCode {
    type Err = ParseCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actual = s.chars().count();
        if actual != CODE_LENGTH {
            return Err(ParseCodeError::InvalidLength { actual });
        }

        let mut bytes = [0u8; CODE_LENGTH];
        for (position, c) in s.chars().enumerate() {
            if position == 0 {
                // The encoder uppercases the initial and rejects non-ASCII.
                if !c.is_ascii() || c.is_ascii_lowercase() {
                    return Err(ParseCodeError::InvalidInitial(c));
                }
            } else if !('0'..='6').contains(&c) {
                return Err(ParseCodeError::InvalidDigit { position, found: c });
            }
            bytes[position] = c as u8;
        }

        Ok(Self(bytes))
    }
}

impl TryFrom<String> for SoundexCode {
    type Error = ParseCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SoundexCode> for String {
    fn from(code: SoundexCode) -> Self {
        code.as_str().to_string()
    }
}
