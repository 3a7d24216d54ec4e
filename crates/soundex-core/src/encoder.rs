//! Soundex code generation.
//!
//! A name is encoded in a single pass: the first character is kept as the
//! initial, every following character is classified, and class digits are
//! appended until three have been written. Short names are padded with `'0'`.

use crate::classify::{classify, SILENT};
use crate::code::{SoundexCode, CODE_LENGTH};
use thiserror::Error;

/// Errors that can occur while encoding a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// There is no first character to use as the initial.
    #[error("Cannot encode an empty name")]
    EmptyName,

    /// The initial is emitted verbatim, so it must be ASCII.
    #[error("Name must start with an ASCII character, got '{0}'")]
    NonAsciiInitial(char),
}

/// Output buffer and write cursor for a single encode call.
struct CodeBuilder {
    buf: [u8; CODE_LENGTH],
    len: usize,
}

impl CodeBuilder {
    fn with_initial(initial: char) -> Self {
        let mut buf = [0u8; CODE_LENGTH];
        buf[0] = initial.to_ascii_uppercase() as u8;
        Self { buf, len: 1 }
    }

    fn is_full(&self) -> bool {
        self.len >= CODE_LENGTH
    }

    /// Append a class digit unless it is silent or repeats the last written
    /// slot.
    ///
    /// Right after the initial, the last written slot is the initial itself,
    /// not its class. A letter initial never equals a class digit, so a
    /// following letter of the same class still gets its own digit
    /// ("Pfister" is `P123`).
    fn push_class(&mut self, digit: char) {
        if self.is_full() || digit == SILENT {
            return;
        }
        let digit = digit as u8;
        if digit != self.buf[self.len - 1] {
            self.buf[self.len] = digit;
            self.len += 1;
        }
    }

    fn finish(mut self) -> SoundexCode {
        self.buf[self.len..].fill(SILENT as u8);
        SoundexCode::from_ascii(self.buf)
    }
}

/// Encode a name as a four-character Soundex code.
///
/// # Arguments
/// * `name` - The name to encode. Characters after the first that are not
///   ASCII letters are ignored.
///
/// # Returns
/// The code, or an error if the name is empty or starts with a non-ASCII
/// character.
///
/// # Example
/// ```ignore
/// use soundex_core::encode;
///
/// assert_eq!(encode("Robert").unwrap().as_str(), "R163");
/// assert_eq!(encode("Lee").unwrap().as_str(), "L000");
/// ```
pub fn encode(name: &str) -> Result<SoundexCode, EncodeError> {
    let mut chars = name.chars();
    let initial = chars.next().ok_or(EncodeError::EmptyName)?;
    if !initial.is_ascii() {
        return Err(EncodeError::NonAsciiInitial(initial));
    }

    let mut builder = CodeBuilder::with_initial(initial);
    for c in chars {
        if builder.is_full() {
            break;
        }
        builder.push_class(classify(c));
    }

    Ok(builder.finish())
}

/// Encode many names, keeping input order.
///
/// Each name is encoded independently, so a rejected name only affects its
/// own slot in the output.
pub fn encode_all<I>(names: I) -> Vec<Result<SoundexCode, EncodeError>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names.into_iter().map(|name| encode(name.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(name: &str) -> String {
        encode(name).unwrap().to_string()
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(code("Robert"), "R163");
        assert_eq!(code("Rupert"), "R163");
        assert_eq!(code("Rubin"), "R150");
        assert_eq!(code("Ashcraft"), "A261");
        assert_eq!(code("Ashcroft"), "A261");
        assert_eq!(code("Tymczak"), "T520");
        assert_eq!(code("Honeyman"), "H500");
        assert_eq!(code("Washington"), "W252");
    }

    #[test]
    fn test_padding() {
        assert_eq!(code("Lee"), "L000");
        assert_eq!(code("A"), "A000");
        assert_eq!(code("x"), "X000");
        assert_eq!(code("Aeiou"), "A000");
    }

    #[test]
    fn test_adjacent_duplicates_collapse() {
        assert_eq!(code("Abb"), "A100");
        assert_eq!(code("Abbbbc"), "A120");
        assert_eq!(code("Jackson"), "J250");
    }

    #[test]
    fn test_silent_letters_do_not_separate_duplicates() {
        // b and p share class 1 and the vowel between them is never written.
        assert_eq!(code("Abap"), "A100");
    }

    #[test]
    fn test_initial_compared_as_raw_character() {
        // P and f share class 1, but the previous slot holds 'P', not '1'.
        assert_eq!(code("Pfister"), "P123");
        assert_eq!(code("Bb"), "B100");
    }

    #[test]
    fn test_digit_initial_suppresses_matching_class() {
        // The raw initial '1' equals class 1, so the first b is dropped.
        assert_eq!(code("1bd"), "1300");
        assert_eq!(code("2bd"), "2130");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(code("ashcraft"), "A261");
        assert_eq!(code("ASHCRAFT"), "A261");
        assert_eq!(code("Ashcraft"), "A261");
        assert_eq!(code("aShCrAfT"), "A261");
    }

    #[test]
    fn test_similar_names_collide() {
        assert_eq!(code("Smith"), "S530");
        assert_eq!(code("Smyth"), "S530");
        assert_eq!(code("Smythe"), "S530");
    }

    #[test]
    fn test_unrelated_names_differ() {
        assert_ne!(code("Smith"), code("Jones"));
        assert_ne!(code("Robert"), code("Lee"));
        assert_ne!(code("Ashcraft"), code("Washington"));
    }

    #[test]
    fn test_non_letters_ignored() {
        assert_eq!(code("O'Brien"), "O165");
        assert_eq!(code("Smith-Jones"), "S532");
        assert_eq!(code("R2o3b4e5r6t"), "R163");
    }

    #[test]
    fn test_initial_kept_verbatim() {
        assert_eq!(code(" Smith"), " 253");
        assert_eq!(code("-ab"), "-100");
    }

    #[test]
    fn test_non_ascii_after_initial_is_silent() {
        assert_eq!(code("Müller"), "M460");
        assert_eq!(code("Zoë"), "Z000");
    }

    #[test]
    fn test_truncates_long_names() {
        assert_eq!(code("Bdlmnrbdlmnr"), "B345");
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(encode(""), Err(EncodeError::EmptyName));
    }

    #[test]
    fn test_non_ascii_initial() {
        assert_eq!(encode("Émile"), Err(EncodeError::NonAsciiInitial('É')));
    }

    #[test]
    fn test_encode_all_keeps_order() {
        let results = encode_all(["Robert", "", "Lee"]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().as_str(), "R163");
        assert_eq!(results[1], Err(EncodeError::EmptyName));
        assert_eq!(results[2].as_ref().unwrap().as_str(), "L000");
    }

    #[test]
    fn test_encode_all_owned_strings() {
        let names = vec!["Smith".to_string(), "Smyth".to_string()];
        let results = encode_all(&names);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_encode_error_display() {
        assert_eq!(EncodeError::EmptyName.to_string(), "Cannot encode an empty name");
        assert_eq!(
            EncodeError::NonAsciiInitial('Ö').to_string(),
            "Name must start with an ASCII character, got 'Ö'"
        );
    }
}
