//! Letter classification using the classic American Soundex table.
//!
//! Every letter maps to a digit class from 0 to 6. Class 0 marks letters that
//! never contribute a digit (vowels plus H, W and Y).

/// Digit class for each letter, indexed by `letter - 'A'`.
///
/// | Class | Letters         |
/// |-------|-----------------|
/// | 0     | A E I O U H W Y |
/// | 1     | B F P V         |
/// | 2     | C G J K Q S X Z |
/// | 3     | D T             |
/// | 4     | L               |
/// | 5     | M N             |
/// | 6     | R               |
pub const CLASS_TABLE: [u8; 26] = [
    0, 1, 2, 3, 0, 1, 2, 0, 0, 2, //
    2, 4, 5, 5, 0, 1, 2, 6, 2, 3, //
    0, 1, 0, 2, 0, 2,
];

/// Class returned for silent letters and for anything that is not a letter.
pub const SILENT: char = '0';

/// Classify a character into its Soundex digit class.
///
/// The character is case-folded first. Anything outside `A..=Z` after folding
/// (digits, punctuation, whitespace, non-ASCII) is treated like a vowel.
///
/// # Returns
/// An ASCII digit from `'0'` to `'6'`.
#[inline]
pub fn classify(c: char) -> char {
    let upper = c.to_ascii_uppercase();
    if !upper.is_ascii_uppercase() {
        return SILENT;
    }
    let class = CLASS_TABLE[(upper as u8 - b'A') as usize];
    (b'0' + class) as char
}

/// Returns true if the character never contributes a digit to a code.
#[inline]
pub fn is_silent(c: char) -> bool {
    classify(c) == SILENT
}
