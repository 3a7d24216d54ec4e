//! Soundex Core - Phonetic name encoding
//!
//! This crate computes classic American Soundex codes: a name is reduced to
//! its uppercased initial followed by three digits describing the consonant
//! sounds that follow, so that names that sound alike ("Smith", "Smyth")
//! share a code.
//!
//! # Module Structure
//!
//! - `classify` - The letter-to-digit table and per-character classification
//! - `code` - The `SoundexCode` value type and code parsing
//! - `encoder` - Code generation for single names and batches
//!
//! # Examples
//!
//! ```ignore
//! use soundex_core::encode;
//!
//! let code = encode("Ashcraft").unwrap();
//! assert_eq!(code.as_str(), "A261");
//! ```

pub mod classify;
pub mod code;
pub mod encoder;

pub use classify::{classify, is_silent};
pub use code::{ParseCodeError, SoundexCode, CODE_LENGTH};
pub use encoder::{encode, encode_all, EncodeError};
