//! Soundex encoding WASM bindings.
//!
//! This module exposes the soundex-core encoder to JavaScript, for building
//! phonetic search keys in the browser.
//!
//! # Functions
//!
//! - [`soundex`] - Encode one name to its code string
//! - [`soundex_class`] - Digit class of a single character
//! - [`soundex_batch`] - Encode an array of names in one call
//!
//! # Example
//!
//! ```typescript
//! import { soundex, soundex_batch } from '@soundex/wasm';
//!
//! soundex("Ashcraft");                // "A261"
//! soundex_batch(["Smith", "", "Lee"]);
//! // [{ name: "Smith", code: "S530", error: null },
//! //  { name: "", code: null, error: "Cannot encode an empty name" },
//! //  { name: "Lee", code: "L000", error: null }]
//! ```

use crate::console;
use serde::Serialize;
use soundex_core::{classify, encode, encode_all};
use wasm_bindgen::prelude::*;

/// Encode a name to its four-character Soundex code.
///
/// # Arguments
///
/// * `name` - The name to encode
///
/// # Errors
///
/// Throws if the name is empty or starts with a non-ASCII character.
#[wasm_bindgen]
pub fn soundex(name: &str) -> Result<String, JsValue> {
    encode(name)
        .map(|code| code.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the Soundex digit class (`'0'`-`'6'`) of a single character.
///
/// Non-letters and vowels return `'0'`.
#[wasm_bindgen]
pub fn soundex_class(c: char) -> char {
    classify(c)
}

/// One result row of [`soundex_batch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct BatchEntry {
    name: String,
    code: Option<String>,
    error: Option<String>,
}

/// Encode every name, pairing each with its code or error message.
pub(crate) fn encode_entries(names: Vec<String>) -> Vec<BatchEntry> {
    let results = encode_all(&names);
    names
        .into_iter()
        .zip(results)
        .map(|(name, result)| match result {
            Ok(code) => BatchEntry {
                name,
                code: Some(code.to_string()),
                error: None,
            },
            Err(e) => BatchEntry {
                name,
                code: None,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

/// Encode an array of names in one call.
///
/// # Arguments
///
/// * `names` - Array of strings
///
/// # Returns
///
/// Array of `{ name, code, error }` objects in input order. Exactly one of
/// `code` and `error` is non-null. Failed entries are also logged to the
/// browser console as warnings.
///
/// # Errors
///
/// Throws if `names` is not an array of strings.
#[wasm_bindgen]
pub fn soundex_batch(names: JsValue) -> Result<JsValue, JsValue> {
    if !js_sys::Array::is_array(&names) {
        return Err(JsValue::from_str("Expected an array of names"));
    }
    let names: Vec<String> = serde_wasm_bindgen::from_value(names)
        .map_err(|e| JsValue::from_str(&format!("Invalid names: {}", e)))?;

    let entries = encode_entries(names);
    for (index, entry) in entries.iter().enumerate() {
        if let Some(error) = &entry.error {
            console::warn(&format!("soundex_batch: skipped entry {}: {}", index, error));
        }
    }

    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    entries
        .serialize(&serializer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
