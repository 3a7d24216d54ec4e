//! WASM-compatible wrapper types for Soundex codes.
//!
//! This module provides a JavaScript-friendly type that wraps the core
//! `SoundexCode`, exposing its parts as getters.

use soundex_core::{encode, SoundexCode};
use wasm_bindgen::prelude::*;

/// A Soundex code wrapper for JavaScript.
///
/// # Example (TypeScript)
/// ```typescript
/// const code = new JsSoundexCode("Robert");
/// console.log(code.code);     // "R163"
/// console.log(code.initial);  // "R"
/// console.log(code.digits);   // "163"
///
/// const other = parse_soundex("R163");
/// code.matches(other);        // true
///
/// code.free();
/// other.free();
/// ```
#[wasm_bindgen]
pub struct JsSoundexCode {
    inner: SoundexCode,
}

#[wasm_bindgen]
impl JsSoundexCode {
    /// Encode a name.
    ///
    /// # Errors
    /// Throws if the name is empty or starts with a non-ASCII character.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<JsSoundexCode, JsValue> {
        let inner = encode(name).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(JsSoundexCode { inner })
    }

    /// The full four-character code
    #[wasm_bindgen(getter)]
    pub fn code(&self) -> String {
        self.inner.to_string()
    }

    /// The uppercased first character of the name
    #[wasm_bindgen(getter)]
    pub fn initial(&self) -> char {
        self.inner.initial()
    }

    /// The three class digits
    #[wasm_bindgen(getter)]
    pub fn digits(&self) -> String {
        self.inner.digits().to_string()
    }

    /// Whether the code was padded with trailing zeros
    #[wasm_bindgen(getter)]
    pub fn is_padded(&self) -> bool {
        self.inner.is_padded()
    }

    /// Check whether two codes are identical.
    pub fn matches(&self, other: &JsSoundexCode) -> bool {
        self.inner == other.inner
    }
}

impl JsSoundexCode {
    pub(crate) fn from_code(inner: SoundexCode) -> Self {
        Self { inner }
    }
}

/// Parse and validate an existing Soundex code.
///
/// # Errors
/// Throws if the string is not an initial followed by three digits `0`-`6`.
#[wasm_bindgen]
pub fn parse_soundex(code: &str) -> Result<JsSoundexCode, JsValue> {
    code.parse::<SoundexCode>()
        .map(JsSoundexCode::from_code)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
