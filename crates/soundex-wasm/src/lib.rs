//! Soundex WASM - WebAssembly bindings for Soundex encoding
//!
//! This crate provides WASM bindings to expose the soundex-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `encode` - Name encoding bindings (single, per-character, batch)
//! - `types` - WASM-compatible wrapper type for Soundex codes
//!
//! # Usage
//!
//! ```typescript
//! import init, { soundex, JsSoundexCode } from '@soundex/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const key = soundex(input.value);
//! const code = new JsSoundexCode("Smith");
//! console.log(`${code.code} (initial ${code.initial})`);
//! ```

use wasm_bindgen::prelude::*;

mod console;
mod encode;
mod types;

// Re-export public types
pub use encode::{soundex, soundex_batch, soundex_class};
pub use types::{parse_soundex, JsSoundexCode};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Nothing to set up: the letter table is a constant.
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
