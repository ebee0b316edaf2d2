//! # Canonical JSON
//!
//! Payloads enter the seal preimage as JSON text, so two observers must
//! serialize the same value to the same bytes. `serde_json` keeps object
//! keys in sorted order (the `preserve_order` feature is not enabled
//! anywhere in this workspace), which makes plain serialization canonical.

use serde_json::Value;

/// Serialize a payload to its canonical JSON text.
pub fn canonical_json(value: &Value) -> String {
    // Compact separators, sorted keys. `Value` serialization cannot fail.
    value.to_string()
}
