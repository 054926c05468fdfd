//! # Hex Rendering — Diagnostic Output Helpers
//!
//! Lowercase hex rendering for byte buffers, shared by the parameter
//! types' `Display` and `Debug` implementations. Output is for humans
//! reading logs; nothing here is a parseable or round-trippable format.

/// Indentation prefix for multi-line parameter renderings.
pub const INDENT: &str = "  ";

/// Render bytes as a lowercase hex string.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// First four bytes as lowercase hex, for abbreviated `Debug` output.
pub fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
}
