//! Hex and base64 wrappers over the binary wire format.
//!
//! Inputs tolerate interior whitespace (line-wrapped key files, copy-paste);
//! outputs are canonical: lowercase hex, padded RFC 4648 base64.

use base64::{engine::general_purpose::STANDARD as B64, Engine as _};

use crate::{CodecError, Result};

pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

pub fn decode_hex(s: &str) -> Result<Vec<u8>> {
    let clean: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(clean).map_err(|e| CodecError::InvalidHexEncoding(e.to_string()))
}

pub fn encode_base64(bytes: &[u8]) -> String {
    B64.encode(bytes)
}

pub fn decode_base64(s: &str) -> Result<Vec<u8>> {
    let clean: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    B64.decode(clean)
        .map_err(|e| CodecError::InvalidBase64Encoding(e.to_string()))
}
