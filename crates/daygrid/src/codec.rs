//! Wire format for schedule bit patterns.
//!
//! The canonical encoding splits the bit string into consecutive 32-bit
//! chunks, most-significant chunk first, renders each chunk as exactly 8
//! lowercase hex digits, and joins the chunks with `-`. A 288-bit schedule
//! (resolution 5) encodes as 9 chunks:
//!
//! ```text
//! 40000000-00000000-00000000-00000000-00000000-00000000-00000000-00000000-00000002
//! ```
//!
//! Decoding validates each token by fixed width and character class before
//! numeric parsing, so a chunk can never carry more than 32 bits. A bit
//! count that is not a whole number of chunks is rejected at encode time
//! rather than silently truncated.

use crate::error::{DaygridError, Result};

const CHUNK_BITS: usize = 32;
const CHUNK_HEX_DIGITS: usize = 8;

/// Encode a bit string into the dash-joined hex wire format.
///
/// # Errors
/// Returns `DaygridError::Encode` if the bit count is not a multiple of 32,
/// and `DaygridError::Decode` if the input contains non-binary characters.
pub fn encode(bits: &str) -> Result<String> {
    if bits.is_empty() || bits.len() % CHUNK_BITS != 0 {
        return Err(DaygridError::Encode(bits.len()));
    }
    if !bits.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(DaygridError::Decode(format!(
            "bit string {bits:?} contains non-binary characters"
        )));
    }

    let chunks: Vec<String> = bits
        .as_bytes()
        .chunks(CHUNK_BITS)
        .map(|chunk| {
            let value = chunk
                .iter()
                .fold(0u32, |acc, &b| (acc << 1) | u32::from(b == b'1'));
            format!("{value:08x}")
        })
        .collect();

    Ok(chunks.join("-"))
}

/// Decode a wire string back into a bit string, 32 bits per chunk.
///
/// Hex digits are accepted case-insensitively; the canonical form emitted by
/// [`encode`] is lowercase.
///
/// # Errors
/// Returns `DaygridError::Decode` if any token is not exactly 8 hex digits.
pub fn decode(wire: &str) -> Result<String> {
    let mut bits = String::with_capacity(wire.len() * 4);

    for token in wire.split('-') {
        if token.len() != CHUNK_HEX_DIGITS || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DaygridError::Decode(format!(
                "wire chunk {token:?} is not exactly 8 hex digits"
            )));
        }
        // Length and character class were just checked; 8 hex digits always
        // fit a u32.
        let value = u32::from_str_radix(token, 16)
            .map_err(|_| DaygridError::Decode(format!("wire chunk {token:?} is not hex")))?;
        bits.push_str(&format!("{value:032b}"));
    }

    Ok(bits)
}
