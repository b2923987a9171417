//! Contiguous-run extraction over schedule bit strings.
//!
//! A single left-to-right scan over the canonical bit ordering — the same
//! ordering used by [`crate::bitarray`] and [`crate::codec`] — with no
//! intermediate reversal. A run opens on a `0→1` transition (or a leading
//! `1`) and closes on the next `1→0` transition (or end of input).

use std::ops::Range;

/// Extract the maximal runs of set bits as half-open index ranges.
///
/// Ranges are ascending by start, non-overlapping, separated by at least one
/// zero bit, and never empty. An all-zero input yields an empty vec.
#[must_use]
pub fn extract(bits: &str) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;

    for (index, byte) in bits.bytes().enumerate() {
        match (byte, open) {
            (b'1', None) => open = Some(index),
            (b'0', Some(start)) => {
                runs.push(start..index);
                open = None;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        runs.push(start..bits.len());
    }

    runs
}
