// In-place pattern rewriting.
//
// Each occurrence is overwritten with a block exactly as long as the pattern:
// the replacement bytes followed by zero padding. All offsets are collected
// before the first write, then rewritten in ascending order. When two
// occurrences overlap, the later offset wins on the shared bytes.

use crate::scan;

/// Build the fixed-size block written over each occurrence.
///
/// Callers keep `replacement` within `pattern_len`; any excess is dropped so
/// the block never outgrows the pattern.
pub fn padded_block(pattern_len: usize, replacement: &[u8]) -> Vec<u8> {
    let mut block = vec![0u8; pattern_len];
    let n = replacement.len().min(pattern_len);
    block[..n].copy_from_slice(&replacement[..n]);
    block
}

/// Overwrite every occurrence of `pattern` in `buf` with `replacement`,
/// zero-padded to the pattern length. Returns the number of occurrences.
pub fn replace_all(buf: &mut [u8], pattern: &[u8], replacement: &[u8]) -> usize {
    let offsets = scan::find_all(buf, pattern);
    if offsets.is_empty() {
        return 0;
    }

    let block = padded_block(pattern.len(), replacement);
    for &offset in &offsets {
        buf[offset..offset + block.len()].copy_from_slice(&block);
    }
    offsets.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
