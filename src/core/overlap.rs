/*!
# Overlap Computation

`overlap(a, b)` returns the length of the longest proper suffix of `a` that is also a prefix of
`b` — the number of bytes saved by merging `a` followed by `b` into `a[..] + b[overlap..]`.

Computed via the KMP failure function over the composed byte string `b + sentinel + a`, same
construction as `original_source/src/overlap.py`, except the sentinel byte is chosen dynamically
(any byte absent from both `a` and `b`) rather than a hardcoded `'#'`, since the crate operates on
arbitrary byte strings rather than text known to exclude `#`.
*/

use crate::core::error::{Result, SspError};

/// Returns the length of the longest suffix of `a` that is a prefix of `b`.
///
/// Degenerates gracefully for empty inputs: `overlap("", b) == 0` and `overlap(a, "") == 0`.
pub fn overlap(a: &str, b: &str) -> Result<usize> {
    if a.is_empty() || b.is_empty() {
        return Ok(0);
    }

    let sentinel = pick_sentinel(a.as_bytes(), b.as_bytes())?;

    let mut composed = Vec::with_capacity(b.len() + 1 + a.len());
    composed.extend_from_slice(b.as_bytes());
    composed.push(sentinel);
    composed.extend_from_slice(a.as_bytes());

    let pi = kmp_failure_function(&composed);
    Ok(*pi.last().unwrap_or(&0) as usize)
}

/// Computes the KMP failure function (prefix function) of `s`.
fn kmp_failure_function(s: &[u8]) -> Vec<u32> {
    let mut pi = vec![0u32; s.len()];
    for i in 1..s.len() {
        let mut j = pi[i - 1];
        while j > 0 && s[i] != s[j as usize] {
            j = pi[(j - 1) as usize];
        }
        if s[i] == s[j as usize] {
            j += 1;
        }
        pi[i] = j;
    }
    pi
}

/// Finds a byte value that occurs in neither `a` nor `b`, to use as a separator in the KMP
/// composition. Fails only if every one of the 256 byte values is already present in `a` or `b`.
fn pick_sentinel(a: &[u8], b: &[u8]) -> Result<u8> {
    let mut seen = [false; 256];
    for &byte in a.iter().chain(b.iter()) {
        seen[byte as usize] = true;
    }
    (0u16..256)
        .map(|v| v as u8)
        .find(|&v| !seen[v as usize])
        .ok_or_else(|| {
            SspError::alphabet_conflict(
                "every byte value 0..=255 already occurs in the input pair; no separator byte is available",
            )
        })
}
