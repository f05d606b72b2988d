//! NUL-separated name list utilities.
//!
//! A name list is a run of NUL-terminated strings with no overall terminator,
//! so the slice length is the only end marker. A trailing run without a
//! terminator still counts as an entry.

/// Split the entry at the start of `buffer`.
///
/// Returns the entry without its terminator and the number of bytes it
/// occupies in `buffer` (terminator included when present).
pub fn split_entry(buffer: &[u8]) -> (&[u8], usize) {
    match buffer.iter().position(|&c| c == 0) {
        Some(end) => (&buffer[..end], end + 1),
        None => (buffer, buffer.len()),
    }
}

/// Iterate over the entries of a name list, terminators stripped.
pub fn entries(buffer: &[u8]) -> impl Iterator<Item = &[u8]> {
    buffer
        .split_inclusive(|&c| c == 0)
        .map(|s| s.strip_suffix(b"\0").unwrap_or(s))
}

pub fn entry_count(buffer: &[u8]) -> usize {
    entries(buffer).count()
}

pub fn entry(buffer: &[u8], index: usize) -> Option<&[u8]> {
    entries(buffer).nth(index)
}
