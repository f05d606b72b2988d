//! Desktop name list editing.
//!
//! `_NET_DESKTOP_NAMES` holds the names of all virtual desktops as
//! NUL-terminated UTF-8 strings packed back-to-back. The number of names may
//! differ from `_NET_NUMBER_OF_DESKTOPS`: missing names leave desktops
//! unnamed and excess names are kept for desktops added later. Empty names are
//! legal, so only the property length tells where the list ends.
//!
use log::debug;

use crate::{
    error::{Error, Result},
    utils::{entry_count, split_entry},
};

/// How the new name is placed in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Replace the name at the position, keeping the number of names.
    #[default]
    Overwrite,
    /// Add a name at the position, moving later names down by one.
    Insert,
}

/// Place `new_name` at `pos` in `old_list` and return the edited list.
///
/// The length of `old_list` is authoritative: a trailing run without a
/// terminator is treated as the last name and comes out terminated.
///
/// Overwriting a position past the last name returns the list unchanged.
/// Inserting past the last name pads the list with empty names up to `pos`.
///
/// `new_name` must not contain a NUL byte.
pub fn edit(old_list: &[u8], new_name: &[u8], pos: usize, mode: EditMode) -> Result<Vec<u8>> {
    debug_assert!(!new_name.contains(&0), "name contains a NUL byte");

    let count = entry_count(old_list);

    if mode == EditMode::Overwrite && pos >= count {
        debug!("No name at {pos} (list has {count}), nothing to overwrite");
        let mut unchanged = Vec::new();
        unchanged.try_reserve_exact(old_list.len())?;
        unchanged.extend_from_slice(old_list);
        return Ok(unchanged);
    }

    let mut new_list = Vec::new();
    new_list.try_reserve_exact(capacity_hint(old_list.len(), new_name.len(), pos, count)?)?;

    let mut read = 0;
    let mut id = 0;

    while read < old_list.len() || (mode == EditMode::Insert && id <= pos) {
        // Past the end of the old list (insert padding), every source name is empty.
        let (old_name, consumed) = split_entry(old_list.get(read..).unwrap_or_default());

        if id == pos {
            new_list.extend_from_slice(new_name);
        } else {
            new_list.extend_from_slice(old_name);
        }
        new_list.push(0);

        // An inserted name takes no slot from the old list.
        if mode == EditMode::Overwrite || id != pos {
            read += consumed;
        }

        id += 1;
    }

    debug!(
        "{mode:?} at {pos}: {} names ({} bytes) -> {} names ({} bytes)",
        count,
        old_list.len(),
        id,
        new_list.len()
    );

    Ok(new_list)
}

/// Upper bound of the edited list length.
///
/// Old list, a terminator for an unterminated last name, empty names padding
/// up to `pos`, then the new name and its terminator.
fn capacity_hint(old_len: usize, name_len: usize, pos: usize, count: usize) -> Result<usize> {
    old_len
        .checked_add(1)
        .and_then(|n| n.checked_add(pos.saturating_sub(count)))
        .and_then(|n| n.checked_add(name_len))
        .and_then(|n| n.checked_add(1))
        .ok_or(Error::OutOfMemory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::entry;

    fn overwrite(old: &[u8], name: &str, pos: usize) -> Vec<u8> {
        edit(old, name.as_bytes(), pos, EditMode::Overwrite).unwrap()
    }

    fn insert(old: &[u8], name: &str, pos: usize) -> Vec<u8> {
        edit(old, name.as_bytes(), pos, EditMode::Insert).unwrap()
    }

    #[test]
    fn empty_list() {
        assert_eq!(insert(b"", "foo", 0), b"foo\0");
        // Nothing to overwrite.
        assert_eq!(overwrite(b"", "foo", 0), b"");
    }

    #[test]
    fn single_empty_name() {
        assert_eq!(overwrite(b"\0", "foo", 0), b"foo\0");
        assert_eq!(insert(b"\0", "foo", 0), b"foo\0\0");
        assert_eq!(insert(b"\0", "foo", 1), b"\0foo\0");
    }

    #[test]
    fn single_name() {
        assert_eq!(overwrite(b"bar\0", "foo", 0), b"foo\0");
        assert_eq!(insert(b"bar\0", "foo", 0), b"foo\0bar\0");
        assert_eq!(insert(b"bar\0", "foo", 1), b"bar\0foo\0");
    }

    #[test]
    fn overwrite_three_names() {
        let list = b"foo\0bar\0baz\0";

        assert_eq!(overwrite(list, "quux", 0), b"quux\0bar\0baz\0");
        assert_eq!(overwrite(list, "quux", 1), b"foo\0quux\0baz\0");
        assert_eq!(overwrite(list, "quux", 2), b"foo\0bar\0quux\0");
        assert_eq!(overwrite(list, "quux", 3), list);
    }

    #[test]
    fn insert_three_names() {
        let list = b"foo\0bar\0baz\0";

        assert_eq!(insert(list, "quux", 0), b"quux\0foo\0bar\0baz\0");
        assert_eq!(insert(list, "quux", 1), b"foo\0quux\0bar\0baz\0");
        assert_eq!(insert(list, "quux", 2), b"foo\0bar\0quux\0baz\0");
        assert_eq!(insert(list, "quux", 3), b"foo\0bar\0baz\0quux\0");
    }

    #[test]
    fn insert_past_end_pads_with_empty_names() {
        let edited = insert(b"foo\0bar\0baz\0", "quux", 4);
        assert_eq!(edited, b"foo\0bar\0baz\0\0quux\0");
        assert_eq!(edited.len(), 18);

        assert_eq!(insert(b"", "foo", 2), b"\0\0foo\0");
    }

    #[test]
    fn empty_names_in_list() {
        assert_eq!(overwrite(b"\0bar\0baz\0", "quux", 0), b"quux\0bar\0baz\0");
        assert_eq!(overwrite(b"\0bar\0baz\0", "quux", 1), b"\0quux\0baz\0");
        assert_eq!(overwrite(b"foo\0\0baz\0", "quux", 1), b"foo\0quux\0baz\0");
        assert_eq!(overwrite(b"foo\0\0baz\0", "quux", 2), b"foo\0\0quux\0");
        assert_eq!(overwrite(b"foo\0bar\0\0", "quux", 1), b"foo\0quux\0\0");
        assert_eq!(overwrite(b"foo\0bar\0\0", "quux", 2), b"foo\0bar\0quux\0");
    }

    #[test]
    fn empty_new_name() {
        assert_eq!(overwrite(b"foo\0bar\0", "", 0), b"\0bar\0");
        assert_eq!(insert(b"foo\0bar\0", "", 1), b"foo\0\0bar\0");
    }

    #[test]
    fn unterminated_last_name() {
        let list = b"foo\0ba";

        assert_eq!(overwrite(list, "quux", 1), b"foo\0quux\0");
        assert_eq!(overwrite(list, "quux", 0), b"quux\0ba\0");
        assert_eq!(insert(list, "quux", 0), b"quux\0foo\0ba\0");
        assert_eq!(insert(list, "quux", 3), b"foo\0ba\0\0quux\0");
        // No name at 2, the list stays byte-identical.
        assert_eq!(overwrite(list, "quux", 2), list);
    }

    #[test]
    fn never_reads_past_slice() {
        let buffer = b"foo\0bar\0baz\0";

        assert_eq!(overwrite(&buffer[..6], "quux", 0), b"quux\0ba\0");
        assert_eq!(insert(&buffer[..4], "quux", 1), b"foo\0quux\0");
        assert_eq!(overwrite(&buffer[..4], "quux", 1), b"foo\0");
    }

    #[test]
    fn input_is_left_untouched() {
        let list = b"foo\0bar\0".to_vec();
        let _ = insert(&list, "quux", 1);
        assert_eq!(list, b"foo\0bar\0");
    }

    #[test]
    fn insert_grows_name_count() {
        let lists: [&[u8]; 6] = [b"", b"\0", b"bar\0", b"foo\0bar\0baz\0", b"foo\0\0baz\0", b"foo\0ba"];

        for list in lists {
            let count = entry_count(list);
            for pos in 0..count + 3 {
                let edited = insert(list, "quux", pos);
                assert_eq!(entry_count(&edited), pos.max(count) + 1, "{list:?} at {pos}");
                assert_eq!(entry(&edited, pos), Some(&b"quux"[..]), "{list:?} at {pos}");
            }
        }
    }

    #[test]
    fn overwrite_keeps_name_count() {
        let lists: [&[u8]; 5] = [b"\0", b"bar\0", b"foo\0bar\0baz\0", b"\0bar\0baz\0", b"foo\0ba"];

        for list in lists {
            let count = entry_count(list);
            for pos in 0..count {
                let edited = overwrite(list, "quux", pos);
                assert_eq!(entry_count(&edited), count, "{list:?} at {pos}");
                assert_eq!(entry(&edited, pos), Some(&b"quux"[..]), "{list:?} at {pos}");
            }
            for pos in count..count + 3 {
                assert_eq!(overwrite(list, "quux", pos), list, "{list:?} at {pos}");
            }
        }
    }

    #[test]
    fn impossible_padding_is_out_of_memory() {
        let result = edit(b"foo\0", b"bar", usize::MAX, EditMode::Insert);
        assert!(matches!(result, Err(Error::OutOfMemory)));
    }
}
