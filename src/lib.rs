//! Rename virtual desktops of an EWMH/NetWM compatible window manager.
//! Rely on the `_NET_DESKTOP_NAMES` root window property.
//!
mod error;
mod names;
mod utils;
pub mod x11;

pub use error::{Error, Result};
pub use names::{EditMode, edit};
pub use utils::{entries, entry, entry_count};

use log::{debug, info};

/// Names of all virtual desktops, as a list of NUL-terminated UTF-8 strings.
pub const DESKTOP_NAMES: &str = "_NET_DESKTOP_NAMES";

/// Index of the current virtual desktop, counting from 0.
pub const CURRENT_DESKTOP: &str = "_NET_CURRENT_DESKTOP";

/// Named properties holding the desktop state.
pub trait PropertyStore {
    /// Read the whole value of a string property.
    fn read(&self, name: &str) -> Result<Vec<u8>>;

    /// Read the first item of an integer property.
    fn read_integer(&self, name: &str) -> Result<u32>;

    /// Replace the value of a string property.
    fn write(&self, name: &str, data: &[u8]) -> Result<()>;
}

/// A single desktop rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub name: String,
    /// Desktop to rename, the current desktop when `None`.
    pub position: Option<usize>,
    pub mode: EditMode,
}

/// Apply `request` to the desktop names in `store`.
///
/// Returns the name list that was written. Nothing is written if any step
/// fails.
pub fn rename<S: PropertyStore + ?Sized>(store: &S, request: &Rename) -> Result<Vec<u8>> {
    if request.name.as_bytes().contains(&0) {
        return Err(Error::InvalidName);
    }

    let position = match request.position {
        Some(position) => position,
        None => {
            let current = store.read_integer(CURRENT_DESKTOP)?;
            debug!("Current desktop is {current}");
            current as usize
        }
    };

    let old_list = store.read(DESKTOP_NAMES)?;
    let new_list = edit(&old_list, request.name.as_bytes(), position, request.mode)?;

    info!(
        "{:?} desktop {position} as {:?} ({} -> {} names)",
        request.mode,
        request.name,
        entry_count(&old_list),
        entry_count(&new_list)
    );

    store.write(DESKTOP_NAMES, &new_list)?;

    Ok(new_list)
}
