//! X11 root window property store.
//!
use log::{debug, warn};
use x11rb::{
    connection::Connection,
    protocol::xproto::{Atom, AtomEnum, ConnectionExt as _, GetPropertyReply, PropMode, Window},
    rust_connection::RustConnection,
    wrapper::ConnectionExt as _,
};

use crate::{Error, PropertyStore, Result};

const UTF8_STRING: &str = "UTF8_STRING";

/// Properties of the root window of the default screen.
pub struct X11Store {
    conn: RustConnection,
    root: Window,
}

impl X11Store {
    /// Connect to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(display)?;
        let root = conn.setup().roots[screen_num].root;
        debug!("Connected to screen {screen_num}, root window {root:#x}");

        Ok(Self { conn, root })
    }

    fn atom(&self, name: &str) -> Result<Atom> {
        Ok(self.conn.intern_atom(false, name.as_bytes())?.reply()?.atom)
    }

    fn get(&self, name: &str, type_: Atom, format: u8) -> Result<GetPropertyReply> {
        let property = self.atom(name)?;
        let reply = self
            .conn
            .get_property(false, self.root, property, type_, 0, u32::MAX)?
            .reply()?;
        debug!(
            "{name}: type {}, format {}, {} bytes",
            reply.type_,
            reply.format,
            reply.value.len()
        );

        // A missing property comes back with type NONE.
        if reply.type_ == u32::from(AtomEnum::NONE) {
            return Err(Error::unavailable(name, "property not set"));
        }
        if reply.type_ != type_ || reply.format != format {
            return Err(Error::unavailable(name, "invalid type"));
        }
        if reply.bytes_after != 0 {
            return Err(Error::unavailable(
                name,
                format!("{} bytes left unread", reply.bytes_after),
            ));
        }

        Ok(reply)
    }
}

impl PropertyStore for X11Store {
    fn read(&self, name: &str) -> Result<Vec<u8>> {
        let utf8_string = self.atom(UTF8_STRING)?;
        Ok(self.get(name, utf8_string, 8)?.value)
    }

    fn read_integer(&self, name: &str) -> Result<u32> {
        let reply = self.get(name, AtomEnum::CARDINAL.into(), 32)?;
        let mut values = reply
            .value32()
            .ok_or_else(|| Error::unavailable(name, "invalid format"))?;

        let value = values
            .next()
            .ok_or_else(|| Error::unavailable(name, "property is empty"))?;
        if values.next().is_some() {
            warn!("{name} has more than one value, using the first one");
        }

        Ok(value)
    }

    fn write(&self, name: &str, data: &[u8]) -> Result<()> {
        let property = self.atom(name)?;
        let utf8_string = self.atom(UTF8_STRING)?;

        self.conn
            .change_property8(PropMode::REPLACE, self.root, property, utf8_string, data)?
            .check()?;
        debug!("{name}: wrote {} bytes", data.len());

        Ok(())
    }
}
