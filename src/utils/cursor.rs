use std::io::BufRead;
use std::io::Cursor;

use crate::{Error, Result};

pub trait EasyRead {
    fn read_until_checked(&mut self, byte: u8, missing: &str) -> Result<Vec<u8>>;
}

impl<T: AsRef<[u8]>> EasyRead for Cursor<T> {
    /// This function is just an abstraction to simplify other functions since this process is used
    /// a lot.
    ///
    /// It reads until `byte`, consuming it, and returns the bytes read before it. Reaching the end
    /// of the data without finding `byte` is treated as corruption, reported with the `missing`
    /// message, so it can just be handled with the `?` operator.
    fn read_until_checked(&mut self, byte: u8, missing: &str) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        BufRead::read_until(self, byte, &mut buf)?;
        if buf.pop() != Some(byte) {
            return Err(Error::CorruptObject(missing.into()));
        }
        Ok(buf)
    }
}
