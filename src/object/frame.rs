use std::io::Cursor;

use crate::object::{NULL_BYTE, ObjectKind, SPACE_BYTE};
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

/// A decoded object frame: the object kind plus a view into the raw payload.
///
/// Every object is stored (before compression) with the following layout:
///
/// "`{kind} {payload_length}\0{payload}`"
#[derive(Debug)]
pub struct Frame<'a> {
    pub kind: ObjectKind,
    pub payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Builds the canonical framing for an object payload.
    ///
    /// The declared length is always the exact payload length, so this
    /// function has no failure conditions.
    pub fn encode(kind: ObjectKind, payload: &[u8]) -> Vec<u8> {
        // Encoding to this format: blob 4\0abcd
        let mut bytes = Vec::with_capacity(payload.len() + 16);
        bytes.extend_from_slice(kind.to_string().as_bytes());
        bytes.push(SPACE_BYTE);
        bytes.extend_from_slice(payload.len().to_string().as_bytes());
        bytes.push(NULL_BYTE);
        bytes.extend_from_slice(payload);
        bytes
    }

    /// Splits framed bytes into the object kind and its payload, checking
    /// that the declared payload length matches the actual one.
    ///
    /// # Errors
    ///
    /// This function will fail with `Error::CorruptObject` if:
    /// - The header separators are missing.
    /// - The kind tag is not a known object kind.
    /// - The declared length is not a number or does not match the payload.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        let mut cursor = Cursor::new(bytes);

        // reading kind
        let kind_buf = cursor.read_until_checked(SPACE_BYTE, "expected space after object kind")?;
        let kind = ObjectKind::try_from(String::from_utf8_lossy(&kind_buf).as_ref())?;

        // reading declared payload length
        let len_buf = cursor.read_until_checked(NULL_BYTE, "expected null byte after payload length")?;
        let declared_len: usize = String::from_utf8_lossy(&len_buf)
            .parse()
            .map_err(|_| Error::CorruptObject("payload length is not a number".into()))?;

        let payload = &bytes[cursor.position() as usize..];
        if payload.len() != declared_len {
            return Err(Error::CorruptObject(format!(
                "declared payload length {} did not match actual length {}",
                declared_len,
                payload.len()
            )));
        }

        Ok(Self { kind, payload })
    }
}

// Tests
