use std::ffi::OsString;
use std::fmt::Display;
use std::io::{BufRead, Cursor, Read};
use std::os::unix::ffi::OsStringExt;
use std::path::PathBuf;

use crate::hashing::{HASH_BYTE_LEN, Hash};
use crate::object::{Frame, NULL_BYTE, ObjectKind, SPACE_BYTE};
use crate::utils::cursor::EasyRead;
use crate::{Error, Result};

/// Struct that represents a single tree entry in a tree object.
#[derive(Debug)]
pub struct TreeEntry {
    /// The mode is kept as the digit string found in the payload
    pub mode: String,
    /// Kind of the object the entry points to, derived from the mode
    pub kind: ObjectKind,
    pub name: PathBuf,
    pub hash: Hash,
}

impl Display for TreeEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} {} {}    {}",
            self.mode,
            self.kind,
            self.hash,
            self.name.to_string_lossy(),
        ))
    }
}

/// Decodes a tree object from its full framed bytes into its entries,
/// where every entry in the payload has this layout:
///
/// "`{mode} {name}\0{hash}`"
///
/// The hash being `HASH_BYTE_LEN` raw bytes, not hex encoded.
///
/// Entries are returned in the exact order they appear in the payload.
///
/// # Errors
///
/// This function will fail if:
/// - The frame is not valid (see `Frame::from_bytes`).
/// - The framed object is not a tree.
/// - An entry is malformed or its hash is truncated.
/// - An entry has a mode outside the known table.
pub fn from_bytes(bytes: &[u8]) -> Result<Vec<TreeEntry>> {
    let frame = Frame::from_bytes(bytes)?;
    if frame.kind != ObjectKind::Tree {
        return Err(Error::WrongObjectKind {
            expected: ObjectKind::Tree,
            found: frame.kind,
        });
    }

    let mut cursor = Cursor::new(frame.payload);

    let mut entries = Vec::new();
    loop {
        // reading mode
        let mut mode_buf = Vec::new();
        let bytes_read = cursor.read_until(SPACE_BYTE, &mut mode_buf)?;

        // If this returned 0, the payload has ended
        if bytes_read == 0 {
            break;
        }

        if mode_buf.pop() != Some(SPACE_BYTE) {
            return Err(Error::CorruptObject(
                "expected space after tree entry mode".into(),
            ));
        }
        let mode = String::from_utf8(mode_buf)
            .map_err(|_| Error::CorruptObject("tree entry mode is not valid utf-8".into()))?;
        let kind = ObjectKind::from_tree_mode(&mode)?;

        // reading name
        let name_buf =
            cursor.read_until_checked(NULL_BYTE, "expected null byte after tree entry name")?;

        // reading hash
        let mut hash_buf = [0; HASH_BYTE_LEN];
        cursor
            .read_exact(&mut hash_buf)
            .map_err(|_| Error::CorruptObject("truncated tree entry hash".into()))?;

        entries.push(TreeEntry {
            mode,
            kind,
            name: PathBuf::from(OsString::from_vec(name_buf)),
            hash: Hash::from(hash_buf),
        });
    }

    Ok(entries)
}

// Tests
