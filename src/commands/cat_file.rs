use std::str::FromStr;

use anyhow::{Context, Result};

use crate::fs::ObjectStore;
use crate::hashing::Hash;
use crate::object::Frame;
use crate::utils::zlib;

/// Shows the contents of the object with the given hash.
///
/// With `pretty`, the frame header is stripped and only the payload is
/// returned; otherwise the full framed bytes are returned.
///
/// # Errors
///
/// This function will fail if the hash is not valid, the object does not
/// exist or its data could not be decompressed and decoded.
pub fn cat_file(hash: &str, pretty: bool) -> Result<String> {
    let hash = Hash::from_str(hash).context("object hash was invalid")?;

    let compressed = ObjectStore::from_repository()
        .get(&hash)
        .context("could not read from object file")?;

    let mut scratch = zlib::Scratch::new();
    let mut framed = Vec::new();
    zlib::decompress(&mut scratch, &compressed, &mut framed)
        .context("could not decompress data")?;

    if pretty {
        let frame = Frame::from_bytes(&framed).context("could not decode object frame")?;
        Ok(String::from_utf8_lossy(frame.payload).into_owned())
    } else {
        Ok(String::from_utf8_lossy(&framed).into_owned())
    }
}
