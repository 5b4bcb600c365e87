use std::str::FromStr;

use anyhow::{Context, Result};

use crate::fs::ObjectStore;
use crate::hashing::Hash;
use crate::object::tree;
use crate::utils::zlib;

/// Lists the entries of the tree object with the given hash.
///
/// With `name_only`, only the entry names are returned, one per line;
/// otherwise every line carries the mode, kind, hash and name of the entry.
///
/// # Errors
///
/// This function will fail if the hash is not valid, the object does not
/// exist, or the object is not a well formed tree.
pub fn ls_tree(hash: &str, name_only: bool) -> Result<String> {
    let hash = Hash::from_str(hash).context("tree hash was invalid")?;

    let compressed = ObjectStore::from_repository()
        .get(&hash)
        .context("could not read from object file")?;

    let mut scratch = zlib::Scratch::new();
    let mut framed = Vec::new();
    zlib::decompress(&mut scratch, &compressed, &mut framed)
        .context("could not decompress data")?;

    let entries = tree::from_bytes(&framed).context("could not parse tree object")?;

    let mut formatted = String::new();
    for e in &entries {
        if name_only {
            formatted.push_str(&e.name.to_string_lossy());
        } else {
            formatted.push_str(&e.to_string());
        }
        formatted.push('\n');
    }
    formatted.pop(); // removing trailing newline

    Ok(formatted)
}
