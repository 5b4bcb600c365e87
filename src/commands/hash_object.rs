use std::ffi::OsStr;

use anyhow::{Context, Result};
use flate2::Compression;

use crate::fs::ObjectStore;
use crate::hashing::Hash;
use crate::object::{Frame, ObjectKind};
use crate::utils::zlib;

/// Computes the object hash for the contents of `file` framed as a blob,
/// optionally compressing and writing the object to the object store.
///
/// # Return
///
/// The hex encoded hash of the blob object.
///
/// # Errors
///
/// This function will fail if the file could not be read, or the object
/// could not be compressed and written to the store.
pub fn hash_object(file: &OsStr, write: bool) -> Result<String> {
    let data = std::fs::read(file).context(format!("could not read file {:?}", file))?;

    let framed = Frame::encode(ObjectKind::Blob, &data);
    let hash = Hash::compute(&framed);

    if write {
        let mut scratch = zlib::Scratch::new();
        let mut compressed = Vec::new();
        zlib::compress(&mut scratch, &framed, &mut compressed, Compression::default())
            .context("could not compress object")?;

        ObjectStore::from_repository()
            .put(&hash, &compressed)
            .context("could not write object to the object store")?;
    }

    Ok(hash.to_string())
}
