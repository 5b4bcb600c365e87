use std::fs;
use std::path::PathBuf;

use crate::hashing::Hash;
use crate::{Constants, Error, Result};

/// Handle to an objects directory, addressing compressed object files by
/// their hash.
///
/// Objects live two directory levels deep: the first two characters of the
/// hex encoded hash name the subdirectory and the remaining characters name
/// the file itself.
#[derive(Debug)]
pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    /// Returns the store of the repository in the current directory.
    pub fn from_repository() -> Self {
        Self::at(Constants::objects_path())
    }

    /// Returns a store rooted at an arbitrary objects directory.
    pub fn at(objects_dir: PathBuf) -> Self {
        Self { objects_dir }
    }

    /// Returns the path of the object file for `hash`.
    pub fn object_path(&self, hash: &Hash) -> PathBuf {
        let hash_str = hash.to_string();
        let (file_dir, file_name) = hash_str.split_at(2);
        self.objects_dir.join(file_dir).join(file_name)
    }

    /// Writes the already compressed bytes of an object to the store.
    ///
    /// If the object file already exists the write is skipped, since content
    /// addressing guarantees the stored bytes are the same.
    ///
    /// # Errors
    ///
    /// This function will fail if the fan-out directory or the object file
    /// could not be created and written.
    pub fn put(&self, hash: &Hash, compressed: &[u8]) -> Result<()> {
        let path = self.object_path(hash);
        if path.exists() {
            log::debug!("object {} is already in the store", hash);
            return Ok(());
        }

        let folder_path = path.parent().expect("object path always has a parent");
        fs::create_dir_all(folder_path)?;

        fs::write(path, compressed)?;
        log::debug!("wrote object {}", hash);

        Ok(())
    }

    /// Reads the compressed bytes of the object addressed by `hash`.
    ///
    /// # Errors
    ///
    /// This function will fail with `Error::ObjectNotFound` if there is no
    /// object file for `hash`, and with `Error::Io` for any other read
    /// failure.
    pub fn get(&self, hash: &Hash) -> Result<Vec<u8>> {
        let path = self.object_path(hash);
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(hash.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

// Tests
