use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::{Error, Result};

/// Length in bytes of an object hash.
pub const HASH_BYTE_LEN: usize = 20;
/// Length in characters of the hex encoded representation of an object hash.
pub const HASH_HEX_LEN: usize = HASH_BYTE_LEN * 2;

/// A 160 bit object hash, the address of an object in the object store.
///
/// Always rendered as 40 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_BYTE_LEN]);

impl Hash {
    /// Returns the SHA1 hash for the data passed.
    ///
    /// The same data always produces the same hash.
    pub fn compute(data: &[u8]) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl From<[u8; HASH_BYTE_LEN]> for Hash {
    fn from(bytes: [u8; HASH_BYTE_LEN]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Hash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.len() != HASH_HEX_LEN {
            return Err(Error::InvalidHash(s.into()));
        }
        let decoded = hex::decode(s).map_err(|_| Error::InvalidHash(s.into()))?;

        let mut bytes = [0; HASH_BYTE_LEN];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

/// Incremental SHA1 hasher.
///
/// Feeding the data through any number of `update` calls produces the same
/// hash as feeding it all in a single call.
pub struct Hasher(Sha1);

impl Hasher {
    pub fn new() -> Self {
        Self(Sha1::new())
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data);
    }

    pub fn finalize(self) -> Hash {
        Hash(self.0.finalize().into())
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

// Tests
